//! `depot-infra` — implementations of the domain ports.
//!
//! Each port has an in-memory implementation (default wiring, tests) and a
//! Postgres implementation over `sqlx` (see `schema.sql` for the tables).
//! The location catalog is static reference data and has a single
//! implementation.

pub mod catalog;
pub mod legacy;
pub mod memory;
pub mod postgres;

pub use catalog::StaticLocationCatalog;
pub use legacy::LoggingLegacyStoreManager;
pub use memory::{
    InMemoryAssociationStore, InMemoryProductRepository, InMemoryStoreRepository,
    InMemoryWarehouseStore,
};
pub use postgres::{
    PgAssociationStore, PgProductRepository, PgStoreRepository, PgWarehouseStore,
};
