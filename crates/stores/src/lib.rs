//! `depot-stores` — retail store management.
//!
//! Plain CRUD over the `Store` entity plus the legacy-system notification
//! the original back office fired after every successful store write.

pub mod error;
pub mod model;
pub mod ports;
pub mod service;

pub use error::StoreError;
pub use model::{Store, StorePatch};
pub use ports::{LegacyStoreChannel, StoreRepository};
pub use service::StoreService;
