//! `depot-warehouses` — warehouse lifecycle engine.
//!
//! Validates and orchestrates Create / Archive / Replace for a warehouse
//! against its location's capacity and warehouse-count limits. The engine
//! holds no state of its own: every operation re-reads the current snapshot
//! through the [`ports`] and writes only once all preconditions pass.

pub mod archive;
pub mod create;
pub mod error;
pub mod model;
pub mod ports;
pub mod replace;

#[cfg(test)]
pub(crate) mod testing;

pub use archive::ArchiveWarehouse;
pub use create::{CreateWarehouse, NewWarehouse};
pub use error::WarehouseError;
pub use model::{Location, Warehouse};
pub use ports::{LocationResolver, WarehouseStore};
pub use replace::{ReplaceWarehouse, ReplacementWarehouse};
