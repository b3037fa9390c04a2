//! `depot-fulfillment` — product/store/warehouse allocation engine.
//!
//! A single use case validates and orchestrates the three-way fulfillment
//! link between a product, a store and a warehouse, enforcing three
//! overlapping cardinality caps on every association. Decisions are
//! point-in-time set-membership checks over the snapshot the store returns;
//! the engine keeps no counters of its own.

pub mod allocation;
pub mod error;
pub mod model;
pub mod ports;

pub use allocation::{
    WarehouseAllocation, MAX_PRODUCTS_PER_WAREHOUSE_STORE, MAX_WAREHOUSES_PER_PRODUCT_STORE,
    MAX_WAREHOUSES_PER_STORE,
};
pub use error::FulfillmentError;
pub use model::Association;
pub use ports::AssociationStore;
