use thiserror::Error;

use depot_core::{ErrorKind, Fault, PortError};

/// Failures of the associate/dissociate operations.
#[derive(Debug, Error)]
pub enum FulfillmentError {
    #[error("association not found for product {product_id}, store {store_id}, warehouse {warehouse_code}")]
    NotFound {
        product_id: i64,
        store_id: i64,
        warehouse_code: String,
    },

    #[error("association already exists for product {product_id}, store {store_id}, warehouse {warehouse_code}")]
    DuplicateAssociation {
        product_id: i64,
        store_id: i64,
        warehouse_code: String,
    },

    #[error("product {product_id} already has the maximum ({max}) warehouses for store {store_id}")]
    ProductStoreWarehouseLimitReached {
        product_id: i64,
        store_id: i64,
        max: usize,
    },

    #[error("store {store_id} already has the maximum ({max}) warehouses")]
    StoreWarehouseLimitReached { store_id: i64, max: usize },

    #[error("warehouse {warehouse_code} already has the maximum ({max}) product types for store {store_id}")]
    WarehouseProductLimitReached {
        warehouse_code: String,
        store_id: i64,
        max: usize,
    },

    #[error(transparent)]
    Port(#[from] PortError),
}

impl Fault for FulfillmentError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::DuplicateAssociation { .. }
            | Self::ProductStoreWarehouseLimitReached { .. }
            | Self::StoreWarehouseLimitReached { .. }
            | Self::WarehouseProductLimitReached { .. } => ErrorKind::Conflict,
            Self::Port(_) => ErrorKind::Unavailable,
        }
    }
}
