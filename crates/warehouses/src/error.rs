use thiserror::Error;

use depot_core::{ErrorKind, Fault, PortError};

/// Failures of the warehouse lifecycle operations.
///
/// Variants carry the offending identifiers/values so the caller can render
/// a precise message; transport codes are the API layer's concern.
#[derive(Debug, Error)]
pub enum WarehouseError {
    #[error("warehouse with business unit code '{0}' not found")]
    NotFound(String),

    #[error("business unit code '{0}' already exists")]
    DuplicateCode(String),

    #[error("location '{0}' is not valid")]
    UnknownLocation(String),

    #[error("warehouse capacity {capacity} exceeds location's maximum capacity {max_capacity}")]
    CapacityExceedsLocationMax { capacity: i32, max_capacity: i32 },

    #[error("warehouse stock {stock} exceeds its capacity {capacity}")]
    StockExceedsCapacity { stock: i32, capacity: i32 },

    #[error("stock mismatch: new warehouse stock {new_stock} does not match old warehouse stock {old_stock}")]
    StockMismatch { new_stock: i32, old_stock: i32 },

    #[error("new warehouse capacity {capacity} cannot accommodate stock {stock}")]
    CapacityBelowStock { capacity: i32, stock: i32 },

    #[error("maximum number of warehouses ({max}) has been reached for location '{location}'")]
    LocationWarehouseLimitReached { location: String, max: i32 },

    #[error(transparent)]
    Port(#[from] PortError),
}

impl Fault for WarehouseError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::UnknownLocation(_)
            | Self::CapacityExceedsLocationMax { .. }
            | Self::StockExceedsCapacity { .. }
            | Self::StockMismatch { .. }
            | Self::CapacityBelowStock { .. } => ErrorKind::InvalidInput,
            Self::DuplicateCode(_) | Self::LocationWarehouseLimitReached { .. } => {
                ErrorKind::Conflict
            }
            Self::Port(_) => ErrorKind::Unavailable,
        }
    }
}
