use std::sync::Arc;

use chrono::Utc;

use crate::error::WarehouseError;
use crate::model::Warehouse;
use crate::ports::{LocationResolver, WarehouseStore};

/// Input for [`CreateWarehouse::create`].
#[derive(Debug, Clone)]
pub struct NewWarehouse {
    pub business_unit_code: String,
    pub location: String,
    pub capacity: i32,
    pub stock: i32,
}

/// Use case: create a warehouse.
///
/// Preconditions, first failure wins: code unused among active records,
/// location resolves, capacity within the location's maximum, stock within
/// capacity, location still below its warehouse count limit.
pub struct CreateWarehouse {
    warehouses: Arc<dyn WarehouseStore>,
    locations: Arc<dyn LocationResolver>,
}

impl CreateWarehouse {
    pub fn new(warehouses: Arc<dyn WarehouseStore>, locations: Arc<dyn LocationResolver>) -> Self {
        Self {
            warehouses,
            locations,
        }
    }

    pub async fn create(&self, request: NewWarehouse) -> Result<Warehouse, WarehouseError> {
        if self
            .warehouses
            .find_active_by_code(&request.business_unit_code)
            .await?
            .is_some()
        {
            return Err(WarehouseError::DuplicateCode(request.business_unit_code));
        }

        let location = self
            .locations
            .resolve_by_identifier(&request.location)
            .await?
            .ok_or_else(|| WarehouseError::UnknownLocation(request.location.clone()))?;

        if request.capacity > location.max_capacity {
            return Err(WarehouseError::CapacityExceedsLocationMax {
                capacity: request.capacity,
                max_capacity: location.max_capacity,
            });
        }

        if request.stock > request.capacity {
            return Err(WarehouseError::StockExceedsCapacity {
                stock: request.stock,
                capacity: request.capacity,
            });
        }

        let active_at_location = self
            .warehouses
            .list_active_by_location(&request.location)
            .await?
            .len() as i32;
        if active_at_location >= location.max_number_of_warehouses {
            return Err(WarehouseError::LocationWarehouseLimitReached {
                location: request.location,
                max: location.max_number_of_warehouses,
            });
        }

        let warehouse = Warehouse {
            business_unit_code: request.business_unit_code,
            location: request.location,
            capacity: request.capacity,
            stock: request.stock,
            created_at: Utc::now(),
            archived_at: None,
        };
        self.warehouses.create(&warehouse).await?;
        Ok(warehouse)
    }
}
