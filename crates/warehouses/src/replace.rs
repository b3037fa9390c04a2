use std::sync::Arc;

use chrono::Utc;

use crate::error::WarehouseError;
use crate::model::Warehouse;
use crate::ports::{LocationResolver, WarehouseStore};

/// Input for [`ReplaceWarehouse::replace`]. The business unit code of the
/// warehouse being replaced is passed separately and survives unchanged.
#[derive(Debug, Clone)]
pub struct ReplacementWarehouse {
    pub location: String,
    pub capacity: i32,
    pub stock: i32,
}

/// Use case: replace a warehouse, keeping its business unit code.
///
/// A replace is a location/capacity migration, not a stock adjustment: the
/// new stock must equal the old one exactly. On success the old record is
/// archived and a fresh record is created under the same code. All
/// preconditions are checked before either write, so a failed replace leaves
/// the old warehouse active and creates nothing.
///
/// The warehouse-count check at the target location runs while the old
/// record is still active, so the old record itself counts toward the limit
/// (notably: replacing in place at a location already at its cap fails).
pub struct ReplaceWarehouse {
    warehouses: Arc<dyn WarehouseStore>,
    locations: Arc<dyn LocationResolver>,
}

impl ReplaceWarehouse {
    pub fn new(warehouses: Arc<dyn WarehouseStore>, locations: Arc<dyn LocationResolver>) -> Self {
        Self {
            warehouses,
            locations,
        }
    }

    pub async fn replace(
        &self,
        business_unit_code: &str,
        request: ReplacementWarehouse,
    ) -> Result<Warehouse, WarehouseError> {
        let old = self
            .warehouses
            .find_active_by_code(business_unit_code)
            .await?
            .ok_or_else(|| WarehouseError::NotFound(business_unit_code.to_string()))?;

        if request.stock != old.stock {
            return Err(WarehouseError::StockMismatch {
                new_stock: request.stock,
                old_stock: old.stock,
            });
        }

        if request.capacity < request.stock {
            return Err(WarehouseError::CapacityBelowStock {
                capacity: request.capacity,
                stock: request.stock,
            });
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

        let mut archived = old;
        archived.archived_at = Some(Utc::now());
        self.warehouses.update(&archived).await?;

        let replacement = Warehouse {
            business_unit_code: business_unit_code.to_string(),
            location: request.location,
            capacity: request.capacity,
            stock: request.stock,
            created_at: Utc::now(),
            archived_at: None,
        };
        self.warehouses.create(&replacement).await?;
        Ok(replacement)
    }
}
