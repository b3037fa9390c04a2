use std::sync::Arc;

use chrono::Utc;

use crate::error::WarehouseError;
use crate::model::Warehouse;
use crate::ports::WarehouseStore;

/// Use case: archive a warehouse.
///
/// Archival is terminal; there is no un-archive. A replace creates a fresh
/// record under the same code instead. The lookup is deliberately not
/// filtered to active records: stamping an already-archived record is
/// accepted and simply moves `archived_at` forward.
pub struct ArchiveWarehouse {
    warehouses: Arc<dyn WarehouseStore>,
}

impl ArchiveWarehouse {
    pub fn new(warehouses: Arc<dyn WarehouseStore>) -> Self {
        Self { warehouses }
    }

    pub async fn archive(&self, business_unit_code: &str) -> Result<Warehouse, WarehouseError> {
        let mut warehouse = self
            .warehouses
            .find_any_by_code(business_unit_code)
            .await?
            .ok_or_else(|| WarehouseError::NotFound(business_unit_code.to_string()))?;

        warehouse.archived_at = Some(Utc::now());
        self.warehouses.update(&warehouse).await?;
        Ok(warehouse)
    }
}
