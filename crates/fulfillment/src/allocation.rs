use std::collections::HashSet;
use std::sync::Arc;

use crate::error::FulfillmentError;
use crate::model::Association;
use crate::ports::AssociationStore;

/// A product may be fulfilled from at most this many warehouses per store.
pub const MAX_WAREHOUSES_PER_PRODUCT_STORE: usize = 2;
/// A store may be fulfilled from at most this many distinct warehouses.
pub const MAX_WAREHOUSES_PER_STORE: usize = 3;
/// A warehouse may carry at most this many distinct products for one store.
pub const MAX_PRODUCTS_PER_WAREHOUSE_STORE: usize = 5;

/// Use case: associate/dissociate a (product, store, warehouse) triple.
///
/// The check order on associate is load-bearing when several caps are
/// violated at once: duplicate triple, then the per-(product, store) cap,
/// then the per-store cap, then the per-(warehouse, store) cap. The two
/// latter caps only apply when the incoming warehouse (resp. product) is new
/// to its scope; re-using an existing pairing never trips them.
pub struct WarehouseAllocation {
    associations: Arc<dyn AssociationStore>,
}

impl WarehouseAllocation {
    pub fn new(associations: Arc<dyn AssociationStore>) -> Self {
        Self { associations }
    }

    pub async fn associate(
        &self,
        product_id: i64,
        store_id: i64,
        warehouse_code: &str,
    ) -> Result<Association, FulfillmentError> {
        if self
            .associations
            .find(product_id, store_id, warehouse_code)
            .await?
            .is_some()
        {
            return Err(FulfillmentError::DuplicateAssociation {
                product_id,
                store_id,
                warehouse_code: warehouse_code.to_string(),
            });
        }

        let for_product_store = self
            .associations
            .list_by_product_store(product_id, store_id)
            .await?;
        let warehouses_for_product: HashSet<&str> = for_product_store
            .iter()
            .map(|a| a.warehouse_business_unit_code.as_str())
            .collect();
        if warehouses_for_product.len() >= MAX_WAREHOUSES_PER_PRODUCT_STORE {
            return Err(FulfillmentError::ProductStoreWarehouseLimitReached {
                product_id,
                store_id,
                max: MAX_WAREHOUSES_PER_PRODUCT_STORE,
            });
        }

        let for_store = self.associations.list_by_store(store_id).await?;
        let warehouses_for_store: HashSet<&str> = for_store
            .iter()
            .map(|a| a.warehouse_business_unit_code.as_str())
            .collect();
        if !warehouses_for_store.contains(warehouse_code)
            && warehouses_for_store.len() >= MAX_WAREHOUSES_PER_STORE
        {
            return Err(FulfillmentError::StoreWarehouseLimitReached {
                store_id,
                max: MAX_WAREHOUSES_PER_STORE,
            });
        }

        // The warehouse listing spans all stores; the cap is per store.
        let for_warehouse = self.associations.list_by_warehouse(warehouse_code).await?;
        let products_here: HashSet<i64> = for_warehouse
            .iter()
            .filter(|a| a.store_id == store_id)
            .map(|a| a.product_id)
            .collect();
        if !products_here.contains(&product_id)
            && products_here.len() >= MAX_PRODUCTS_PER_WAREHOUSE_STORE
        {
            return Err(FulfillmentError::WarehouseProductLimitReached {
                warehouse_code: warehouse_code.to_string(),
                store_id,
                max: MAX_PRODUCTS_PER_WAREHOUSE_STORE,
            });
        }

        let association = Association::new(product_id, store_id, warehouse_code.to_string());
        self.associations.create(&association).await?;
        Ok(association)
    }

    pub async fn dissociate(
        &self,
        product_id: i64,
        store_id: i64,
        warehouse_code: &str,
    ) -> Result<(), FulfillmentError> {
        if self
            .associations
            .find(product_id, store_id, warehouse_code)
            .await?
            .is_none()
        {
            return Err(FulfillmentError::NotFound {
                product_id,
                store_id,
                warehouse_code: warehouse_code.to_string(),
            });
        }
        self.associations
            .delete(product_id, store_id, warehouse_code)
            .await?;
        Ok(())
    }
}
