use std::sync::Arc;

use tracing::{error, info};

use crate::error::StoreError;
use crate::model::{Store, StorePatch};
use crate::ports::{LegacyStoreChannel, StoreRepository};

/// CRUD service for stores.
///
/// Every successful create/update is echoed to the legacy store-management
/// system after the row is persisted; by then the write cannot be rolled
/// back, so a notification failure is logged as critical and surfaced as
/// [`StoreError::LegacySync`].
pub struct StoreService {
    repository: Arc<dyn StoreRepository>,
    legacy: Arc<dyn LegacyStoreChannel>,
}

impl StoreService {
    pub fn new(repository: Arc<dyn StoreRepository>, legacy: Arc<dyn LegacyStoreChannel>) -> Self {
        Self { repository, legacy }
    }

    pub async fn list(&self) -> Result<Vec<Store>, StoreError> {
        Ok(self.repository.list().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Store, StoreError> {
        self.repository
            .find(id)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    pub async fn create(&self, store: Store) -> Result<Store, StoreError> {
        if store.id.is_some() {
            return Err(StoreError::IdInvalidlySet);
        }
        if store.name.trim().is_empty() {
            return Err(StoreError::NameRequired);
        }

        let created = self.repository.create(&store).await?;
        info!(store = %created.name, id = ?created.id, "store created");

        if let Err(e) = self.legacy.store_created(&created).await {
            error!(store = %created.name, "legacy system notification failed after store create");
            return Err(StoreError::LegacySync(e));
        }
        Ok(created)
    }

    pub async fn update(&self, id: i64, update: Store) -> Result<Store, StoreError> {
        if update.name.trim().is_empty() {
            return Err(StoreError::NameNotSet);
        }

        let mut entity = self.get(id).await?;
        entity.name = update.name;
        entity.quantity_products_in_stock = update.quantity_products_in_stock;
        self.repository.update(&entity).await?;

        if let Err(e) = self.legacy.store_updated(&entity).await {
            error!(store = %entity.name, "legacy system notification failed after store update");
            return Err(StoreError::LegacySync(e));
        }
        Ok(entity)
    }

    pub async fn patch(&self, id: i64, patch: StorePatch) -> Result<Store, StoreError> {
        let mut entity = self.get(id).await?;

        if let Some(name) = patch.name {
            if !name.trim().is_empty() {
                entity.name = name;
            }
        }
        // Negative quantities in a patch are silently ignored, as in the
        // system this replaces.
        if let Some(quantity) = patch.quantity_products_in_stock {
            if quantity >= 0 {
                entity.quantity_products_in_stock = quantity;
            }
        }
        self.repository.update(&entity).await?;

        if let Err(e) = self.legacy.store_updated(&entity).await {
            error!(store = %entity.name, "legacy system notification failed after store patch");
            return Err(StoreError::LegacySync(e));
        }
        Ok(entity)
    }

    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        if !self.repository.delete(id).await? {
            return Err(StoreError::NotFound(id));
        }
        info!(id, "store deleted");
        Ok(())
    }
}
