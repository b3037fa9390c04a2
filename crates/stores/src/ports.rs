use async_trait::async_trait;

use depot_core::PortResult;

use crate::model::Store;

/// Persistence port for store rows.
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// All stores, sorted by name.
    async fn list(&self) -> PortResult<Vec<Store>>;

    async fn find(&self, id: i64) -> PortResult<Option<Store>>;

    /// Persist and return the row with its assigned id.
    async fn create(&self, store: &Store) -> PortResult<Store>;

    async fn update(&self, store: &Store) -> PortResult<()>;

    /// Returns whether a row was deleted.
    async fn delete(&self, id: i64) -> PortResult<bool>;
}

/// Outbound channel to the legacy store-management system.
///
/// Notified after a store row has been persisted; failures cannot roll the
/// write back and are reported to the caller instead.
#[async_trait]
pub trait LegacyStoreChannel: Send + Sync {
    async fn store_created(&self, store: &Store) -> PortResult<()>;

    async fn store_updated(&self, store: &Store) -> PortResult<()>;
}
