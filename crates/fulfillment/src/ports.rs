//! Persistence port for fulfillment associations.

use async_trait::async_trait;

use depot_core::PortResult;

use crate::model::Association;

#[async_trait]
pub trait AssociationStore: Send + Sync {
    /// Exact-triple lookup.
    async fn find(
        &self,
        product_id: i64,
        store_id: i64,
        warehouse_code: &str,
    ) -> PortResult<Option<Association>>;

    async fn list_by_product_store(
        &self,
        product_id: i64,
        store_id: i64,
    ) -> PortResult<Vec<Association>>;

    async fn list_by_store(&self, store_id: i64) -> PortResult<Vec<Association>>;

    async fn list_by_warehouse(&self, warehouse_code: &str) -> PortResult<Vec<Association>>;

    async fn create(&self, association: &Association) -> PortResult<()>;

    /// Physical delete of the exact triple.
    async fn delete(&self, product_id: i64, store_id: i64, warehouse_code: &str) -> PortResult<()>;
}
