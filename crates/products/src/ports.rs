use async_trait::async_trait;

use depot_core::PortResult;

use crate::model::Product;

/// Persistence port for product rows.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, sorted by name.
    async fn list(&self) -> PortResult<Vec<Product>>;

    async fn find(&self, id: i64) -> PortResult<Option<Product>>;

    /// Persist and return the row with its assigned id.
    async fn create(&self, product: &Product) -> PortResult<Product>;

    async fn update(&self, product: &Product) -> PortResult<()>;

    /// Returns whether a row was deleted.
    async fn delete(&self, id: i64) -> PortResult<bool>;
}
