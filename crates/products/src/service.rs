use std::sync::Arc;

use crate::error::ProductError;
use crate::model::Product;
use crate::ports::ProductRepository;

/// CRUD service for products.
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Product>, ProductError> {
        Ok(self.repository.list().await?)
    }

    pub async fn get(&self, id: i64) -> Result<Product, ProductError> {
        self.repository
            .find(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    pub async fn create(&self, product: Product) -> Result<Product, ProductError> {
        if product.id.is_some() {
            return Err(ProductError::IdInvalidlySet);
        }
        if product.name.trim().is_empty() {
            return Err(ProductError::NameRequired);
        }
        Ok(self.repository.create(&product).await?)
    }

    pub async fn update(&self, id: i64, update: Product) -> Result<Product, ProductError> {
        if update.name.trim().is_empty() {
            return Err(ProductError::NameRequired);
        }

        let mut entity = self.get(id).await?;
        entity.name = update.name;
        entity.description = update.description;
        entity.stock = update.stock;
        self.repository.update(&entity).await?;
        Ok(entity)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ProductError> {
        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id));
        }
        Ok(())
    }
}
