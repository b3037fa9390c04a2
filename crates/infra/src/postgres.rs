//! Postgres port implementations over `sqlx`.
//!
//! Queries are built at runtime (`sqlx::query` + binds) with manual row
//! mapping, so no database is needed at compile time. Tables are documented
//! in `schema.sql` next to this crate.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use depot_core::{PortError, PortResult};
use depot_fulfillment::{Association, AssociationStore};
use depot_products::{Product, ProductRepository};
use depot_stores::{Store, StoreRepository};
use depot_warehouses::{Warehouse, WarehouseStore};

fn db_err(e: sqlx::Error) -> PortError {
    PortError(anyhow::Error::new(e))
}

fn warehouse_from_row(row: &PgRow) -> Warehouse {
    Warehouse {
        business_unit_code: row.get("business_unit_code"),
        location: row.get("location"),
        capacity: row.get("capacity"),
        stock: row.get("stock"),
        created_at: row.get::<DateTime<Utc>, _>("created_at"),
        archived_at: row.get::<Option<DateTime<Utc>>, _>("archived_at"),
    }
}

const WAREHOUSE_COLUMNS: &str =
    "business_unit_code, location, capacity, stock, created_at, archived_at";

pub struct PgWarehouseStore {
    pool: PgPool,
}

impl PgWarehouseStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WarehouseStore for PgWarehouseStore {
    async fn find_active_by_code(&self, code: &str) -> PortResult<Option<Warehouse>> {
        let row = sqlx::query(&format!(
            "SELECT {WAREHOUSE_COLUMNS} FROM warehouse \
             WHERE business_unit_code = $1 AND archived_at IS NULL"
        ))
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(row.as_ref().map(warehouse_from_row))
    }

    async fn find_any_by_code(&self, code: &str) -> PortResult<Option<Warehouse>> {
        // Active row first, then the most recent archived predecessor.
        let row = sqlx::query(&format!(
            "SELECT {WAREHOUSE_COLUMNS} FROM warehouse \
             WHERE business_unit_code = $1 \
             ORDER BY (archived_at IS NULL) DESC, id DESC LIMIT 1"
        ))
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(row.as_ref().map(warehouse_from_row))
    }

    async fn list_active(&self) -> PortResult<Vec<Warehouse>> {
        let rows = sqlx::query(&format!(
            "SELECT {WAREHOUSE_COLUMNS} FROM warehouse \
             WHERE archived_at IS NULL ORDER BY business_unit_code"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(rows.iter().map(warehouse_from_row).collect())
    }

    async fn list_active_by_location(&self, location: &str) -> PortResult<Vec<Warehouse>> {
        let rows = sqlx::query(&format!(
            "SELECT {WAREHOUSE_COLUMNS} FROM warehouse \
             WHERE archived_at IS NULL AND location = $1"
        ))
        .bind(location)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(rows.iter().map(warehouse_from_row).collect())
    }

    async fn create(&self, warehouse: &Warehouse) -> PortResult<()> {
        sqlx::query(
            "INSERT INTO warehouse \
             (business_unit_code, location, capacity, stock, created_at, archived_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&warehouse.business_unit_code)
        .bind(&warehouse.location)
        .bind(warehouse.capacity)
        .bind(warehouse.stock)
        .bind(warehouse.created_at)
        .bind(warehouse.archived_at)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }

    async fn update(&self, warehouse: &Warehouse) -> PortResult<()> {
        // Same row-selection rule as `find_any_by_code`: prefer the active
        // row for the code, fall back to the latest archived one.
        sqlx::query(
            "UPDATE warehouse SET location = $2, capacity = $3, stock = $4, archived_at = $5 \
             WHERE id = (SELECT id FROM warehouse WHERE business_unit_code = $1 \
                         ORDER BY (archived_at IS NULL) DESC, id DESC LIMIT 1)",
        )
        .bind(&warehouse.business_unit_code)
        .bind(&warehouse.location)
        .bind(warehouse.capacity)
        .bind(warehouse.stock)
        .bind(warehouse.archived_at)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }
}

fn association_from_row(row: &PgRow) -> Association {
    Association {
        product_id: row.get("product_id"),
        store_id: row.get("store_id"),
        warehouse_business_unit_code: row.get("warehouse_business_unit_code"),
        created_at: row.get::<DateTime<Utc>, _>("created_at"),
    }
}

const ASSOCIATION_COLUMNS: &str =
    "product_id, store_id, warehouse_business_unit_code, created_at";

pub struct PgAssociationStore {
    pool: PgPool,
}

impl PgAssociationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssociationStore for PgAssociationStore {
    async fn find(
        &self,
        product_id: i64,
        store_id: i64,
        warehouse_code: &str,
    ) -> PortResult<Option<Association>> {
        let row = sqlx::query(&format!(
            "SELECT {ASSOCIATION_COLUMNS} FROM warehouse_product_store \
             WHERE product_id = $1 AND store_id = $2 AND warehouse_business_unit_code = $3"
        ))
        .bind(product_id)
        .bind(store_id)
        .bind(warehouse_code)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(row.as_ref().map(association_from_row))
    }

    async fn list_by_product_store(
        &self,
        product_id: i64,
        store_id: i64,
    ) -> PortResult<Vec<Association>> {
        let rows = sqlx::query(&format!(
            "SELECT {ASSOCIATION_COLUMNS} FROM warehouse_product_store \
             WHERE product_id = $1 AND store_id = $2"
        ))
        .bind(product_id)
        .bind(store_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(rows.iter().map(association_from_row).collect())
    }

    async fn list_by_store(&self, store_id: i64) -> PortResult<Vec<Association>> {
        let rows = sqlx::query(&format!(
            "SELECT {ASSOCIATION_COLUMNS} FROM warehouse_product_store WHERE store_id = $1"
        ))
        .bind(store_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(rows.iter().map(association_from_row).collect())
    }

    async fn list_by_warehouse(&self, warehouse_code: &str) -> PortResult<Vec<Association>> {
        let rows = sqlx::query(&format!(
            "SELECT {ASSOCIATION_COLUMNS} FROM warehouse_product_store \
             WHERE warehouse_business_unit_code = $1"
        ))
        .bind(warehouse_code)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(rows.iter().map(association_from_row).collect())
    }

    async fn create(&self, association: &Association) -> PortResult<()> {
        sqlx::query(
            "INSERT INTO warehouse_product_store \
             (product_id, store_id, warehouse_business_unit_code, created_at) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(association.product_id)
        .bind(association.store_id)
        .bind(&association.warehouse_business_unit_code)
        .bind(association.created_at)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, product_id: i64, store_id: i64, warehouse_code: &str) -> PortResult<()> {
        sqlx::query(
            "DELETE FROM warehouse_product_store \
             WHERE product_id = $1 AND store_id = $2 AND warehouse_business_unit_code = $3",
        )
        .bind(product_id)
        .bind(store_id)
        .bind(warehouse_code)
        .execute(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(())
    }
}

pub struct PgStoreRepository {
    pool: PgPool,
}

impl PgStoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn store_from_row(row: &PgRow) -> Store {
    Store {
        id: Some(row.get::<i64, _>("id")),
        name: row.get("name"),
        quantity_products_in_stock: row.get("quantity_products_in_stock"),
    }
}

#[async_trait]
impl StoreRepository for PgStoreRepository {
    async fn list(&self) -> PortResult<Vec<Store>> {
        let rows = sqlx::query(
            "SELECT id, name, quantity_products_in_stock FROM store ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(rows.iter().map(store_from_row).collect())
    }

    async fn find(&self, id: i64) -> PortResult<Option<Store>> {
        let row = sqlx::query("SELECT id, name, quantity_products_in_stock FROM store WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(row.as_ref().map(store_from_row))
    }

    async fn create(&self, store: &Store) -> PortResult<Store> {
        let row = sqlx::query(
            "INSERT INTO store (name, quantity_products_in_stock) VALUES ($1, $2) RETURNING id",
        )
        .bind(&store.name)
        .bind(store.quantity_products_in_stock)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(Store {
            id: Some(row.get::<i64, _>("id")),
            ..store.clone()
        })
    }

    async fn update(&self, store: &Store) -> PortResult<()> {
        sqlx::query("UPDATE store SET name = $2, quantity_products_in_stock = $3 WHERE id = $1")
            .bind(store.id)
            .bind(&store.name)
            .bind(store.quantity_products_in_stock)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> PortResult<bool> {
        let result = sqlx::query("DELETE FROM store WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected() > 0)
    }
}

pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn product_from_row(row: &PgRow) -> Product {
    Product {
        id: Some(row.get::<i64, _>("id")),
        name: row.get("name"),
        description: row.get("description"),
        stock: row.get("stock"),
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list(&self) -> PortResult<Vec<Product>> {
        let rows = sqlx::query("SELECT id, name, description, stock FROM product ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(rows.iter().map(product_from_row).collect())
    }

    async fn find(&self, id: i64) -> PortResult<Option<Product>> {
        let row = sqlx::query("SELECT id, name, description, stock FROM product WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(row.as_ref().map(product_from_row))
    }

    async fn create(&self, product: &Product) -> PortResult<Product> {
        let row = sqlx::query(
            "INSERT INTO product (name, description, stock) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.stock)
        .fetch_one(&self.pool)
        .await
        .map_err(db_err)?;
        Ok(Product {
            id: Some(row.get::<i64, _>("id")),
            ..product.clone()
        })
    }

    async fn update(&self, product: &Product) -> PortResult<()> {
        sqlx::query("UPDATE product SET name = $2, description = $3, stock = $4 WHERE id = $1")
            .bind(product.id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.stock)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> PortResult<bool> {
        let result = sqlx::query("DELETE FROM product WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected() > 0)
    }
}
