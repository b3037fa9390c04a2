//! In-memory port implementations.
//!
//! Used by the default API wiring and by tests. Rows live in `Mutex`-guarded
//! vectors; semantics mirror the Postgres implementations (active-only
//! filters, soft-archive rows accumulating per business unit code, physical
//! deletes for associations).

use std::sync::Mutex;

use async_trait::async_trait;

use depot_core::PortResult;
use depot_fulfillment::{Association, AssociationStore};
use depot_products::{Product, ProductRepository};
use depot_stores::{Store, StoreRepository};
use depot_warehouses::{Warehouse, WarehouseStore};

#[derive(Default)]
pub struct InMemoryWarehouseStore {
    rows: Mutex<Vec<Warehouse>>,
}

impl InMemoryWarehouseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WarehouseStore for InMemoryWarehouseStore {
    async fn find_active_by_code(&self, code: &str) -> PortResult<Option<Warehouse>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.business_unit_code == code && w.is_active())
            .cloned())
    }

    async fn find_any_by_code(&self, code: &str) -> PortResult<Option<Warehouse>> {
        let rows = self.rows.lock().unwrap();
        let active = rows
            .iter()
            .find(|w| w.business_unit_code == code && w.is_active());
        Ok(active
            .or_else(|| rows.iter().rev().find(|w| w.business_unit_code == code))
            .cloned())
    }

    async fn list_active(&self) -> PortResult<Vec<Warehouse>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.is_active())
            .cloned()
            .collect())
    }

    async fn list_active_by_location(&self, location: &str) -> PortResult<Vec<Warehouse>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.is_active() && w.location == location)
            .cloned()
            .collect())
    }

    async fn create(&self, warehouse: &Warehouse) -> PortResult<()> {
        self.rows.lock().unwrap().push(warehouse.clone());
        Ok(())
    }

    async fn update(&self, warehouse: &Warehouse) -> PortResult<()> {
        // Prefer the active row for the code; a code can accumulate archived
        // predecessors across replaces.
        let mut rows = self.rows.lock().unwrap();
        let position = rows
            .iter()
            .position(|w| w.business_unit_code == warehouse.business_unit_code && w.is_active())
            .or_else(|| {
                rows.iter()
                    .rposition(|w| w.business_unit_code == warehouse.business_unit_code)
            });
        if let Some(i) = position {
            rows[i] = warehouse.clone();
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryAssociationStore {
    rows: Mutex<Vec<Association>>,
}

impl InMemoryAssociationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AssociationStore for InMemoryAssociationStore {
    async fn find(
        &self,
        product_id: i64,
        store_id: i64,
        warehouse_code: &str,
    ) -> PortResult<Option<Association>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| {
                a.product_id == product_id
                    && a.store_id == store_id
                    && a.warehouse_business_unit_code == warehouse_code
            })
            .cloned())
    }

    async fn list_by_product_store(
        &self,
        product_id: i64,
        store_id: i64,
    ) -> PortResult<Vec<Association>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.product_id == product_id && a.store_id == store_id)
            .cloned()
            .collect())
    }

    async fn list_by_store(&self, store_id: i64) -> PortResult<Vec<Association>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.store_id == store_id)
            .cloned()
            .collect())
    }

    async fn list_by_warehouse(&self, warehouse_code: &str) -> PortResult<Vec<Association>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.warehouse_business_unit_code == warehouse_code)
            .cloned()
            .collect())
    }

    async fn create(&self, association: &Association) -> PortResult<()> {
        self.rows.lock().unwrap().push(association.clone());
        Ok(())
    }

    async fn delete(&self, product_id: i64, store_id: i64, warehouse_code: &str) -> PortResult<()> {
        self.rows.lock().unwrap().retain(|a| {
            !(a.product_id == product_id
                && a.store_id == store_id
                && a.warehouse_business_unit_code == warehouse_code)
        });
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryStoreRepository {
    rows: Mutex<Vec<Store>>,
    next_id: Mutex<i64>,
}

impl InMemoryStoreRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StoreRepository for InMemoryStoreRepository {
    async fn list(&self) -> PortResult<Vec<Store>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn find(&self, id: i64) -> PortResult<Option<Store>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == Some(id))
            .cloned())
    }

    async fn create(&self, store: &Store) -> PortResult<Store> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let created = Store {
            id: Some(*next_id),
            ..store.clone()
        };
        self.rows.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, store: &Store) -> PortResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|s| s.id == store.id) {
            *row = store.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> PortResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|s| s.id != Some(id));
        Ok(rows.len() < before)
    }
}

#[derive(Default)]
pub struct InMemoryProductRepository {
    rows: Mutex<Vec<Product>>,
    next_id: Mutex<i64>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed rows directly, bypassing service validation. Test helper.
    pub fn seeded(products: Vec<Product>) -> Self {
        let next = products.iter().filter_map(|p| p.id).max().unwrap_or(0);
        Self {
            rows: Mutex::new(products),
            next_id: Mutex::new(next),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> PortResult<Vec<Product>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn find(&self, id: i64) -> PortResult<Option<Product>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == Some(id))
            .cloned())
    }

    async fn create(&self, product: &Product) -> PortResult<Product> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let created = Product {
            id: Some(*next_id),
            ..product.clone()
        };
        self.rows.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, product: &Product) -> PortResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|p| p.id == product.id) {
            *row = product.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> PortResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != Some(id));
        Ok(rows.len() < before)
    }
}
