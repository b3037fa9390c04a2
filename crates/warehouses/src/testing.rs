//! In-crate test doubles for the lifecycle use cases.
//!
//! Deliberately tiny; the production implementations live in `depot-infra`.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use depot_core::PortResult;

use crate::model::{Location, Warehouse};
use crate::ports::{LocationResolver, WarehouseStore};

pub struct FakeWarehouseStore {
    rows: Mutex<Vec<Warehouse>>,
}

#[async_trait]
impl WarehouseStore for FakeWarehouseStore {
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
        let mut rows = self.rows.lock().unwrap();
        let position = rows
            .iter()
            .position(|w| w.business_unit_code == warehouse.business_unit_code && w.is_active())
            .or_else(|| {
                rows.iter()
                    .position(|w| w.business_unit_code == warehouse.business_unit_code)
            });
        if let Some(i) = position {
            rows[i] = warehouse.clone();
        }
        Ok(())
    }
}

pub struct FakeCatalog {
    locations: Vec<Location>,
}

#[async_trait]
impl LocationResolver for FakeCatalog {
    async fn resolve_by_identifier(&self, identifier: &str) -> PortResult<Option<Location>> {
        Ok(self
            .locations
            .iter()
            .find(|l| l.identification == identifier)
            .cloned())
    }
}

pub fn store_with(rows: Vec<Warehouse>) -> Arc<FakeWarehouseStore> {
    Arc::new(FakeWarehouseStore {
        rows: Mutex::new(rows),
    })
}

pub fn catalog() -> Arc<FakeCatalog> {
    let location = |id: &str, max_warehouses: i32, max_capacity: i32| Location {
        identification: id.to_string(),
        max_number_of_warehouses: max_warehouses,
        max_capacity,
    };
    Arc::new(FakeCatalog {
        locations: vec![
            location("ZWOLLE-001", 1, 40),
            location("AMSTERDAM-001", 5, 100),
            location("EINDHOVEN-001", 2, 70),
        ],
    })
}

pub fn warehouse(code: &str, location: &str, capacity: i32, stock: i32) -> Warehouse {
    Warehouse {
        business_unit_code: code.to_string(),
        location: location.to_string(),
        capacity,
        stock,
        created_at: Utc::now(),
        archived_at: None,
    }
}
