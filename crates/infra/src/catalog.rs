//! Static location reference catalog.
//!
//! The location network is fixed reference data in this system; lookups are
//! exact and case-sensitive. Behind the [`LocationResolver`] port so a real
//! catalog service can replace it without touching the engines.

use async_trait::async_trait;

use depot_core::PortResult;
use depot_warehouses::{Location, LocationResolver};

pub struct StaticLocationCatalog {
    locations: Vec<Location>,
}

impl StaticLocationCatalog {
    pub fn new() -> Self {
        let location = |id: &str, max_warehouses: i32, max_capacity: i32| Location {
            identification: id.to_string(),
            max_number_of_warehouses: max_warehouses,
            max_capacity,
        };
        Self {
            locations: vec![
                location("ZWOLLE-001", 1, 40),
                location("ZWOLLE-002", 2, 50),
                location("AMSTERDAM-001", 5, 100),
                location("AMSTERDAM-002", 2, 75),
                location("TILBURG-001", 1, 40),
                location("HELMOND-001", 1, 45),
                location("EINDHOVEN-001", 2, 70),
                location("VETSBY-001", 1, 90),
                location("UTRECHT-001", 4, 95),
            ],
        }
    }
}

impl Default for StaticLocationCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LocationResolver for StaticLocationCatalog {
    async fn resolve_by_identifier(&self, identifier: &str) -> PortResult<Option<Location>> {
        Ok(self
            .locations
            .iter()
            .find(|l| l.identification == identifier)
            .cloned())
    }
}
