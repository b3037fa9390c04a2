//! Persistence and reference-data ports consumed by the lifecycle engine.
//!
//! Implementations live in `depot-infra`; the engine only assumes writes are
//! applied synchronously within the caller's transaction boundary.

use async_trait::async_trait;

use depot_core::PortResult;

use crate::model::{Location, Warehouse};

/// Persistence port for warehouse records.
#[async_trait]
pub trait WarehouseStore: Send + Sync {
    /// Look up the active (non-archived) record for a business unit code.
    async fn find_active_by_code(&self, code: &str) -> PortResult<Option<Warehouse>>;

    /// Look up the latest record for a business unit code, archived or not.
    /// The active record wins when both exist (a replace leaves the archived
    /// predecessor behind under the same code).
    async fn find_any_by_code(&self, code: &str) -> PortResult<Option<Warehouse>>;

    async fn list_active(&self) -> PortResult<Vec<Warehouse>>;

    async fn list_active_by_location(&self, location: &str) -> PortResult<Vec<Warehouse>>;

    async fn create(&self, warehouse: &Warehouse) -> PortResult<()>;

    /// Update the record matching `warehouse.business_unit_code`.
    ///
    /// Used only to stamp `archived_at`; live records are never mutated in
    /// place outside the archive step of a replace.
    async fn update(&self, warehouse: &Warehouse) -> PortResult<()>;
}

/// Read-only lookup into the location reference catalog.
#[async_trait]
pub trait LocationResolver: Send + Sync {
    async fn resolve_by_identifier(&self, identifier: &str) -> PortResult<Option<Location>>;
}
