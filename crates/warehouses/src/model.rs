use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A warehouse record.
///
/// `business_unit_code` is the natural key: it is stable across a replace
/// (the code survives, the underlying record does not), and at most one
/// record per code is active at a time. Archival is a soft delete via
/// `archived_at`; "active" means the timestamp is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warehouse {
    pub business_unit_code: String,
    /// Identifier of the location this warehouse operates at.
    pub location: String,
    pub capacity: i32,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub archived_at: Option<DateTime<Utc>>,
}

impl Warehouse {
    pub fn is_active(&self) -> bool {
        self.archived_at.is_none()
    }
}

/// Reference data bounding what may exist at a physical site.
///
/// Immutable from the engine's perspective; resolved through
/// [`crate::ports::LocationResolver`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub identification: String,
    pub max_number_of_warehouses: i32,
    pub max_capacity: i32,
}
