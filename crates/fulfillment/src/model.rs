use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One product–store–warehouse fulfillment link.
///
/// The full triple is the identity; removal is physical (no soft delete).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Association {
    pub product_id: i64,
    pub store_id: i64,
    pub warehouse_business_unit_code: String,
    pub created_at: DateTime<Utc>,
}

impl Association {
    pub fn new(product_id: i64, store_id: i64, warehouse_business_unit_code: String) -> Self {
        Self {
            product_id,
            store_id,
            warehouse_business_unit_code,
            created_at: Utc::now(),
        }
    }
}
