use serde::{Deserialize, Serialize};

/// A retail store.
///
/// `id` is the database-assigned surrogate key; it is absent until the
/// repository persists the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub quantity_products_in_stock: i64,
}

/// Partial update; only present fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorePatch {
    pub name: Option<String>,
    pub quantity_products_in_stock: Option<i64>,
}
