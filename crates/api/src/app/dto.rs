use serde::Deserialize;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWarehouseRequest {
    pub business_unit_code: String,
    pub location: String,
    pub capacity: i32,
    pub stock: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceWarehouseRequest {
    pub location: String,
    pub capacity: i32,
    pub stock: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationRequest {
    pub product_id: i64,
    pub store_id: i64,
    pub warehouse_business_unit_code: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRequest {
    pub id: Option<i64>,
    pub name: Option<String>,
    #[serde(default)]
    pub quantity_products_in_stock: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub stock: i64,
}
