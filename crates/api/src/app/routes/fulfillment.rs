use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::json;

use crate::app::{dto, errors, AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/", post(associate))
        .route(
            "/product/:product_id/store/:store_id",
            get(warehouses_for_product_store),
        )
        .route("/store/:store_id", get(warehouses_for_store))
        .route("/warehouse/:code", get(products_for_warehouse))
        .route(
            "/product/:product_id/store/:store_id/warehouse/:code",
            delete(dissociate),
        )
}

pub async fn associate(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::AssociationRequest>,
) -> axum::response::Response {
    match services
        .allocation
        .associate(
            body.product_id,
            body.store_id,
            &body.warehouse_business_unit_code,
        )
        .await
    {
        Ok(association) => (
            StatusCode::CREATED,
            Json(json!({
                "productId": association.product_id,
                "storeId": association.store_id,
                "warehouseBusinessUnitCode": association.warehouse_business_unit_code,
                "message": "Association created successfully",
            })),
        )
            .into_response(),
        Err(e) => errors::fault_to_response(e),
    }
}

pub async fn dissociate(
    Extension(services): Extension<Arc<AppServices>>,
    Path((product_id, store_id, code)): Path<(i64, i64, String)>,
) -> axum::response::Response {
    match services
        .allocation
        .dissociate(product_id, store_id, &code)
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::fault_to_response(e),
    }
}

pub async fn warehouses_for_product_store(
    Extension(services): Extension<Arc<AppServices>>,
    Path((product_id, store_id)): Path<(i64, i64)>,
) -> axum::response::Response {
    match services
        .associations
        .list_by_product_store(product_id, store_id)
        .await
    {
        Ok(associations) => Json(associations).into_response(),
        Err(e) => errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            e.to_string(),
        ),
    }
}

pub async fn warehouses_for_store(
    Extension(services): Extension<Arc<AppServices>>,
    Path(store_id): Path<i64>,
) -> axum::response::Response {
    match services.associations.list_by_store(store_id).await {
        Ok(associations) => Json(associations).into_response(),
        Err(e) => errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            e.to_string(),
        ),
    }
}

pub async fn products_for_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    Path(code): Path<String>,
) -> axum::response::Response {
    match services.associations.list_by_warehouse(&code).await {
        Ok(associations) => Json(associations).into_response(),
        Err(e) => errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            e.to_string(),
        ),
    }
}
