use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use depot_warehouses::{NewWarehouse, ReplacementWarehouse};

use crate::app::{dto, errors, AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_warehouse).get(list_warehouses))
        .route("/:code", get(get_warehouse).delete(archive_warehouse))
        .route("/:code/replacement", post(replace_warehouse))
}

pub async fn list_warehouses(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.warehouses.list_active().await {
        Ok(warehouses) => Json(warehouses).into_response(),
        Err(e) => errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            e.to_string(),
        ),
    }
}

pub async fn get_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    Path(code): Path<String>,
) -> axum::response::Response {
    match services.warehouses.find_active_by_code(&code).await {
        Ok(Some(warehouse)) => Json(warehouse).into_response(),
        Ok(None) => errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("warehouse with business unit code '{code}' not found"),
        ),
        Err(e) => errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            e.to_string(),
        ),
    }
}

pub async fn create_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateWarehouseRequest>,
) -> axum::response::Response {
    tracing::info!(
        code = %body.business_unit_code,
        location = %body.location,
        "creating warehouse"
    );

    let request = NewWarehouse {
        business_unit_code: body.business_unit_code,
        location: body.location,
        capacity: body.capacity,
        stock: body.stock,
    };
    match services.create_warehouse.create(request).await {
        Ok(warehouse) => (StatusCode::CREATED, Json(warehouse)).into_response(),
        Err(e) => errors::fault_to_response(e),
    }
}

pub async fn archive_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    Path(code): Path<String>,
) -> axum::response::Response {
    match services.archive_warehouse.archive(&code).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::fault_to_response(e),
    }
}

pub async fn replace_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    Path(code): Path<String>,
    Json(body): Json<dto::ReplaceWarehouseRequest>,
) -> axum::response::Response {
    tracing::info!(code = %code, location = %body.location, "replacing warehouse");

    let request = ReplacementWarehouse {
        location: body.location,
        capacity: body.capacity,
        stock: body.stock,
    };
    match services.replace_warehouse.replace(&code, request).await {
        Ok(warehouse) => Json(warehouse).into_response(),
        Err(e) => errors::fault_to_response(e),
    }
}
