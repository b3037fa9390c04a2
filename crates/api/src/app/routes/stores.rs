use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use depot_stores::{Store, StorePatch};

use crate::app::{dto, errors, AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_stores).post(create_store))
        .route(
            "/:id",
            get(get_store)
                .put(update_store)
                .patch(patch_store)
                .delete(delete_store),
        )
}

fn store_from_request(body: dto::StoreRequest) -> Store {
    Store {
        id: body.id,
        name: body.name.unwrap_or_default(),
        quantity_products_in_stock: body.quantity_products_in_stock,
    }
}

pub async fn list_stores(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.stores.list().await {
        Ok(stores) => Json(stores).into_response(),
        Err(e) => errors::fault_to_response(e),
    }
}

pub async fn get_store(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    match services.stores.get(id).await {
        Ok(store) => Json(store).into_response(),
        Err(e) => errors::fault_to_response(e),
    }
}

pub async fn create_store(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::StoreRequest>,
) -> axum::response::Response {
    match services.stores.create(store_from_request(body)).await {
        Ok(store) => (StatusCode::CREATED, Json(store)).into_response(),
        Err(e) => errors::fault_to_response(e),
    }
}

pub async fn update_store(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
    Json(body): Json<dto::StoreRequest>,
) -> axum::response::Response {
    match services.stores.update(id, store_from_request(body)).await {
        Ok(store) => Json(store).into_response(),
        Err(e) => errors::fault_to_response(e),
    }
}

pub async fn patch_store(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
    Json(body): Json<StorePatch>,
) -> axum::response::Response {
    match services.stores.patch(id, body).await {
        Ok(store) => Json(store).into_response(),
        Err(e) => errors::fault_to_response(e),
    }
}

pub async fn delete_store(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    match services.stores.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::fault_to_response(e),
    }
}
