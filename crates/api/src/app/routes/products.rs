use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use depot_products::Product;

use crate::app::{dto, errors, AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

fn product_from_request(body: dto::ProductRequest) -> Product {
    Product {
        id: body.id,
        name: body.name.unwrap_or_default(),
        description: body.description,
        stock: body.stock,
    }
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.products.list().await {
        Ok(products) => Json(products).into_response(),
        Err(e) => errors::fault_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    match services.products.get(id).await {
        Ok(product) => Json(product).into_response(),
        Err(e) => errors::fault_to_response(e),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ProductRequest>,
) -> axum::response::Response {
    match services.products.create(product_from_request(body)).await {
        Ok(product) => (StatusCode::CREATED, Json(product)).into_response(),
        Err(e) => errors::fault_to_response(e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
    Json(body): Json<dto::ProductRequest>,
) -> axum::response::Response {
    match services
        .products
        .update(id, product_from_request(body))
        .await
    {
        Ok(product) => Json(product).into_response(),
        Err(e) => errors::fault_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<i64>,
) -> axum::response::Response {
    match services.products.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::fault_to_response(e),
    }
}
