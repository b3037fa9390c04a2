use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::app::{errors, AppServices};

pub fn router() -> Router {
    Router::new().route("/:id", get(get_location))
}

pub async fn get_location(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.locations.resolve_by_identifier(&id).await {
        Ok(Some(location)) => Json(location).into_response(),
        Ok(None) => errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("location with identification '{id}' not found"),
        ),
        Err(e) => errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            e.to_string(),
        ),
    }
}
