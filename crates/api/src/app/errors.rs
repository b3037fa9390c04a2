use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use depot_core::{ErrorKind, Fault};

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Map a domain failure to its transport response.
pub fn fault_to_response<E>(err: E) -> axum::response::Response
where
    E: Fault + std::fmt::Display,
{
    let (status, code) = match err.kind() {
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "not_found"),
        ErrorKind::InvalidInput => (StatusCode::BAD_REQUEST, "invalid_input"),
        ErrorKind::Unprocessable => (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable"),
        ErrorKind::Conflict => (StatusCode::CONFLICT, "conflict"),
        ErrorKind::Unavailable => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
    };

    if status.is_server_error() {
        tracing::error!(%err, "request failed");
    } else {
        tracing::warn!(%err, status = status.as_u16(), "request rejected");
    }

    json_error(status, code, err.to_string())
}
