use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::context::AdminContext;

pub async fn health() -> axum::response::Response {
    (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response()
}

/// Echo the authenticated admin identity; doubles as a token check.
pub async fn whoami(admin: AdminContext) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(json!({
            "admin_id": admin.admin_id().to_string(),
            "username": admin.username(),
        })),
    )
        .into_response()
}
