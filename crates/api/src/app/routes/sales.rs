use std::sync::Arc;

use axum::{
    extract::Extension, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use serde_json::json;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", get(list_sales))
}

pub async fn list_sales(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.sales.list() {
        Ok(sales) => (StatusCode::OK, Json(json!({ "items": sales }))).into_response(),
        Err(e) => errors::engine_error_to_response(e.into()),
    }
}
