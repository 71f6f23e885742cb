use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde_json::json;

use innkeep_core::GuestId;
use innkeep_guests::Guest;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_guest).get(list_guests))
        .route("/:id", get(get_guest))
}

/// Explicit registration; booking creation registers implicitly.
pub async fn create_guest(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::GuestInfoRequest>,
) -> axum::response::Response {
    let guest = match Guest::register(body.into(), Utc::now()) {
        Ok(g) => g,
        Err(e) => return errors::domain_error_to_response(e),
    };

    if let Err(e) = services.guests.insert(guest.clone()) {
        return errors::engine_error_to_response(e.into());
    }

    (StatusCode::CREATED, Json(guest)).into_response()
}

pub async fn list_guests(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.guests.list() {
        Ok(guests) => (StatusCode::OK, Json(json!({ "items": guests }))).into_response(),
        Err(e) => errors::engine_error_to_response(e.into()),
    }
}

pub async fn get_guest(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let guest_id: GuestId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid guest id")
        }
    };

    match services.guests.get(guest_id) {
        Ok(Some(guest)) => (StatusCode::OK, Json(guest)).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "guest not found"),
        Err(e) => errors::engine_error_to_response(e.into()),
    }
}
