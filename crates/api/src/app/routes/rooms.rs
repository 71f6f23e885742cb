use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde_json::json;

use innkeep_core::{RoomId, StayRange};
use innkeep_rooms::Room;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::AdminContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_rooms).post(create_room))
        .route("/availability", post(check_availability))
        .route("/:id", get(get_room).put(update_room).delete(delete_room))
}

pub async fn create_room(
    admin: AdminContext,
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::RoomRequest>,
) -> axum::response::Response {
    let room_type = match errors::parse_room_type(&body.room_type) {
        Ok(t) => t,
        Err(resp) => return resp,
    };

    match services.rooms.find_by_number(&body.room_number) {
        Ok(Some(_)) => {
            return errors::json_error(
                StatusCode::CONFLICT,
                "conflict",
                format!("room number '{}' already exists", body.room_number),
            )
        }
        Ok(None) => {}
        Err(e) => return errors::engine_error_to_response(e.into()),
    }

    let room = match Room::new(
        body.room_number,
        room_type,
        body.price_per_night,
        body.max_occupancy,
        body.amenities,
        body.description,
        Utc::now(),
    ) {
        Ok(r) => r,
        Err(e) => return errors::domain_error_to_response(e),
    };

    if let Err(e) = services.rooms.insert(room.clone()) {
        return errors::engine_error_to_response(e.into());
    }

    tracing::info!(room_number = %room.room_number, admin = %admin.username(), "room added");
    (StatusCode::CREATED, Json(room)).into_response()
}

pub async fn list_rooms(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::RoomListQuery>,
) -> axum::response::Response {
    let room_type = match query.room_type.as_deref() {
        Some(s) => match errors::parse_room_type(s) {
            Ok(t) => Some(t),
            Err(resp) => return resp,
        },
        None => None,
    };

    match services.rooms.list(room_type) {
        Ok(rooms) => (StatusCode::OK, Json(json!({ "items": rooms }))).into_response(),
        Err(e) => errors::engine_error_to_response(e.into()),
    }
}

pub async fn get_room(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let room_id: RoomId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid room id"),
    };

    match services.rooms.get(room_id) {
        Ok(Some(room)) => (StatusCode::OK, Json(room)).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "room not found"),
        Err(e) => errors::engine_error_to_response(e.into()),
    }
}

/// Full replacement of the mutable fields; identity, housekeeping status
/// and creation time survive the update.
pub async fn update_room(
    admin: AdminContext,
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::RoomRequest>,
) -> axum::response::Response {
    let room_id: RoomId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid room id"),
    };

    let existing = match services.rooms.get(room_id) {
        Ok(Some(r)) => r,
        Ok(None) => return errors::json_error(StatusCode::NOT_FOUND, "not_found", "room not found"),
        Err(e) => return errors::engine_error_to_response(e.into()),
    };

    let room_type = match errors::parse_room_type(&body.room_type) {
        Ok(t) => t,
        Err(resp) => return resp,
    };

    if body.room_number != existing.room_number {
        match services.rooms.find_by_number(&body.room_number) {
            Ok(Some(_)) => {
                return errors::json_error(
                    StatusCode::CONFLICT,
                    "conflict",
                    format!("room number '{}' already exists", body.room_number),
                )
            }
            Ok(None) => {}
            Err(e) => return errors::engine_error_to_response(e.into()),
        }
    }

    // Run the constructor for its validation, then restore identity.
    let mut updated = match Room::new(
        body.room_number,
        room_type,
        body.price_per_night,
        body.max_occupancy,
        body.amenities,
        body.description,
        existing.created_at,
    ) {
        Ok(r) => r,
        Err(e) => return errors::domain_error_to_response(e),
    };
    updated.room_id = existing.room_id;
    updated.status = existing.status;

    match services.rooms.update(updated.clone()) {
        Ok(true) => {
            tracing::info!(room_number = %updated.room_number, admin = %admin.username(), "room updated");
            (StatusCode::OK, Json(updated)).into_response()
        }
        Ok(false) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "room not found"),
        Err(e) => errors::engine_error_to_response(e.into()),
    }
}

pub async fn delete_room(
    admin: AdminContext,
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let room_id: RoomId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid room id"),
    };

    match services.rooms.delete(room_id) {
        Ok(true) => {
            tracing::info!(room_id = %room_id, admin = %admin.username(), "room deleted");
            (StatusCode::OK, Json(json!({ "message": "room deleted" }))).into_response()
        }
        Ok(false) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "room not found"),
        Err(e) => errors::engine_error_to_response(e.into()),
    }
}

pub async fn check_availability(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::AvailabilityRequest>,
) -> axum::response::Response {
    let stay = match StayRange::new(body.check_in, body.check_out) {
        Ok(s) => s,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let room_type = match body.room_type.as_deref() {
        Some(s) => match errors::parse_room_type(s) {
            Ok(t) => Some(t),
            Err(resp) => return resp,
        },
        None => None,
    };

    match services.availability.find_available(stay, room_type) {
        Ok(rooms) => (StatusCode::OK, Json(json!({ "items": rooms }))).into_response(),
        Err(e) => errors::engine_error_to_response(e),
    }
}
