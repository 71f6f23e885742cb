use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use chrono::Utc;
use serde_json::json;

use innkeep_bookings::Booking;
use innkeep_core::{BookingId, RoomId};
use innkeep_infra::ReservationRequest;
use innkeep_ledger::PaymentMethod;

use crate::app::services::AppServices;
use crate::app::{dto, errors};
use crate::context::AdminContext;

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_booking).get(list_bookings))
        .route("/:id", get(get_booking))
        .route("/:id/status", put(update_booking_status))
}

pub async fn create_booking(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateBookingRequest>,
) -> axum::response::Response {
    let room_id: RoomId = match body.room_id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid room id")
        }
    };

    let request = ReservationRequest {
        room_id,
        guest: body.guest.into(),
        check_in: body.check_in,
        check_out: body.check_out,
        guests_count: body.guests_count,
        special_requests: body.special_requests,
    };

    match services.reservations.create(request, Utc::now()) {
        Ok(booking) => (StatusCode::CREATED, Json(booking)).into_response(),
        Err(e) => errors::engine_error_to_response(e),
    }
}

pub async fn list_bookings(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let bookings = match services.bookings.list() {
        Ok(b) => b,
        Err(e) => return errors::engine_error_to_response(e.into()),
    };

    let mut items = Vec::with_capacity(bookings.len());
    for booking in &bookings {
        match join_details(&services, booking) {
            Ok(value) => items.push(value),
            Err(resp) => return resp,
        }
    }

    (StatusCode::OK, Json(json!({ "items": items }))).into_response()
}

pub async fn get_booking(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let booking_id: BookingId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid booking id")
        }
    };

    let booking = match services.bookings.get(booking_id) {
        Ok(Some(b)) => b,
        Ok(None) => {
            return errors::json_error(StatusCode::NOT_FOUND, "not_found", "booking not found")
        }
        Err(e) => return errors::engine_error_to_response(e.into()),
    };

    match join_details(&services, &booking) {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(resp) => resp,
    }
}

pub async fn update_booking_status(
    admin: AdminContext,
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateBookingStatusRequest>,
) -> axum::response::Response {
    let booking_id: BookingId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid booking id")
        }
    };

    let status = match errors::parse_booking_status(&body.status) {
        Ok(s) => s,
        Err(resp) => return resp,
    };

    let payment_method = match body.payment_method.as_deref() {
        Some(s) => match errors::parse_payment_method(s) {
            Ok(m) => m,
            Err(resp) => return resp,
        },
        None => PaymentMethod::Cash,
    };

    match services.settlement.update_status(
        booking_id,
        status,
        body.additional_charges,
        payment_method,
        Utc::now(),
    ) {
        Ok(balance) => {
            tracing::info!(
                booking_id = %booking_id,
                status = status.as_str(),
                admin = %admin.username(),
                "booking status changed"
            );
            (StatusCode::OK, Json(balance)).into_response()
        }
        Err(e) => errors::engine_error_to_response(e),
    }
}

fn join_details(
    services: &AppServices,
    booking: &Booking,
) -> Result<serde_json::Value, axum::response::Response> {
    let room = services
        .rooms
        .get(booking.room_id)
        .map_err(|e| errors::engine_error_to_response(e.into()))?;
    let guest = services
        .guests
        .get(booking.guest_id)
        .map_err(|e| errors::engine_error_to_response(e.into()))?;

    Ok(dto::booking_details_to_json(
        booking,
        room.as_ref(),
        guest.as_ref(),
    ))
}
