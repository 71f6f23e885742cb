//! Request DTOs and JSON mapping helpers.
//!
//! Domain types already serialize in their wire shape, so most list/get
//! handlers return them directly; helpers here exist where the response
//! differs from the stored record (joined booking views, admins minus
//! their password hash).

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use innkeep_auth::Admin;
use innkeep_bookings::Booking;
use innkeep_guests::{ContactInfo, Guest};
use innkeep_rooms::Room;

#[derive(Debug, Deserialize)]
pub struct RoomRequest {
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: i64,
    pub max_occupancy: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct RoomListQuery {
    pub room_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityRequest {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub room_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GuestInfoRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub id_proof: String,
}

impl From<GuestInfoRequest> for ContactInfo {
    fn from(req: GuestInfoRequest) -> Self {
        ContactInfo {
            name: req.name,
            email: req.email,
            phone: req.phone,
            address: req.address,
            id_proof: req.id_proof,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub room_id: String,
    pub guest: GuestInfoRequest,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests_count: u32,
    #[serde(default)]
    pub special_requests: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: String,
    #[serde(default)]
    pub additional_charges: i64,
    pub payment_method: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateExpenseRequest {
    pub category: String,
    pub amount: i64,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Booking joined with its room and guest for list/detail views.
/// Dangling references (deleted room) degrade to "Unknown" rather than
/// failing the whole listing.
pub fn booking_details_to_json(
    booking: &Booking,
    room: Option<&Room>,
    guest: Option<&Guest>,
) -> serde_json::Value {
    let mut value = serde_json::to_value(booking).unwrap_or_else(|_| json!({}));
    if let Some(obj) = value.as_object_mut() {
        obj.insert(
            "room_number".to_string(),
            json!(room.map_or("Unknown", |r| r.room_number.as_str())),
        );
        obj.insert(
            "room_type".to_string(),
            json!(room.map(|r| r.room_type.as_str())),
        );
        obj.insert(
            "guest_name".to_string(),
            json!(guest.map_or("Unknown", |g| g.name.as_str())),
        );
        obj.insert(
            "guest_email".to_string(),
            json!(guest.map(|g| g.email.as_str())),
        );
    }
    value
}

/// Admin account view: everything except the password hash.
pub fn admin_to_json(admin: &Admin) -> serde_json::Value {
    json!({
        "admin_id": admin.admin_id,
        "username": admin.username,
        "role": admin.role,
        "created_at": admin.created_at,
    })
}
