use chrono::{DateTime, Utc};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use innkeep_core::{DomainError, DomainResult, Entity, RoomId};

/// Room category. Determines nothing beyond filtering; pricing lives on the
/// room itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Single,
    Double,
    Triple,
    Suite,
    Deluxe,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Single => "single",
            RoomType::Double => "double",
            RoomType::Triple => "triple",
            RoomType::Suite => "suite",
            RoomType::Deluxe => "deluxe",
        }
    }
}

impl FromStr for RoomType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(RoomType::Single),
            "double" => Ok(RoomType::Double),
            "triple" => Ok(RoomType::Triple),
            "suite" => Ok(RoomType::Suite),
            "deluxe" => Ok(RoomType::Deluxe),
            other => Err(DomainError::validation(format!(
                "unknown room type '{other}' (expected one of: single, double, triple, suite, deluxe)"
            ))),
        }
    }
}

/// Housekeeping lifecycle status.
///
/// Informational only: availability is derived from bookings, never from
/// this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    Available,
    Occupied,
    Maintenance,
}

impl FromStr for RoomStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(RoomStatus::Available),
            "occupied" => Ok(RoomStatus::Occupied),
            "maintenance" => Ok(RoomStatus::Maintenance),
            other => Err(DomainError::validation(format!(
                "unknown room status '{other}' (expected one of: available, occupied, maintenance)"
            ))),
        }
    }
}

/// A room in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub room_id: RoomId,
    /// Human-facing number, e.g. "101". Unique across the catalog.
    pub room_number: String,
    pub room_type: RoomType,
    /// Nightly rate in the smallest currency unit.
    pub price_per_night: i64,
    pub max_occupancy: u32,
    pub amenities: Vec<String>,
    pub description: String,
    pub status: RoomStatus,
    pub created_at: DateTime<Utc>,
}

impl Room {
    /// Create a room, validating rate and capacity.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        room_number: impl Into<String>,
        room_type: RoomType,
        price_per_night: i64,
        max_occupancy: u32,
        amenities: Vec<String>,
        description: impl Into<String>,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let room_number = room_number.into();
        if room_number.trim().is_empty() {
            return Err(DomainError::validation("room_number must not be empty"));
        }
        if price_per_night <= 0 {
            return Err(DomainError::validation(format!(
                "price_per_night must be positive (got {price_per_night})"
            )));
        }
        if max_occupancy == 0 {
            return Err(DomainError::validation("max_occupancy must be positive"));
        }

        Ok(Self {
            room_id: RoomId::new(),
            room_number,
            room_type,
            price_per_night,
            max_occupancy,
            amenities,
            description: description.into(),
            status: RoomStatus::Available,
            created_at: now,
        })
    }
}

impl Entity for Room {
    type Id = RoomId;

    fn id(&self) -> &RoomId {
        &self.room_id
    }
}
