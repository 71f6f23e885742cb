use chrono::{DateTime, Utc};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use innkeep_core::{BookingId, DomainError, DomainResult, Entity, GuestId, RoomId, StayRange};
use innkeep_rooms::Room;

/// Booking status lifecycle.
///
/// ```text
/// confirmed ──> checked_in ──> checked_out
///     │              │
///     └──────────────┴──> cancelled
/// ```
///
/// `checked_out` and `cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::CheckedIn => "checked_in",
            BookingStatus::CheckedOut => "checked_out",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Statuses that hold the room: only these participate in conflict
    /// scans.
    pub const ACTIVE: [BookingStatus; 2] = [BookingStatus::Confirmed, BookingStatus::CheckedIn];

    /// Whether the state machine permits moving to `next`.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, next),
            (Confirmed, CheckedIn) | (Confirmed, Cancelled) | (CheckedIn, CheckedOut) | (CheckedIn, Cancelled)
        )
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirmed" => Ok(BookingStatus::Confirmed),
            "checked_in" => Ok(BookingStatus::CheckedIn),
            "checked_out" => Ok(BookingStatus::CheckedOut),
            "cancelled" => Ok(BookingStatus::Cancelled),
            other => Err(DomainError::validation(format!(
                "unknown booking status '{other}' (expected one of: confirmed, checked_in, checked_out, cancelled)"
            ))),
        }
    }
}

/// Room charge for a stay: whole nights times the nightly rate. No
/// partial-day billing, no seasonal rates.
pub fn quote_total(room: &Room, stay: &StayRange) -> i64 {
    stay.nights() * room.price_per_night
}

/// A reservation of one room for one guest over a stay.
///
/// Bookings are never deleted; cancellation is a status. The invariant the
/// reservation engine maintains: for a given room, bookings in
/// [`BookingStatus::ACTIVE`] states have pairwise non-overlapping stays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub booking_id: BookingId,
    pub room_id: RoomId,
    pub guest_id: GuestId,
    #[serde(flatten)]
    pub stay: StayRange,
    /// Room charge computed at creation, smallest currency unit.
    pub total_amount: i64,
    pub status: BookingStatus,
    pub guests_count: u32,
    pub special_requests: String,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Create a confirmed booking with its room charge already quoted.
    pub fn confirm(
        room: &Room,
        guest_id: GuestId,
        stay: StayRange,
        guests_count: u32,
        special_requests: impl Into<String>,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if guests_count == 0 {
            return Err(DomainError::validation("guests_count must be positive"));
        }

        Ok(Self {
            booking_id: BookingId::new(),
            room_id: room.room_id,
            guest_id,
            stay,
            total_amount: quote_total(room, &stay),
            status: BookingStatus::Confirmed,
            guests_count,
            special_requests: special_requests.into(),
            created_at: now,
        })
    }

    /// Apply a status transition, enforcing the state machine.
    pub fn transition_to(&mut self, next: BookingStatus) -> DomainResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::invariant(format!(
                "illegal booking transition {} -> {}",
                self.status.as_str(),
                next.as_str()
            )));
        }
        self.status = next;
        Ok(())
    }
}

impl Entity for Booking {
    type Id = BookingId;

    fn id(&self) -> &BookingId {
        &self.booking_id
    }
}
