//! Read-only conflict scan: which rooms are free for a stay.

use std::sync::Arc;

use innkeep_bookings::BookingStatus;
use innkeep_core::{RoomId, StayRange};
use innkeep_rooms::{Room, RoomType};

use crate::error::EngineError;
use crate::store::{BookingStore, RoomStore};

/// Determines which rooms have no conflicting active booking for a stay.
///
/// No side effects; safe to call concurrently and repeatedly. Note that a
/// room's housekeeping `status` field plays no part here — availability is
/// derived from bookings alone.
#[derive(Clone)]
pub struct AvailabilityChecker {
    rooms: Arc<dyn RoomStore>,
    bookings: Arc<dyn BookingStore>,
}

impl AvailabilityChecker {
    pub fn new(rooms: Arc<dyn RoomStore>, bookings: Arc<dyn BookingStore>) -> Self {
        Self { rooms, bookings }
    }

    /// All rooms (optionally filtered by category) with no active booking
    /// sharing a night with `stay`.
    pub fn find_available(
        &self,
        stay: StayRange,
        room_type: Option<RoomType>,
    ) -> Result<Vec<Room>, EngineError> {
        let candidates = self.rooms.list(room_type)?;

        let mut available = Vec::with_capacity(candidates.len());
        for room in candidates {
            if !self.has_conflict(room.room_id, stay)? {
                available.push(room);
            }
        }
        Ok(available)
    }

    /// Whether any confirmed/checked-in booking for `room_id` shares a
    /// night with `stay`.
    pub fn has_conflict(&self, room_id: RoomId, stay: StayRange) -> Result<bool, EngineError> {
        let active = self
            .bookings
            .find_for_room(room_id, &BookingStatus::ACTIVE)?;
        Ok(active.iter().any(|b| b.stay.overlaps(&stay)))
    }
}
