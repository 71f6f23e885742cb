//! Booking creation: validate, price, persist, and record the room charge.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use innkeep_bookings::Booking;
use innkeep_core::{RoomId, StayRange};
use innkeep_guests::{ContactInfo, Guest};
use innkeep_ledger::Sale;

use crate::availability::AvailabilityChecker;
use crate::error::EngineError;
use crate::room_locks::RoomLockRegistry;
use crate::store::{BookingStore, GuestStore, RoomStore, SaleStore};

/// Everything a caller supplies to reserve a room.
#[derive(Debug, Clone)]
pub struct ReservationRequest {
    pub room_id: RoomId,
    pub guest: ContactInfo,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests_count: u32,
    pub special_requests: String,
}

/// Creates bookings, maintaining the no-double-booking invariant.
///
/// The conflict scan, booking insert, and initial ledger append all happen
/// inside the room's critical section (see [`RoomLockRegistry`]), so two
/// concurrent requests for overlapping stays cannot both succeed, and a
/// booking is never visible without its room-charge sale.
#[derive(Clone)]
pub struct ReservationEngine {
    rooms: Arc<dyn RoomStore>,
    guests: Arc<dyn GuestStore>,
    bookings: Arc<dyn BookingStore>,
    sales: Arc<dyn SaleStore>,
    availability: AvailabilityChecker,
    locks: Arc<RoomLockRegistry>,
}

impl ReservationEngine {
    pub fn new(
        rooms: Arc<dyn RoomStore>,
        guests: Arc<dyn GuestStore>,
        bookings: Arc<dyn BookingStore>,
        sales: Arc<dyn SaleStore>,
        locks: Arc<RoomLockRegistry>,
    ) -> Self {
        let availability = AvailabilityChecker::new(rooms.clone(), bookings.clone());
        Self {
            rooms,
            guests,
            bookings,
            sales,
            availability,
            locks,
        }
    }

    /// Create a confirmed booking plus its room-charge ledger entry.
    ///
    /// Failure modes, all detected before any write: unknown room
    /// (`NotFound`), empty/inverted date range (`Validation`), overlapping
    /// active booking (`Conflict`).
    pub fn create(
        &self,
        request: ReservationRequest,
        now: DateTime<Utc>,
    ) -> Result<Booking, EngineError> {
        let stay = StayRange::new(request.check_in, request.check_out)?;

        let room = self
            .rooms
            .get(request.room_id)?
            .ok_or_else(EngineError::not_found)?;

        let guest = self.resolve_guest(request.guest, now)?;

        // Critical section: scan + both writes, serialized per room.
        let room_lock = self.locks.for_room(room.room_id);
        let _guard = room_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if self.availability.has_conflict(room.room_id, stay)? {
            return Err(EngineError::conflict(
                "room is not available for the selected dates",
            ));
        }

        let booking = Booking::confirm(
            &room,
            guest.guest_id,
            stay,
            request.guests_count,
            request.special_requests,
            now,
        )?;

        self.bookings.insert(booking.clone())?;
        self.sales.append(Sale::room_charge(
            booking.booking_id,
            booking.total_amount,
            stay.check_in(),
            now,
        ))?;

        tracing::info!(
            booking_id = %booking.booking_id,
            room_number = %room.room_number,
            nights = stay.nights(),
            total_amount = booking.total_amount,
            "booking confirmed"
        );

        Ok(booking)
    }

    /// Look the guest up by email; register them when absent.
    ///
    /// Lookup-then-insert without a uniqueness constraint: concurrent calls
    /// carrying the same new email may create duplicate guest records. The
    /// oldest record wins subsequent lookups.
    fn resolve_guest(
        &self,
        contact: ContactInfo,
        now: DateTime<Utc>,
    ) -> Result<Guest, EngineError> {
        if let Some(existing) = self.guests.find_by_email(&contact.email)? {
            return Ok(existing);
        }

        let guest = Guest::register(contact, now)?;
        self.guests.insert(guest.clone())?;
        Ok(guest)
    }
}
