//! Repository traits: the capability set the engines are written against.
//!
//! Keyed insert, find-by-filter, update-by-key, count — nothing more. The
//! in-memory implementations in [`in_memory`] are the default wiring; a
//! document store would slot in behind the same traits.

use thiserror::Error;

use innkeep_auth::Admin;
use innkeep_bookings::{Booking, BookingStatus};
use innkeep_core::{AdminId, BookingId, GuestId, RoomId};
use innkeep_guests::Guest;
use innkeep_ledger::{Expense, Sale};
use innkeep_rooms::{Room, RoomType};

pub mod in_memory;

/// Persistence failure. Deliberately opaque: callers log it and surface a
/// generic error, never the detail.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store lock poisoned: {0}")]
    Poisoned(String),
}

/// Room catalog records.
pub trait RoomStore: Send + Sync {
    fn insert(&self, room: Room) -> Result<(), StoreError>;
    fn get(&self, id: RoomId) -> Result<Option<Room>, StoreError>;
    fn find_by_number(&self, room_number: &str) -> Result<Option<Room>, StoreError>;
    /// All rooms, optionally filtered by category, ordered by room number.
    fn list(&self, room_type: Option<RoomType>) -> Result<Vec<Room>, StoreError>;
    /// Replace the record with the same id. Returns false if absent.
    fn update(&self, room: Room) -> Result<bool, StoreError>;
    /// Returns false if absent. Referential integrity is advisory: deleting
    /// a room referenced by bookings is permitted.
    fn delete(&self, id: RoomId) -> Result<bool, StoreError>;
    fn count(&self) -> Result<usize, StoreError>;
}

/// Guest directory records.
pub trait GuestStore: Send + Sync {
    fn insert(&self, guest: Guest) -> Result<(), StoreError>;
    fn get(&self, id: GuestId) -> Result<Option<Guest>, StoreError>;
    /// First-match-wins: the oldest record with this email. No uniqueness
    /// constraint exists.
    fn find_by_email(&self, email: &str) -> Result<Option<Guest>, StoreError>;
    fn list(&self) -> Result<Vec<Guest>, StoreError>;
}

/// Booking records. No delete: cancellation is a status.
pub trait BookingStore: Send + Sync {
    fn insert(&self, booking: Booking) -> Result<(), StoreError>;
    fn get(&self, id: BookingId) -> Result<Option<Booking>, StoreError>;
    fn list(&self) -> Result<Vec<Booking>, StoreError>;
    /// Bookings for one room whose status is in `statuses`.
    fn find_for_room(
        &self,
        room_id: RoomId,
        statuses: &[BookingStatus],
    ) -> Result<Vec<Booking>, StoreError>;
    /// Returns false if absent.
    fn update_status(&self, id: BookingId, status: BookingStatus) -> Result<bool, StoreError>;
    fn count(&self) -> Result<usize, StoreError>;
}

/// Sales ledger: append-only.
pub trait SaleStore: Send + Sync {
    fn append(&self, sale: Sale) -> Result<(), StoreError>;
    fn list(&self) -> Result<Vec<Sale>, StoreError>;
}

/// Expense ledger: append-only.
pub trait ExpenseStore: Send + Sync {
    fn append(&self, expense: Expense) -> Result<(), StoreError>;
    fn list(&self) -> Result<Vec<Expense>, StoreError>;
}

/// Admin accounts.
pub trait AdminStore: Send + Sync {
    fn insert(&self, admin: Admin) -> Result<(), StoreError>;
    fn get(&self, id: AdminId) -> Result<Option<Admin>, StoreError>;
    fn find_by_username(&self, username: &str) -> Result<Option<Admin>, StoreError>;
}
