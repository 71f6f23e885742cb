use std::collections::HashMap;
use std::sync::RwLock;

use innkeep_auth::Admin;
use innkeep_bookings::{Booking, BookingStatus};
use innkeep_core::{AdminId, BookingId, GuestId, RoomId};
use innkeep_guests::Guest;
use innkeep_ledger::{Expense, Sale};
use innkeep_rooms::{Room, RoomType};

use super::{
    AdminStore, BookingStore, ExpenseStore, GuestStore, RoomStore, SaleStore, StoreError,
};

fn poisoned(which: &str) -> StoreError {
    StoreError::Poisoned(which.to_string())
}

/// In-memory room catalog.
///
/// Intended for tests/dev and single-process deployments. Not optimized.
#[derive(Debug, Default)]
pub struct InMemoryRoomStore {
    rows: RwLock<HashMap<RoomId, Room>>,
}

impl InMemoryRoomStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RoomStore for InMemoryRoomStore {
    fn insert(&self, room: Room) -> Result<(), StoreError> {
        let mut rows = self.rows.write().map_err(|_| poisoned("rooms"))?;
        rows.insert(room.room_id, room);
        Ok(())
    }

    fn get(&self, id: RoomId) -> Result<Option<Room>, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned("rooms"))?;
        Ok(rows.get(&id).cloned())
    }

    fn find_by_number(&self, room_number: &str) -> Result<Option<Room>, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned("rooms"))?;
        Ok(rows
            .values()
            .find(|r| r.room_number == room_number)
            .cloned())
    }

    fn list(&self, room_type: Option<RoomType>) -> Result<Vec<Room>, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned("rooms"))?;
        let mut rooms: Vec<Room> = rows
            .values()
            .filter(|r| room_type.is_none_or(|t| r.room_type == t))
            .cloned()
            .collect();
        rooms.sort_by(|a, b| a.room_number.cmp(&b.room_number));
        Ok(rooms)
    }

    fn update(&self, room: Room) -> Result<bool, StoreError> {
        let mut rows = self.rows.write().map_err(|_| poisoned("rooms"))?;
        match rows.get_mut(&room.room_id) {
            Some(existing) => {
                *existing = room;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&self, id: RoomId) -> Result<bool, StoreError> {
        let mut rows = self.rows.write().map_err(|_| poisoned("rooms"))?;
        Ok(rows.remove(&id).is_some())
    }

    fn count(&self) -> Result<usize, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned("rooms"))?;
        Ok(rows.len())
    }
}

/// In-memory guest directory.
#[derive(Debug, Default)]
pub struct InMemoryGuestStore {
    rows: RwLock<HashMap<GuestId, Guest>>,
}

impl InMemoryGuestStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GuestStore for InMemoryGuestStore {
    fn insert(&self, guest: Guest) -> Result<(), StoreError> {
        let mut rows = self.rows.write().map_err(|_| poisoned("guests"))?;
        rows.insert(guest.guest_id, guest);
        Ok(())
    }

    fn get(&self, id: GuestId) -> Result<Option<Guest>, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned("guests"))?;
        Ok(rows.get(&id).cloned())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Guest>, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned("guests"))?;
        // Oldest record wins so repeated lookups stay stable even when
        // duplicates exist.
        Ok(rows
            .values()
            .filter(|g| g.email == email)
            .min_by_key(|g| (g.created_at, g.guest_id))
            .cloned())
    }

    fn list(&self) -> Result<Vec<Guest>, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned("guests"))?;
        let mut guests: Vec<Guest> = rows.values().cloned().collect();
        guests.sort_by_key(|g| (g.created_at, g.guest_id));
        Ok(guests)
    }
}

/// In-memory booking records.
#[derive(Debug, Default)]
pub struct InMemoryBookingStore {
    rows: RwLock<HashMap<BookingId, Booking>>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookingStore for InMemoryBookingStore {
    fn insert(&self, booking: Booking) -> Result<(), StoreError> {
        let mut rows = self.rows.write().map_err(|_| poisoned("bookings"))?;
        rows.insert(booking.booking_id, booking);
        Ok(())
    }

    fn get(&self, id: BookingId) -> Result<Option<Booking>, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned("bookings"))?;
        Ok(rows.get(&id).cloned())
    }

    fn list(&self) -> Result<Vec<Booking>, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned("bookings"))?;
        let mut bookings: Vec<Booking> = rows.values().cloned().collect();
        bookings.sort_by_key(|b| (b.created_at, b.booking_id));
        Ok(bookings)
    }

    fn find_for_room(
        &self,
        room_id: RoomId,
        statuses: &[BookingStatus],
    ) -> Result<Vec<Booking>, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned("bookings"))?;
        Ok(rows
            .values()
            .filter(|b| b.room_id == room_id && statuses.contains(&b.status))
            .cloned()
            .collect())
    }

    fn update_status(&self, id: BookingId, status: BookingStatus) -> Result<bool, StoreError> {
        let mut rows = self.rows.write().map_err(|_| poisoned("bookings"))?;
        match rows.get_mut(&id) {
            Some(booking) => {
                booking.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn count(&self) -> Result<usize, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned("bookings"))?;
        Ok(rows.len())
    }
}

/// In-memory append-only sales ledger.
#[derive(Debug, Default)]
pub struct InMemorySaleStore {
    rows: RwLock<Vec<Sale>>,
}

impl InMemorySaleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaleStore for InMemorySaleStore {
    fn append(&self, sale: Sale) -> Result<(), StoreError> {
        let mut rows = self.rows.write().map_err(|_| poisoned("sales"))?;
        rows.push(sale);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Sale>, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned("sales"))?;
        Ok(rows.clone())
    }
}

/// In-memory append-only expense ledger.
#[derive(Debug, Default)]
pub struct InMemoryExpenseStore {
    rows: RwLock<Vec<Expense>>,
}

impl InMemoryExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExpenseStore for InMemoryExpenseStore {
    fn append(&self, expense: Expense) -> Result<(), StoreError> {
        let mut rows = self.rows.write().map_err(|_| poisoned("expenses"))?;
        rows.push(expense);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Expense>, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned("expenses"))?;
        Ok(rows.clone())
    }
}

/// In-memory admin accounts.
#[derive(Debug, Default)]
pub struct InMemoryAdminStore {
    rows: RwLock<HashMap<AdminId, Admin>>,
}

impl InMemoryAdminStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdminStore for InMemoryAdminStore {
    fn insert(&self, admin: Admin) -> Result<(), StoreError> {
        let mut rows = self.rows.write().map_err(|_| poisoned("admins"))?;
        rows.insert(admin.admin_id, admin);
        Ok(())
    }

    fn get(&self, id: AdminId) -> Result<Option<Admin>, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned("admins"))?;
        Ok(rows.get(&id).cloned())
    }

    fn find_by_username(&self, username: &str) -> Result<Option<Admin>, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned("admins"))?;
        Ok(rows.values().find(|a| a.username == username).cloned())
    }
}
