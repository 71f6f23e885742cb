//! Service wiring: in-memory stores behind the repository traits, the
//! per-room lock registry, and the four engines the routes call into.

use std::sync::Arc;

use innkeep_auth::Hs256Jwt;
use innkeep_infra::{
    AdminStore, AvailabilityChecker, BookingStore, DashboardAggregator, ExpenseStore, GuestStore,
    InMemoryAdminStore, InMemoryBookingStore, InMemoryExpenseStore, InMemoryGuestStore,
    InMemoryRoomStore, InMemorySaleStore, ReservationEngine, RoomLockRegistry, RoomStore,
    SaleStore, SettlementEngine,
};

pub struct AppServices {
    pub jwt: Arc<Hs256Jwt>,

    pub rooms: Arc<dyn RoomStore>,
    pub guests: Arc<dyn GuestStore>,
    pub bookings: Arc<dyn BookingStore>,
    pub sales: Arc<dyn SaleStore>,
    pub expenses: Arc<dyn ExpenseStore>,
    pub admins: Arc<dyn AdminStore>,

    pub availability: AvailabilityChecker,
    pub reservations: ReservationEngine,
    pub settlement: SettlementEngine,
    pub dashboard: DashboardAggregator,
}

/// Wire up the default in-memory deployment. Swapping the store layer
/// for a document store would change only this function.
pub fn build_services(jwt_secret: &[u8]) -> AppServices {
    let rooms: Arc<dyn RoomStore> = Arc::new(InMemoryRoomStore::new());
    let guests: Arc<dyn GuestStore> = Arc::new(InMemoryGuestStore::new());
    let bookings: Arc<dyn BookingStore> = Arc::new(InMemoryBookingStore::new());
    let sales: Arc<dyn SaleStore> = Arc::new(InMemorySaleStore::new());
    let expenses: Arc<dyn ExpenseStore> = Arc::new(InMemoryExpenseStore::new());
    let admins: Arc<dyn AdminStore> = Arc::new(InMemoryAdminStore::new());

    let locks = Arc::new(RoomLockRegistry::new());

    let availability = AvailabilityChecker::new(rooms.clone(), bookings.clone());
    let reservations = ReservationEngine::new(
        rooms.clone(),
        guests.clone(),
        bookings.clone(),
        sales.clone(),
        locks,
    );
    let settlement = SettlementEngine::new(bookings.clone(), sales.clone());
    let dashboard = DashboardAggregator::new(
        rooms.clone(),
        bookings.clone(),
        sales.clone(),
        expenses.clone(),
    );

    AppServices {
        jwt: Arc::new(Hs256Jwt::new(jwt_secret)),
        rooms,
        guests,
        bookings,
        sales,
        expenses,
        admins,
        availability,
        reservations,
        settlement,
        dashboard,
    }
}
