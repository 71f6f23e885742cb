//! `innkeep-infra` — storage abstraction and the engines that orchestrate it.
//!
//! The domain crates stay pure; this crate owns the repository traits, their
//! in-memory implementations, the per-room lock registry that serializes
//! booking creation, and the four engines: availability, reservation,
//! settlement, dashboard.

pub mod availability;
pub mod dashboard;
pub mod error;
pub mod reservation;
pub mod room_locks;
pub mod settlement;
pub mod store;

pub use availability::AvailabilityChecker;
pub use dashboard::{DashboardAggregator, DashboardStats};
pub use error::EngineError;
pub use reservation::{ReservationEngine, ReservationRequest};
pub use room_locks::RoomLockRegistry;
pub use settlement::SettlementEngine;
pub use store::{
    AdminStore, BookingStore, ExpenseStore, GuestStore, RoomStore, SaleStore, StoreError,
};
pub use store::in_memory::{
    InMemoryAdminStore, InMemoryBookingStore, InMemoryExpenseStore, InMemoryGuestStore,
    InMemoryRoomStore, InMemorySaleStore,
};
