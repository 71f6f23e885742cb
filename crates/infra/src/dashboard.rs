//! Read-and-reduce over every collection: the back-office dashboard.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use innkeep_bookings::BookingStatus;

use crate::error::EngineError;
use crate::store::{BookingStore, ExpenseStore, RoomStore, SaleStore};

/// Aggregate occupancy + financial metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_rooms: i64,
    pub occupied_rooms: i64,
    /// `total_rooms - occupied_rooms`, deliberately unclamped: pathological
    /// data (more checked-in bookings than rooms) shows up as a negative
    /// number rather than being hidden.
    pub available_rooms: i64,
    pub total_bookings: i64,
    /// Sum over the whole sales ledger, regardless of booking status —
    /// a cancelled booking's room charge still counts.
    pub total_revenue: i64,
    pub total_expenses: i64,
    pub net_profit: i64,
    /// Percentage, 0 when the catalog is empty.
    pub occupancy_rate: f64,
}

/// Computes [`DashboardStats`] on demand. Pure read; no snapshot isolation —
/// concurrent writes may be partially observed.
#[derive(Clone)]
pub struct DashboardAggregator {
    rooms: Arc<dyn RoomStore>,
    bookings: Arc<dyn BookingStore>,
    sales: Arc<dyn SaleStore>,
    expenses: Arc<dyn ExpenseStore>,
}

impl DashboardAggregator {
    pub fn new(
        rooms: Arc<dyn RoomStore>,
        bookings: Arc<dyn BookingStore>,
        sales: Arc<dyn SaleStore>,
        expenses: Arc<dyn ExpenseStore>,
    ) -> Self {
        Self {
            rooms,
            bookings,
            sales,
            expenses,
        }
    }

    pub fn compute(&self, today: NaiveDate) -> Result<DashboardStats, EngineError> {
        let total_rooms = self.rooms.count()? as i64;
        let total_bookings = self.bookings.count()? as i64;

        // A room counts as occupied while a checked-in booking's inclusive
        // [check_in, check_out] span covers today — including the checkout
        // day itself.
        let occupied_rooms = self
            .bookings
            .list()?
            .iter()
            .filter(|b| b.status == BookingStatus::CheckedIn && b.stay.spans_inclusive(today))
            .count() as i64;

        let total_revenue: i64 = self.sales.list()?.iter().map(|s| s.amount).sum();
        let total_expenses: i64 = self.expenses.list()?.iter().map(|e| e.amount).sum();

        let occupancy_rate = if total_rooms > 0 {
            occupied_rooms as f64 / total_rooms as f64 * 100.0
        } else {
            0.0
        };

        Ok(DashboardStats {
            total_rooms,
            occupied_rooms,
            available_rooms: total_rooms - occupied_rooms,
            total_bookings,
            total_revenue,
            total_expenses,
            net_profit: total_revenue - total_expenses,
            occupancy_rate,
        })
    }
}
