//! Booking status lifecycle + checkout bookkeeping.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use innkeep_bookings::BookingStatus;
use innkeep_core::BookingId;
use innkeep_ledger::{settle, PaymentBalance, PaymentMethod, Sale};

use crate::error::EngineError;
use crate::store::{BookingStore, SaleStore};

/// Moves bookings through their status lifecycle and produces the
/// payment-balance snapshot for each transition.
#[derive(Clone)]
pub struct SettlementEngine {
    bookings: Arc<dyn BookingStore>,
    sales: Arc<dyn SaleStore>,
}

impl SettlementEngine {
    pub fn new(bookings: Arc<dyn BookingStore>, sales: Arc<dyn SaleStore>) -> Self {
        Self { bookings, sales }
    }

    /// Transition a booking and settle the call's charges.
    ///
    /// The transition is validated against the state machine; an illegal
    /// move fails with `InvariantViolation` and writes nothing. A positive
    /// `additional_charges` appends one sale dated `now`, tagged with
    /// `payment_method`. The returned balance is a stateless snapshot of
    /// this call only — repeated calls do not accumulate.
    pub fn update_status(
        &self,
        booking_id: BookingId,
        new_status: BookingStatus,
        additional_charges: i64,
        payment_method: PaymentMethod,
        now: DateTime<Utc>,
    ) -> Result<PaymentBalance, EngineError> {
        if additional_charges < 0 {
            return Err(EngineError::validation(
                "additional_charges must not be negative",
            ));
        }

        let mut booking = self
            .bookings
            .get(booking_id)?
            .ok_or_else(EngineError::not_found)?;

        booking.transition_to(new_status)?;
        self.bookings.update_status(booking_id, new_status)?;

        if additional_charges > 0 {
            self.sales.append(Sale::additional_charge(
                booking_id,
                additional_charges,
                payment_method,
                now.date_naive(),
                now,
            ))?;
        }

        tracing::info!(
            booking_id = %booking_id,
            status = new_status.as_str(),
            additional_charges,
            "booking status updated"
        );

        Ok(settle(
            booking.total_amount,
            additional_charges,
            new_status == BookingStatus::CheckedOut,
        ))
    }
}
