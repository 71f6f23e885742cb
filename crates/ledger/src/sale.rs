use chrono::{DateTime, NaiveDate, Utc};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use innkeep_core::{BookingId, DomainError, SaleId};

/// How a charge was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    Online,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Online => "online",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "card" => Ok(PaymentMethod::Card),
            "online" => Ok(PaymentMethod::Online),
            other => Err(DomainError::validation(format!(
                "unknown payment method '{other}' (expected one of: cash, card, online)"
            ))),
        }
    }
}

/// One append-only ledger entry: money recorded against a booking.
///
/// Exactly one entry is written at booking time for the room charge;
/// zero or more follow at checkout for extra charges. Entries are never
/// mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    pub sale_id: SaleId,
    pub booking_id: BookingId,
    /// Amount in the smallest currency unit.
    pub amount: i64,
    pub payment_method: PaymentMethod,
    /// Calendar date the charge applies to.
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Sale {
    /// The initial room charge, dated at check-in. Payment method defaults
    /// to cash, as recorded at the front desk.
    pub fn room_charge(
        booking_id: BookingId,
        amount: i64,
        check_in: NaiveDate,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            sale_id: SaleId::new(),
            booking_id,
            amount,
            payment_method: PaymentMethod::Cash,
            date: check_in,
            created_at: now,
        }
    }

    /// An extra charge recorded at checkout, dated "today".
    pub fn additional_charge(
        booking_id: BookingId,
        amount: i64,
        payment_method: PaymentMethod,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            sale_id: SaleId::new(),
            booking_id,
            amount,
            payment_method,
            date: today,
            created_at: now,
        }
    }
}
