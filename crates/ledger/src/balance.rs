//! Settlement arithmetic: the payment-balance snapshot returned on every
//! booking status change.

use serde::{Deserialize, Serialize};

/// Whether anything is still owed on the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "paid",
            PaymentStatus::Pending => "pending",
        }
    }
}

/// Stateless balance snapshot for one settlement call.
///
/// This is recomputed on every call, not a running balance: calling
/// settlement twice with different additional charges yields two
/// independent snapshots, neither of which accumulates the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentBalance {
    pub room_charges: i64,
    pub additional_charges: i64,
    pub total_amount: i64,
    pub paid_amount: i64,
    pub balance_due: i64,
    pub payment_status: PaymentStatus,
}

/// Compute the balance snapshot for a settlement call.
///
/// The room charge is considered collected up front (recorded in the ledger
/// at booking time). Additional charges count as paid only once the guest
/// has checked out; until then they are the outstanding balance.
pub fn settle(room_charges: i64, additional_charges: i64, checked_out: bool) -> PaymentBalance {
    let total_amount = room_charges + additional_charges;
    let paid_amount = if checked_out {
        room_charges + additional_charges
    } else {
        room_charges
    };
    let balance_due = if checked_out { 0 } else { additional_charges };
    let payment_status = if balance_due == 0 {
        PaymentStatus::Paid
    } else {
        PaymentStatus::Pending
    };

    PaymentBalance {
        room_charges,
        additional_charges,
        total_amount,
        paid_amount,
        balance_due,
        payment_status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_with_extras_is_fully_paid() {
        let b = settle(17_000, 500, true);
        assert_eq!(b.room_charges, 17_000);
        assert_eq!(b.additional_charges, 500);
        assert_eq!(b.total_amount, 17_500);
        assert_eq!(b.paid_amount, 17_500);
        assert_eq!(b.balance_due, 0);
        assert_eq!(b.payment_status, PaymentStatus::Paid);
    }

    #[test]
    fn extras_before_checkout_stay_pending() {
        let b = settle(17_000, 500, false);
        assert_eq!(b.paid_amount, 17_000);
        assert_eq!(b.balance_due, 500);
        assert_eq!(b.payment_status, PaymentStatus::Pending);
    }

    #[test]
    fn no_extras_is_paid_regardless_of_state() {
        for checked_out in [true, false] {
            let b = settle(17_000, 0, checked_out);
            assert_eq!(b.balance_due, 0);
            assert_eq!(b.payment_status, PaymentStatus::Paid);
        }
    }

    #[test]
    fn snapshots_do_not_accumulate() {
        let first = settle(17_000, 300, false);
        let second = settle(17_000, 200, false);
        // Each call stands alone; the second knows nothing of the first.
        assert_eq!(first.total_amount, 17_300);
        assert_eq!(second.total_amount, 17_200);
    }
}
