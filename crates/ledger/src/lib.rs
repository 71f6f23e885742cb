//! `innkeep-ledger` — append-only money records + settlement arithmetic.
//!
//! The sales ledger is the source of truth for money actually recorded;
//! balances are derived, never stored.

pub mod balance;
pub mod expense;
pub mod sale;

pub use balance::{settle, PaymentBalance, PaymentStatus};
pub use expense::Expense;
pub use sale::{PaymentMethod, Sale};
