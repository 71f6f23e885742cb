use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use innkeep_core::{AdminId, DomainError, DomainResult, ExpenseId};

/// An operating expense, independent of bookings. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub expense_id: ExpenseId,
    pub category: String,
    /// Amount in the smallest currency unit.
    pub amount: i64,
    pub description: String,
    pub date: NaiveDate,
    pub created_by: AdminId,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    pub fn record(
        category: impl Into<String>,
        amount: i64,
        description: impl Into<String>,
        date: NaiveDate,
        created_by: AdminId,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if amount <= 0 {
            return Err(DomainError::validation(format!(
                "expense amount must be positive (got {amount})"
            )));
        }

        Ok(Self {
            expense_id: ExpenseId::new(),
            category: category.into(),
            amount,
            description: description.into(),
            date,
            created_by,
            created_at: now,
        })
    }
}
