//! Service layer for Pennywise
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, amount signing, rollback on failed writes, and the
//! budget calculations.

pub mod alerts;
pub mod budget;
pub mod transaction;

pub use alerts::{AlertLevel, BudgetAlert, BudgetAlertTracker};
pub use budget::{monthly_spending, BudgetService};
pub use transaction::{validate_amount, TransactionInput, TransactionService};

use chrono::{Local, NaiveDate};

/// The local calendar day
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
