//! Core data models for Pennywise
//!
//! This module contains the data structures of the ledger: transactions,
//! categories, budgets, date filters and display preferences.

pub mod budget;
pub mod category;
pub mod currency;
pub mod filter;
pub mod ids;
pub mod money;
pub mod transaction;
pub mod undo;

pub use budget::{progress_percent, BudgetStatus, Budgets, CategoryBudget};
pub use category::{category_icon, normalize_category_name, BuiltinCategory, INCOME_CATEGORY};
pub use currency::Currency;
pub use filter::DateFilter;
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind};
pub use undo::{PendingUndo, UNDO_WINDOW_SECS};
