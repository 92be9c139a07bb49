//! Pennywise - Terminal-based personal income and expense tracker
//!
//! This library provides the ledger engine behind the `pennywise` binary:
//! recording income and expenses, filtering them by day, week or month,
//! tracking per-category monthly budgets, and exporting the ledger.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Core data models (transactions, categories, budgets, etc.)
//! - `storage`: Key-value persistence and the in-memory ledger
//! - `services`: Business logic layer
//! - `reports`: Pure queries and the dashboard summary
//! - `export`: CSV, JSON and YAML export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use pennywise::models::TransactionKind;
//! use pennywise::services::{TransactionInput, TransactionService};
//! use pennywise::storage::{MemoryStore, Storage};
//!
//! let mut storage = Storage::new(MemoryStore::new())?;
//! let txn = TransactionService::new(&mut storage)
//!     .add(TransactionInput::new("20", "Food", TransactionKind::Expense))?;
//! assert_eq!(txn.amount.cents(), -2000);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{PennywiseError, PennywiseResult};
