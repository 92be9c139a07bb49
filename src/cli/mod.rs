//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod export;
pub mod settings;
pub mod summary;
pub mod transaction;
pub mod user;

pub use budget::{handle_budget_command, BudgetCommands};
pub use export::{handle_export_command, ExportFormat};
pub use settings::{handle_settings_command, SettingsCommands};
pub use summary::handle_summary_command;
pub use transaction::{handle_transaction_command, TransactionCommands};
pub use user::{handle_user_command, UserCommands};
