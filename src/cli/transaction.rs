//! Transaction CLI commands
//!
//! Implements CLI commands for recording, listing, editing and deleting
//! transactions, plus the short undo window after a delete.

use chrono::Utc;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{
    format_alert, format_transaction_details, format_transaction_table, DisplayOptions,
};
use crate::error::{PennywiseError, PennywiseResult};
use crate::models::{DateFilter, PendingUndo, Transaction, TransactionKind, UNDO_WINDOW_SECS};
use crate::reports;
use crate::services::{
    today, BudgetAlertTracker, BudgetService, TransactionInput, TransactionService,
};
use crate::storage::{KeyValueStore, Storage};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction dated today
    Add {
        /// Positive amount (e.g., "12.50"); the kind decides the sign
        amount: String,
        /// income or expense
        #[arg(short, long, default_value = "expense")]
        kind: TransactionKind,
        /// Category name (ignored for income)
        #[arg(short, long, default_value = "Food")]
        category: String,
        /// Description, defaults to the category name
        #[arg(short, long)]
        description: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Date range: all, today, weekly or monthly (defaults to the last one used)
        #[arg(short, long)]
        filter: Option<DateFilter>,
        /// Only show transactions whose description or category contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID (full or unique prefix)
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID (full or unique prefix)
        id: String,
        /// New positive amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New kind
        #[arg(short, long)]
        kind: Option<TransactionKind>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a transaction (undoable for a few seconds)
    Delete {
        /// Transaction ID (full or unique prefix)
        id: String,
    },
    /// Restore the most recently deleted transaction
    Undo,
}

/// Handle a transaction command
pub fn handle_transaction_command<S: KeyValueStore>(
    storage: &mut Storage<S>,
    settings: &mut Settings,
    cmd: TransactionCommands,
) -> PennywiseResult<()> {
    let options = DisplayOptions::from_settings(settings);

    match cmd {
        TransactionCommands::Add {
            amount,
            kind,
            category,
            description,
        } => {
            let mut input = TransactionInput::new(amount, category, kind);
            input.description = description;

            let txn = with_budget_alerts(storage, |storage| {
                TransactionService::new(storage).add(input)
            })?;

            println!("Added transaction: {}", txn.id);
            print!("{}", format_transaction_details(&txn, &options));
        }

        TransactionCommands::List {
            filter,
            search,
            limit,
        } => {
            let filter = match filter {
                Some(filter) => {
                    settings.set_date_filter(storage.store_mut(), filter)?;
                    filter
                }
                None => settings.date_filter,
            };

            let today = today();
            let mut transactions =
                reports::filter_by_date_range(storage.transactions.all(), filter, today);
            if let Some(query) = search.as_deref() {
                transactions = reports::search(&transactions, query);
            }
            reports::sort_recent(&mut transactions, today);

            let total = transactions.len();
            if let Some(limit) = limit {
                transactions.truncate(limit);
            }

            println!("Transactions ({}): {}", filter.label(), total);
            print!("{}", format_transaction_table(&transactions, &options));
        }

        TransactionCommands::Show { id } => {
            let id = storage.transactions.resolve(&id)?;
            let txn = storage
                .transactions
                .get(id)
                .ok_or_else(|| PennywiseError::transaction_not_found(id.to_string()))?;
            print!("{}", format_transaction_details(txn, &options));
        }

        TransactionCommands::Edit {
            id,
            amount,
            kind,
            category,
            description,
        } => {
            let id = storage.transactions.resolve(&id)?;
            let existing = storage
                .transactions
                .get(id)
                .cloned()
                .ok_or_else(|| PennywiseError::transaction_not_found(id.to_string()))?;

            let input = edit_input(&existing, amount, kind, category, description)?;
            let txn = with_budget_alerts(storage, |storage| {
                TransactionService::new(storage).update(id, input)
            })?;

            println!("Updated transaction: {}", txn.id);
            print!("{}", format_transaction_details(&txn, &options));
        }

        TransactionCommands::Delete { id } => {
            let id = storage.transactions.resolve(&id)?;
            let deleted = TransactionService::new(storage).delete(id)?;
            storage.set_pending_undo(&PendingUndo::new(deleted.clone()))?;

            println!(
                "Deleted transaction: {} ({} {})",
                deleted.id,
                deleted.description,
                options.money(deleted.amount)
            );
            println!(
                "Run 'pennywise transaction undo' within {} seconds to restore it.",
                UNDO_WINDOW_SECS
            );
        }

        TransactionCommands::Undo => {
            let pending = storage
                .pending_undo()?
                .ok_or_else(|| PennywiseError::Validation("Nothing to undo".into()))?;

            if pending.is_expired(Utc::now()) {
                storage.clear_pending_undo()?;
                return Err(PennywiseError::Validation(format!(
                    "The undo window of {} seconds has passed",
                    UNDO_WINDOW_SECS
                )));
            }

            let txn = pending.transaction;
            let id = txn.id;
            TransactionService::new(storage).undo_delete(txn)?;
            storage.clear_pending_undo()?;
            println!("Restored transaction: {}", id);
        }
    }

    Ok(())
}

/// Build the edit input from the existing transaction plus overrides
fn edit_input(
    existing: &Transaction,
    amount: Option<String>,
    kind: Option<TransactionKind>,
    category: Option<String>,
    description: Option<String>,
) -> PennywiseResult<TransactionInput> {
    let current_kind = existing.kind();
    let kind = kind.unwrap_or(current_kind);

    let category = match category {
        Some(category) => category,
        // An income record has no expense category to fall back on
        None if kind == TransactionKind::Expense && existing.has_income_category() => {
            return Err(PennywiseError::Validation("Category is required".into()));
        }
        None => existing.category.clone(),
    };

    Ok(TransactionInput {
        description: Some(description.unwrap_or_else(|| existing.description.clone())),
        amount: amount.unwrap_or_else(|| existing.amount.abs().to_string()),
        category,
        kind,
    })
}

/// Run a mutation and print any budget threshold it pushed a category across
fn with_budget_alerts<S, T, F>(storage: &mut Storage<S>, mutate: F) -> PennywiseResult<T>
where
    S: KeyValueStore,
    F: FnOnce(&mut Storage<S>) -> PennywiseResult<T>,
{
    let today = today();
    let mut tracker = BudgetAlertTracker::new();
    tracker.prime(&BudgetService::new(storage).overview(today));

    let result = mutate(&mut *storage)?;

    let alerts = tracker.check(&BudgetService::new(storage).overview(today));
    for alert in &alerts {
        println!("{}", format_alert(alert));
    }

    Ok(result)
}
