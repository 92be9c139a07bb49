//! JSON Export functionality
//!
//! Exports the complete ledger (transactions, budgets and the display
//! currency) with a schema version, for backups and scripting.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::{PennywiseError, PennywiseResult};
use crate::models::{Budgets, Currency, Transaction};
use crate::storage::{KeyValueStore, Storage};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Pennywise version that created the export
    pub app_version: String,

    pub currency: Currency,

    pub transactions: Vec<Transaction>,

    pub budgets: Budgets,

    pub metadata: ExportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub budget_count: usize,

    /// Earliest transaction date, ignoring malformed dates
    pub earliest_transaction: Option<String>,

    pub latest_transaction: Option<String>,
}

impl LedgerExport {
    pub fn from_storage<S: KeyValueStore>(storage: &Storage<S>, settings: &Settings) -> Self {
        let transactions = storage.transactions.all().to_vec();
        let budgets = storage.budgets.budgets().clone();

        let dates = || transactions.iter().filter_map(|t| t.date);
        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            budget_count: budgets.len(),
            earliest_transaction: dates().min().map(|d| d.to_string()),
            latest_transaction: dates().max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            currency: settings.currency,
            transactions,
            budgets,
            metadata,
        }
    }
}

/// Export the full ledger to pretty-printed JSON
pub fn export_ledger_json<W: Write>(export: &LedgerExport, mut writer: W) -> PennywiseResult<()> {
    serde_json::to_writer_pretty(&mut writer, export)
        .map_err(|e| PennywiseError::Export(e.to_string()))?;
    writer
        .flush()
        .map_err(|e| PennywiseError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    fn populated() -> Storage<MemoryStore> {
        let mut storage = Storage::new(MemoryStore::new()).unwrap();
        for (day, cents) in [(3, -500), (1, 2500), (9, -150)] {
            storage.transactions.push(Transaction::new(
                "Item",
                Money::from_cents(cents),
                "Food",
                NaiveDate::from_ymd_opt(2025, 7, day).unwrap(),
            ));
        }
        storage.budgets.budgets_mut().set("Food", Money::from_cents(4000));
        storage
    }

    #[test]
    fn test_metadata() {
        let export = LedgerExport::from_storage(&populated(), &Settings::default());

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.transaction_count, 3);
        assert_eq!(export.metadata.budget_count, 1);
        assert_eq!(export.metadata.earliest_transaction.as_deref(), Some("2025-07-01"));
        assert_eq!(export.metadata.latest_transaction.as_deref(), Some("2025-07-09"));
    }

    #[test]
    fn test_json_output_parses_back() {
        let export = LedgerExport::from_storage(&populated(), &Settings::default());
        let mut buffer = Vec::new();
        export_ledger_json(&export, &mut buffer).unwrap();

        let parsed: LedgerExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.transactions, export.transactions);
        assert_eq!(parsed.budgets.get("food"), Some(Money::from_cents(4000)));
        assert_eq!(parsed.currency, Currency::Usd);
    }
}
