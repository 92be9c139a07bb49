//! YAML Export functionality
//!
//! Same structure as the JSON export, in a human-readable format.

use std::io::Write;

use crate::error::{PennywiseError, PennywiseResult};

use super::json::LedgerExport;

/// Export the full ledger to YAML
pub fn export_ledger_yaml<W: Write>(export: &LedgerExport, mut writer: W) -> PennywiseResult<()> {
    serde_yaml::to_writer(&mut writer, export)
        .map_err(|e| PennywiseError::Export(e.to_string()))?;
    writer
        .flush()
        .map_err(|e| PennywiseError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{Money, Transaction};
    use crate::storage::{MemoryStore, Storage};
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export() {
        let mut storage = Storage::new(MemoryStore::new()).unwrap();
        storage.transactions.push(Transaction::new(
            "Bus pass",
            Money::from_cents(-4500),
            "Transport",
            NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
        ));
        let export = LedgerExport::from_storage(&storage, &Settings::default());

        let mut buffer = Vec::new();
        export_ledger_yaml(&export, &mut buffer).unwrap();
        let yaml = String::from_utf8(buffer).unwrap();

        assert!(yaml.contains("schema_version:"));
        assert!(yaml.contains("description: Bus pass"));
        assert!(yaml.contains("amount: -4500"));
        assert!(yaml.contains("currency: USD"));

        let parsed: LedgerExport = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.transactions, export.transactions);
    }
}
