//! Export module for Pennywise
//!
//! Provides data export in multiple formats:
//! - CSV: the transaction list (spreadsheet-compatible)
//! - JSON: machine-readable full ledger export
//! - YAML: human-readable full ledger export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{default_export_filename, export_transactions_csv, CSV_HEADER};
pub use json::{export_ledger_json, ExportMetadata, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_ledger_yaml;
