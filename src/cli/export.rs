//! CLI command for data export

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::Settings;
use crate::error::{PennywiseError, PennywiseResult};
use crate::export::{
    default_export_filename, export_ledger_json, export_ledger_yaml, export_transactions_csv,
    LedgerExport,
};
use crate::services::today;
use crate::storage::{KeyValueStore, Storage};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (transactions only)
    #[default]
    Csv,
    /// JSON format (full ledger)
    Json,
    /// YAML format (full ledger, human-readable)
    Yaml,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Default output path for a format, e.g. `transactions_2025-01-05.json`
pub fn default_output_path(format: ExportFormat) -> PathBuf {
    let csv_name = default_export_filename(today());
    PathBuf::from(csv_name).with_extension(format.extension())
}

/// Export the ledger to `output` (or the default file name)
pub fn handle_export_command<S: KeyValueStore>(
    storage: &Storage<S>,
    settings: &Settings,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> PennywiseResult<PathBuf> {
    let path = output.unwrap_or_else(|| default_output_path(format));
    let file = File::create(&path).map_err(|e| {
        PennywiseError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;
    let writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => {
            export_transactions_csv(storage.transactions.all(), settings.currency, writer)?
        }
        ExportFormat::Json => {
            export_ledger_json(&LedgerExport::from_storage(storage, settings), writer)?
        }
        ExportFormat::Yaml => {
            export_ledger_yaml(&LedgerExport::from_storage(storage, settings), writer)?
        }
    }

    println!(
        "Exported {} transactions to {}",
        storage.transactions.len(),
        path.display()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use tempfile::TempDir;

    #[test]
    fn test_default_output_path() {
        let path = default_output_path(ExportFormat::Yaml);
        let name = path.to_string_lossy();
        assert!(name.starts_with("transactions_"));
        assert!(name.ends_with(".yaml"));
    }

    #[test]
    fn test_export_empty_ledger_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("out.csv");
        let storage = Storage::new(MemoryStore::new()).unwrap();

        let written = handle_export_command(
            &storage,
            &Settings::default(),
            ExportFormat::Csv,
            Some(target.clone()),
        )
        .unwrap();

        assert_eq!(written, target);
        let contents = std::fs::read_to_string(&target).unwrap();
        assert_eq!(contents, "ID,Description,Amount,Date,Category\n");
    }
}
