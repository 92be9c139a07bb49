//! CSV Export functionality
//!
//! Writes the full, unfiltered ledger as one row per transaction.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{PennywiseError, PennywiseResult};
use crate::models::{Currency, Transaction, TransactionKind};

/// Header row of the transaction export
pub const CSV_HEADER: [&str; 5] = ["ID", "Description", "Amount", "Date", "Category"];

/// Export all transactions to CSV
///
/// Amounts are written as `<symbol><magnitude> (Expense)` or `(Income)`.
/// Fields containing commas or quotes are quoted by the writer.
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    currency: Currency,
    writer: W,
) -> PennywiseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;

    for txn in transactions {
        let date = txn.date.map(|d| d.to_string()).unwrap_or_default();
        csv_writer.write_record([
            txn.id.full().as_str(),
            txn.description.as_str(),
            amount_cell(txn, currency).as_str(),
            date.as_str(),
            txn.category.as_str(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| PennywiseError::Export(e.to_string()))?;
    Ok(())
}

fn amount_cell(txn: &Transaction, currency: Currency) -> String {
    let label = match txn.kind() {
        TransactionKind::Expense => "Expense",
        TransactionKind::Income => "Income",
    };
    format!(
        "{} ({})",
        txn.amount.abs().format_with_symbol(currency.symbol()),
        label
    )
}

/// `transactions_YYYY-MM-DD.csv` for the given day
pub fn default_export_filename(date: NaiveDate) -> String {
    format!("transactions_{}.csv", date.format("%Y-%m-%d"))
}
