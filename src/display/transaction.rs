//! Transaction display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::models::{category_icon, Transaction};

use super::{truncate, DisplayOptions};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

fn date_cell(txn: &Transaction) -> String {
    txn.date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "(unknown)".to_string())
}

/// Format transactions as a table
pub fn format_transaction_table(transactions: &[Transaction], options: &DisplayOptions) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions.iter().map(|txn| TransactionRow {
        id: txn.id.to_string(),
        date: date_cell(txn),
        description: truncate(&txn.description, 30),
        category: format!("{} {}", category_icon(&txn.category), txn.category),
        amount: options.money(txn.amount),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, options: &DisplayOptions) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id.full()));
    output.push_str(&format!("Date:        {}\n", date_cell(txn)));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!(
        "Category:    {} {}\n",
        category_icon(&txn.category),
        txn.category
    ));
    output.push_str(&format!("Amount:      {}\n", options.money_colored(txn.amount)));
    output.push_str(&format!("Type:        {}\n", txn.kind().label()));

    output
}
