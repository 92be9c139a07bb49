//! Dashboard summary formatting

use crate::reports::Summary;

use super::transaction::format_transaction_table;
use super::DisplayOptions;

/// Format the dashboard: greeting, totals, and the most recent transactions
pub fn format_summary(username: &str, summary: &Summary, options: &DisplayOptions) -> String {
    let mut output = String::new();

    output.push_str(&format!("Hello, {}!\n", username));
    output.push_str(&format!("Showing: {}\n\n", summary.filter.label()));

    output.push_str(&format!(
        "  Income:   {}\n",
        options.money_colored(summary.income)
    ));
    output.push_str(&format!(
        "  Expenses: {}\n",
        options.money_colored(-summary.expenses)
    ));
    output.push_str(&format!(
        "  Balance:  {}\n\n",
        options.money_colored(summary.balance)
    ));

    if summary.is_empty() {
        output.push_str("No transactions in this period.\n");
    } else {
        output.push_str(&format!(
            "Recent transactions ({} of {}):\n",
            summary.recent.len(),
            summary.transaction_count
        ));
        output.push_str(&format_transaction_table(&summary.recent, options));
    }

    output
}
