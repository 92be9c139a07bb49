//! Budget display formatting

use tabled::{settings::Style, Table, Tabled};

use crate::models::{category_icon, BudgetStatus, CategoryBudget};
use crate::services::{AlertLevel, BudgetAlert};

use super::{format_bar, format_percentage, DisplayOptions};

const BAR_WIDTH: usize = 20;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budget")]
    budget: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Progress")]
    progress: String,
}

fn budget_cell(status: &BudgetStatus, options: &DisplayOptions) -> String {
    match status.budget {
        Some(budget) => options.money(budget),
        None => "(not set)".to_string(),
    }
}

fn progress_cell(status: &BudgetStatus) -> String {
    let percent = status.progress_percent();
    format!("{} {:>4}", format_bar(percent, BAR_WIDTH), format_percentage(percent))
}

/// Format this month's budget overview as a table
pub fn format_budget_overview(entries: &[CategoryBudget], options: &DisplayOptions) -> String {
    if entries.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let rows = entries.iter().map(|entry| BudgetRow {
        category: format!("{} {}", category_icon(&entry.category), entry.category),
        budget: budget_cell(&entry.status, options),
        spent: options.money(entry.status.spent),
        remaining: if entry.status.has_budget() {
            options.money(entry.status.remaining)
        } else {
            "-".to_string()
        },
        progress: if entry.status.has_budget() {
            progress_cell(&entry.status)
        } else {
            String::new()
        },
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

/// Format one category's budget status
pub fn format_budget_status(category: &str, status: &BudgetStatus, options: &DisplayOptions) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} {}\n", category_icon(category), category));
    output.push_str(&format!("  Budget:    {}\n", budget_cell(status, options)));
    output.push_str(&format!("  Spent:     {}\n", options.money(status.spent)));

    if status.has_budget() {
        output.push_str(&format!(
            "  Remaining: {}\n",
            options.money_colored(status.remaining)
        ));
        output.push_str(&format!("  Progress:  {}\n", progress_cell(status)));
        if status.is_over_budget() {
            output.push_str("  Over budget!\n");
        }
    }

    output
}

/// One line for a threshold alert
pub fn format_alert(alert: &BudgetAlert) -> String {
    let marker = match alert.level {
        AlertLevel::Warning => "⚠",
        AlertLevel::Exceeded => "🚨",
    };
    format!("{} {} {}", marker, category_icon(&alert.category), alert)
}
