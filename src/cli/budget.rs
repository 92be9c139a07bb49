//! Budget CLI commands
//!
//! Implements CLI commands for per-category monthly budgets.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_budget_overview, format_budget_status, DisplayOptions};
use crate::error::{PennywiseError, PennywiseResult};
use crate::models::normalize_category_name;
use crate::services::{today, BudgetService};
use crate::storage::{KeyValueStore, Storage};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set a monthly budget for a category (non-numeric amounts count as zero)
    Set {
        /// Category name
        category: String,
        /// Monthly ceiling (e.g., "250" or "99.90")
        amount: String,
    },
    /// Remove a category's budget
    Clear {
        /// Category name
        category: String,
    },
    /// Show this month's status for one category
    Show {
        /// Category name
        category: String,
    },
    /// Show this month's status for every category
    #[command(alias = "ls")]
    List,
}

/// Handle a budget command
pub fn handle_budget_command<S: KeyValueStore>(
    storage: &mut Storage<S>,
    settings: &Settings,
    cmd: BudgetCommands,
) -> PennywiseResult<()> {
    let options = DisplayOptions::from_settings(settings);
    let mut service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::Set { category, amount } => {
            let category = require_category(&category)?;
            let stored = service.set_budget_input(&category, &amount)?;
            println!("Budget for {} set to {}", category, options.money(stored));
            print!(
                "{}",
                format_budget_status(&category, &service.status(&category, today()), &options)
            );
        }

        BudgetCommands::Clear { category } => {
            let category = require_category(&category)?;
            if service.clear_budget(&category)? {
                println!("Cleared budget for {}", category);
            } else {
                return Err(PennywiseError::budget_not_found(category));
            }
        }

        BudgetCommands::Show { category } => {
            let category = require_category(&category)?;
            let status = service.status(&category, today());
            print!("{}", format_budget_status(&category, &status, &options));
        }

        BudgetCommands::List => {
            let overview = service.overview(today());
            println!("Budgets for {}", today().format("%B %Y"));
            print!("{}", format_budget_overview(&overview, &options));
        }
    }

    Ok(())
}

fn require_category(raw: &str) -> PennywiseResult<String> {
    let category = normalize_category_name(raw);
    if category.is_empty() {
        return Err(PennywiseError::Validation("Category is required".into()));
    }
    Ok(category)
}
