//! Budget service
//!
//! Per-category monthly ceilings and the spending measured against them.
//! Spending always covers the current calendar month, whatever filter the
//! caller is displaying.

use chrono::{Datelike, NaiveDate};
use tracing::info;

use crate::error::PennywiseResult;
use crate::models::category::same_category;
use crate::models::{BudgetStatus, BuiltinCategory, CategoryBudget, Money, Transaction};
use crate::storage::{KeyValueStore, Storage};

/// Service for budget management
pub struct BudgetService<'a, S: KeyValueStore> {
    storage: &'a mut Storage<S>,
}

impl<'a, S: KeyValueStore> BudgetService<'a, S> {
    pub fn new(storage: &'a mut Storage<S>) -> Self {
        Self { storage }
    }

    /// Set a category's ceiling, clamping negatives to zero
    ///
    /// Overwrites any previous budget for the category.
    pub fn set_budget(&mut self, category: &str, amount: Money) -> PennywiseResult<Money> {
        let previous = self.storage.budgets.budgets().clone();
        let stored = self.storage.budgets.budgets_mut().set(category, amount);

        if let Err(e) = self.storage.save_budgets() {
            self.storage.budgets.replace(previous);
            return Err(e);
        }

        info!(category, cents = stored.cents(), "budget set");
        Ok(stored)
    }

    /// Set a ceiling from user text; anything unparseable counts as zero
    pub fn set_budget_input(&mut self, category: &str, raw: &str) -> PennywiseResult<Money> {
        let amount = Money::parse(raw).unwrap_or_default();
        self.set_budget(category, amount)
    }

    /// Remove a category's ceiling. Returns whether one existed.
    pub fn clear_budget(&mut self, category: &str) -> PennywiseResult<bool> {
        let previous = self.storage.budgets.budgets().clone();
        if self.storage.budgets.budgets_mut().remove(category).is_none() {
            return Ok(false);
        }

        if let Err(e) = self.storage.save_budgets() {
            self.storage.budgets.replace(previous);
            return Err(e);
        }

        info!(category, "budget cleared");
        Ok(true)
    }

    pub fn budget_for(&self, category: &str) -> Option<Money> {
        self.storage.budgets.budgets().get(category)
    }

    /// Ceiling, this month's spending and remaining headroom for one category
    pub fn status(&self, category: &str, today: NaiveDate) -> BudgetStatus {
        let spent = monthly_spending(self.storage.transactions.all(), category, today);
        BudgetStatus::new(self.budget_for(category), spent)
    }

    /// Status for every budgeted category and every built-in expense category
    pub fn overview(&self, today: NaiveDate) -> Vec<CategoryBudget> {
        let mut names: Vec<String> = self
            .storage
            .budgets
            .budgets()
            .iter()
            .map(|(name, _)| name.to_string())
            .collect();

        for builtin in BuiltinCategory::expense_categories() {
            if !names.iter().any(|n| same_category(n, builtin.name())) {
                names.push(builtin.name().to_string());
            }
        }
        names.sort_by_key(|n| n.to_lowercase());

        names
            .into_iter()
            .map(|category| {
                let status = self.status(&category, today);
                CategoryBudget { category, status }
            })
            .collect()
    }
}

/// Expenses in `category` during the calendar month containing `today`
pub fn monthly_spending(transactions: &[Transaction], category: &str, today: NaiveDate) -> Money {
    transactions
        .iter()
        .filter(|t| t.is_expense() && same_category(&t.category, category))
        .filter(|t| {
            let date = t.effective_date(today);
            date.year() == today.year() && date.month() == today.month()
        })
        .map(|t| t.amount.abs())
        .sum()
}
