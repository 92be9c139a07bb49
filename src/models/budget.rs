//! Per-category budget ceilings and budget status

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::{normalize_category_name, same_category};
use super::money::Money;

/// Mapping from category name to monthly spending ceiling
///
/// Keys are stored normalized and compared case-insensitively, so "food" and
/// "Food" address the same budget. A missing key means "no budget set",
/// which is distinct from a budget of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Budgets(BTreeMap<String, Money>);

impl Budgets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the ceiling for a category
    pub fn get(&self, category: &str) -> Option<Money> {
        self.key_for(category).and_then(|key| self.0.get(key).copied())
    }

    /// Set the ceiling for a category, clamped to zero. Returns the stored value.
    ///
    /// An existing budget keeps its original key spelling.
    pub fn set(&mut self, category: &str, amount: Money) -> Money {
        let amount = amount.non_negative();
        let key = self
            .key_for(category)
            .map(str::to_string)
            .unwrap_or_else(|| normalize_category_name(category));
        self.0.insert(key, amount);
        amount
    }

    /// Remove a ceiling, returning the previous value
    pub fn remove(&mut self, category: &str) -> Option<Money> {
        let key = self.key_for(category)?.to_string();
        self.0.remove(&key)
    }

    /// Iterate over (category, ceiling) pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.0.iter().map(|(name, amount)| (name.as_str(), *amount))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn key_for(&self, category: &str) -> Option<&str> {
        self.0
            .keys()
            .find(|key| same_category(key, category))
            .map(String::as_str)
    }
}

/// Configured ceiling, this month's spending, and remaining headroom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BudgetStatus {
    /// `None` when no budget has been set for the category
    pub budget: Option<Money>,
    pub spent: Money,
    /// Negative when the budget is overrun
    pub remaining: Money,
}

impl BudgetStatus {
    pub fn new(budget: Option<Money>, spent: Money) -> Self {
        Self {
            budget,
            spent,
            remaining: budget.unwrap_or_default() - spent,
        }
    }

    pub fn has_budget(&self) -> bool {
        self.budget.is_some()
    }

    pub fn is_over_budget(&self) -> bool {
        self.has_budget() && self.remaining.is_negative()
    }

    /// Progress through the budget, clamped to `[0, 100]`
    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.spent, self.budget)
    }

    /// Unclamped spent/budget ratio as a percentage; `None` without a positive budget
    pub fn usage_percent(&self) -> Option<f64> {
        match self.budget {
            Some(budget) if budget.is_positive() => {
                Some(self.spent.as_f64() / budget.as_f64() * 100.0)
            }
            _ => None,
        }
    }
}

/// Status for one named category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBudget {
    pub category: String,
    pub status: BudgetStatus,
}

/// Percentage of a budget used, always within `[0, 100]`
///
/// Unset and zero budgets report 0. Overruns are signalled through
/// `BudgetStatus::remaining`, never through a progress above 100.
pub fn progress_percent(spent: Money, budget: Option<Money>) -> f64 {
    match budget {
        Some(budget) if budget.is_positive() => {
            let percent = spent.as_f64() / budget.as_f64() * 100.0;
            percent.clamp(0.0, 100.0)
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_is_case_insensitive_and_overwrites() {
        let mut budgets = Budgets::new();
        budgets.set("food", Money::from_cents(10000));
        budgets.set("FOOD", Money::from_cents(5000));

        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets.get("Food"), Some(Money::from_cents(5000)));
        let names: Vec<_> = budgets.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["Food"]);
    }

    #[test]
    fn test_set_clamps_negative() {
        let mut budgets = Budgets::new();
        let stored = budgets.set("Transport", Money::from_cents(-500));
        assert_eq!(stored, Money::zero());
        assert_eq!(budgets.get("transport"), Some(Money::zero()));
    }

    #[test]
    fn test_unset_is_distinct_from_zero() {
        let mut budgets = Budgets::new();
        assert_eq!(budgets.get("Shopping"), None);
        budgets.set("Shopping", Money::zero());
        assert_eq!(budgets.get("Shopping"), Some(Money::zero()));
        assert_eq!(budgets.remove("shopping"), Some(Money::zero()));
        assert_eq!(budgets.get("Shopping"), None);
    }

    #[test]
    fn test_status_remaining() {
        let status = BudgetStatus::new(Some(Money::from_cents(10000)), Money::from_cents(5000));
        assert_eq!(status.remaining, Money::from_cents(5000));
        assert_eq!(status.progress_percent(), 50.0);
        assert!(!status.is_over_budget());

        let over = BudgetStatus::new(Some(Money::from_cents(10000)), Money::from_cents(15000));
        assert_eq!(over.remaining, Money::from_cents(-5000));
        assert!(over.is_over_budget());
        assert_eq!(over.progress_percent(), 100.0);
        assert_eq!(over.usage_percent(), Some(150.0));

        let unset = BudgetStatus::new(None, Money::from_cents(700));
        assert_eq!(unset.remaining, Money::from_cents(-700));
        assert!(!unset.is_over_budget());
        assert_eq!(unset.usage_percent(), None);
    }

    #[test]
    fn test_progress_percent_bounds() {
        let budgets = [None, Some(0), Some(1), Some(999), Some(10000)];
        let spends = [0, 1, 500, 10000, 1_000_000];
        for budget in budgets {
            for spent in spends {
                let p = progress_percent(Money::from_cents(spent), budget.map(Money::from_cents));
                assert!((0.0..=100.0).contains(&p), "{} out of range", p);
            }
        }
        assert_eq!(progress_percent(Money::from_cents(5000), Some(Money::zero())), 0.0);
        assert_eq!(progress_percent(Money::from_cents(5000), None), 0.0);
    }

    #[test]
    fn test_serializes_as_object() {
        let mut budgets = Budgets::new();
        budgets.set("food", Money::from_cents(10000));
        assert_eq!(serde_json::to_string(&budgets).unwrap(), r#"{"Food":10000}"#);
    }
}
