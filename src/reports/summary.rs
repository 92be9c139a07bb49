//! Dashboard summary
//!
//! Income, expenses and balance for one date filter, plus the most recent
//! transactions in that scope.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{DateFilter, Money, Transaction};

use super::{filter_by_date_range, recent, total_expenses, total_income, RECENT_LIMIT};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub filter: DateFilter,
    pub income: Money,
    pub expenses: Money,
    /// `income - expenses`
    pub balance: Money,
    pub transaction_count: usize,
    pub recent: Vec<Transaction>,
}

impl Summary {
    pub fn compute(transactions: &[Transaction], filter: DateFilter, today: NaiveDate) -> Self {
        let scope = filter_by_date_range(transactions, filter, today);
        let income = total_income(&scope);
        let expenses = total_expenses(&scope);

        Self {
            filter,
            income,
            expenses,
            balance: income - expenses,
            transaction_count: scope.len(),
            recent: recent(&scope, RECENT_LIMIT, today),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.transaction_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_food_and_income_example() {
        let today = date(2025, 6, 10);
        let ledger = vec![
            Transaction::new("Paycheck", Money::from_cents(10000), "Income", today),
            Transaction::new("Lunch", Money::from_cents(-5000), "Food", today),
        ];

        let summary = Summary::compute(&ledger, DateFilter::All, today);
        assert_eq!(summary.income, Money::from_cents(10000));
        assert_eq!(summary.expenses, Money::from_cents(5000));
        assert_eq!(summary.balance, Money::from_cents(5000));
        assert_eq!(summary.transaction_count, 2);
    }

    #[test]
    fn test_recent_is_capped() {
        let today = date(2025, 6, 10);
        let ledger: Vec<_> = (1..=8)
            .map(|day| {
                Transaction::new("Coffee", Money::from_cents(-300), "Food", date(2025, 6, day))
            })
            .collect();

        let summary = Summary::compute(&ledger, DateFilter::Monthly, today);
        assert_eq!(summary.recent.len(), RECENT_LIMIT);
        assert_eq!(summary.recent[0].date, Some(date(2025, 6, 8)));
    }

    #[test]
    fn test_empty_scope() {
        let summary = Summary::compute(&[], DateFilter::Today, date(2025, 6, 10));
        assert!(summary.is_empty());
        assert_eq!(summary.balance, Money::zero());
    }
}
