//! Reports module for Pennywise
//!
//! Pure queries over the ledger: date-range scoping, income and expense
//! totals, search, recency ordering, and the dashboard [`Summary`]. Nothing
//! here touches storage; callers pass the transactions and "today" in.

pub mod summary;

pub use summary::Summary;

use chrono::NaiveDate;

use crate::models::{DateFilter, Money, Transaction};

/// Number of transactions the dashboard lists
pub const RECENT_LIMIT: usize = 5;

/// Transactions inside `filter`, relative to `today`, in input order
///
/// Transactions with a malformed date count as dated today.
pub fn filter_by_date_range(
    transactions: &[Transaction],
    filter: DateFilter,
    today: NaiveDate,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| filter.matches(t.effective_date(today), today))
        .cloned()
        .collect()
}

/// Sum of positive amounts
pub fn total_income<'a, I>(transactions: I) -> Money
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter(|t| t.amount.is_positive())
        .map(|t| t.amount)
        .sum()
}

/// Sum of the magnitudes of negative amounts
pub fn total_expenses<'a, I>(transactions: I) -> Money
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter(|t| t.amount.is_negative())
        .map(|t| t.amount.abs())
        .sum()
}

/// Income minus expenses; always equal to the sum of signed amounts
pub fn net_total(transactions: &[Transaction]) -> Money {
    total_income(transactions) - total_expenses(transactions)
}

/// Case-insensitive match on description or category; a blank query keeps everything
pub fn search(transactions: &[Transaction], query: &str) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.matches_query(query))
        .cloned()
        .collect()
}

/// Newest first; ties keep their relative order
pub fn sort_recent(transactions: &mut [Transaction], today: NaiveDate) {
    transactions.sort_by(|a, b| b.effective_date(today).cmp(&a.effective_date(today)));
}

/// The `n` most recent transactions
pub fn recent(transactions: &[Transaction], n: usize, today: NaiveDate) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    sort_recent(&mut sorted, today);
    sorted.truncate(n);
    sorted
}
