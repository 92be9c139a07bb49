//! Transaction model
//!
//! A transaction is a single income or expense event. Amounts are stored
//! pre-signed: negative for expenses, positive for income.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::INCOME_CATEGORY;
use super::ids::TransactionId;
use super::money::Money;

/// Whether a new or edited transaction is money in or money out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
}

impl TransactionKind {
    /// Apply this kind's sign to a positive magnitude
    pub fn sign(&self, magnitude: Money) -> Money {
        match self {
            Self::Income => magnitude.abs(),
            Self::Expense => -magnitude.abs(),
        }
    }

    /// Label used in exports and listings
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!(
                "Invalid transaction kind: '{}'. Use income or expense",
                other
            )),
        }
    }
}

/// A recorded income or expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Free text; defaults to the category name
    #[serde(default)]
    pub description: String,

    /// Signed amount (negative for expenses)
    pub amount: Money,

    /// Day the transaction was recorded. `None` when the stored value could
    /// not be parsed; date queries treat it as today.
    #[serde(default, with = "lenient_date")]
    pub date: Option<NaiveDate>,

    /// Normalized category name
    #[serde(default)]
    pub category: String,
}

impl Transaction {
    /// Create a transaction with a fresh id
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            description: description.into(),
            amount,
            date: Some(date),
            category: category.into(),
        }
    }

    /// Income or expense, derived from the sign
    pub fn kind(&self) -> TransactionKind {
        if self.amount.is_negative() {
            TransactionKind::Expense
        } else {
            TransactionKind::Income
        }
    }

    pub fn is_income(&self) -> bool {
        self.amount.is_positive()
    }

    pub fn is_expense(&self) -> bool {
        self.amount.is_negative()
    }

    /// Whether the category is the reserved income category
    pub fn has_income_category(&self) -> bool {
        self.category.eq_ignore_ascii_case(INCOME_CATEGORY)
    }

    /// The transaction date, with malformed dates falling back to `today`
    pub fn effective_date(&self, today: NaiveDate) -> NaiveDate {
        self.date.unwrap_or(today)
    }

    /// Case-insensitive substring match on description or category
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.description.to_lowercase().contains(&query)
            || self.category.to_lowercase().contains(&query)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "????-??-??".to_string());
        write!(f, "{} {} {}", date, self.description, self.amount)
    }
}

/// Serde adapter that never fails on a bad date.
///
/// Accepts `YYYY-MM-DD` and RFC 3339 timestamps; anything else (including
/// numbers or `null`) loads as `None`.
mod lenient_date {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(d) => serializer.serialize_str(&d.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(value.and_then(|v| v.as_str().and_then(parse_date)))
    }

    pub(super) fn parse_date(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
    }
}
