//! Date-range filters for transaction queries

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of days the weekly filter reaches back from today
pub const WEEKLY_WINDOW_DAYS: i64 = 7;

/// Which transactions a view covers, relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFilter {
    /// Every transaction
    #[default]
    All,
    /// Transactions dated today
    Today,
    /// Transactions in `[today - 7 days, today]`
    Weekly,
    /// Transactions in the current calendar month (not a rolling 30 days)
    Monthly,
}

impl DateFilter {
    pub const ALL_FILTERS: [DateFilter; 4] = [
        DateFilter::All,
        DateFilter::Today,
        DateFilter::Weekly,
        DateFilter::Monthly,
    ];

    /// Whether a transaction dated `date` falls inside this filter
    pub fn matches(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Today => date == today,
            Self::Weekly => {
                let start = today - Duration::days(WEEKLY_WINDOW_DAYS);
                date >= start && date <= today
            }
            Self::Monthly => date.year() == today.year() && date.month() == today.month(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Heading used in summaries
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All time",
            Self::Today => "Today",
            Self::Weekly => "Last 7 days",
            Self::Monthly => "This month",
        }
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DateFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "today" | "day" => Ok(Self::Today),
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            other => Err(format!(
                "Invalid date filter: '{}'. Use all, today, weekly, or monthly",
                other
            )),
        }
    }
}
