//! Budget threshold alerts
//!
//! A category raises a `Warning` once its monthly spending reaches 80% of the
//! budget and `Exceeded` once it reaches 100%. Each (category, level) pair is
//! raised at most once per tracker.

use std::collections::HashSet;
use std::fmt;

use crate::models::CategoryBudget;

/// Usage percentage that triggers a warning
pub const WARNING_THRESHOLD: f64 = 80.0;

/// Usage percentage that marks a budget as exceeded
pub const EXCEEDED_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AlertLevel {
    Warning,
    Exceeded,
}

impl AlertLevel {
    /// Highest level reached at `usage` percent, if any
    pub fn for_usage(usage: f64) -> Option<Self> {
        if usage >= EXCEEDED_THRESHOLD {
            Some(Self::Exceeded)
        } else if usage >= WARNING_THRESHOLD {
            Some(Self::Warning)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BudgetAlert {
    pub category: String,
    pub level: AlertLevel,
    /// Unclamped spent/budget percentage at the time of the alert
    pub usage_percent: f64,
}

impl fmt::Display for BudgetAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            AlertLevel::Warning => write!(
                f,
                "You've used {:.0}% of your {} budget",
                self.usage_percent, self.category
            ),
            AlertLevel::Exceeded => write!(f, "You've exceeded your {} budget", self.category),
        }
    }
}

/// Remembers which alerts have already been raised
#[derive(Debug, Clone, Default)]
pub struct BudgetAlertTracker {
    raised: HashSet<(String, AlertLevel)>,
}

impl BudgetAlertTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark every threshold already crossed as raised, without reporting it
    pub fn prime(&mut self, statuses: &[CategoryBudget]) {
        let _ = self.check(statuses);
    }

    /// Alerts for thresholds crossed since the last check
    ///
    /// Categories without a positive budget never alert. Reaching `Exceeded`
    /// also marks `Warning` so a stale warning does not follow it.
    pub fn check(&mut self, statuses: &[CategoryBudget]) -> Vec<BudgetAlert> {
        let mut alerts = Vec::new();

        for entry in statuses {
            let Some(usage) = entry.status.usage_percent() else {
                continue;
            };
            let Some(level) = AlertLevel::for_usage(usage) else {
                continue;
            };

            let key = entry.category.to_lowercase();
            if level == AlertLevel::Exceeded {
                self.raised.insert((key.clone(), AlertLevel::Warning));
            }
            if self.raised.insert((key, level)) {
                alerts.push(BudgetAlert {
                    category: entry.category.clone(),
                    level,
                    usage_percent: usage,
                });
            }
        }

        alerts
    }

    pub fn has_raised(&self, category: &str, level: AlertLevel) -> bool {
        self.raised.contains(&(category.to_lowercase(), level))
    }
}
