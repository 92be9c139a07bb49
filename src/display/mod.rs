//! Display formatting for terminal output
//!
//! Provides utilities for formatting transactions, budgets and summaries for
//! the terminal: currency symbols, category icons, tables, progress bars and
//! (with the dark theme) coloured amounts.

pub mod budget;
pub mod summary;
pub mod transaction;

pub use budget::{format_alert, format_budget_overview, format_budget_status};
pub use summary::format_summary;
pub use transaction::{format_transaction_details, format_transaction_table};

use crate::config::{Settings, Theme};
use crate::models::{Currency, Money};

/// How amounts should be rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub currency: Currency,
    pub theme: Theme,
}

impl DisplayOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            currency: settings.currency,
            theme: settings.theme,
        }
    }

    /// Amount with the currency symbol, e.g. `-₹40.00`
    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(self.currency.symbol())
    }

    /// Amount coloured red/green when the dark theme is active
    pub fn money_colored(&self, amount: Money) -> String {
        let text = self.money(amount);
        if self.theme != Theme::Dark {
            return text;
        }
        if amount.is_negative() {
            format!("\x1b[31m{}\x1b[0m", text)
        } else if amount.is_positive() {
            format!("\x1b[32m{}\x1b[0m", text)
        } else {
            text
        }
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Fixed-width bar for a percentage in `[0, 100]`
pub fn format_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_uses_currency_symbol() {
        let options = DisplayOptions {
            currency: Currency::Gbp,
            theme: Theme::Light,
        };
        assert_eq!(options.money(Money::from_cents(-1999)), "-£19.99");
        assert_eq!(options.money_colored(Money::from_cents(100)), "£1.00");
    }

    #[test]
    fn test_dark_theme_colours_amounts() {
        let options = DisplayOptions {
            currency: Currency::Usd,
            theme: Theme::Dark,
        };
        assert_eq!(
            options.money_colored(Money::from_cents(-100)),
            "\x1b[31m-$1.00\x1b[0m"
        );
        assert_eq!(options.money_colored(Money::zero()), "$0.00");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(50.0), "50%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(50.0, 10).chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(250.0, 4), "████");
        assert_eq!(format_bar(-3.0, 4), "░░░░");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Café au lait", 7), "Café...");
    }
}
