//! Transaction categories
//!
//! Categories are stored on transactions as plain names so that free-form
//! expense categories survive alongside the built-in set. The built-in set
//! carries display metadata (icon and accent colour).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name forced onto every income transaction
pub const INCOME_CATEGORY: &str = "Income";

/// Icon shown for categories outside the built-in set
pub const FALLBACK_ICON: &str = "📄";

/// The fixed category set offered when adding a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltinCategory {
    Food,
    Income,
    Entertainment,
    Shopping,
    Transport,
}

/// Display metadata for one built-in category
#[derive(Debug, Clone, Copy)]
pub struct CategoryInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    /// ANSI 256-colour index used for the category badge
    pub color: u8,
}

static CATEGORY_TABLE: [(BuiltinCategory, CategoryInfo); 5] = [
    (
        BuiltinCategory::Food,
        CategoryInfo { id: "food", name: "Food", icon: "🍴", color: 208 },
    ),
    (
        BuiltinCategory::Income,
        CategoryInfo { id: "income", name: "Income", icon: "💵", color: 34 },
    ),
    (
        BuiltinCategory::Entertainment,
        CategoryInfo { id: "entertainment", name: "Entertainment", icon: "🎬", color: 135 },
    ),
    (
        BuiltinCategory::Shopping,
        CategoryInfo { id: "shopping", name: "Shopping", icon: "🛍", color: 168 },
    ),
    (
        BuiltinCategory::Transport,
        CategoryInfo { id: "transport", name: "Transport", icon: "🚗", color: 33 },
    ),
];

impl BuiltinCategory {
    /// All built-in categories in display order
    pub fn all() -> impl Iterator<Item = BuiltinCategory> {
        CATEGORY_TABLE.iter().map(|(category, _)| *category)
    }

    /// Built-in categories an expense can be filed under
    pub fn expense_categories() -> impl Iterator<Item = BuiltinCategory> {
        Self::all().filter(|c| *c != BuiltinCategory::Income)
    }

    pub fn info(&self) -> &'static CategoryInfo {
        CATEGORY_TABLE
            .iter()
            .find(|(category, _)| category == self)
            .map(|(_, info)| info)
            .unwrap_or(&CATEGORY_TABLE[0].1)
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    pub fn icon(&self) -> &'static str {
        self.info().icon
    }

    /// Case-insensitive lookup by id or display name
    pub fn lookup(name: &str) -> Option<BuiltinCategory> {
        let name = name.trim();
        CATEGORY_TABLE
            .iter()
            .find(|(_, info)| info.id.eq_ignore_ascii_case(name) || info.name.eq_ignore_ascii_case(name))
            .map(|(category, _)| *category)
    }
}

impl fmt::Display for BuiltinCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Icon for any category name, falling back for free-form categories
pub fn category_icon(name: &str) -> &'static str {
    BuiltinCategory::lookup(name)
        .map(|c| c.icon())
        .unwrap_or(FALLBACK_ICON)
}

/// Capitalize the first letter of a category name, leaving the rest as typed
pub fn normalize_category_name(name: &str) -> String {
    let name = name.trim();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Case-insensitive category comparison
pub fn same_category(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
