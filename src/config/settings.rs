//! User settings for Pennywise
//!
//! Manages the username and display preferences: theme, currency and the
//! last date filter used. Each setting lives under its own store key as a
//! plain string, so an unreadable value only resets that one setting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{PennywiseError, PennywiseResult};
use crate::models::{Currency, DateFilter};
use crate::storage::{keys, KeyValueStore};

/// Display theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("Unknown theme '{}' (expected light or dark)", other)),
        }
    }
}

/// User settings for Pennywise
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Display name; `None` until first-run setup
    pub username: Option<String>,
    pub theme: Theme,
    pub currency: Currency,
    /// Filter applied when a command does not pass one
    pub date_filter: DateFilter,
}

impl Settings {
    /// Load settings from the store, falling back to defaults per key
    pub fn load(store: &dyn KeyValueStore) -> PennywiseResult<Self> {
        let username = store
            .get(keys::USERNAME)?
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        Ok(Self {
            username,
            theme: load_parsed(store, keys::THEME)?,
            currency: load_parsed(store, keys::CURRENCY)?,
            date_filter: load_parsed(store, keys::DATE_FILTER)?,
        })
    }

    /// Write every setting back to the store
    pub fn save(&self, store: &mut dyn KeyValueStore) -> PennywiseResult<()> {
        match &self.username {
            Some(name) => store.set(keys::USERNAME, name)?,
            None => store.remove(keys::USERNAME)?,
        }
        store.set(keys::THEME, self.theme.as_str())?;
        store.set(keys::CURRENCY, self.currency.code())?;
        store.set(keys::DATE_FILTER, self.date_filter.as_str())?;
        Ok(())
    }

    /// Whether first-run setup has happened
    pub fn has_username(&self) -> bool {
        self.username.is_some()
    }

    /// The username, or a validation error asking for one
    pub fn require_username(&self) -> PennywiseResult<&str> {
        self.username.as_deref().ok_or_else(|| {
            PennywiseError::Validation(
                "No username set; run `pennywise user set <NAME>` first".into(),
            )
        })
    }

    /// Record the username after trimming it
    pub fn set_username(
        &mut self,
        store: &mut dyn KeyValueStore,
        name: &str,
    ) -> PennywiseResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PennywiseError::Validation("Username is required".into()));
        }
        store.set(keys::USERNAME, name)?;
        self.username = Some(name.to_string());
        info!(username = name, "username set");
        Ok(())
    }

    pub fn set_theme(&mut self, store: &mut dyn KeyValueStore, theme: Theme) -> PennywiseResult<()> {
        store.set(keys::THEME, theme.as_str())?;
        self.theme = theme;
        Ok(())
    }

    pub fn set_currency(
        &mut self,
        store: &mut dyn KeyValueStore,
        currency: Currency,
    ) -> PennywiseResult<()> {
        store.set(keys::CURRENCY, currency.code())?;
        self.currency = currency;
        Ok(())
    }

    pub fn set_date_filter(
        &mut self,
        store: &mut dyn KeyValueStore,
        filter: DateFilter,
    ) -> PennywiseResult<()> {
        store.set(keys::DATE_FILTER, filter.as_str())?;
        self.date_filter = filter;
        Ok(())
    }
}

fn load_parsed<T>(store: &dyn KeyValueStore, key: &str) -> PennywiseResult<T>
where
    T: FromStr<Err = String> + Default,
{
    let Some(raw) = store.get(key)? else {
        return Ok(T::default());
    };
    // Tolerate values written as JSON strings
    let value = raw.trim().trim_matches('"');
    Ok(value.parse().unwrap_or_else(|e: String| {
        warn!(key, error = %e, "ignoring unreadable setting");
        T::default()
    }))
}
