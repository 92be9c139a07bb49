//! Preference CLI commands: theme, currency and default date filter

use clap::{Subcommand, ValueEnum};

use crate::config::{Settings, Theme};
use crate::error::{PennywiseError, PennywiseResult};
use crate::models::{Currency, DateFilter};
use crate::storage::{KeyValueStore, Storage};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeChoice {
    Light,
    Dark,
    /// Switch to the other theme
    Toggle,
}

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current preferences
    Show,
    /// Change the display theme
    Theme {
        #[arg(value_enum)]
        choice: ThemeChoice,
    },
    /// Change the display currency (USD, EUR, GBP or INR)
    Currency {
        code: String,
    },
    /// Change the default date filter
    Filter {
        filter: DateFilter,
    },
}

/// Handle a settings command
pub fn handle_settings_command<S: KeyValueStore>(
    storage: &mut Storage<S>,
    settings: &mut Settings,
    cmd: SettingsCommands,
) -> PennywiseResult<()> {
    match cmd {
        SettingsCommands::Show => {
            println!("Settings:");
            println!(
                "  Username: {}",
                settings.username.as_deref().unwrap_or("(not set)")
            );
            println!("  Theme:    {}", settings.theme);
            println!(
                "  Currency: {} ({}, {})",
                settings.currency.code(),
                settings.currency.symbol(),
                settings.currency.name()
            );
            println!("  Filter:   {}", settings.date_filter.label());
        }

        SettingsCommands::Theme { choice } => {
            let theme = match choice {
                ThemeChoice::Light => Theme::Light,
                ThemeChoice::Dark => Theme::Dark,
                ThemeChoice::Toggle => settings.theme.toggled(),
            };
            settings.set_theme(storage.store_mut(), theme)?;
            println!("Theme set to {}", theme);
        }

        SettingsCommands::Currency { code } => {
            let currency: Currency = code.parse().map_err(PennywiseError::Validation)?;
            settings.set_currency(storage.store_mut(), currency)?;
            println!("Currency set to {} ({})", currency.code(), currency.symbol());
        }

        SettingsCommands::Filter { filter } => {
            settings.set_date_filter(storage.store_mut(), filter)?;
            println!("Default filter set to {}", filter.label());
        }
    }

    Ok(())
}
