//! User profile CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::PennywiseResult;
use crate::storage::{KeyValueStore, Storage};

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Set the name shown on the dashboard
    Set {
        /// Your name
        name: String,
    },
    /// Show the current username
    Show,
    /// Delete every stored transaction, budget and preference
    Reset {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a user command
pub fn handle_user_command<S: KeyValueStore>(
    storage: &mut Storage<S>,
    settings: &mut Settings,
    cmd: UserCommands,
) -> PennywiseResult<()> {
    match cmd {
        UserCommands::Set { name } => {
            settings.set_username(storage.store_mut(), &name)?;
            println!("Welcome, {}!", settings.require_username()?);
        }

        UserCommands::Show => match &settings.username {
            Some(name) => println!("{}", name),
            None => println!("No username set. Run 'pennywise user set <NAME>' to get started."),
        },

        UserCommands::Reset { force } => {
            if !force {
                println!("About to delete all data:");
                println!("  Transactions: {}", storage.transactions.len());
                println!("  Budgets:      {}", storage.budgets.budgets().len());
                println!("  Username and preferences");
                println!();
                println!("Use --force to confirm reset");
                return Ok(());
            }

            storage.reset()?;
            *settings = Settings::default();
            println!("All data has been cleared.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction};
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    #[test]
    fn test_set_username() {
        let mut storage = Storage::new(MemoryStore::new()).unwrap();
        let mut settings = Settings::default();

        handle_user_command(
            &mut storage,
            &mut settings,
            UserCommands::Set {
                name: " Ada ".into(),
            },
        )
        .unwrap();
        assert_eq!(Settings::load(storage.store()).unwrap().username.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_reset_requires_force() {
        let mut storage = Storage::new(MemoryStore::new()).unwrap();
        let mut settings = Settings::default();
        settings.set_username(storage.store_mut(), "Ada").unwrap();
        storage.transactions.push(Transaction::new(
            "Snack",
            Money::from_cents(-300),
            "Food",
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        ));
        storage.save_transactions().unwrap();

        handle_user_command(&mut storage, &mut settings, UserCommands::Reset { force: false })
            .unwrap();
        assert_eq!(storage.transactions.len(), 1);

        handle_user_command(&mut storage, &mut settings, UserCommands::Reset { force: true })
            .unwrap();
        assert!(storage.transactions.is_empty());
        assert!(storage.store().is_empty());
        assert_eq!(settings, Settings::default());
    }
}
