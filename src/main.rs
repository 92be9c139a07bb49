use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use pennywise::cli::{
    handle_budget_command, handle_export_command, handle_settings_command,
    handle_summary_command, handle_transaction_command, handle_user_command, BudgetCommands,
    ExportFormat, SettingsCommands, TransactionCommands, UserCommands,
};
use pennywise::config::{paths::PennywisePaths, settings::Settings};
use pennywise::models::DateFilter;
use pennywise::storage::Storage;

#[derive(Parser)]
#[command(
    name = "pennywise",
    version,
    about = "Terminal-based personal income and expense tracker",
    long_about = "Pennywise records income and expenses, summarizes them by day, \
                  week or month, tracks per-category monthly budgets and exports \
                  your ledger to CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Username and data reset
    #[command(subcommand)]
    User(UserCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show income, expenses and balance
    Summary {
        /// Date range: all, today, weekly or monthly (defaults to the last one used)
        #[arg(short, long)]
        filter: Option<DateFilter>,
    },

    /// Export the ledger
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
        /// Output file path (defaults to transactions_<today>.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Theme, currency and default filter
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    pennywise::logging::init();
    let cli = Cli::parse();

    let paths = PennywisePaths::new()?;
    let mut storage = Storage::open(&paths)
        .with_context(|| format!("Failed to open {}", paths.store_file().display()))?;
    let mut settings = Settings::load(storage.store())?;

    match cli.command {
        Some(Commands::User(cmd)) => {
            handle_user_command(&mut storage, &mut settings, cmd)?;
        }
        Some(Commands::Transaction(cmd)) => {
            settings.require_username()?;
            handle_transaction_command(&mut storage, &mut settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            settings.require_username()?;
            handle_budget_command(&mut storage, &settings, cmd)?;
        }
        Some(Commands::Summary { filter }) => {
            handle_summary_command(&mut storage, &mut settings, filter)?;
        }
        Some(Commands::Export { format, output }) => {
            settings.require_username()?;
            handle_export_command(&storage, &settings, format, output)?;
        }
        Some(Commands::Settings(cmd)) => {
            handle_settings_command(&mut storage, &mut settings, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Pennywise Configuration");
            println!("=======================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Store file:     {}", paths.store_file().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!(
                "  Username: {}",
                settings.username.as_deref().unwrap_or("(not set)")
            );
            println!("  Theme:    {}", settings.theme);
            println!("  Currency: {}", settings.currency);
            println!("  Filter:   {}", settings.date_filter);
        }
        None if settings.has_username() => {
            handle_summary_command(&mut storage, &mut settings, None)?;
        }
        None => {
            println!("Pennywise - Terminal-based income and expense tracking");
            println!();
            println!("Run 'pennywise user set <NAME>' to get started.");
            println!("Run 'pennywise --help' for usage information.");
        }
    }

    Ok(())
}
