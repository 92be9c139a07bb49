//! Dashboard summary command

use crate::config::Settings;
use crate::display::{format_summary, DisplayOptions};
use crate::error::PennywiseResult;
use crate::models::DateFilter;
use crate::reports::Summary;
use crate::services::today;
use crate::storage::{KeyValueStore, Storage};

/// Print income, expenses, balance and recent transactions
///
/// A filter given on the command line becomes the new default.
pub fn handle_summary_command<S: KeyValueStore>(
    storage: &mut Storage<S>,
    settings: &mut Settings,
    filter: Option<DateFilter>,
) -> PennywiseResult<Summary> {
    let username = settings.require_username()?.to_string();
    if let Some(filter) = filter {
        settings.set_date_filter(storage.store_mut(), filter)?;
    }

    let summary = Summary::compute(storage.transactions.all(), settings.date_filter, today());
    let options = DisplayOptions::from_settings(settings);

    print!("{}", format_summary(&username, &summary, &options));
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use crate::services::{TransactionInput, TransactionService};
    use crate::storage::MemoryStore;

    #[test]
    fn test_summary_uses_saved_filter() {
        let mut storage = Storage::new(MemoryStore::new()).unwrap();
        let mut settings = Settings::default();
        settings.set_username(storage.store_mut(), "Lee").unwrap();
        TransactionService::new(&mut storage)
            .add(TransactionInput::new("40", "Food", TransactionKind::Expense))
            .unwrap();

        let summary =
            handle_summary_command(&mut storage, &mut settings, Some(DateFilter::Today)).unwrap();
        assert_eq!(summary.filter, DateFilter::Today);
        assert_eq!(summary.expenses, Money::from_cents(4000));

        let again = handle_summary_command(&mut storage, &mut settings, None).unwrap();
        assert_eq!(again.filter, DateFilter::Today);
    }

    #[test]
    fn test_summary_requires_username() {
        let mut storage = Storage::new(MemoryStore::new()).unwrap();
        let mut settings = Settings::default();
        assert!(handle_summary_command(&mut storage, &mut settings, None)
            .unwrap_err()
            .is_validation());
    }
}
