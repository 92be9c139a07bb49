//! Transaction service
//!
//! Validates user input, signs amounts, and applies add/update/delete/undo to
//! the ledger. Each mutation persists the full transaction list; if that write
//! fails the in-memory change is rolled back, so the ledger and its persisted
//! mirror never diverge.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{PennywiseError, PennywiseResult};
use crate::models::money::MAX_UNITS;
use crate::models::{
    normalize_category_name, Money, MoneyParseError, Transaction, TransactionId, TransactionKind,
    INCOME_CATEGORY,
};
use crate::storage::{KeyValueStore, Storage};

use super::today;

/// Raw form input for creating or editing a transaction
#[derive(Debug, Clone, Default)]
pub struct TransactionInput {
    /// Free text; blank falls back to the category name
    pub description: Option<String>,
    /// Positive decimal text, signed according to `kind`
    pub amount: String,
    /// Ignored for income, which always files under "Income"
    pub category: String,
    pub kind: TransactionKind,
}

impl TransactionInput {
    pub fn new(amount: impl Into<String>, category: impl Into<String>, kind: TransactionKind) -> Self {
        Self {
            description: None,
            amount: amount.into(),
            category: category.into(),
            kind,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Validate and normalize into (description, signed amount, category)
    fn validate(&self) -> PennywiseResult<ValidatedInput> {
        let amount = validate_amount(&self.amount)?;

        let category = match self.kind {
            TransactionKind::Income => INCOME_CATEGORY.to_string(),
            TransactionKind::Expense => {
                let category = normalize_category_name(&self.category);
                if category.is_empty() {
                    return Err(PennywiseError::Validation("Category is required".into()));
                }
                category
            }
        };

        let description = self
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| category.clone());

        Ok(ValidatedInput {
            description,
            amount: self.kind.sign(amount),
            category,
        })
    }
}

struct ValidatedInput {
    description: String,
    amount: Money,
    category: String,
}

/// Check a raw amount before it is signed
///
/// Blank input is "required"; anything that is not a number above zero is
/// rejected as not positive.
pub fn validate_amount(raw: &str) -> PennywiseResult<Money> {
    if raw.trim().is_empty() {
        return Err(PennywiseError::Validation("Amount is required".into()));
    }
    let not_positive = || PennywiseError::Validation("Amount must be a positive number".into());
    match Money::parse(raw) {
        Ok(amount) if amount.is_positive() => Ok(amount),
        Ok(amount) if amount.is_zero() && is_sub_cent(raw) => Err(PennywiseError::Validation(
            "Amount must be at least 0.01".into(),
        )),
        Err(MoneyParseError::TooLarge(_)) if !raw.trim().starts_with('-') => {
            Err(PennywiseError::Validation(format!(
                "Amount must not exceed {}",
                MAX_UNITS
            )))
        }
        _ => Err(not_positive()),
    }
}

/// A positive number that truncates to zero cents, like "0.001"
fn is_sub_cent(raw: &str) -> bool {
    let raw = raw.trim();
    !raw.starts_with('-') && raw.chars().any(|c| matches!(c, '1'..='9'))
}

/// Service for transaction management
pub struct TransactionService<'a, S: KeyValueStore> {
    storage: &'a mut Storage<S>,
}

impl<'a, S: KeyValueStore> TransactionService<'a, S> {
    pub fn new(storage: &'a mut Storage<S>) -> Self {
        Self { storage }
    }

    /// Record a new transaction dated today
    pub fn add(&mut self, input: TransactionInput) -> PennywiseResult<Transaction> {
        self.add_on(input, today())
    }

    /// Record a new transaction on a given date
    pub fn add_on(&mut self, input: TransactionInput, date: NaiveDate) -> PennywiseResult<Transaction> {
        let valid = input.validate()?;
        let txn = Transaction::new(valid.description, valid.amount, valid.category, date);

        self.storage.transactions.push(txn.clone());
        if let Err(e) = self.storage.save_transactions() {
            self.storage.transactions.pop();
            return Err(e);
        }

        info!(id = %txn.id, amount = txn.amount.cents(), category = %txn.category, "added transaction");
        Ok(txn)
    }

    /// Replace the transaction with `id`, keeping its id and original date
    ///
    /// The creation date is kept on purpose; an edit does not re-date the record.
    pub fn update(
        &mut self,
        id: TransactionId,
        input: TransactionInput,
    ) -> PennywiseResult<Transaction> {
        let index = self
            .storage
            .transactions
            .position(id)
            .ok_or_else(|| PennywiseError::transaction_not_found(id.to_string()))?;
        let valid = input.validate()?;

        let mut updated = self.storage.transactions.all()[index].clone();
        updated.description = valid.description;
        updated.amount = valid.amount;
        updated.category = valid.category;

        let previous = self.storage.transactions.replace(index, updated.clone());
        if let Err(e) = self.storage.save_transactions() {
            self.storage.transactions.replace(index, previous);
            return Err(e);
        }

        info!(id = %id, "updated transaction");
        Ok(updated)
    }

    /// Remove the transaction with `id` and hand it back for a possible undo
    pub fn delete(&mut self, id: TransactionId) -> PennywiseResult<Transaction> {
        let index = self
            .storage
            .transactions
            .position(id)
            .ok_or_else(|| PennywiseError::transaction_not_found(id.to_string()))?;

        let removed = self.storage.transactions.remove(index);
        if let Err(e) = self.storage.save_transactions() {
            self.storage.transactions.insert(index, removed);
            return Err(e);
        }

        info!(id = %id, "deleted transaction");
        Ok(removed)
    }

    /// Restore a deleted transaction under its original id
    ///
    /// The record is appended rather than returned to its old position.
    pub fn undo_delete(&mut self, txn: Transaction) -> PennywiseResult<()> {
        if self.storage.transactions.contains(txn.id) {
            return Err(PennywiseError::Duplicate {
                entity_type: "Transaction",
                identifier: txn.id.to_string(),
            });
        }

        let id = txn.id;
        self.storage.transactions.push(txn);
        if let Err(e) = self.storage.save_transactions() {
            self.storage.transactions.pop();
            return Err(e);
        }

        info!(id = %id, "restored transaction");
        Ok(())
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.storage.transactions.get(id)
    }

    /// Resolve a full id or unique short prefix typed by the user
    pub fn resolve(&self, input: &str) -> PennywiseResult<TransactionId> {
        self.storage.transactions.resolve(input)
    }

    pub fn list(&self) -> &[Transaction] {
        self.storage.transactions.all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports;
    use crate::services::testing::FlakyStore;
    use crate::storage::MemoryStore;

    fn storage() -> Storage<MemoryStore> {
        Storage::new(MemoryStore::new()).unwrap()
    }

    fn expense(amount: &str, category: &str) -> TransactionInput {
        TransactionInput::new(amount, category, TransactionKind::Expense)
    }

    #[test]
    fn test_add_expense_is_negative() {
        let mut storage = storage();
        let mut service = TransactionService::new(&mut storage);

        let txn = service.add(expense("20", "food")).unwrap();
        assert_eq!(txn.amount, Money::from_cents(-2000));
        assert_eq!(txn.category, "Food");
        assert_eq!(txn.description, "Food");
        assert_eq!(txn.date, Some(today()));
        assert_eq!(storage.transactions.len(), 1);
    }

    #[test]
    fn test_add_income_forces_category() {
        let mut storage = storage();
        let mut service = TransactionService::new(&mut storage);

        let input = TransactionInput::new("1500.50", "Shopping", TransactionKind::Income)
            .with_description("Salary");
        let txn = service.add(input).unwrap();
        assert_eq!(txn.amount, Money::from_cents(150050));
        assert_eq!(txn.category, "Income");
        assert_eq!(txn.description, "Salary");
    }

    #[test]
    fn test_add_persists() {
        let mut storage = storage();
        TransactionService::new(&mut storage)
            .add(expense("12.5", "Transport"))
            .unwrap();

        let reloaded = Storage::new(storage.into_store()).unwrap();
        assert_eq!(reloaded.transactions.len(), 1);
        assert_eq!(reloaded.transactions.all()[0].amount.cents(), -1250);
    }

    #[test]
    fn test_invalid_amounts_rejected_without_mutation() {
        let mut storage = storage();
        let mut service = TransactionService::new(&mut storage);

        let err = service.add(expense("", "Food")).unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Amount is required");

        for bad in ["-5", "0", "abc", "1.2.3"] {
            let err = service.add(expense(bad, "Food")).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Validation error: Amount must be a positive number",
                "input {:?}",
                bad
            );
        }

        let err = service.add(expense("5", "  ")).unwrap_err();
        assert!(err.is_validation());
        assert!(storage.transactions.is_empty());
    }

    #[test]
    fn test_sub_cent_and_oversized_amounts() {
        assert_eq!(
            validate_amount("0.001").unwrap_err().to_string(),
            "Validation error: Amount must be at least 0.01"
        );
        assert_eq!(
            validate_amount("-0.001").unwrap_err().to_string(),
            "Validation error: Amount must be a positive number"
        );
        assert_eq!(
            validate_amount("90000000000000000").unwrap_err().to_string(),
            "Validation error: Amount must not exceed 10000000000000"
        );
        assert_eq!(validate_amount("0.019").unwrap(), Money::from_cents(1));
    }

    #[test]
    fn test_totals_of_largest_amounts_do_not_overflow() {
        let mut storage = storage();
        let mut service = TransactionService::new(&mut storage);
        for _ in 0..3 {
            service
                .add(TransactionInput::new("10000000000000", "", TransactionKind::Income))
                .unwrap();
        }
        assert!(service
            .add(TransactionInput::new("90000000000000000", "", TransactionKind::Income))
            .is_err());

        let income = reports::total_income(storage.transactions.all());
        assert_eq!(income.cents(), 3 * Money::MAX.cents());
    }

    #[test]
    fn test_update_keeps_id_and_date() {
        let mut storage = storage();
        let mut service = TransactionService::new(&mut storage);
        let day = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
        let original = service.add_on(expense("10", "Food"), day).unwrap();

        let updated = service
            .update(original.id, expense("35", "entertainment").with_description("Concert"))
            .unwrap();
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.date, Some(day));
        assert_eq!(updated.amount, Money::from_cents(-3500));
        assert_eq!(updated.category, "Entertainment");
        assert_eq!(storage.transactions.len(), 1);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut storage = storage();
        let mut service = TransactionService::new(&mut storage);

        let err = service
            .update(TransactionId::new(), expense("10", "Food"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_then_undo_restores_set() {
        let mut storage = storage();
        let mut service = TransactionService::new(&mut storage);
        let a = service.add(expense("10", "Food")).unwrap();
        let b = service.add(expense("20", "Shopping")).unwrap();

        let removed = service.delete(a.id).unwrap();
        assert_eq!(removed, a);
        assert_eq!(service.list(), &[b.clone()]);

        service.undo_delete(removed).unwrap();
        let mut ids: Vec<_> = service.list().iter().map(|t| t.id).collect();
        ids.sort_by_key(|id| id.full());
        let mut expected = vec![a.id, b.id];
        expected.sort_by_key(|id| id.full());
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_delete_unknown_id() {
        let mut storage = storage();
        let err = TransactionService::new(&mut storage)
            .delete(TransactionId::new())
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_double_undo_is_duplicate() {
        let mut storage = storage();
        let mut service = TransactionService::new(&mut storage);
        let txn = service.add(expense("10", "Food")).unwrap();
        let removed = service.delete(txn.id).unwrap();

        service.undo_delete(removed.clone()).unwrap();
        let err = service.undo_delete(removed).unwrap_err();
        assert!(matches!(err, PennywiseError::Duplicate { .. }));
        assert_eq!(service.list().len(), 1);
    }

    #[test]
    fn test_failed_persist_rolls_back() {
        let mut storage = Storage::new(FlakyStore::default()).unwrap();
        let kept = TransactionService::new(&mut storage)
            .add(expense("10", "Food"))
            .unwrap();

        storage.store_mut().fail_writes = true;
        let mut service = TransactionService::new(&mut storage);

        assert!(service.add(expense("5", "Food")).unwrap_err().is_storage());
        assert!(service
            .update(kept.id, expense("99", "Food"))
            .unwrap_err()
            .is_storage());
        assert!(service.delete(kept.id).unwrap_err().is_storage());

        assert_eq!(service.list(), &[kept]);
    }

    #[test]
    fn test_totals_match_signed_sum_after_mutations() {
        let mut storage = storage();
        let mut service = TransactionService::new(&mut storage);
        service.add(expense("50", "Food")).unwrap();
        service
            .add(TransactionInput::new("100", "", TransactionKind::Income))
            .unwrap();
        let gone = service.add(expense("7.25", "Transport")).unwrap();
        service.delete(gone.id).unwrap();

        let all = service.list();
        let signed: Money = all.iter().map(|t| t.amount).sum();
        assert_eq!(
            reports::total_income(all) - reports::total_expenses(all),
            signed
        );
        assert_eq!(signed, Money::from_cents(5000));
    }
}
