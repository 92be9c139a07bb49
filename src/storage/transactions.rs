//! Transaction repository
//!
//! Holds the in-memory transaction list and mirrors it to the `transactions`
//! key. Every save rewrites the whole serialized collection.

use tracing::{debug, warn};

use crate::error::{PennywiseError, PennywiseResult};
use crate::models::{Transaction, TransactionId};

use super::kv::{keys, KeyValueStore};

/// Repository for transaction persistence
#[derive(Debug, Clone, Default)]
pub struct TransactionRepository {
    transactions: Vec<Transaction>,
}

impl TransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load transactions from the store
    ///
    /// A missing key, a value that is not a JSON array, or unparseable JSON
    /// load as an empty list. Inside an array, records that do not parse as a
    /// transaction are skipped and the rest are kept. Only store failures error.
    pub fn load(&mut self, store: &dyn KeyValueStore) -> PennywiseResult<()> {
        self.transactions = match store.get(keys::TRANSACTIONS)? {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<serde_json::Value>(&raw) {
                Ok(serde_json::Value::Array(items)) => parse_records(items),
                Ok(_) => {
                    warn!("stored transactions are not an array; starting empty");
                    Vec::new()
                }
                Err(e) => {
                    warn!(error = %e, "stored transactions are malformed; starting empty");
                    Vec::new()
                }
            },
        };

        debug!(count = self.transactions.len(), "loaded transactions");
        Ok(())
    }

    /// Save the full list to the store
    pub fn save(&self, store: &mut dyn KeyValueStore) -> PennywiseResult<()> {
        let serialized = serde_json::to_string(&self.transactions)?;
        store.set(keys::TRANSACTIONS, &serialized)?;
        debug!(count = self.transactions.len(), "saved transactions");
        Ok(())
    }

    /// All transactions in insertion order
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TransactionId) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: TransactionId) -> Option<usize> {
        self.transactions.iter().position(|t| t.id == id)
    }

    /// Resolve user input (full id, `txn-` short form, or unique prefix)
    pub fn resolve(&self, input: &str) -> PennywiseResult<TransactionId> {
        if let Ok(id) = input.parse::<TransactionId>() {
            if self.contains(id) {
                return Ok(id);
            }
        }

        let mut matches = self.transactions.iter().filter(|t| t.id.matches_prefix(input));
        match (matches.next(), matches.next()) {
            (Some(txn), None) => Ok(txn.id),
            (Some(_), Some(_)) => Err(PennywiseError::Validation(format!(
                "Transaction id '{}' is ambiguous; use more characters",
                input
            ))),
            (None, _) => Err(PennywiseError::transaction_not_found(input)),
        }
    }

    pub fn push(&mut self, txn: Transaction) {
        self.transactions.push(txn);
    }

    /// Remove and return the last pushed transaction
    pub fn pop(&mut self) -> Option<Transaction> {
        self.transactions.pop()
    }

    /// Replace the entry at `index`, returning the old one
    pub fn replace(&mut self, index: usize, txn: Transaction) -> Transaction {
        std::mem::replace(&mut self.transactions[index], txn)
    }

    pub fn insert(&mut self, index: usize, txn: Transaction) {
        self.transactions.insert(index, txn);
    }

    pub fn remove(&mut self, index: usize) -> Transaction {
        self.transactions.remove(index)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn clear(&mut self) {
        self.transactions.clear();
    }
}

fn parse_records(items: Vec<serde_json::Value>) -> Vec<Transaction> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value::<Transaction>(item) {
            Ok(txn) => Some(txn),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed stored transaction");
                None
            }
        })
        .collect()
}
