//! Storage layer for Pennywise
//!
//! Everything the ledger persists goes through a [`KeyValueStore`]. The
//! [`Storage`] coordinator owns the store plus in-memory repositories for
//! transactions and budgets, and writes each collection back under its key
//! after a mutation.

pub mod budgets;
pub mod file_io;
pub mod kv;
pub mod transactions;

pub use budgets::BudgetRepository;
pub use file_io::{read_json, write_json_atomic};
pub use kv::{keys, FileStore, KeyValueStore, MemoryStore};
pub use transactions::TransactionRepository;

use tracing::{info, warn};

use crate::config::paths::PennywisePaths;
use crate::error::PennywiseResult;
use crate::models::PendingUndo;

/// Main storage coordinator that provides access to all repositories
#[derive(Debug)]
pub struct Storage<S: KeyValueStore = FileStore> {
    store: S,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
}

impl Storage<FileStore> {
    /// Open the on-disk store described by `paths` and load everything
    pub fn open(paths: &PennywisePaths) -> PennywiseResult<Self> {
        paths.ensure_directories()?;
        Self::new(FileStore::open(paths.store_file())?)
    }
}

impl<S: KeyValueStore> Storage<S> {
    /// Wrap a store and load all collections from it
    pub fn new(store: S) -> PennywiseResult<Self> {
        let mut storage = Self {
            store,
            transactions: TransactionRepository::new(),
            budgets: BudgetRepository::new(),
        };
        storage.load_all()?;
        Ok(storage)
    }

    /// Reload all collections from the store
    pub fn load_all(&mut self) -> PennywiseResult<()> {
        self.transactions.load(&self.store)?;
        self.budgets.load(&self.store)?;
        Ok(())
    }

    pub fn save_transactions(&mut self) -> PennywiseResult<()> {
        self.transactions.save(&mut self.store)
    }

    pub fn save_budgets(&mut self) -> PennywiseResult<()> {
        self.budgets.save(&mut self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// The most recent deletion, if one is still recorded
    pub fn pending_undo(&self) -> PennywiseResult<Option<PendingUndo>> {
        let Some(raw) = self.store.get(keys::LAST_DELETED)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(pending) => Ok(Some(pending)),
            Err(e) => {
                warn!(error = %e, "ignoring malformed pending undo");
                Ok(None)
            }
        }
    }

    pub fn set_pending_undo(&mut self, pending: &PendingUndo) -> PennywiseResult<()> {
        let serialized = serde_json::to_string(pending)?;
        self.store.set(keys::LAST_DELETED, &serialized)
    }

    pub fn clear_pending_undo(&mut self) -> PennywiseResult<()> {
        self.store.remove(keys::LAST_DELETED)
    }

    /// Remove every key Pennywise writes and empty the in-memory collections
    pub fn reset(&mut self) -> PennywiseResult<()> {
        for key in keys::ALL {
            self.store.remove(key)?;
        }
        self.transactions.clear();
        self.budgets.replace(Default::default());
        info!("cleared all stored data");
        Ok(())
    }
}
