//! Budget repository
//!
//! Mirrors the per-category budget map to the `budgets` key.

use tracing::{debug, warn};

use crate::error::PennywiseResult;
use crate::models::Budgets;

use super::kv::{keys, KeyValueStore};

#[derive(Debug, Clone, Default)]
pub struct BudgetRepository {
    budgets: Budgets,
}

impl BudgetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load budgets; malformed payloads load as an empty map
    pub fn load(&mut self, store: &dyn KeyValueStore) -> PennywiseResult<()> {
        self.budgets = match store.get(keys::BUDGETS)? {
            None => Budgets::new(),
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(error = %e, "stored budgets are malformed; starting empty");
                Budgets::new()
            }),
        };
        debug!(count = self.budgets.len(), "loaded budgets");
        Ok(())
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> PennywiseResult<()> {
        let serialized = serde_json::to_string(&self.budgets)?;
        store.set(keys::BUDGETS, &serialized)
    }

    pub fn budgets(&self) -> &Budgets {
        &self.budgets
    }

    pub fn budgets_mut(&mut self) -> &mut Budgets {
        &mut self.budgets
    }

    /// Swap in a whole budget map, returning the previous one
    pub fn replace(&mut self, budgets: Budgets) -> Budgets {
        std::mem::replace(&mut self.budgets, budgets)
    }
}
