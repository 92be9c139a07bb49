//! Pending undo for the most recent deletion
//!
//! The undo window is a caller-side affordance: the ledger accepts a restore
//! at any time, and the CLI consults `PendingUndo` to decide whether to offer it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

/// How long a deleted transaction stays restorable
pub const UNDO_WINDOW_SECS: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingUndo {
    pub transaction: Transaction,
    pub deleted_at: DateTime<Utc>,
}

impl PendingUndo {
    pub fn new(transaction: Transaction) -> Self {
        Self {
            transaction,
            deleted_at: Utc::now(),
        }
    }

    /// When the undo offer lapses
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.deleted_at + Duration::seconds(UNDO_WINDOW_SECS)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at()
    }
}
