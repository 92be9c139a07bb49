//! Strongly-typed transaction identifier
//!
//! Ids are time-ordered (UUID v7), so sorting by id roughly follows creation
//! order and two ids never collide.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Prefix used when displaying transaction ids
pub const TRANSACTION_ID_PREFIX: &str = "txn-";

/// Length of the hex portion shown in the short display form
const SHORT_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Create a new time-ordered ID
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Create an ID from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Full hyphenated UUID string
    pub fn full(&self) -> String {
        self.0.to_string()
    }

    /// Check whether user input (with or without the `txn-` prefix) is a
    /// prefix of this id
    pub fn matches_prefix(&self, input: &str) -> bool {
        let needle = input
            .trim()
            .strip_prefix(TRANSACTION_ID_PREFIX)
            .unwrap_or(input.trim())
            .to_ascii_lowercase();
        !needle.is_empty() && self.full().starts_with(&needle)
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            TRANSACTION_ID_PREFIX,
            &self.0.simple().to_string()[..SHORT_LEN]
        )
    }
}

impl From<Uuid> for TransactionId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for TransactionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix(TRANSACTION_ID_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}
