//! Ledger entry identifiers
//!
//! Every ledger row carries a globally unique identifier: the digital stamp
//! UUID of the payroll document it came from, or a SHA-256 content hash when
//! no stamp is available. Hashes are derived only from stable inputs so the
//! same document or entry maps to the same id on every run.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Unique identifier of a ledger entry
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Wrap an identifier read back from storage or supplied by the user
    ///
    /// Ids are stored in a markdown table cell, so pipes become `/`, line
    /// breaks become spaces and the result is trimmed. The in-memory id is
    /// then exactly what a later read of the ledger yields.
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(
            id.as_ref()
                .replace('|', "/")
                .replace(['\r', '\n'], " ")
                .trim()
                .to_string(),
        )
    }

    /// Id for a payroll document: its stamp UUID, else a hash of the file name
    pub fn for_document(stamp_uuid: Option<&str>, filename: &str) -> Self {
        match stamp_uuid.map(Self::new).filter(|id| !id.0.is_empty()) {
            Some(id) => id,
            None => Self::hashed(filename),
        }
    }

    /// Content hash of arbitrary text
    pub fn hashed(content: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
