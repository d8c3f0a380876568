//! Ledger entry model
//!
//! One financial or fitness event: the durable unit of record in the
//! markdown ledger.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::ids::EntryId;

/// Kind of ledger event
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
    Workout,
}

impl EntryKind {
    /// Parse a kind from its stored name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            "workout" => Some(Self::Workout),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Workout => "workout",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ledger row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub date: NaiveDate,
    pub kind: EntryKind,
    pub category: String,
    pub description: String,
    /// Signed amount; expenses are negative
    pub amount: Amount,
    /// Currency code (e.g. "MXN")
    pub currency: String,
    /// Where the entry came from (`cfdi:<file>`, `manual`, ...)
    pub source: String,
    pub uuid: EntryId,
}

impl LedgerEntry {
    /// Amount as it is stored: expenses always negative, everything else as-is
    pub fn signed_amount(&self) -> Amount {
        match self.kind {
            EntryKind::Expense if self.amount.is_positive() => -self.amount,
            _ => self.amount,
        }
    }
}
