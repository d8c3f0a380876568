//! Manual ledger entries
//!
//! Entries typed in by the user: expenses, extra income, or workout
//! markers. They share the ledger with ingested payroll entries.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::info;

use crate::error::{FinfitError, FinfitResult};
use crate::models::{Amount, EntryId, EntryKind, LedgerEntry};
use crate::storage::Storage;

/// Source tag of entries typed in by the user
pub const MANUAL_SOURCE: &str = "manual";

/// Input for a manual entry
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub kind: EntryKind,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub currency: String,
    /// Defaults to `manual`
    pub source: Option<String>,
    /// Defaults to a hash of date, description and amount
    pub uuid: Option<String>,
}

/// Build a ledger entry from user input
///
/// Expenses are always stored as negative amounts regardless of the sign
/// given. The amount is rounded to cents.
pub fn manual_entry(input: NewEntry) -> FinfitResult<LedgerEntry> {
    if !input.amount.is_finite() {
        return Err(FinfitError::Validation(format!(
            "Invalid amount '{}'",
            input.amount
        )));
    }
    if input.description.trim().is_empty() {
        return Err(FinfitError::Validation(
            "Description cannot be empty".into(),
        ));
    }

    let amount = match input.kind {
        EntryKind::Expense => -input.amount.abs(),
        _ => input.amount,
    };
    let uuid = match input.uuid.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
        Some(uuid) => EntryId::new(uuid),
        None => EntryId::hashed(&format!(
            "{}-{}-{}",
            input.date.format("%Y-%m-%d"),
            input.description,
            amount
        )),
    };

    Ok(LedgerEntry {
        date: input.date,
        kind: input.kind,
        category: input.category,
        description: input.description,
        amount: Amount::new(amount).round_cents(),
        currency: input.currency,
        source: input.source.unwrap_or_else(|| MANUAL_SOURCE.to_string()),
        uuid,
    })
}

/// Service for recording entries in the ledger
pub struct EntryService<'a> {
    storage: &'a Storage,
}

impl<'a> EntryService<'a> {
    /// Create a new entry service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Append entries whose uuid is not in the ledger yet
    ///
    /// Returns where each newly recorded entry was written.
    pub fn record(&self, entries: Vec<LedgerEntry>) -> FinfitResult<BTreeMap<EntryId, PathBuf>> {
        let mut existing = self.storage.ledger.existing_ids()?;
        let fresh: Vec<LedgerEntry> = entries
            .into_iter()
            .filter(|entry| {
                let is_new = existing.insert(entry.uuid.clone());
                if !is_new {
                    info!(uuid = %entry.uuid, "Entry already recorded, skipping");
                }
                is_new
            })
            .collect();

        self.storage.ledger.append(&fresh)
    }
}
