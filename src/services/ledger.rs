//! Ledger queries
//!
//! Date filtering and income/expense totals over ledger entries, plus the
//! weekly and monthly windows used by period summaries.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::FinfitResult;
use crate::models::period::{monthly_range, weekly_range};
use crate::models::{Amount, EntryKind, LedgerEntry};
use crate::storage::Storage;

/// Totals over a set of ledger entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LedgerTotals {
    /// Sum of positive amounts
    pub income: Amount,
    /// Magnitude of the sum of negative amounts
    pub expenses: Amount,
    /// income - expenses
    pub net: Amount,
    /// Number of workout entries
    pub workouts: usize,
}

/// Entries dated within `start..=end`
pub fn filter_entries(entries: &[LedgerEntry], start: NaiveDate, end: NaiveDate) -> Vec<LedgerEntry> {
    entries
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .cloned()
        .collect()
}

/// Sum income, expenses and workouts
pub fn summarize(entries: &[LedgerEntry]) -> LedgerTotals {
    let mut income = Amount::zero();
    let mut spent = Amount::zero();
    let mut workouts = 0;

    for entry in entries {
        if entry.amount.is_positive() {
            income += entry.amount;
        } else if entry.amount.is_negative() {
            spent += entry.amount;
        }
        if entry.kind == EntryKind::Workout {
            workouts += 1;
        }
    }

    LedgerTotals {
        income,
        expenses: spent.abs(),
        net: income + spent,
        workouts,
    }
}

/// Summary window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryPeriod {
    Week,
    Month,
}

impl SummaryPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Window containing `anchor`
    pub fn range(&self, anchor: NaiveDate, week_start: u8) -> (NaiveDate, NaiveDate) {
        match self {
            Self::Week => weekly_range(anchor, week_start),
            Self::Month => monthly_range(anchor),
        }
    }

    /// Report title for a window starting on `start`
    pub fn title(&self, start: NaiveDate) -> String {
        match self {
            Self::Week => format!("Weekly Summary — week of {}", start.format("%Y-%m-%d")),
            Self::Month => format!("Monthly Summary — {}", start.format("%Y-%m")),
        }
    }
}

/// Service for reading the ledger
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Every entry, sorted by date then uuid
    pub fn all(&self) -> FinfitResult<Vec<LedgerEntry>> {
        let mut entries = self.storage.ledger.load()?;
        entries.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.uuid.cmp(&b.uuid)));
        Ok(entries)
    }

    /// Entries inside a window
    pub fn between(&self, start: NaiveDate, end: NaiveDate) -> FinfitResult<Vec<LedgerEntry>> {
        Ok(filter_entries(&self.all()?, start, end))
    }
}
