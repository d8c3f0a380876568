//! Payroll ingestion service
//!
//! Turns payroll documents into income ledger entries, skipping documents
//! whose identifier is already recorded in the ledger.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::cfdi::parse_payroll_file;
use crate::error::FinfitResult;
use crate::models::{Amount, EntryId, EntryKind, LedgerEntry, ParseFailure, PayrollRecord};
use crate::storage::{archive_document, xml_files_in, Storage};

/// Category of every payroll ledger entry
pub const PAYROLL_CATEGORY: &str = "payroll";

/// What happened to a batch of documents
#[derive(Debug, Default)]
pub struct IngestOutcome {
    /// New entries, in document order
    pub entries: Vec<LedgerEntry>,
    /// Document each new entry came from, aligned with `entries`
    pub sources: Vec<PathBuf>,
    /// Documents skipped because their identifier was already known
    pub duplicates: Vec<(String, EntryId)>,
    /// Documents that could not be parsed
    pub failures: Vec<ParseFailure>,
    /// Where each entry was written; empty on a dry run
    pub written: BTreeMap<EntryId, PathBuf>,
}

/// Net amount recorded for a document
///
/// `gross - deductions` when the payroll node declares a gross amount,
/// otherwise `Total - deductions`. This precedence is a business-rule
/// assumption carried over as-is; it is not a verified tax rule, and unlike
/// [`PayrollRecord::net`] it leaves other payments out.
pub fn ingest_net(record: &PayrollRecord) -> Amount {
    if record.gross.is_zero() {
        record.document_total - record.deductions
    } else {
        record.gross - record.deductions
    }
}

/// Build the income entry for a parsed document
///
/// `fallback_date` is used when the document's issue date is unusable.
pub fn entry_from_record(
    record: &PayrollRecord,
    currency: &str,
    fallback_date: NaiveDate,
) -> LedgerEntry {
    let issued = record.issued_on().unwrap_or(fallback_date);
    let issued_label = issued.format("%Y-%m-%d").to_string();
    let start = record.period_start.as_deref().unwrap_or(&issued_label);
    let end = record.period_end.as_deref().unwrap_or(&issued_label);

    LedgerEntry {
        date: record.paid_on().unwrap_or(issued),
        kind: EntryKind::Income,
        category: PAYROLL_CATEGORY.to_string(),
        description: format!("CFDI nómina {}→{}", start, end),
        amount: ingest_net(record).round_cents(),
        currency: currency.to_string(),
        source: format!("cfdi:{}", record.filename),
        uuid: EntryId::for_document(record.stamp_uuid.as_deref(), &record.filename),
    }
}

/// Convert documents into new ledger entries
///
/// Documents are taken in the order given. `existing` is updated with every
/// accepted identifier, so a document repeated within the batch is only
/// accepted once.
pub fn ingest_documents<P: AsRef<Path>>(
    files: &[P],
    currency: &str,
    existing: &mut HashSet<EntryId>,
) -> IngestOutcome {
    let today = Local::now().date_naive();
    let mut outcome = IngestOutcome::default();

    for path in files {
        let path = path.as_ref();
        let record = match parse_payroll_file(path) {
            Ok(record) => record,
            Err(e) => {
                warn!(file = %path.display(), error = %e, "Skipping document (parse error)");
                outcome.failures.push(ParseFailure {
                    filename: path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                    error: e.to_string(),
                });
                continue;
            }
        };

        let entry = entry_from_record(&record, currency, today);
        if existing.contains(&entry.uuid) {
            info!(file = %record.filename, uuid = %entry.uuid, "Skipping document (duplicate UUID)");
            outcome.duplicates.push((record.filename, entry.uuid));
            continue;
        }

        existing.insert(entry.uuid.clone());
        outcome.entries.push(entry);
        outcome.sources.push(path.to_path_buf());
    }

    outcome
}

/// Ingest every document of a directory, in file-name order
pub fn ingest(
    document_dir: &Path,
    currency: &str,
    existing: &mut HashSet<EntryId>,
) -> FinfitResult<Vec<LedgerEntry>> {
    let files = xml_files_in(document_dir)?;
    Ok(ingest_documents(&files, currency, existing).entries)
}

/// Service for ingesting payroll documents into the ledger
pub struct IngestService<'a> {
    storage: &'a Storage,
}

impl<'a> IngestService<'a> {
    /// Create a new ingest service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Ingest documents and append the new entries to the ledger
    ///
    /// Accepted documents that live outside the archive are copied into it.
    /// With `dry_run` nothing is written.
    pub fn run(
        &self,
        files: &[PathBuf],
        currency: &str,
        dry_run: bool,
    ) -> FinfitResult<IngestOutcome> {
        let mut existing = self.storage.ledger.existing_ids()?;
        let mut outcome = ingest_documents(files, currency, &mut existing);

        if dry_run || outcome.entries.is_empty() {
            return Ok(outcome);
        }

        outcome.written = self.storage.ledger.append(&outcome.entries)?;

        let archive_dir = self.storage.paths().archive_dir();
        for source in &outcome.sources {
            if source.parent() != Some(archive_dir.as_path()) {
                archive_document(source, &archive_dir)?;
            }
        }

        Ok(outcome)
    }

    /// Ingest everything in the inbox and the archive
    pub fn run_all(&self, currency: &str, dry_run: bool) -> FinfitResult<IngestOutcome> {
        let files = self.storage.payroll_documents()?;
        self.run(&files, currency, dry_run)
    }
}
