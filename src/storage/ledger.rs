//! Monthly-partitioned markdown ledger
//!
//! One file per calendar month (`YYYY-MM.md`) under the ledger directory.
//! Rows are only ever appended; nothing in the application rewrites or
//! deletes them. Every read re-scans the files.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info};

use super::file_io::{append_text, create_if_missing, read_text};
use super::ledger_format::{format_row, ledger_file_header, parse_row};
use crate::error::{FinfitError, FinfitResult};
use crate::models::{month_slug, EntryId, LedgerEntry};

/// Repository for the markdown ledger files
pub struct LedgerRepository {
    dir: PathBuf,
}

impl LedgerRepository {
    /// Create a new ledger repository rooted at `dir`
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the monthly file an entry dated `date` belongs in
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.path_for_period(&month_slug(date))
    }

    pub fn path_for_period(&self, period: &str) -> PathBuf {
        self.dir.join(format!("{}.md", period))
    }

    /// Create a ledger file with its header and an empty table if absent
    pub fn ensure_file(&self, path: &Path, period: &str) -> FinfitResult<()> {
        if create_if_missing(path, &ledger_file_header(period))? {
            debug!(path = %path.display(), "Created ledger file");
        }
        Ok(())
    }

    /// Append entries to their monthly files, one row at a time
    ///
    /// Returns where each entry was written, keyed by uuid.
    pub fn append(&self, entries: &[LedgerEntry]) -> FinfitResult<BTreeMap<EntryId, PathBuf>> {
        let mut written = BTreeMap::new();
        for entry in entries {
            let period = month_slug(entry.date);
            let path = self.path_for_period(&period);
            self.ensure_file(&path, &period)?;
            append_text(&path, &format!("{}\n", format_row(entry)))?;
            info!(uuid = %entry.uuid, path = %path.display(), "Appended ledger entry");
            written.insert(entry.uuid.clone(), path);
        }
        Ok(written)
    }

    /// Monthly ledger files, sorted by name
    pub fn list_files(&self) -> FinfitResult<Vec<PathBuf>> {
        if !self.dir.is_dir() {
            return Err(FinfitError::ledger_not_found(self.dir.display().to_string()));
        }

        let mut files: Vec<PathBuf> = std::fs::read_dir(&self.dir)
            .map_err(|e| {
                FinfitError::Storage(format!("Failed to list {}: {}", self.dir.display(), e))
            })?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "md"))
            .collect();
        files.sort();
        Ok(files)
    }

    /// Re-parse every row of every ledger file
    ///
    /// Rows that are not valid entries are skipped without error.
    pub fn load(&self) -> FinfitResult<Vec<LedgerEntry>> {
        let mut entries = Vec::new();
        for path in self.list_files()? {
            entries.extend(load_file(&path)?);
        }
        debug!(count = entries.len(), dir = %self.dir.display(), "Loaded ledger");
        Ok(entries)
    }

    /// Entries of a single month (`YYYY-MM`)
    pub fn load_period(&self, period: &str) -> FinfitResult<Vec<LedgerEntry>> {
        let path = self.path_for_period(period);
        if !path.exists() {
            return Err(FinfitError::ledger_not_found(period));
        }
        load_file(&path)
    }

    /// Every uuid already recorded in the ledger
    ///
    /// Only rows that `load` would return count, so header rows and
    /// hand-edited garbage never block an id.
    pub fn existing_ids(&self) -> FinfitResult<HashSet<EntryId>> {
        let mut ids = HashSet::new();
        for path in self.list_files()? {
            ids.extend(load_file(&path)?.into_iter().map(|entry| entry.uuid));
        }
        Ok(ids)
    }
}

fn load_file(path: &Path) -> FinfitResult<Vec<LedgerEntry>> {
    Ok(read_text(path)?
        .map(|content| content.lines().filter_map(parse_row).collect())
        .unwrap_or_default())
}
