//! Storage layer for finfit
//!
//! Plain-text storage: monthly markdown ledgers, monthly fitness logs,
//! generated markdown reports and the payroll XML documents themselves.
//! Nothing is cached; every read re-scans the files.

pub mod documents;
pub mod file_io;
pub mod fitness_log;
pub mod init;
pub mod ledger;
pub mod ledger_format;
pub mod reports;

pub use documents::{archive_document, list_xml_files, xml_files_in};
pub use file_io::{read_text, write_text_atomic};
pub use fitness_log::FitnessLogRepository;
pub use init::initialize_storage;
pub use ledger::LedgerRepository;
pub use reports::ReportRepository;

use std::path::PathBuf;

use crate::config::paths::FinfitPaths;
use crate::error::FinfitError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FinfitPaths,
    pub ledger: LedgerRepository,
    pub fitness: FitnessLogRepository,
    pub reports: ReportRepository,
    pub fitness_reports: ReportRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FinfitPaths) -> Result<Self, FinfitError> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerRepository::new(paths.ledger_dir()),
            fitness: FitnessLogRepository::new(paths.fitness_dir()),
            reports: ReportRepository::new(paths.report_dir()),
            fitness_reports: ReportRepository::new(paths.fitness_report_dir()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FinfitPaths {
        &self.paths
    }

    /// Payroll documents from the inbox and the archive
    ///
    /// Archived copies win over inbox copies with the same name.
    pub fn payroll_documents(&self) -> Result<Vec<PathBuf>, FinfitError> {
        list_xml_files(&[self.paths.inbox_dir(), self.paths.archive_dir()])
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}
