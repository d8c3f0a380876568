//! Service layer for finfit
//!
//! The service layer provides business logic on top of the storage layer:
//! payroll ingestion with deduplication, manual entries, ledger queries,
//! the budget overview and workout tracking.

pub mod budget;
pub mod entry;
pub mod fitness;
pub mod ingest;
pub mod ledger;

pub use budget::{BudgetService, BudgetSummary};
pub use entry::{manual_entry, EntryService, NewEntry};
pub use fitness::{
    best_sets, parse_set, pr_history, summarize_workouts, ExerciseStats, FitnessService,
};
pub use ingest::{entry_from_record, ingest, ingest_documents, IngestOutcome, IngestService};
pub use ledger::{filter_entries, summarize, LedgerService, LedgerTotals, SummaryPeriod};
