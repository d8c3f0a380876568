//! Core data models for finfit
//!
//! One explicit type per stage: payroll records produced by the document
//! normalizer, ledger entries persisted in the markdown ledger, and workout
//! sets logged by the fitness tracker.

pub mod amount;
pub mod budget;
pub mod entry;
pub mod ids;
pub mod payroll;
pub mod period;
pub mod workout;

pub use amount::{round_cents, Amount};
pub use budget::{BudgetLine, BudgetSheet, DEFAULT_BUDGET_MD};
pub use entry::{EntryKind, LedgerEntry};
pub use ids::EntryId;
pub use payroll::{DeductionLine, EarningLine, ParseFailure, PayrollBatch, PayrollRecord};
pub use period::{month_slug, Half, Quincena};
pub use workout::{WeightToken, WorkoutSet};
