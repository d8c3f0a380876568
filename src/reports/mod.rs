//! Reports module for finfit
//!
//! Markdown documents (daily budget & routine, ledger period summaries,
//! monthly fitness reports) and terminal tables for payroll aggregates.

pub mod daily;
pub mod fitness;
pub mod ledger_summary;
pub mod payroll;

pub use daily::{compose_report, DailyReport};
pub use fitness::{render_fitness_report, FitnessReport};
pub use ledger_summary::{render_period_report, PeriodReport};
pub use payroll::{format_biweekly, format_monthly, format_records, format_yearly};
