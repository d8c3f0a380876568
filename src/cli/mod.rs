//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod entry;
pub mod ingest;
pub mod ledger;
pub mod payroll;
pub mod report;
pub mod workout;

pub use budget::{handle_budget_command, handle_routine_command};
pub use entry::{handle_entry_command, EntryCommands};
pub use ingest::{handle_ingest_command, IngestArgs};
pub use ledger::{handle_ledger_command, LedgerCommands};
pub use payroll::{handle_payroll_command, PayrollCommands};
pub use report::{handle_report_command, ReportCommands};
pub use workout::{handle_workout_command, WorkoutCommands};

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{FinfitError, FinfitResult};

/// Parse a date string or return today's date
pub(crate) fn parse_date_or_today(date_str: Option<&str>) -> FinfitResult<NaiveDate> {
    match date_str {
        Some(date_str) => NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
            FinfitError::Validation(format!(
                "Invalid date format: '{}'. Use YYYY-MM-DD",
                date_str
            ))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Pretty-print a value as JSON on stdout
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> FinfitResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
