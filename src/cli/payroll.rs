//! Payroll CLI commands
//!
//! Parsed payroll documents and their monthly, biweekly and yearly totals.

use chrono::Datelike;
use clap::{Args, Subcommand, ValueEnum};

use crate::aggregate::{
    aggregate_biweekly, aggregate_monthly, available_years, yearly_overview, PayPeriodSource,
};
use crate::cfdi::parse_all;
use crate::error::FinfitResult;
use crate::models::{EntryKind, LedgerEntry};
use crate::reports::{format_biweekly, format_monthly, format_records, format_yearly};
use crate::services::LedgerService;
use crate::storage::Storage;

use super::print_json;

/// Where aggregates read their amounts from
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum PayrollSource {
    /// Payroll documents in the inbox and archive
    #[default]
    Documents,
    /// Income and expense entries in the ledger
    Ledger,
}

/// Options shared by the aggregate views
#[derive(Args, Debug, Clone, Copy)]
pub struct AggregateOptions {
    /// Read amounts from documents or from the ledger
    #[arg(short, long, value_enum, default_value = "documents")]
    pub source: PayrollSource,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Payroll subcommands
#[derive(Subcommand)]
pub enum PayrollCommands {
    /// List parsed payroll documents
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Totals per calendar month
    Monthly(AggregateOptions),
    /// Totals per quincena
    Biweekly(AggregateOptions),
    /// Totals for one year with a cumulative net column
    Yearly {
        /// Year to show (defaults to the latest year with data)
        #[arg(short, long)]
        year: Option<i32>,
        #[command(flatten)]
        options: AggregateOptions,
    },
}

/// Aggregate view selected on the command line
#[derive(Debug, Clone, Copy)]
enum View {
    Monthly,
    Biweekly,
    Yearly(Option<i32>),
}

/// Handle a payroll command
pub fn handle_payroll_command(storage: &Storage, cmd: PayrollCommands) -> FinfitResult<()> {
    let (view, options) = match cmd {
        PayrollCommands::List { json } => {
            let batch = parse_all(storage.payroll_documents()?);
            if json {
                return print_json(&batch);
            }
            print!("{}", format_records(&batch.records, &batch.failures));
            return Ok(());
        }
        PayrollCommands::Monthly(options) => (View::Monthly, options),
        PayrollCommands::Biweekly(options) => (View::Biweekly, options),
        PayrollCommands::Yearly { year, options } => (View::Yearly(year), options),
    };

    match options.source {
        PayrollSource::Documents => {
            let batch = parse_all(storage.payroll_documents()?);
            show(&batch.records, view, options.json)
        }
        PayrollSource::Ledger => {
            let entries: Vec<LedgerEntry> = LedgerService::new(storage)
                .all()?
                .into_iter()
                .filter(|e| e.kind != EntryKind::Workout)
                .collect();
            show(&entries, view, options.json)
        }
    }
}

fn show<T: PayPeriodSource>(items: &[T], view: View, json: bool) -> FinfitResult<()> {
    match view {
        View::Monthly => {
            let monthly = aggregate_monthly(items);
            if json {
                return print_json(&monthly);
            }
            print!("{}", format_monthly(&monthly));
        }
        View::Biweekly => {
            let biweekly = aggregate_biweekly(items);
            if json {
                return print_json(&biweekly);
            }
            print!("{}", format_biweekly(&biweekly));
        }
        View::Yearly(year) => {
            let year = year
                .or_else(|| available_years(items).last().copied())
                .unwrap_or_else(|| chrono::Local::now().year());
            let overview = yearly_overview(items, year);
            if json {
                return print_json(&overview);
            }
            print!("{}", format_yearly(&overview));
        }
    }
    Ok(())
}
