//! Ledger CLI commands
//!
//! Listing ledger entries and weekly/monthly summaries.

use chrono::NaiveDate;
use clap::{Subcommand, ValueEnum};

use crate::config::settings::Settings;
use crate::error::FinfitResult;
use crate::reports::PeriodReport;
use crate::services::{filter_entries, summarize, LedgerService, SummaryPeriod};
use crate::storage::Storage;

use super::{parse_date_or_today, print_json};

/// Summary window
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PeriodArg {
    Week,
    Month,
}

impl From<PeriodArg> for SummaryPeriod {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Week => SummaryPeriod::Week,
            PeriodArg::Month => SummaryPeriod::Month,
        }
    }
}

/// Ledger subcommands
#[derive(Subcommand)]
pub enum LedgerCommands {
    /// List ledger entries
    List {
        /// Start date (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(short, long)]
        end: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Summarize a week or a month of the ledger
    Summary {
        /// Window to summarize
        #[arg(short, long, value_enum, default_value = "week")]
        period: PeriodArg,
        /// Any date inside the window (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Save the summary to the report directory
        #[arg(short, long)]
        write: bool,
    },
}

/// Handle a ledger command
pub fn handle_ledger_command(
    storage: &Storage,
    settings: &Settings,
    cmd: LedgerCommands,
) -> FinfitResult<()> {
    let service = LedgerService::new(storage);

    match cmd {
        LedgerCommands::List { start, end, json } => {
            let mut entries = service.all()?;
            if start.is_some() || end.is_some() {
                let start = match start.as_deref() {
                    Some(s) => parse_date_or_today(Some(s))?,
                    None => NaiveDate::MIN,
                };
                let end = parse_date_or_today(end.as_deref())?;
                entries = filter_entries(&entries, start, end);
            }

            if json {
                return print_json(&entries);
            }

            if entries.is_empty() {
                println!("No ledger entries.");
                return Ok(());
            }

            println!(
                "{:<12} {:<8} {:<12} {:<32} {:>18}",
                "Date", "Kind", "Category", "Description", "Amount"
            );
            println!("{}", "-".repeat(86));
            for entry in &entries {
                let description = if entry.description.chars().count() > 32 {
                    let head: String = entry.description.chars().take(29).collect();
                    format!("{}...", head)
                } else {
                    entry.description.clone()
                };
                println!(
                    "{:<12} {:<8} {:<12} {:<32} {:>18}",
                    entry.date.format("%Y-%m-%d"),
                    entry.kind.as_str(),
                    entry.category,
                    description,
                    entry.amount.format_with_currency(&entry.currency)
                );
            }

            let totals = summarize(&entries);
            println!("{}", "-".repeat(86));
            println!(
                "{} entries: income {:.2}, expenses {:.2}, net {:.2}, workouts {}",
                entries.len(),
                totals.income.rounded(),
                totals.expenses.rounded(),
                totals.net.rounded(),
                totals.workouts
            );
        }

        LedgerCommands::Summary {
            period,
            date,
            write,
        } => {
            let anchor = parse_date_or_today(date.as_deref())?;
            let report = PeriodReport::generate(
                storage,
                period.into(),
                anchor,
                settings.week_start,
                &settings.default_currency,
            )?;

            println!("{}", report.render());
            if write {
                let path = report.write(storage)?;
                println!("\nSaved to: {}", path.display());
            }
        }
    }

    Ok(())
}
