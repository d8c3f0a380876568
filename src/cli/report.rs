//! CLI commands for reports
//!
//! Generating, reading and listing the daily budget & routine reports.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::FinfitResult;
use crate::reports::DailyReport;
use crate::storage::Storage;

use super::parse_date_or_today;

/// Routine shown when none is requested
const DEFAULT_ROUTINE: &str = "push";

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Generate and save the daily report
    Generate {
        /// Routine day to include (push, legs, pull, all)
        #[arg(short, long, default_value = DEFAULT_ROUTINE)]
        routine: String,
        /// Report date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Only print the report
        #[arg(long)]
        dry_run: bool,
    },
    /// Print a saved report
    Show {
        /// Report date (YYYY-MM-DD) or file name
        date: String,
    },
    /// List saved reports, newest first
    List,
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> FinfitResult<()> {
    match cmd {
        ReportCommands::Generate {
            routine,
            date,
            dry_run,
        } => {
            let date = parse_date_or_today(date.as_deref())?;
            let report = DailyReport::generate(storage, settings, date, &routine)?;

            if dry_run {
                println!("{}", report.render());
            } else {
                let path = report.write(storage)?;
                println!("Report written to: {}", path.display());
            }
        }

        ReportCommands::Show { date } => {
            let slug = date.strip_suffix(".md").unwrap_or(&date);
            let (content, _) = storage.reports.read(slug)?;
            print!("{}", content);
        }

        ReportCommands::List => {
            let reports = storage.reports.list()?;
            if reports.is_empty() {
                println!("No reports yet. Run 'finfit report generate' to create one.");
                return Ok(());
            }
            for path in reports {
                if let Some(name) = path.file_name() {
                    println!("{}", name.to_string_lossy());
                }
            }
        }
    }

    Ok(())
}
