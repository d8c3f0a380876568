//! Ingest CLI command
//!
//! Reads payroll documents from the inbox and archive (or one directory)
//! and appends the new ones to the ledger.

use std::path::PathBuf;

use clap::Args;

use crate::config::settings::Settings;
use crate::error::FinfitResult;
use crate::services::IngestService;
use crate::storage::{xml_files_in, Storage};

use super::print_json;

/// Arguments for `finfit ingest`
#[derive(Args, Debug)]
pub struct IngestArgs {
    /// Only read documents from this directory
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Currency for the new entries (defaults to the configured one)
    #[arg(short, long)]
    pub currency: Option<String>,

    /// Show what would be ingested without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the new entries as JSON
    #[arg(long)]
    pub json: bool,
}

/// Handle the ingest command
pub fn handle_ingest_command(
    storage: &Storage,
    settings: &Settings,
    args: IngestArgs,
) -> FinfitResult<()> {
    let currency = args
        .currency
        .as_deref()
        .unwrap_or(settings.default_currency.as_str());
    let service = IngestService::new(storage);

    let outcome = match &args.dir {
        Some(dir) => service.run(&xml_files_in(dir)?, currency, args.dry_run)?,
        None => service.run_all(currency, args.dry_run)?,
    };

    if args.json {
        return print_json(&outcome.entries);
    }

    let verb = if args.dry_run { "Would ingest" } else { "Ingested" };
    println!("{} {} document(s)", verb, outcome.entries.len());
    for entry in &outcome.entries {
        let destination = outcome
            .written
            .get(&entry.uuid)
            .map(|p| format!(" -> {}", p.display()))
            .unwrap_or_default();
        println!(
            "  {}  {:>12}  {}  [{}]{}",
            entry.date.format("%Y-%m-%d"),
            entry.amount.format_with_currency(&entry.currency),
            entry.description,
            entry.uuid,
            destination
        );
    }

    if !outcome.duplicates.is_empty() {
        println!("\nSkipped {} duplicate(s):", outcome.duplicates.len());
        for (file, uuid) in &outcome.duplicates {
            println!("  {} [{}]", file, uuid);
        }
    }

    if !outcome.failures.is_empty() {
        println!("\nSkipped {} unreadable document(s):", outcome.failures.len());
        for failure in &outcome.failures {
            println!("  {}", failure);
        }
    }

    Ok(())
}
