//! Entry CLI commands
//!
//! Manual ledger entries for expenses and extra income.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{FinfitError, FinfitResult};
use crate::models::{Amount, EntryKind};
use crate::services::{manual_entry, EntryService, NewEntry};
use crate::storage::Storage;

use super::parse_date_or_today;

/// Entry subcommands
#[derive(Subcommand)]
pub enum EntryCommands {
    /// Add an entry to the ledger
    Add {
        /// Entry kind (income, expense, workout)
        kind: String,
        /// Amount (e.g., "250" or "1,250.50"); expenses are stored negative
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Description
        description: String,
        /// Category
        #[arg(short, long, default_value = "general")]
        category: String,
        /// Entry date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Currency (defaults to the configured one)
        #[arg(long)]
        currency: Option<String>,
        /// Source tag
        #[arg(short, long)]
        source: Option<String>,
        /// Explicit identifier
        #[arg(long)]
        uuid: Option<String>,
    },
}

/// Handle an entry command
pub fn handle_entry_command(
    storage: &Storage,
    settings: &Settings,
    cmd: EntryCommands,
) -> FinfitResult<()> {
    match cmd {
        EntryCommands::Add {
            kind,
            amount,
            description,
            category,
            date,
            currency,
            source,
            uuid,
        } => {
            let kind = EntryKind::parse(&kind).ok_or_else(|| {
                FinfitError::Validation(format!(
                    "Invalid entry kind: '{}'. Valid kinds: income, expense, workout",
                    kind
                ))
            })?;
            let amount = Amount::parse(&amount)
                .map_err(|e| FinfitError::Validation(e.to_string()))?;

            let entry = manual_entry(NewEntry {
                date: parse_date_or_today(date.as_deref())?,
                kind,
                category,
                description,
                amount: amount.value(),
                currency: currency.unwrap_or_else(|| settings.default_currency.clone()),
                source,
                uuid,
            })?;

            let written = EntryService::new(storage).record(vec![entry.clone()])?;
            match written.get(&entry.uuid) {
                Some(path) => {
                    println!(
                        "Recorded {} {} on {} [{}]",
                        entry.kind,
                        entry.amount.format_with_currency(&entry.currency),
                        entry.date.format("%Y-%m-%d"),
                        entry.uuid
                    );
                    println!("  Ledger: {}", path.display());
                }
                None => println!("Entry {} is already in the ledger", entry.uuid),
            }
        }
    }

    Ok(())
}
