//! Markdown table encoding of ledger entries
//!
//! Each monthly ledger file is a markdown document with one 8-column table:
//!
//! ```text
//! | [[YYYY-MM-DD]] | kind | category | description | ±amount.xx | currency | source | uuid |
//! ```
//!
//! Everything that knows about pipes and brackets lives here so the file
//! layer and the aggregations never touch the text format directly.

use chrono::NaiveDate;

use crate::models::{Amount, EntryId, EntryKind, LedgerEntry};

/// Column header and alignment row of every ledger table
pub const LEDGER_TABLE_HEADER: &str = "| date | type | category | description | amount | currency | source | uuid |\n\
| --- | --- | --- | --- | ---: | --- | --- | --- |\n";

const COLUMN_COUNT: usize = 8;

/// Initial content of a new monthly ledger file
pub fn ledger_file_header(period: &str) -> String {
    format!("# {} Ledger\n\n## Entries\n{}", period, LEDGER_TABLE_HEADER)
}

/// Make free text safe for a table cell: no pipes, no line breaks
pub fn sanitize_cell(text: &str) -> String {
    text.replace('|', "/")
        .replace(['\r', '\n'], " ")
        .trim()
        .to_string()
}

fn format_amount(amount: Amount) -> String {
    let rounded = amount.rounded();
    // Avoid writing "-0.00"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.2}", rounded)
}

/// Encode one entry as a table row (no trailing newline)
pub fn format_row(entry: &LedgerEntry) -> String {
    format!(
        "| [[{}]] | {} | {} | {} | {} | {} | {} | {} |",
        entry.date.format("%Y-%m-%d"),
        entry.kind,
        sanitize_cell(&entry.category),
        sanitize_cell(&entry.description),
        format_amount(entry.signed_amount()),
        sanitize_cell(&entry.currency),
        sanitize_cell(&entry.source),
        sanitize_cell(entry.uuid.as_str()),
    )
}

/// Whether a line is a markdown table alignment row (`| --- | ---: |`)
pub fn is_separator_row(line: &str) -> bool {
    let inner = line.trim().trim_matches('|');
    inner.contains('-')
        && inner
            .chars()
            .all(|c| matches!(c, '-' | ':' | '|') || c.is_whitespace())
}

fn split_cells(line: &str) -> Option<Vec<&str>> {
    let line = line.trim();
    if !line.starts_with('|') || is_separator_row(line) {
        return None;
    }
    let cells: Vec<&str> = line.trim_matches('|').split('|').map(str::trim).collect();
    (cells.len() == COLUMN_COUNT).then_some(cells)
}

/// Decode a table row; header rows, separators and malformed rows yield `None`
pub fn parse_row(line: &str) -> Option<LedgerEntry> {
    let cells = split_cells(line)?;

    let date_raw = cells[0]
        .strip_prefix("[[")
        .and_then(|d| d.strip_suffix("]]"))
        .unwrap_or(cells[0]);
    let date = NaiveDate::parse_from_str(date_raw.trim(), "%Y-%m-%d").ok()?;
    let kind = EntryKind::parse(cells[1])?;
    let uuid = cells[7];
    if uuid.is_empty() {
        return None;
    }

    Some(LedgerEntry {
        date,
        kind,
        category: cells[2].to_string(),
        description: cells[3].to_string(),
        amount: Amount::parse_or_zero(Some(cells[4])),
        currency: cells[5].to_string(),
        source: cells[6].to_string(),
        uuid: EntryId::new(uuid),
    })
}
