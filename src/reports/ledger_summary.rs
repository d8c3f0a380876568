//! Ledger Period Report
//!
//! Income, expense and workout totals for a week or a month, followed by
//! every entry in the window.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::FinfitResult;
use crate::models::LedgerEntry;
use crate::services::{summarize, LedgerService, SummaryPeriod};
use crate::storage::Storage;

/// Render a period report
pub fn render_period_report(
    title: &str,
    entries: &[LedgerEntry],
    start: NaiveDate,
    end: NaiveDate,
    currency: &str,
) -> String {
    let totals = summarize(entries);
    let mut lines = vec![
        format!("# {}", title),
        format!(
            "**Period:** {} → {}",
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        ),
        String::new(),
        "## Totals".to_string(),
        format!("- income: {:.2} {}", totals.income.rounded(), currency),
        format!("- expenses: {:.2} {}", totals.expenses.rounded(), currency),
        format!("- net: {:.2} {}", totals.net.rounded(), currency),
        format!("- workouts: {}", totals.workouts),
        String::new(),
        "## Entries".to_string(),
    ];

    let mut sorted: Vec<&LedgerEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.kind.as_str().cmp(b.kind.as_str()))
            .then_with(|| a.uuid.cmp(&b.uuid))
    });

    for entry in sorted {
        let sign = if entry.amount.is_negative() { "-" } else { "+" };
        lines.push(format!(
            "- [[{}]] {} | {} | {} | {}{:.2} {} | {} | {}",
            entry.date.format("%Y-%m-%d"),
            entry.kind,
            entry.category,
            entry.description,
            sign,
            entry.amount.abs().rounded(),
            entry.currency,
            entry.source,
            entry.uuid
        ));
    }
    if entries.is_empty() {
        lines.push("- (no entries)".to_string());
    }

    lines.join("\n")
}

/// A weekly or monthly ledger summary
#[derive(Debug, Clone)]
pub struct PeriodReport {
    pub period: SummaryPeriod,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub entries: Vec<LedgerEntry>,
    pub currency: String,
}

impl PeriodReport {
    /// Collect the entries of the window containing `anchor`
    pub fn generate(
        storage: &Storage,
        period: SummaryPeriod,
        anchor: NaiveDate,
        week_start: u8,
        currency: &str,
    ) -> FinfitResult<Self> {
        let (start, end) = period.range(anchor, week_start);
        let entries = LedgerService::new(storage).between(start, end)?;
        Ok(Self {
            period,
            start,
            end,
            entries,
            currency: currency.to_string(),
        })
    }

    pub fn title(&self) -> String {
        self.period.title(self.start)
    }

    /// Report file stem, e.g. `week-2025-01-13`
    pub fn slug(&self) -> String {
        format!("{}-{}", self.period.as_str(), self.start.format("%Y-%m-%d"))
    }

    pub fn render(&self) -> String {
        render_period_report(&self.title(), &self.entries, self.start, self.end, &self.currency)
    }

    pub fn write(&self, storage: &Storage) -> FinfitResult<PathBuf> {
        storage.reports.write(&self.slug(), &self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinfitPaths;
    use crate::models::EntryKind;
    use crate::test_support::{date, entry};
    use tempfile::TempDir;

    #[test]
    fn test_render_sorted_entries() {
        let entries = vec![
            entry(date(2025, 1, 16), EntryKind::Expense, -120.5, "b"),
            entry(date(2025, 1, 15), EntryKind::Income, 8494.54, "a"),
            entry(date(2025, 1, 15), EntryKind::Expense, -10.0, "z"),
        ];

        let md = render_period_report(
            "Monthly Summary — 2025-01",
            &entries,
            date(2025, 1, 1),
            date(2025, 1, 31),
            "MXN",
        );
        let lines: Vec<&str> = md.lines().collect();

        assert_eq!(lines[0], "# Monthly Summary — 2025-01");
        assert_eq!(lines[1], "**Period:** 2025-01-01 → 2025-01-31");
        assert_eq!(lines[4], "- income: 8494.54 MXN");
        assert_eq!(lines[5], "- expenses: 130.50 MXN");
        assert_eq!(lines[6], "- net: 8364.04 MXN");
        assert_eq!(lines[7], "- workouts: 0");
        assert_eq!(
            lines[10],
            "- [[2025-01-15]] expense | misc | expense entry | -10.00 MXN | manual | z"
        );
        assert_eq!(
            lines[11],
            "- [[2025-01-15]] income | misc | income entry | +8494.54 MXN | manual | a"
        );
        assert!(lines[12].contains("-120.50 MXN"));
    }

    #[test]
    fn test_render_empty() {
        let md = render_period_report("Empty", &[], date(2025, 1, 1), date(2025, 1, 7), "MXN");
        assert!(md.ends_with("## Entries\n- (no entries)"));
    }

    #[test]
    fn test_generate_filters_window_and_writes() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(FinfitPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        storage
            .ledger
            .append(&[
                entry(date(2025, 1, 14), EntryKind::Income, 100.0, "in"),
                entry(date(2025, 1, 20), EntryKind::Income, 100.0, "out"),
            ])
            .unwrap();

        let report =
            PeriodReport::generate(&storage, SummaryPeriod::Week, date(2025, 1, 15), 0, "MXN").unwrap();

        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.slug(), "week-2025-01-13");
        let path = report.write(&storage).unwrap();
        assert!(path.ends_with("week-2025-01-13.md"));
    }
}
