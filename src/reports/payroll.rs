//! Payroll tables for the terminal
//!
//! Fixed-width renderings of parsed payroll documents and their monthly,
//! biweekly and yearly aggregates.

use crate::aggregate::{AggregateRow, BiweeklyAggregate, MonthlyAggregate, YearlyOverview};
use crate::models::{ParseFailure, PayrollRecord};

const RULE_WIDTH: usize = 78;

fn rule(c: char) -> String {
    let mut line: String = std::iter::repeat(c).take(RULE_WIDTH).collect();
    line.push('\n');
    line
}

fn amount_header(first: &str) -> String {
    format!(
        "{:<24} {:>12} {:>12} {:>12} {:>12}\n",
        first, "Gross", "Deductions", "Net", "ISR"
    )
}

fn amount_line(label: &str, row: &AggregateRow) -> String {
    format!(
        "{:<24} {:>12.2} {:>12.2} {:>12.2} {:>12.2}\n",
        label, row.gross, row.deductions, row.net, row.isr
    )
}

/// One line per parsed document, followed by any parse failures
pub fn format_records(records: &[PayrollRecord], failures: &[ParseFailure]) -> String {
    let mut output = String::new();
    output.push_str("Payroll Documents\n");
    output.push_str(&rule('='));

    if records.is_empty() {
        output.push_str("No payroll documents found.\n");
    } else {
        output.push_str(&format!(
            "{:<12} {:<26} {:>12} {:>12} {:>12}\n",
            "Pay date", "File", "Gross", "Deductions", "Net"
        ));
        output.push_str(&rule('-'));
        for record in records {
            let name = if record.filename.chars().count() > 26 {
                let head: String = record.filename.chars().take(23).collect();
                format!("{}...", head)
            } else {
                record.filename.clone()
            };
            output.push_str(&format!(
                "{:<12} {:<26} {:>12.2} {:>12.2} {:>12.2}\n",
                record.pay_date,
                name,
                record.gross.rounded(),
                record.deductions.rounded(),
                record.net.rounded()
            ));
        }
    }

    if !failures.is_empty() {
        output.push('\n');
        output.push_str(&format!("Skipped {} unreadable document(s):\n", failures.len()));
        for failure in failures {
            output.push_str(&format!("  {}\n", failure));
        }
    }

    output
}

pub fn format_monthly(monthly: &[MonthlyAggregate]) -> String {
    let mut output = String::new();
    output.push_str("Monthly Payroll Summary\n");
    output.push_str(&rule('='));
    output.push_str(&amount_header("Period"));
    output.push_str(&rule('-'));

    if monthly.is_empty() {
        output.push_str("No payroll data.\n");
    }
    for month in monthly {
        let row = month.row();
        output.push_str(&amount_line(&row.period, &row));
    }
    output
}

pub fn format_biweekly(biweekly: &[BiweeklyAggregate]) -> String {
    let mut output = String::new();
    output.push_str("Biweekly Payroll Summary\n");
    output.push_str(&rule('='));
    output.push_str(&amount_header("Quincena"));
    output.push_str(&rule('-'));

    if biweekly.is_empty() {
        output.push_str("No payroll data.\n");
    }
    for quincena in biweekly {
        let row = quincena.row();
        output.push_str(&amount_line(&row.label, &row.row));
        output.push_str(&format!("  {}\n", row.range));
    }
    output
}

/// Monthly rows, year totals and the cumulative net column
pub fn format_yearly(overview: &YearlyOverview) -> String {
    let mut output = String::new();
    output.push_str(&format!("Payroll Overview {}\n", overview.year));
    output.push_str(&rule('='));

    if !overview.available_years.is_empty() {
        let years: Vec<String> = overview.available_years.iter().map(i32::to_string).collect();
        output.push_str(&format!("Available years: {}\n\n", years.join(", ")));
    }

    output.push_str(&format!(
        "{:<24} {:>12} {:>12} {:>12}\n",
        "Month", "Gross", "Net", "Cumulative"
    ));
    output.push_str(&rule('-'));
    if overview.progress.is_empty() {
        output.push_str("No payroll data for this year.\n");
    }
    for point in &overview.progress {
        output.push_str(&format!(
            "{:<24} {:>12.2} {:>12.2} {:>12.2}\n",
            point.label, point.gross, point.net, point.cumulative_net
        ));
    }

    let totals = &overview.totals;
    output.push_str(&rule('-'));
    output.push_str(&amount_line("Total", &totals.totals.row(overview.year.to_string())));
    output.push_str(&format!(
        "Months: {}   Documents: {}   Average net: {:.2}\n",
        totals.months,
        totals.entries,
        totals.avg_net().rounded()
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{aggregate_biweekly, aggregate_monthly, yearly_overview};
    use crate::test_support::record;

    fn records() -> Vec<PayrollRecord> {
        vec![
            record("2025-01-15", 8994.54, 500.0, 0.0, 612.3),
            record("2025-02-15", 8994.54, 500.0, 0.0, 612.3),
        ]
    }

    #[test]
    fn test_format_monthly() {
        let output = format_monthly(&aggregate_monthly(&records()));
        assert!(output.starts_with("Monthly Payroll Summary\n"));
        assert!(output.contains("2025-01"));
        assert!(output.contains("8494.54"));
        assert!(output.contains("612.30"));
    }

    #[test]
    fn test_format_biweekly_shows_label_and_range() {
        let output = format_biweekly(&aggregate_biweekly(&records()));
        assert!(output.contains("2025-01 1a quincena"));
        assert!(output.contains("8994.54"));
    }

    #[test]
    fn test_format_yearly() {
        let output = format_yearly(&yearly_overview(&records(), 2025));
        assert!(output.starts_with("Payroll Overview 2025\n"));
        assert!(output.contains("Available years: 2025"));
        assert!(output.contains("16989.08"));
        assert!(output.contains("Months: 2   Documents: 2   Average net: 8494.54"));
    }

    #[test]
    fn test_format_empty() {
        assert!(format_records(&[], &[]).contains("No payroll documents found."));
        assert!(format_monthly(&[]).contains("No payroll data."));
        assert!(format_yearly(&yearly_overview::<PayrollRecord>(&[], 2024))
            .contains("No payroll data for this year."));
    }
}
