//! Daily Report
//!
//! Budget totals, the monthly payroll table and the day's routine in one
//! markdown document, stored as `<date>.md` in the report directory.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::aggregate::MonthlyAggregate;
use crate::config::settings::Settings;
use crate::error::FinfitResult;
use crate::services::{BudgetService, BudgetSummary};
use crate::storage::Storage;

/// Render the daily markdown report
pub fn compose_report(
    date: &str,
    summary: &BudgetSummary,
    monthly: &[MonthlyAggregate],
    routine_title: &str,
    routine_md: &str,
    currency: &str,
) -> String {
    let money = |amount: crate::models::Amount| amount.format_with_currency(currency);

    let mut lines = vec![
        format!("# 🧾 Budget & Routine — {}", date),
        format!("**Income:** {}  ", money(summary.total_income)),
        format!("**Expenses:** {}  ", money(summary.total_expenses)),
        format!("**Debts:** {}  ", money(summary.active_debts)),
        format!("**Net:** {}  ", money(summary.net_savings)),
        String::new(),
        "---".to_string(),
        String::new(),
        "## 💰 Monthly Payroll Summary (CFDI Nómina)".to_string(),
        "| Period | Gross | Deductions | Net | ISR |".to_string(),
        "|---------|--------|-------------|------|------|".to_string(),
    ];

    if monthly.is_empty() {
        lines.push("| - | - | - | - | - |".to_string());
    }
    for month in monthly {
        let row = month.row();
        lines.push(format!(
            "| {} | {:.2} | {:.2} | {:.2} | {:.2} |",
            row.period, row.gross, row.deductions, row.net, row.isr
        ));
    }

    lines.extend([
        String::new(),
        "---".to_string(),
        String::new(),
        format!("## 🏋️ Today’s Routine ({})", routine_title),
        routine_md.trim().to_string(),
        String::new(),
    ]);

    lines.join("\n")
}

/// Daily report inputs
#[derive(Debug, Clone)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub summary: BudgetSummary,
    pub monthly: Vec<MonthlyAggregate>,
    pub routine_title: String,
    pub routine_md: String,
    pub currency: String,
}

impl DailyReport {
    /// Gather budget, payroll and routine data for `date`
    pub fn generate(
        storage: &Storage,
        settings: &Settings,
        date: NaiveDate,
        routine_day: &str,
    ) -> FinfitResult<Self> {
        let budget = BudgetService::new(storage, settings);
        let monthly = budget.monthly_payroll()?;
        let summary = budget.summary_with(&monthly)?;

        Ok(Self {
            date,
            summary,
            monthly,
            routine_title: routine_day.to_uppercase(),
            routine_md: settings.catalog.routine_markdown(routine_day),
            currency: settings.default_currency.clone(),
        })
    }

    pub fn slug(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Render as markdown
    pub fn render(&self) -> String {
        compose_report(
            &self.slug(),
            &self.summary,
            &self.monthly,
            &self.routine_title,
            &self.routine_md,
            &self.currency,
        )
    }

    /// Render and store the report, replacing any earlier one for the date
    pub fn write(&self, storage: &Storage) -> FinfitResult<PathBuf> {
        storage.reports.write(&self.slug(), &self.render())
    }
}
