//! Budget service
//!
//! Combines the markdown budget with the latest month of payroll net pay.

use serde::Serialize;
use tracing::debug;

use crate::aggregate::{aggregate_monthly, latest_monthly_net, MonthlyAggregate};
use crate::cfdi::parse_all;
use crate::config::settings::Settings;
use crate::error::FinfitResult;
use crate::models::{Amount, BudgetSheet, PayrollBatch, DEFAULT_BUDGET_MD};
use crate::storage::{read_text, Storage};

/// Budget totals
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetSummary {
    pub total_income: Amount,
    pub total_expenses: Amount,
    pub active_debts: Amount,
    /// income - expenses - debts
    pub net_savings: Amount,
    /// Net pay of the latest payroll month
    pub monthly_cfdi_net: Amount,
    /// monthly_cfdi_net - expenses
    pub effective_balance: Amount,
    pub sheet: BudgetSheet,
}

impl BudgetSummary {
    /// Compute totals for a budget sheet and the latest payroll net
    pub fn compute(sheet: BudgetSheet, cfdi_net: Option<Amount>) -> Self {
        let total_income = sheet.total_income();
        let total_expenses = sheet.total_expenses();
        let active_debts = sheet.total_debts();
        let monthly_cfdi_net = cfdi_net.unwrap_or_default();

        Self {
            total_income,
            total_expenses,
            active_debts,
            net_savings: total_income - total_expenses - active_debts,
            monthly_cfdi_net,
            effective_balance: monthly_cfdi_net - total_expenses,
            sheet,
        }
    }
}

impl Serialize for BudgetSummary {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("BudgetSummary", 7)?;
        s.serialize_field("total_income", &self.total_income.rounded())?;
        s.serialize_field("total_expenses", &self.total_expenses.rounded())?;
        s.serialize_field("active_debts", &self.active_debts.rounded())?;
        s.serialize_field("net_savings", &self.net_savings.rounded())?;
        s.serialize_field("monthly_cfdi_net", &self.monthly_cfdi_net.rounded())?;
        s.serialize_field("effective_balance", &self.effective_balance.rounded())?;
        s.serialize_field("sections", &self.sheet)?;
        s.end()
    }
}

/// Service for budget and payroll overviews
pub struct BudgetService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Budget markdown: the configured file, else `budget.md`, else the built-in budget
    pub fn budget_markdown(&self) -> FinfitResult<String> {
        let path = self
            .settings
            .budget_file
            .clone()
            .unwrap_or_else(|| self.storage.paths().budget_file());
        match read_text(&path)? {
            Some(text) => Ok(text),
            None => {
                debug!(path = %path.display(), "No budget file, using the built-in budget");
                Ok(DEFAULT_BUDGET_MD.to_string())
            }
        }
    }

    /// Parse every known payroll document
    pub fn payroll(&self) -> FinfitResult<PayrollBatch> {
        Ok(parse_all(self.storage.payroll_documents()?))
    }

    /// Monthly payroll buckets over every known document
    pub fn monthly_payroll(&self) -> FinfitResult<Vec<MonthlyAggregate>> {
        Ok(aggregate_monthly(&self.payroll()?.records))
    }

    /// Budget summary against the latest payroll month
    pub fn summary(&self) -> FinfitResult<BudgetSummary> {
        let monthly = self.monthly_payroll()?;
        self.summary_with(&monthly)
    }

    /// Budget summary against already computed monthly buckets
    pub fn summary_with(&self, monthly: &[MonthlyAggregate]) -> FinfitResult<BudgetSummary> {
        let sheet = BudgetSheet::parse(&self.budget_markdown()?);
        Ok(BudgetSummary::compute(sheet, Some(latest_monthly_net(monthly))))
    }
}
