//! Time-bucketed payroll aggregation
//!
//! Pure folds over payroll records (or ledger entries): by month, by
//! quincena, and by calendar year. Buckets accumulate raw sums; rounding to
//! cents happens only when an [`AggregateRow`] is produced for output.

pub mod biweekly;
pub mod monthly;
pub mod yearly;

pub use biweekly::{aggregate_biweekly, BiweeklyAggregate, BiweeklyRow};
pub use monthly::{aggregate_monthly, latest_monthly_net, MonthlyAggregate};
pub use yearly::{available_years, yearly_overview, ProgressRow, YearTotals, YearlyOverview};

use chrono::NaiveDate;
use serde::Serialize;
use std::ops::AddAssign;

use crate::models::{month_slug, Amount, EntryKind, LedgerEntry, PayrollRecord};

/// Running sums for one bucket
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PeriodTotals {
    pub gross: Amount,
    pub deductions: Amount,
    pub other: Amount,
    pub net: Amount,
    pub tax_withheld: Amount,
}

impl AddAssign for PeriodTotals {
    fn add_assign(&mut self, rhs: Self) {
        self.gross += rhs.gross;
        self.deductions += rhs.deductions;
        self.other += rhs.other;
        self.net += rhs.net;
        self.tax_withheld += rhs.tax_withheld;
    }
}

impl PeriodTotals {
    /// Rounded output row for a period
    pub fn row(&self, period: impl Into<String>) -> AggregateRow {
        AggregateRow {
            period: period.into(),
            gross: self.gross.rounded(),
            deductions: self.deductions.rounded(),
            other: self.other.rounded(),
            net: self.net.rounded(),
            isr: self.tax_withheld.rounded(),
        }
    }
}

/// One output row, amounts rounded to cents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow {
    pub period: String,
    pub gross: f64,
    pub deductions: f64,
    pub other: f64,
    pub net: f64,
    /// Income tax withheld
    pub isr: f64,
}

/// Anything that can be bucketed by pay period
pub trait PayPeriodSource {
    /// Month bucket (`YYYY-MM`), possibly empty
    fn period_month(&self) -> String;

    /// Pay date, when it is a real calendar date
    fn paid_on(&self) -> Option<NaiveDate>;

    /// This item's contribution to a bucket
    fn totals(&self) -> PeriodTotals;
}

impl PayPeriodSource for PayrollRecord {
    fn period_month(&self) -> String {
        self.month.clone()
    }

    fn paid_on(&self) -> Option<NaiveDate> {
        PayrollRecord::paid_on(self)
    }

    fn totals(&self) -> PeriodTotals {
        PeriodTotals {
            gross: self.gross,
            deductions: self.deductions,
            other: self.other,
            net: self.net,
            tax_withheld: self.tax_withheld,
        }
    }
}

/// Ledger entries bucket as income (gross) or expense (deductions)
impl PayPeriodSource for LedgerEntry {
    fn period_month(&self) -> String {
        month_slug(self.date)
    }

    fn paid_on(&self) -> Option<NaiveDate> {
        Some(self.date)
    }

    fn totals(&self) -> PeriodTotals {
        let amount = self.signed_amount();
        match self.kind {
            EntryKind::Workout => PeriodTotals::default(),
            _ if amount.is_negative() => PeriodTotals {
                deductions: amount.abs(),
                net: amount,
                ..Default::default()
            },
            _ => PeriodTotals {
                gross: amount,
                net: amount,
                ..Default::default()
            },
        }
    }
}
