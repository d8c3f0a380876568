//! Yearly overview
//!
//! Totals for one calendar year, its monthly rows, and a cumulative net
//! series for progress charts.

use std::collections::BTreeSet;

use serde::ser::SerializeStruct;
use serde::Serialize;

use super::monthly::{aggregate_monthly, MonthlyAggregate};
use super::{PayPeriodSource, PeriodTotals};
use crate::models::period::month_label;
use crate::models::Amount;

/// Sums over the months of one year
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct YearTotals {
    pub totals: PeriodTotals,
    /// Months with at least one item
    pub months: usize,
    /// Items in the year
    pub entries: usize,
}

impl YearTotals {
    /// Average net per month; zero when the year has no months
    pub fn avg_net(&self) -> Amount {
        if self.months == 0 {
            Amount::zero()
        } else {
            Amount::new(self.totals.net.value() / self.months as f64)
        }
    }
}

impl Serialize for YearTotals {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("YearTotals", 8)?;
        s.serialize_field("gross", &self.totals.gross.rounded())?;
        s.serialize_field("deductions", &self.totals.deductions.rounded())?;
        s.serialize_field("other", &self.totals.other.rounded())?;
        s.serialize_field("net", &self.totals.net.rounded())?;
        s.serialize_field("isr", &self.totals.tax_withheld.rounded())?;
        s.serialize_field("months", &self.months)?;
        s.serialize_field("entries", &self.entries)?;
        s.serialize_field("avg_net", &self.avg_net().rounded())?;
        s.end()
    }
}

/// One point of the cumulative net series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressRow {
    pub period: String,
    /// `2025 · Jan`
    pub label: String,
    pub net: f64,
    pub gross: f64,
    pub cumulative_net: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyOverview {
    pub year: i32,
    /// Every year present in the input, not only the selected one
    pub available_years: Vec<i32>,
    pub monthly_rows: Vec<MonthlyAggregate>,
    pub totals: YearTotals,
    pub progress: Vec<ProgressRow>,
}

impl YearlyOverview {
    /// Cumulative net values, in period order
    pub fn cumulative_net(&self) -> Vec<f64> {
        self.progress.iter().map(|p| p.cumulative_net).collect()
    }
}

/// Distinct years across all items, ascending
pub fn available_years<T: PayPeriodSource>(items: &[T]) -> Vec<i32> {
    items
        .iter()
        .filter_map(|item| {
            let month = item.period_month();
            month.get(..4).and_then(|y| y.parse::<i32>().ok())
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Build the overview for `year`
pub fn yearly_overview<T: PayPeriodSource>(items: &[T], year: i32) -> YearlyOverview {
    let prefix = format!("{}-", year);
    let monthly_rows: Vec<MonthlyAggregate> = aggregate_monthly(items)
        .into_iter()
        .filter(|m| m.period.starts_with(&prefix))
        .collect();

    let mut totals = YearTotals {
        months: monthly_rows.len(),
        entries: items
            .iter()
            .filter(|item| item.period_month().starts_with(&prefix))
            .count(),
        ..Default::default()
    };

    let mut running = Amount::zero();
    let mut progress = Vec::with_capacity(monthly_rows.len());
    for month in &monthly_rows {
        totals.totals += month.totals;
        running += month.totals.net;
        progress.push(ProgressRow {
            period: month.period.clone(),
            label: month_label(&month.period),
            net: month.totals.net.rounded(),
            gross: month.totals.gross.rounded(),
            cumulative_net: running.rounded(),
        });
    }

    YearlyOverview {
        year,
        available_years: available_years(items),
        monthly_rows,
        totals,
        progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;

    #[test]
    fn test_two_month_example() {
        let records = vec![
            record("2025-01-15", 8994.54, 500.0, 0.0, 0.0),
            record("2025-02-15", 8994.54, 500.0, 0.0, 0.0),
        ];

        let overview = yearly_overview(&records, 2025);

        assert_eq!(overview.totals.totals.net.rounded(), 16989.08);
        assert_eq!(overview.cumulative_net(), vec![8494.54, 16989.08]);
        assert_eq!(overview.totals.months, 2);
        assert_eq!(overview.totals.entries, 2);
        assert_eq!(overview.totals.avg_net().rounded(), 8494.54);
        assert_eq!(overview.progress[0].label, "2025 · Jan");
    }

    #[test]
    fn test_other_years_filtered_but_listed() {
        let records = vec![
            record("2024-12-31", 100.0, 0.0, 0.0, 0.0),
            record("2025-01-15", 200.0, 0.0, 0.0, 0.0),
            record("2023-06-15", 300.0, 0.0, 0.0, 0.0),
        ];

        let overview = yearly_overview(&records, 2025);

        assert_eq!(overview.available_years, vec![2023, 2024, 2025]);
        assert_eq!(overview.monthly_rows.len(), 1);
        assert_eq!(overview.totals.totals.gross.value(), 200.0);
    }

    #[test]
    fn test_document_without_nomina_not_counted() {
        let bare = crate::cfdi::parse_payroll_str(
            "factura.xml",
            r#"<cfdi:Comprobante xmlns:cfdi="http://www.sat.gob.mx/cfd/4"
                Fecha="2025-01-20T10:00:00" Total="999.00" />"#,
        )
        .unwrap();
        let records = vec![record("2025-01-15", 200.0, 0.0, 0.0, 0.0), bare];

        let overview = yearly_overview(&records, 2025);

        assert_eq!(overview.available_years, vec![2025]);
        assert_eq!(overview.totals.entries, 1);
        assert_eq!(overview.totals.months, 1);
    }

    #[test]
    fn test_empty_year_has_zero_average() {
        let records = vec![record("2024-05-15", 100.0, 0.0, 0.0, 0.0)];
        let overview = yearly_overview(&records, 2030);

        assert_eq!(overview.totals.months, 0);
        assert_eq!(overview.totals.avg_net().value(), 0.0);
        assert!(overview.progress.is_empty());

        let json = serde_json::to_value(&overview.totals).unwrap();
        assert_eq!(json["avg_net"], 0.0);
    }
}
