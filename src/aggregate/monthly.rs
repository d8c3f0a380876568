//! Monthly buckets

use std::collections::BTreeMap;

use serde::Serialize;

use super::{AggregateRow, PayPeriodSource, PeriodTotals};
use crate::models::Amount;

/// Bucket key for items without a usable month
pub const UNKNOWN_PERIOD: &str = "unknown";

/// Totals for one month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyAggregate {
    /// `YYYY-MM`, or `unknown`
    pub period: String,
    pub totals: PeriodTotals,
}

impl MonthlyAggregate {
    pub fn row(&self) -> AggregateRow {
        self.totals.row(self.period.clone())
    }
}

impl Serialize for MonthlyAggregate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.row().serialize(serializer)
    }
}

/// Group items by month, sorted ascending by period
pub fn aggregate_monthly<T: PayPeriodSource>(items: &[T]) -> Vec<MonthlyAggregate> {
    let mut buckets: BTreeMap<String, PeriodTotals> = BTreeMap::new();
    for item in items {
        let month = item.period_month();
        let key = if month.is_empty() {
            UNKNOWN_PERIOD.to_string()
        } else {
            month
        };
        *buckets.entry(key).or_default() += item.totals();
    }

    buckets
        .into_iter()
        .map(|(period, totals)| MonthlyAggregate { period, totals })
        .collect()
}

/// Net of the last month in `monthly`, zero when there are none
pub fn latest_monthly_net(monthly: &[MonthlyAggregate]) -> Amount {
    monthly
        .last()
        .map(|m| m.totals.net)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;

    #[test]
    fn test_two_months() {
        let records = vec![
            record("2025-02-15", 8994.54, 500.0, 0.0, 300.0),
            record("2025-01-15", 8994.54, 500.0, 0.0, 300.0),
        ];

        let rows: Vec<AggregateRow> = aggregate_monthly(&records).iter().map(|m| m.row()).collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].period, "2025-01");
        assert_eq!(rows[0].net, 8494.54);
        assert_eq!(rows[1].period, "2025-02");
        assert_eq!(rows[1].net, 8494.54);
        assert_eq!(rows[1].isr, 300.0);
    }

    #[test]
    fn test_month_net_sum_matches_record_sum() {
        let records = vec![
            record("2025-01-15", 8994.54, 500.0, 0.0, 0.0),
            record("2025-01-31", 8994.54, 612.37, 125.5, 0.0),
            record("2025-03-15", 10000.01, 1234.56, 0.0, 0.0),
            record("2024-12-31", 7.77, 0.0, 0.0, 0.0),
        ];

        let monthly_sum: f64 = aggregate_monthly(&records)
            .iter()
            .map(|m| m.totals.net.value())
            .sum();
        let record_sum: f64 = records.iter().map(|r| r.net.value()).sum();

        assert!((monthly_sum - record_sum).abs() < 1e-9);
    }

    #[test]
    fn test_missing_month_is_unknown() {
        let mut r = record("2025-01-15", 100.0, 0.0, 0.0, 0.0);
        r.month = String::new();
        let monthly = aggregate_monthly(&[r]);
        assert_eq!(monthly[0].period, "unknown");
    }

    #[test]
    fn test_latest_monthly_net() {
        assert!(latest_monthly_net(&[]).is_zero());
        let records = vec![
            record("2025-01-15", 100.0, 10.0, 0.0, 0.0),
            record("2025-02-15", 200.0, 20.0, 0.0, 0.0),
        ];
        assert_eq!(latest_monthly_net(&aggregate_monthly(&records)).value(), 180.0);
    }
}
