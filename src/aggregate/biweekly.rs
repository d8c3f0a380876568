//! Quincena (half-month) buckets
//!
//! Days 1–15 form the first half; day 16 through the month's real last day
//! form the second. Items without a valid pay date are left out.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{AggregateRow, PayPeriodSource, PeriodTotals};
use crate::models::Quincena;

/// Totals for one quincena
#[derive(Debug, Clone, PartialEq)]
pub struct BiweeklyAggregate {
    pub quincena: Quincena,
    pub totals: PeriodTotals,
}

/// Serialized form: rounded amounts plus label and date range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BiweeklyRow {
    #[serde(flatten)]
    pub row: AggregateRow,
    pub label: String,
    pub range: String,
}

impl BiweeklyAggregate {
    pub fn row(&self) -> BiweeklyRow {
        BiweeklyRow {
            row: self.totals.row(self.quincena.key()),
            label: self.quincena.label(),
            range: self.quincena.range(),
        }
    }
}

impl Serialize for BiweeklyAggregate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.row().serialize(serializer)
    }
}

/// Group items by quincena, sorted by (year, month, half)
pub fn aggregate_biweekly<T: PayPeriodSource>(items: &[T]) -> Vec<BiweeklyAggregate> {
    let mut buckets: BTreeMap<Quincena, PeriodTotals> = BTreeMap::new();
    for item in items {
        if let Some(paid) = item.paid_on() {
            *buckets.entry(Quincena::containing(paid)).or_default() += item.totals();
        }
    }

    buckets
        .into_iter()
        .map(|(quincena, totals)| BiweeklyAggregate { quincena, totals })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Half;
    use crate::test_support::record;

    #[test]
    fn test_halves_and_order() {
        let records = vec![
            record("2025-01-31", 100.0, 0.0, 0.0, 0.0),
            record("2025-01-15", 200.0, 0.0, 0.0, 0.0),
            record("2025-01-01", 50.0, 0.0, 0.0, 0.0),
            record("2025-01-16", 25.0, 0.0, 0.0, 0.0),
        ];

        let buckets = aggregate_biweekly(&records);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].quincena.half, Half::First);
        assert_eq!(buckets[0].totals.gross.value(), 250.0);
        assert_eq!(buckets[1].totals.gross.value(), 125.0);

        let row = buckets[1].row();
        assert_eq!(row.row.period, "2025-01-Q2");
        assert_eq!(row.label, "2025-01 2a quincena");
        assert_eq!(row.range, "2025-01-16 · 2025-01-31");
    }

    #[test]
    fn test_leap_and_common_february() {
        let leap = aggregate_biweekly(&[record("2024-02-29", 1.0, 0.0, 0.0, 0.0)]);
        assert_eq!(leap[0].quincena.half, Half::Second);
        assert_eq!(leap[0].quincena.end_day(), 29);
        assert_eq!(leap[0].row().range, "2024-02-16 · 2024-02-29");

        let common = aggregate_biweekly(&[record("2025-02-28", 1.0, 0.0, 0.0, 0.0)]);
        assert_eq!(common[0].quincena.half, Half::Second);
        assert_eq!(common[0].quincena.end_day(), 28);
    }

    #[test]
    fn test_invalid_pay_date_skipped() {
        let records = vec![
            record("2025-13-40", 1.0, 0.0, 0.0, 0.0),
            record("2025-03-10", 1.0, 0.0, 0.0, 0.0),
        ];
        let buckets = aggregate_biweekly(&records);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].row().label, "2025-03 1a quincena");
    }

    #[test]
    fn test_serialized_shape() {
        let buckets = aggregate_biweekly(&[record("2025-01-15", 8994.54, 500.0, 0.0, 0.0)]);
        let json = serde_json::to_value(&buckets[0]).unwrap();
        assert_eq!(json["period"], "2025-01-Q1");
        assert_eq!(json["net"], 8494.54);
        assert_eq!(json["range"], "2025-01-01 · 2025-01-15");
    }
}
