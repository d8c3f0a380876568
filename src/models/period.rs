//! Calendar period helpers
//!
//! Month slugs (`YYYY-MM`), half-month pay periods (quincenas), and the
//! week/month ranges used by ledger summaries.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse a document date, accepting `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS`
pub fn parse_document_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
}

/// `YYYY-MM` for a date
pub fn month_slug(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Number of days in the given month, or `None` for an invalid month
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((next - first).num_days() as u32)
}

/// `2025-01` → `2025 · Jan`; anything unparseable is returned as-is
/// (or `unknown` when empty)
pub fn month_label(period: &str) -> String {
    let parsed = period.split_once('-').and_then(|(year, month)| {
        let idx: usize = month.parse().ok()?;
        let name = MONTH_ABBREVIATIONS.get(idx.checked_sub(1)?)?;
        Some(format!("{} · {}", year, name))
    });

    match parsed {
        Some(label) => label,
        None if period.is_empty() => "unknown".to_string(),
        None => period.to_string(),
    }
}

/// Which half of the month a pay date falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Half {
    /// Days 1–15
    First,
    /// Day 16 through the last day of the month
    Second,
}

impl Half {
    pub fn number(&self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
        }
    }
}

/// A half-month pay period, ordered by (year, month, half)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Quincena {
    pub year: i32,
    pub month: u32,
    pub half: Half,
}

impl Quincena {
    /// The quincena containing a date
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            half: if date.day() <= 15 {
                Half::First
            } else {
                Half::Second
            },
        }
    }

    pub fn start_day(&self) -> u32 {
        match self.half {
            Half::First => 1,
            Half::Second => 16,
        }
    }

    /// Last day of the period, using the month's real length
    pub fn end_day(&self) -> u32 {
        match self.half {
            Half::First => 15,
            Half::Second => days_in_month(self.year, self.month).unwrap_or(31),
        }
    }

    /// Sortable key, e.g. `2025-02-Q2`
    pub fn key(&self) -> String {
        format!("{:04}-{:02}-Q{}", self.year, self.month, self.half.number())
    }

    /// Human label, e.g. `2025-02 2a quincena`
    pub fn label(&self) -> String {
        let ordinal = match self.half {
            Half::First => "1a",
            Half::Second => "2a",
        };
        format!("{:04}-{:02} {} quincena", self.year, self.month, ordinal)
    }

    /// Date range, e.g. `2025-02-16 · 2025-02-28`
    pub fn range(&self) -> String {
        format!(
            "{y:04}-{m:02}-{s:02} · {y:04}-{m:02}-{e:02}",
            y = self.year,
            m = self.month,
            s = self.start_day(),
            e = self.end_day()
        )
    }
}

impl fmt::Display for Quincena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// The 7-day window containing `anchor`, starting on `week_start`
/// (0 = Monday ... 6 = Sunday)
pub fn weekly_range(anchor: NaiveDate, week_start: u8) -> (NaiveDate, NaiveDate) {
    let weekday = anchor.weekday().num_days_from_monday() as i64;
    let delta = (weekday - week_start as i64).rem_euclid(7);
    let start = anchor - Duration::days(delta);
    (start, start + Duration::days(6))
}

/// First and last day of the month containing `anchor`
pub fn monthly_range(anchor: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = anchor.with_day(1).unwrap_or(anchor);
    let days = days_in_month(anchor.year(), anchor.month()).unwrap_or(28);
    (start, start + Duration::days(days as i64 - 1))
}
