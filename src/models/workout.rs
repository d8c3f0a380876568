//! Workout set model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Weight token marking a bodyweight set
pub const BODYWEIGHT_MARKER: &str = "bw";

/// A parsed weight token
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightToken {
    /// Bodyweight marker or blank
    Bodyweight,
    Kilograms(f64),
}

impl WeightToken {
    /// Read a weight token; `None` when it is neither a number nor bodyweight
    pub fn parse(raw: &str) -> Option<Self> {
        let token = raw.trim();
        if token.is_empty() || token.eq_ignore_ascii_case(BODYWEIGHT_MARKER) {
            return Some(Self::Bodyweight);
        }
        token
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite())
            .map(Self::Kilograms)
    }

    pub fn kilograms(&self) -> Option<f64> {
        match self {
            Self::Bodyweight => None,
            Self::Kilograms(w) => Some(*w),
        }
    }
}

/// Estimated one-rep max: `weight * (1 + reps / 30)`
pub fn estimated_one_rep_max(weight: f64, reps: u32) -> f64 {
    weight * (1.0 + reps as f64 / 30.0)
}

/// One exercise set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub date: NaiveDate,
    /// Routine day label (PUSH/LEGS/PULL)
    pub day: String,
    pub exercise_id: String,
    /// Weight exactly as entered
    pub weight_raw: String,
    pub reps: u32,
    pub notes: String,
    /// Numeric weight; `None` for bodyweight sets
    pub weight: Option<f64>,
}

impl WorkoutSet {
    pub fn is_bodyweight(&self) -> bool {
        self.weight.is_none()
    }

    /// Estimated 1RM, absent for bodyweight sets
    pub fn estimated_one_rep_max(&self) -> Option<f64> {
        self.weight.map(|w| estimated_one_rep_max(w, self.reps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_token() {
        assert_eq!(WeightToken::parse("100"), Some(WeightToken::Kilograms(100.0)));
        assert_eq!(WeightToken::parse(" 62.5 "), Some(WeightToken::Kilograms(62.5)));
        assert_eq!(WeightToken::parse("BW"), Some(WeightToken::Bodyweight));
        assert_eq!(WeightToken::parse(""), Some(WeightToken::Bodyweight));
        assert_eq!(WeightToken::parse("heavy"), None);
        assert_eq!(WeightToken::Kilograms(40.0).kilograms(), Some(40.0));
    }

    #[test]
    fn test_estimated_one_rep_max() {
        assert!((estimated_one_rep_max(100.0, 5) - 116.6667).abs() < 1e-3);
        assert!((estimated_one_rep_max(100.0, 8) - 126.6667).abs() < 1e-3);
        assert_eq!(estimated_one_rep_max(90.0, 0), 90.0);
    }
}
