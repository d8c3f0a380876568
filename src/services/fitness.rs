//! Fitness service
//!
//! Validates workout sets against the exercise catalog, logs sessions, and
//! ranks sets by estimated one-rep max.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::catalog::ExerciseCatalog;
use crate::error::{FinfitError, FinfitResult};
use crate::models::{Amount, EntryId, EntryKind, LedgerEntry, WeightToken, WorkoutSet};
use crate::services::EntryService;
use crate::storage::Storage;

/// Category of workout ledger entries
pub const FITNESS_CATEGORY: &str = "fitness";

/// Parse one `exercise|weight|reps|notes` set
///
/// The exercise must be in the catalog; weight must be a number, `bw` or
/// blank; reps must be a non-negative integer.
pub fn parse_set(
    raw: &str,
    date: NaiveDate,
    day: &str,
    catalog: &ExerciseCatalog,
) -> FinfitResult<WorkoutSet> {
    let parts: Vec<&str> = raw.split('|').map(str::trim).collect();
    let [exercise_id, weight_raw, reps_raw, notes] = parts.as_slice() else {
        return Err(FinfitError::Validation(
            "Set must be 'exercise|weight|reps|notes'".into(),
        ));
    };

    if !catalog.contains(exercise_id) {
        return Err(FinfitError::unknown_exercise(exercise_id));
    }
    let weight = WeightToken::parse(weight_raw)
        .ok_or_else(|| FinfitError::Validation(format!("Invalid weight '{}'", weight_raw)))?;
    let reps = reps_raw
        .parse::<u32>()
        .map_err(|_| FinfitError::Validation(format!("Invalid reps '{}'", reps_raw)))?;

    Ok(WorkoutSet {
        date,
        day: day.to_uppercase(),
        exercise_id: exercise_id.to_string(),
        weight_raw: weight_raw.to_string(),
        reps,
        notes: notes.to_string(),
        weight: weight.kilograms(),
    })
}

/// Parse a whole submission; any invalid set rejects all of them
pub fn parse_sets<S: AsRef<str>>(
    raws: &[S],
    date: NaiveDate,
    day: &str,
    catalog: &ExerciseCatalog,
) -> FinfitResult<Vec<WorkoutSet>> {
    raws.iter()
        .map(|raw| parse_set(raw.as_ref(), date, day, catalog))
        .collect()
}

/// Highest estimated 1RM set per exercise; ties keep the first seen
///
/// Bodyweight sets are not ranked.
pub fn best_sets(workouts: &[WorkoutSet]) -> BTreeMap<String, WorkoutSet> {
    let mut best: BTreeMap<String, WorkoutSet> = BTreeMap::new();
    for set in workouts {
        let Some(estimate) = set.estimated_one_rep_max() else {
            continue;
        };
        let beats_current = best
            .get(&set.exercise_id)
            .and_then(WorkoutSet::estimated_one_rep_max)
            .map_or(true, |current| estimate > current);
        if beats_current {
            best.insert(set.exercise_id.clone(), set.clone());
        }
    }
    best
}

/// Sets that beat every earlier set of the same exercise
///
/// Scans in (date, exercise) order; a set is recorded only when its
/// estimated 1RM is strictly above the best so far.
pub fn pr_history(workouts: &[WorkoutSet]) -> Vec<WorkoutSet> {
    let mut ordered: Vec<&WorkoutSet> = workouts.iter().collect();
    ordered.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.exercise_id.cmp(&b.exercise_id))
    });

    let mut best_by_exercise: BTreeMap<&str, f64> = BTreeMap::new();
    let mut history = Vec::new();
    for set in ordered {
        let Some(estimate) = set.estimated_one_rep_max() else {
            continue;
        };
        let previous = best_by_exercise.get(set.exercise_id.as_str()).copied().unwrap_or(0.0);
        if estimate > previous {
            best_by_exercise.insert(&set.exercise_id, estimate);
            history.push(set.clone());
        }
    }
    history
}

/// Per-exercise maxima
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ExerciseStats {
    pub max_weight: f64,
    /// Includes bodyweight sets
    pub max_reps: u32,
    pub best_est_1rm: f64,
}

/// Max weight, max reps and best estimated 1RM for each exercise
pub fn summarize_workouts(workouts: &[WorkoutSet]) -> BTreeMap<String, ExerciseStats> {
    let mut stats: BTreeMap<String, ExerciseStats> = BTreeMap::new();
    for set in workouts {
        let entry = stats.entry(set.exercise_id.clone()).or_default();
        if let (Some(weight), Some(estimate)) = (set.weight, set.estimated_one_rep_max()) {
            entry.max_weight = entry.max_weight.max(weight);
            entry.best_est_1rm = entry.best_est_1rm.max(estimate);
        }
        entry.max_reps = entry.max_reps.max(set.reps);
    }
    stats
}

/// Ledger marker for a logged session
pub fn session_entry(date: NaiveDate, day: &str, sets: &[WorkoutSet], currency: &str) -> LedgerEntry {
    let day = day.to_uppercase();
    let fingerprint: Vec<String> = sets
        .iter()
        .map(|s| format!("{}|{}|{}|{}", s.exercise_id, s.weight_raw, s.reps, s.notes))
        .collect();

    LedgerEntry {
        date,
        kind: EntryKind::Workout,
        category: FITNESS_CATEGORY.to_string(),
        description: format!("{} session ({} sets)", day, sets.len()),
        amount: Amount::zero(),
        currency: currency.to_string(),
        source: FITNESS_CATEGORY.to_string(),
        uuid: EntryId::hashed(&format!(
            "workout-{}-{}-{}",
            date.format("%Y-%m-%d"),
            day,
            fingerprint.join(";")
        )),
    }
}

/// Service for logging and reviewing workouts
pub struct FitnessService<'a> {
    storage: &'a Storage,
    catalog: &'a ExerciseCatalog,
}

impl<'a> FitnessService<'a> {
    /// Create a new fitness service
    pub fn new(storage: &'a Storage, catalog: &'a ExerciseCatalog) -> Self {
        Self { storage, catalog }
    }

    /// Validate and log a session, and mark it in the ledger
    ///
    /// Nothing is written when any set is invalid.
    pub fn log_session<S: AsRef<str>>(
        &self,
        date: NaiveDate,
        day: &str,
        raw_sets: &[S],
        currency: &str,
    ) -> FinfitResult<(PathBuf, Vec<WorkoutSet>)> {
        if raw_sets.is_empty() {
            return Err(FinfitError::Validation("No sets given".into()));
        }
        let sets = parse_sets(raw_sets, date, day, self.catalog)?;

        let path = self.storage.fitness.append_workout(date, day, &sets)?;
        EntryService::new(self.storage).record(vec![session_entry(date, day, &sets, currency)])?;

        Ok((path, sets))
    }

    /// Sets logged in a month (`YYYY-MM`)
    pub fn month(&self, month: &str) -> FinfitResult<Vec<WorkoutSet>> {
        self.storage.fitness.load_month(month)
    }

    /// Every logged set
    pub fn all(&self) -> FinfitResult<Vec<WorkoutSet>> {
        self.storage.fitness.load_all()
    }
}
