//! Monthly fitness log files
//!
//! `fitness-YYYY-MM.md` holds one section per session:
//!
//! ```text
//! # Fitness 2025-01
//!
//! ## 2025-01-15 — PUSH
//! - flat_bench_press | 100 | 5 | felt strong
//! - pull_ups | bw | 12 |
//! ```

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use tracing::{debug, info};

use super::file_io::{append_text, create_if_missing, read_text};
use crate::error::{FinfitError, FinfitResult};
use crate::models::{month_slug, WeightToken, WorkoutSet};

const SECTION_SEPARATOR: char = '—';

/// Repository for the fitness log files
pub struct FitnessLogRepository {
    dir: PathBuf,
}

impl FitnessLogRepository {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Log file for the month containing `date`
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.path_for_month(&month_slug(date))
    }

    pub fn path_for_month(&self, month: &str) -> PathBuf {
        self.dir.join(format!("fitness-{}.md", month))
    }

    /// Append one session section to the month's log
    pub fn append_workout(
        &self,
        date: NaiveDate,
        day: &str,
        sets: &[WorkoutSet],
    ) -> FinfitResult<PathBuf> {
        let path = self.path_for(date);
        let header = format!("# Fitness {:04}-{:02}\n\n", date.year(), date.month());
        create_if_missing(&path, &header)?;

        let mut section = format!(
            "## {} {} {}\n",
            date.format("%Y-%m-%d"),
            SECTION_SEPARATOR,
            day.to_uppercase()
        );
        for set in sets {
            section.push_str(&format!(
                "- {} | {} | {} | {}\n",
                set.exercise_id, set.weight_raw, set.reps, set.notes
            ));
        }
        section.push('\n');

        append_text(&path, &section)?;
        info!(sets = sets.len(), path = %path.display(), "Logged workout sets");
        Ok(path)
    }

    /// Sets logged in one month (`YYYY-MM`); a missing log is empty
    pub fn load_month(&self, month: &str) -> FinfitResult<Vec<WorkoutSet>> {
        load_workouts(&self.path_for_month(month))
    }

    /// Every set in every monthly log, in file order
    pub fn load_all(&self) -> FinfitResult<Vec<WorkoutSet>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut files: Vec<PathBuf> = std::fs::read_dir(&self.dir)
            .map_err(|e| {
                FinfitError::Storage(format!("Failed to list {}: {}", self.dir.display(), e))
            })?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| {
                p.is_file()
                    && p.file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.starts_with("fitness-") && n.ends_with(".md"))
            })
            .collect();
        files.sort();

        let mut sets = Vec::new();
        for path in files {
            sets.extend(load_workouts(&path)?);
        }
        Ok(sets)
    }
}

/// Read every set from a log file
///
/// Lines that don't parse, and lines under a heading without a valid date,
/// are skipped. A missing file yields no sets.
pub fn load_workouts(path: &Path) -> FinfitResult<Vec<WorkoutSet>> {
    let Some(content) = read_text(path)? else {
        return Ok(Vec::new());
    };

    let mut sets = Vec::new();
    let mut date: Option<NaiveDate> = None;
    let mut day = String::new();

    for line in content.lines().map(str::trim) {
        if let Some(heading) = line.strip_prefix("## ") {
            match parse_heading(heading) {
                Some((d, label)) => {
                    date = Some(d);
                    day = label;
                }
                None => date = None,
            }
            continue;
        }

        if let (Some(date), Some(set)) = (date, parse_set_line(line)) {
            let (exercise_id, weight_raw, reps, notes) = set;
            sets.push(WorkoutSet {
                date,
                day: day.clone(),
                exercise_id,
                weight: WeightToken::parse(&weight_raw).and_then(|w| w.kilograms()),
                weight_raw,
                reps,
                notes,
            });
        }
    }

    debug!(count = sets.len(), path = %path.display(), "Loaded workout sets");
    Ok(sets)
}

fn parse_heading(heading: &str) -> Option<(NaiveDate, String)> {
    let (date_raw, day) = heading.split_once(SECTION_SEPARATOR)?;
    let date = NaiveDate::parse_from_str(date_raw.trim(), "%Y-%m-%d").ok()?;
    Some((date, day.trim().to_string()))
}

fn parse_set_line(line: &str) -> Option<(String, String, u32, String)> {
    let body = line.strip_prefix("- ")?;
    let parts: Vec<&str> = body.split('|').map(str::trim).collect();
    let [exercise_id, weight_raw, reps, notes] = parts.as_slice() else {
        return None;
    };
    let reps = reps.parse::<u32>().ok()?;
    Some((
        exercise_id.to_string(),
        weight_raw.to_string(),
        reps,
        notes.to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::date;
    use tempfile::TempDir;

    fn set(exercise_id: &str, weight_raw: &str, reps: u32, notes: &str) -> WorkoutSet {
        WorkoutSet {
            date: date(2025, 1, 15),
            day: "PUSH".into(),
            exercise_id: exercise_id.into(),
            weight_raw: weight_raw.into(),
            reps,
            notes: notes.into(),
            weight: WeightToken::parse(weight_raw).and_then(|w| w.kilograms()),
        }
    }

    #[test]
    fn test_append_writes_expected_layout() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FitnessLogRepository::new(temp_dir.path().to_path_buf());

        let path = repo
            .append_workout(
                date(2025, 1, 15),
                "push",
                &[set("flat_bench_press", "100", 5, "felt strong"), set("pull_ups", "bw", 12, "")],
            )
            .unwrap();

        assert_eq!(path, temp_dir.path().join("fitness-2025-01.md"));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "# Fitness 2025-01\n\n\
             ## 2025-01-15 — PUSH\n\
             - flat_bench_press | 100 | 5 | felt strong\n\
             - pull_ups | bw | 12 | \n\n"
        );
    }

    #[test]
    fn test_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FitnessLogRepository::new(temp_dir.path().to_path_buf());
        let sets = vec![set("flat_bench_press", "100", 5, "top set"), set("pull_ups", "bw", 12, "")];

        repo.append_workout(date(2025, 1, 15), "PUSH", &sets).unwrap();

        assert_eq!(repo.load_month("2025-01").unwrap(), sets);
        assert_eq!(repo.load_all().unwrap(), sets);
    }

    #[test]
    fn test_load_is_tolerant() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("fitness-2025-02.md");
        std::fs::write(
            &path,
            "# Fitness 2025-02\n\n\
             - orphan | 50 | 5 | before any heading\n\
             ## not a date — LEGS\n\
             - back_squat | 120 | 5 | skipped\n\
             ## 2025-02-03 — LEGS\n\
             - back_squat | 120 | five | bad reps\n\
             - back_squat | 120 | 5\n\
             - back_squat | heavy | 3 | unknown weight\n\
             - romanian_deadlift | 90 | 8 | ok\n",
        )
        .unwrap();

        let sets = load_workouts(&path).unwrap();

        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].weight, None);
        assert_eq!(sets[1].exercise_id, "romanian_deadlift");
        assert_eq!(sets[1].day, "LEGS");
        assert_eq!(sets[1].weight, Some(90.0));
    }

    #[test]
    fn test_missing_log_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FitnessLogRepository::new(temp_dir.path().join("none"));
        assert!(repo.load_month("2025-03").unwrap().is_empty());
        assert!(repo.load_all().unwrap().is_empty());
    }
}
