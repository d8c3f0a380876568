//! Monthly Fitness Report

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::config::catalog::ExerciseCatalog;
use crate::error::{FinfitError, FinfitResult};
use crate::models::workout::estimated_one_rep_max;
use crate::models::WorkoutSet;
use crate::services::{best_sets, pr_history};
use crate::storage::Storage;

/// Render the PR list and the per-exercise top stats table
pub fn render_fitness_report(
    month: &str,
    workouts: &[WorkoutSet],
    catalog: &ExerciseCatalog,
) -> String {
    let best = best_sets(workouts);
    let prs = pr_history(workouts);

    let mut lines = vec![format!("# Fitness Report — {}", month), String::new()];

    lines.push("## PRs".to_string());
    for set in &prs {
        let estimate = set.estimated_one_rep_max().unwrap_or(0.0);
        lines.push(format!(
            "- {}: {}kg x {} (Est 1RM ~ {:.1}kg) — {}",
            set.exercise_id,
            set.weight_raw,
            set.reps,
            estimate,
            set.date.format("%Y-%m-%d")
        ));
    }
    if prs.is_empty() {
        lines.push("- none".to_string());
    }
    lines.push(String::new());

    lines.push("## Top Stats".to_string());
    lines.push("| Exercise | Best Set | Best Weight | Best Reps | Est 1RM |".to_string());
    lines.push("|---|---:|---:|---:|---:|".to_string());
    for exercise in catalog.all_exercises() {
        let row = best
            .get(exercise)
            .and_then(|set| set.weight.map(|w| (w, set.reps)))
            .map(|(weight, reps)| {
                let estimate = estimated_one_rep_max(weight, reps);
                format!(
                    "| {} | {:.0}kg x {} | {:.0} | {} | {:.1} |",
                    exercise, weight, reps, weight, reps, estimate
                )
            })
            .unwrap_or_else(|| format!("| {} | - | - | - | - |", exercise));
        lines.push(row);
    }

    if workouts.is_empty() {
        lines.push("\n_No workouts logged for this period._".to_string());
    }

    lines.join("\n")
}

/// Fitness report for one month (`YYYY-MM`)
#[derive(Debug, Clone)]
pub struct FitnessReport {
    pub month: String,
    pub workouts: Vec<WorkoutSet>,
}

impl FitnessReport {
    pub fn generate(storage: &Storage, month: &str) -> FinfitResult<Self> {
        if NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d").is_err() {
            return Err(FinfitError::Report(format!(
                "Invalid month '{}'. Use YYYY-MM",
                month
            )));
        }
        Ok(Self {
            month: month.to_string(),
            workouts: storage.fitness.load_month(month)?,
        })
    }

    pub fn render(&self, catalog: &ExerciseCatalog) -> String {
        render_fitness_report(&self.month, &self.workouts, catalog)
    }

    /// Store as `<month>.md` under the monthly fitness reports directory
    pub fn write(&self, storage: &Storage, catalog: &ExerciseCatalog) -> FinfitResult<PathBuf> {
        storage.fitness_reports.write(&self.month, &self.render(catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinfitPaths;
    use crate::services::parse_set;
    use crate::test_support::date;
    use tempfile::TempDir;

    fn set(day: u32, raw: &str) -> WorkoutSet {
        parse_set(raw, date(2025, 1, day), "push", &ExerciseCatalog::default()).unwrap()
    }

    #[test]
    fn test_render_prs_and_stats() {
        let workouts = vec![
            set(10, "flat_bench_press|100|5|"),
            set(12, "flat_bench_press|100|8|"),
            set(12, "pull_ups|bw|12|"),
        ];

        let md = render_fitness_report("2025-01", &workouts, &ExerciseCatalog::default());

        assert!(md.starts_with("# Fitness Report — 2025-01\n\n## PRs\n"));
        assert!(md.contains("- flat_bench_press: 100kg x 5 (Est 1RM ~ 116.7kg) — 2025-01-10\n"));
        assert!(md.contains("- flat_bench_press: 100kg x 8 (Est 1RM ~ 126.7kg) — 2025-01-12\n"));
        assert!(md.contains("| flat_bench_press | 100kg x 8 | 100 | 8 | 126.7 |"));
        assert!(md.contains("| pull_ups | - | - | - | - |"));
        assert!(!md.contains("_No workouts logged"));
    }

    #[test]
    fn test_render_empty_month() {
        let md = render_fitness_report("2025-02", &[], &ExerciseCatalog::default());

        assert!(md.contains("## PRs\n- none\n"));
        assert!(md.ends_with("\n\n_No workouts logged for this period._"));
    }

    #[test]
    fn test_write_monthly_report() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(FinfitPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let catalog = ExerciseCatalog::default();
        storage
            .fitness
            .append_workout(date(2025, 1, 10), "PUSH", &[set(10, "flat_bench_press|100|5|")])
            .unwrap();

        let report = FitnessReport::generate(&storage, "2025-01").unwrap();
        let path = report.write(&storage, &catalog).unwrap();

        assert!(path.ends_with("2025-01.md"));
        let (content, _) = storage.fitness_reports.read("2025-01").unwrap();
        assert!(content.contains("Est 1RM ~ 116.7kg"));
    }

    #[test]
    fn test_generate_rejects_bad_month() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(FinfitPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();

        let err = FitnessReport::generate(&storage, "2025-13").unwrap_err();
        assert!(matches!(err, FinfitError::Report(_)));
        assert!(FitnessReport::generate(&storage, "../x").is_err());
    }
}
