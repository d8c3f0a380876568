//! Exercise catalog
//!
//! A fixed table of routine days (PUSH, LEGS, PULL) and the ordered
//! exercise identifiers each one contains. The catalog is built once from
//! settings and passed by reference to whatever needs to validate or render
//! exercises.

use serde::{Deserialize, Serialize};

/// One routine day and its ordered exercises
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineDay {
    /// Day label, stored uppercase (e.g. "PUSH")
    pub name: String,
    /// Exercise identifiers in the order they are performed
    pub exercises: Vec<String>,
}

impl RoutineDay {
    pub fn new(name: &str, exercises: &[&str]) -> Self {
        Self {
            name: name.to_uppercase(),
            exercises: exercises.iter().map(|e| e.to_string()).collect(),
        }
    }
}

/// Immutable routine-day → exercise table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExerciseCatalog {
    days: Vec<RoutineDay>,
}

impl Default for ExerciseCatalog {
    fn default() -> Self {
        Self::new(vec![
            RoutineDay::new(
                "PUSH",
                &[
                    "flat_bench_press",
                    "incline_bench_press",
                    "military_press",
                    "triceps_extensions",
                    "lateral_raises",
                ],
            ),
            RoutineDay::new(
                "LEGS",
                &[
                    "leg_press",
                    "glute_bridge",
                    "romanian_deadlift",
                    "leg_extensions",
                    "standing_calf_raises",
                    "seated_leg_curl",
                    "adductors_machine",
                ],
            ),
            RoutineDay::new(
                "PULL",
                &[
                    "pull_ups",
                    "machine_row",
                    "face_pull",
                    "cable_biceps_curl",
                    "reverse_bicep_curl",
                ],
            ),
        ])
    }
}

impl ExerciseCatalog {
    /// Build a catalog from explicit routine days
    pub fn new(days: Vec<RoutineDay>) -> Self {
        Self { days }
    }

    /// Routine days in declaration order
    pub fn days(&self) -> &[RoutineDay] {
        &self.days
    }

    /// Look up a routine day by label (case-insensitive)
    pub fn day(&self, name: &str) -> Option<&RoutineDay> {
        self.days
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Exercises for a routine day, empty when the day is unknown
    pub fn exercises_for(&self, day: &str) -> &[String] {
        self.day(day).map(|d| d.exercises.as_slice()).unwrap_or(&[])
    }

    /// Check whether an exercise id belongs to any routine day
    pub fn contains(&self, exercise_id: &str) -> bool {
        self.days
            .iter()
            .any(|d| d.exercises.iter().any(|e| e == exercise_id))
    }

    /// Every exercise id in the catalog, sorted and deduplicated
    pub fn all_exercises(&self) -> Vec<&str> {
        let mut all: Vec<&str> = self
            .days
            .iter()
            .flat_map(|d| d.exercises.iter().map(String::as_str))
            .collect();
        all.sort_unstable();
        all.dedup();
        all
    }

    /// Render one routine day (or every day for `"all"`) as markdown tables
    ///
    /// Unknown day labels fall back to the first routine day.
    pub fn routine_markdown(&self, day: &str) -> String {
        if day.eq_ignore_ascii_case("all") {
            return self
                .days
                .iter()
                .map(render_day)
                .collect::<Vec<_>>()
                .join("\n");
        }

        match self.day(day).or_else(|| self.days.first()) {
            Some(d) => render_day(d),
            None => String::new(),
        }
    }
}

fn render_day(day: &RoutineDay) -> String {
    let mut out = format!("## {}\n", day.name);
    out.push_str("| Exercise | Weight | Reps | Notes |\n");
    out.push_str("|---|---|---|---|\n");
    for exercise in &day.exercises {
        out.push_str(&format!("| {} |  |  |  |\n", display_name(exercise)));
    }
    out
}

/// Turn `flat_bench_press` into `Flat Bench Press`
pub fn display_name(exercise_id: &str) -> String {
    exercise_id
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
