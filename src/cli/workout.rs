//! Workout CLI commands
//!
//! Logging gym sessions, monthly fitness reports and PR history.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::FinfitResult;
use crate::models::month_slug;
use crate::reports::FitnessReport;
use crate::services::{pr_history, summarize_workouts, FitnessService};
use crate::storage::Storage;

use super::{parse_date_or_today, print_json};

/// Workout subcommands
#[derive(Subcommand)]
pub enum WorkoutCommands {
    /// Log a session
    Log {
        /// Routine day (push, legs, pull)
        #[arg(long)]
        day: String,
        /// Session date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Sets as 'exercise|weight|reps|notes' (weight may be 'bw')
        #[arg(required = true)]
        sets: Vec<String>,
    },
    /// Show and save the fitness report for a month
    Report {
        /// Month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
        /// Don't save the report to disk
        #[arg(long)]
        no_write: bool,
    },
    /// Show personal records across every logged month
    Prs {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show per-exercise maxima across every logged month
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Handle a workout command
pub fn handle_workout_command(
    storage: &Storage,
    settings: &Settings,
    cmd: WorkoutCommands,
) -> FinfitResult<()> {
    let service = FitnessService::new(storage, &settings.catalog);

    match cmd {
        WorkoutCommands::Log { day, date, sets } => {
            let date = parse_date_or_today(date.as_deref())?;
            let (path, logged) =
                service.log_session(date, &day, &sets, &settings.default_currency)?;

            println!(
                "Logged {} set(s) for {} on {}",
                logged.len(),
                day.to_uppercase(),
                date.format("%Y-%m-%d")
            );
            for set in &logged {
                match set.estimated_one_rep_max() {
                    Some(estimate) => println!(
                        "  {:<28} {:>6} x {:<3} est. 1RM {:.1}kg",
                        set.exercise_id, set.weight_raw, set.reps, estimate
                    ),
                    None => println!(
                        "  {:<28} {:>6} x {:<3}",
                        set.exercise_id, set.weight_raw, set.reps
                    ),
                }
            }
            println!("  Log: {}", path.display());
        }

        WorkoutCommands::Report { month, no_write } => {
            let month = match month {
                Some(m) => m,
                None => month_slug(chrono::Local::now().date_naive()),
            };
            let report = FitnessReport::generate(storage, &month)?;

            println!("{}", report.render(&settings.catalog));
            if !no_write {
                let path = report.write(storage, &settings.catalog)?;
                println!("\nSaved to: {}", path.display());
            }
        }

        WorkoutCommands::Prs { json } => {
            let history = pr_history(&service.all()?);
            if json {
                return print_json(&history);
            }

            if history.is_empty() {
                println!("No personal records yet.");
                return Ok(());
            }
            println!("{:<12} {:<28} {:>8} {:>5} {:>10}", "Date", "Exercise", "Weight", "Reps", "Est 1RM");
            println!("{}", "-".repeat(67));
            for set in &history {
                println!(
                    "{:<12} {:<28} {:>8} {:>5} {:>10.1}",
                    set.date.format("%Y-%m-%d"),
                    set.exercise_id,
                    set.weight_raw,
                    set.reps,
                    set.estimated_one_rep_max().unwrap_or(0.0)
                );
            }
        }

        WorkoutCommands::Stats { json } => {
            let stats = summarize_workouts(&service.all()?);
            if json {
                return print_json(&stats);
            }

            if stats.is_empty() {
                println!("No workouts logged.");
                return Ok(());
            }
            println!("{:<28} {:>10} {:>9} {:>10}", "Exercise", "Max kg", "Max reps", "Best 1RM");
            println!("{}", "-".repeat(60));
            for (exercise, s) in &stats {
                println!(
                    "{:<28} {:>10.1} {:>9} {:>10.1}",
                    exercise, s.max_weight, s.max_reps, s.best_est_1rm
                );
            }
        }
    }

    Ok(())
}
