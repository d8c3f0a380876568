//! Configuration module for finfit
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - The exercise catalog used by the fitness tracker

pub mod catalog;
pub mod paths;
pub mod settings;

pub use catalog::{ExerciseCatalog, RoutineDay};
pub use paths::FinfitPaths;
pub use settings::Settings;
