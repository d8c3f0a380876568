//! User settings for finfit
//!
//! Manages user preferences: default currency, first day of the week for
//! weekly summaries, an optional budget markdown file, and the exercise
//! catalog used to validate workout sets.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::catalog::ExerciseCatalog;
use super::paths::FinfitPaths;
use crate::error::FinfitError;

/// User settings for finfit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency code written on ledger rows (e.g. "MXN")
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// First day of week for weekly summaries (0 = Monday ... 6 = Sunday)
    #[serde(default)]
    pub week_start: u8,

    /// Optional markdown budget file; the built-in budget is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_file: Option<PathBuf>,

    /// Routine days and their exercises
    #[serde(default)]
    pub catalog: ExerciseCatalog,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "MXN".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_currency: default_currency(),
            week_start: 0,
            budget_file: None,
            catalog: ExerciseCatalog::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    ///
    /// `DEFAULT_CURRENCY` in the environment overrides the stored currency.
    pub fn load_or_create(paths: &FinfitPaths) -> Result<Self, FinfitError> {
        let settings_path = paths.settings_file();

        let mut settings = if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| FinfitError::Io(format!("Failed to read settings file: {}", e)))?;

            serde_json::from_str::<Settings>(&contents).map_err(|e| {
                FinfitError::Config(format!("Failed to parse settings file: {}", e))
            })?
        } else {
            // Don't save yet - let caller decide when to persist
            Settings::default()
        };

        if let Ok(currency) = std::env::var("DEFAULT_CURRENCY") {
            if !currency.trim().is_empty() {
                settings.default_currency = currency.trim().to_string();
            }
        }

        if settings.week_start > 6 {
            return Err(FinfitError::Config(format!(
                "week_start must be between 0 and 6, got {}",
                settings.week_start
            )));
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FinfitPaths) -> Result<(), FinfitError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FinfitError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| FinfitError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
