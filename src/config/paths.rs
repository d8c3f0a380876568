//! Path management for finfit
//!
//! Provides XDG-compliant path resolution for settings, ledgers, documents,
//! reports and fitness logs.
//!
//! ## Path Resolution Order
//!
//! 1. `FINFIT_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/finfit` or `~/.config/finfit`
//! 3. Windows: `%APPDATA%\finfit`
//!
//! Individual directories can be redirected with `CFDI_INBOX`, `LEDGER_DIR`,
//! `REPORT_DIR` and `FITNESS_LOG_DIR`.

use std::path::PathBuf;

use crate::error::FinfitError;

/// Manages all paths used by finfit
#[derive(Debug, Clone)]
pub struct FinfitPaths {
    /// Base directory for all finfit data
    base_dir: PathBuf,
    inbox_override: Option<PathBuf>,
    ledger_override: Option<PathBuf>,
    report_override: Option<PathBuf>,
    fitness_override: Option<PathBuf>,
}

impl FinfitPaths {
    /// Create a new FinfitPaths instance from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FinfitError> {
        let base_dir = if let Ok(custom) = std::env::var("FINFIT_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self {
            base_dir,
            inbox_override: env_path("CFDI_INBOX"),
            ledger_override: env_path("LEDGER_DIR"),
            report_override: env_path("REPORT_DIR"),
            fitness_override: env_path("FITNESS_LOG_DIR"),
        })
    }

    /// Create FinfitPaths with a custom base directory (useful for testing)
    ///
    /// Directory overrides from the environment are ignored.
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            inbox_override: None,
            ledger_override: None,
            report_override: None,
            fitness_override: None,
        }
    }

    /// Get the base directory (~/.config/finfit/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/finfit/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Default location of the budget markdown file
    pub fn budget_file(&self) -> PathBuf {
        self.base_dir.join("budget.md")
    }

    /// Directory where payroll documents are dropped for ingestion
    pub fn inbox_dir(&self) -> PathBuf {
        self.inbox_override
            .clone()
            .unwrap_or_else(|| self.base_dir.join("inbox"))
    }

    /// Directory holding archived payroll documents
    pub fn archive_dir(&self) -> PathBuf {
        self.data_dir().join("xml")
    }

    /// Directory holding the monthly ledger files
    pub fn ledger_dir(&self) -> PathBuf {
        self.ledger_override
            .clone()
            .unwrap_or_else(|| self.data_dir().join("ledgers"))
    }

    /// Directory holding generated markdown reports
    pub fn report_dir(&self) -> PathBuf {
        self.report_override
            .clone()
            .unwrap_or_else(|| self.data_dir().join("reports"))
    }

    /// Directory holding the monthly fitness logs
    pub fn fitness_dir(&self) -> PathBuf {
        self.fitness_override
            .clone()
            .unwrap_or_else(|| self.data_dir().join("fitness"))
    }

    /// Directory holding the monthly fitness reports
    pub fn fitness_report_dir(&self) -> PathBuf {
        self.fitness_dir().join("reports").join("monthly")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), FinfitError> {
        let dirs = [
            ("base", self.base_dir.clone()),
            ("data", self.data_dir()),
            ("inbox", self.inbox_dir()),
            ("archive", self.archive_dir()),
            ("ledger", self.ledger_dir()),
            ("report", self.report_dir()),
            ("fitness", self.fitness_dir()),
            ("fitness report", self.fitness_report_dir()),
        ];

        for (label, dir) in dirs {
            std::fs::create_dir_all(&dir).map_err(|e| {
                FinfitError::Io(format!("Failed to create {} directory: {}", label, e))
            })?;
        }

        Ok(())
    }

    /// Check if finfit has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    std::env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FinfitError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                FinfitError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("finfit"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FinfitError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FinfitError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("finfit"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinfitPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(
            paths.ledger_dir(),
            temp_dir.path().join("data").join("ledgers")
        );
        assert_eq!(paths.inbox_dir(), temp_dir.path().join("inbox"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinfitPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.archive_dir().exists());
        assert!(paths.ledger_dir().exists());
        assert!(paths.report_dir().exists());
        assert!(paths.fitness_report_dir().exists());
    }

    #[test]
    fn test_settings_file_path() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinfitPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("settings.json"));
        assert!(!paths.is_initialized());
    }
}
