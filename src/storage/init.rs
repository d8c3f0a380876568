//! Storage initialization
//!
//! Handles first-run setup: directories and a starter budget file.

use tracing::info;

use super::file_io::create_if_missing;
use crate::config::paths::FinfitPaths;
use crate::error::FinfitError;
use crate::models::DEFAULT_BUDGET_MD;

/// Initialize storage for a fresh installation
///
/// Safe to run again: existing files are left untouched.
pub fn initialize_storage(paths: &FinfitPaths) -> Result<(), FinfitError> {
    paths.ensure_directories()?;

    if create_if_missing(paths.budget_file(), DEFAULT_BUDGET_MD)? {
        info!(path = %paths.budget_file().display(), "Created starter budget");
    }

    Ok(())
}
