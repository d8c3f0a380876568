//! Markdown report files
//!
//! Daily reports are stored as `<slug>.md` in the report directory, where
//! the slug is usually a `YYYY-MM-DD` date.

use std::path::{Path, PathBuf};

use tracing::info;

use super::file_io::{read_text, write_text_atomic};
use crate::error::{FinfitError, FinfitResult};

/// Repository for generated markdown reports
pub struct ReportRepository {
    dir: PathBuf,
}

impl ReportRepository {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, slug: &str) -> FinfitResult<PathBuf> {
        validate_slug(slug)?;
        Ok(self.dir.join(format!("{}.md", slug)))
    }

    /// Write (or overwrite) a report
    pub fn write(&self, slug: &str, content: &str) -> FinfitResult<PathBuf> {
        let path = self.path_for(slug)?;
        write_text_atomic(&path, content)?;
        info!(path = %path.display(), "Wrote report");
        Ok(path)
    }

    /// Read a report's content and path
    pub fn read(&self, slug: &str) -> FinfitResult<(String, PathBuf)> {
        let path = self.path_for(slug)?;
        match read_text(&path)? {
            Some(content) => Ok((content, path)),
            None => Err(FinfitError::report_not_found(slug)),
        }
    }

    /// All reports, newest first
    pub fn list(&self) -> FinfitResult<Vec<PathBuf>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut reports: Vec<PathBuf> = std::fs::read_dir(&self.dir)
            .map_err(|e| {
                FinfitError::Storage(format!("Failed to list {}: {}", self.dir.display(), e))
            })?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "md"))
            .collect();
        reports.sort();
        reports.reverse();
        Ok(reports)
    }
}

/// Report slugs are bare file stems: no separators, no leading dot
fn validate_slug(slug: &str) -> FinfitResult<()> {
    let valid = !slug.is_empty()
        && !slug.starts_with('.')
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(FinfitError::Validation(format!("Invalid report name '{}'", slug)))
    }
}
