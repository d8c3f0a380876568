//! Text file I/O utilities
//!
//! Atomic whole-file writes for generated reports and line appends for the
//! append-only ledger and fitness logs.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::FinfitError;

/// Read a text file, returning `None` if it doesn't exist
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<Option<String>, FinfitError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    fs::read_to_string(path)
        .map(Some)
        .map_err(|e| FinfitError::Storage(format!("Failed to read {}: {}", path.display(), e)))
}

/// Write text to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_text_atomic<P: AsRef<Path>>(path: P, content: &str) -> Result<(), FinfitError> {
    let path = path.as_ref();

    ensure_parent(path)?;

    // Temp file in the same directory keeps the rename atomic
    let temp_path = path.with_extension("md.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| FinfitError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .map_err(|e| FinfitError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| FinfitError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| FinfitError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        FinfitError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Create a file with `content` unless it already exists
///
/// Returns `true` when the file was created.
pub fn create_if_missing<P: AsRef<Path>>(path: P, content: &str) -> Result<bool, FinfitError> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(false);
    }
    ensure_parent(path)?;
    fs::write(path, content).map_err(|e| {
        FinfitError::Storage(format!("Failed to create {}: {}", path.display(), e))
    })?;
    Ok(true)
}

/// Append text to the end of a file, creating it if needed
///
/// No locking: two processes appending to the same file can interleave.
pub fn append_text<P: AsRef<Path>>(path: P, text: &str) -> Result<(), FinfitError> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| FinfitError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    file.write_all(text.as_bytes())
        .map_err(|e| FinfitError::Storage(format!("Failed to append to {}: {}", path.display(), e)))?;

    file.flush()
        .map_err(|e| FinfitError::Storage(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

fn ensure_parent(path: &Path) -> Result<(), FinfitError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            FinfitError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }
    Ok(())
}
