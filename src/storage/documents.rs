//! Payroll document listing and archiving
//!
//! Documents are plain `.xml` files spread over one or more directories
//! (the inbox and the archive). Only read access is needed to ingest them.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{FinfitError, FinfitResult};

fn is_xml(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("xml"))
}

/// XML documents of a single directory, sorted by file name
///
/// A missing directory is a not-found error.
pub fn xml_files_in(dir: &Path) -> FinfitResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(FinfitError::documents_not_found(dir.display().to_string()));
    }

    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| FinfitError::Storage(format!("Failed to list {}: {}", dir.display(), e)))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| is_xml(p))
        .collect();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Merge the XML documents of several directories
///
/// Files are keyed by name; a later directory wins over an earlier one.
/// Directories that do not exist are skipped. The result is sorted by
/// file name.
pub fn list_xml_files<P: AsRef<Path>>(dirs: &[P]) -> FinfitResult<Vec<PathBuf>> {
    let mut seen: BTreeMap<String, PathBuf> = BTreeMap::new();

    for dir in dirs {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "Skipping missing document directory");
            continue;
        }
        for path in xml_files_in(dir)? {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                seen.insert(name.to_string(), path);
            }
        }
    }

    Ok(seen.into_values().collect())
}

/// Copy a document into the archive directory under its base file name
pub fn archive_document(src: &Path, archive_dir: &Path) -> FinfitResult<PathBuf> {
    let name = src
        .file_name()
        .ok_or_else(|| FinfitError::Validation(format!("Not a file: {}", src.display())))?;

    fs::create_dir_all(archive_dir)?;
    let target = archive_dir.join(name);
    if target != src {
        fs::copy(src, &target).map_err(|e| {
            FinfitError::Storage(format!(
                "Failed to archive {} to {}: {}",
                src.display(),
                target.display(),
                e
            ))
        })?;
        info!(from = %src.display(), to = %target.display(), "Archived document");
    }
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str, content: &str) -> PathBuf {
        fs::create_dir_all(dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_xml_files_sorted_and_filtered() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        touch(dir, "b.xml", "");
        touch(dir, "a.XML", "");
        touch(dir, "notes.txt", "");

        let names: Vec<_> = xml_files_in(dir)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.XML", "b.xml"]);
    }

    #[test]
    fn test_missing_directory_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = xml_files_in(&temp_dir.path().join("missing")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_later_directory_wins() {
        let temp_dir = TempDir::new().unwrap();
        let samples = temp_dir.path().join("samples");
        let uploads = temp_dir.path().join("uploads");
        touch(&samples, "enero.xml", "sample");
        touch(&samples, "febrero.xml", "sample");
        let uploaded = touch(&uploads, "enero.xml", "upload");

        let files = list_xml_files(&[samples.clone(), uploads, temp_dir.path().join("gone")]).unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0], uploaded);
        assert_eq!(files[1], samples.join("febrero.xml"));
    }

    #[test]
    fn test_archive_uses_base_name() {
        let temp_dir = TempDir::new().unwrap();
        let src = touch(&temp_dir.path().join("in").join("deep"), "doc.xml", "<a/>");
        let archive = temp_dir.path().join("archive");

        let target = archive_document(&src, &archive).unwrap();

        assert_eq!(target, archive.join("doc.xml"));
        assert_eq!(fs::read_to_string(target).unwrap(), "<a/>");
    }
}
