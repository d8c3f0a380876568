//! Custom error types for finfit
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for finfit operations
#[derive(Error, Debug)]
pub enum FinfitError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Payroll document is not well-formed XML
    #[error("XML error: {0}")]
    Xml(String),

    /// Validation errors for user input (workout sets, manual entries)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Report rendering/writing errors
    #[error("Report error: {0}")]
    Report(String),
}

impl FinfitError {
    /// Create a "not found" error for markdown reports
    pub fn report_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Report",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for ledger files or directories
    pub fn ledger_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Ledger",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for document directories
    pub fn documents_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Document directory",
            identifier: identifier.into(),
        }
    }

    /// Create a validation error for an exercise outside the catalog
    pub fn unknown_exercise(exercise_id: &str) -> Self {
        Self::Validation(format!("Unknown exercise_id '{}'", exercise_id))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FinfitError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinfitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<roxmltree::Error> for FinfitError {
    fn from(err: roxmltree::Error) -> Self {
        Self::Xml(err.to_string())
    }
}

/// Result type alias for finfit operations
pub type FinfitResult<T> = Result<T, FinfitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FinfitError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = FinfitError::report_not_found("2025-01-31");
        assert_eq!(err.to_string(), "Report not found: 2025-01-31");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_unknown_exercise_is_validation() {
        let err = FinfitError::unknown_exercise("bicep_flex");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation error: Unknown exercise_id 'bicep_flex'"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FinfitError = io_err.into();
        assert!(matches!(err, FinfitError::Io(_)));
    }

    #[test]
    fn test_from_xml_error() {
        let xml_err = roxmltree::Document::parse("<a><b></a>").unwrap_err();
        let err: FinfitError = xml_err.into();
        assert!(matches!(err, FinfitError::Xml(_)));
    }
}
