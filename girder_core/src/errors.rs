//! # Error Types
//!
//! Structured error types for girder_core. Two kinds come out of the section
//! pipeline itself:
//!
//! - [`SectionError::Validation`] - the input dimensions are physically
//!   inconsistent. Carries every violated rule so a user can fix them all at once.
//! - [`SectionError::DegenerateGeometry`] - the polygon encloses no area. Valid
//!   input never produces this; it signals a construction defect.
//!
//! The remaining variants belong to the collaborators (file I/O, reports,
//! steel table lookups).
//!
//! ## Example
//!
//! ```rust
//! use girder_core::errors::{SectionError, SectionResult};
//!
//! fn check_depth(depth_mm: f64) -> SectionResult<()> {
//!     if depth_mm <= 0.0 {
//!         return Err(SectionError::invalid_input(
//!             "depth_mm",
//!             depth_mm.to_string(),
//!             "Depth must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_depth(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for girder_core operations
pub type SectionResult<T> = Result<T, SectionError>;

/// A single violated input rule.
///
/// `field` names the parameter(s) involved, `message` is the human-readable
/// text shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Violation {
    /// Parameter or parameter group the rule concerns (e.g. "D", "bt")
    pub field: String,
    /// Human-readable explanation
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Violation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Structured error type for section operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SectionError {
    /// One or more input rules are violated; geometry was not attempted
    #[error("Invalid section: {}", join_messages(.violations))]
    Validation { violations: Vec<Violation> },

    /// The polygon encloses no area (zero or non-finite signed area)
    #[error("Degenerate geometry: {reason}")]
    DegenerateGeometry { reason: String },

    /// A single input value is invalid (outside the section parameters)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Steel shape not found in the reference table
    #[error("Steel shape not found: {designation}")]
    ShapeNotFound { designation: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Typst compilation or PDF rendering failed
    #[error("Report generation failed: {reason}")]
    ReportFailed { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

fn join_messages(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

impl SectionError {
    /// Create a Validation error from a list of violations
    pub fn validation(violations: Vec<Violation>) -> Self {
        SectionError::Validation { violations }
    }

    /// Create a DegenerateGeometry error
    pub fn degenerate(reason: impl Into<String>) -> Self {
        SectionError::DegenerateGeometry {
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        SectionError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a ShapeNotFound error
    pub fn shape_not_found(designation: impl Into<String>) -> Self {
        SectionError::ShapeNotFound {
            designation: designation.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        SectionError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a ReportFailed error
    pub fn report_failed(reason: impl Into<String>) -> Self {
        SectionError::ReportFailed {
            reason: reason.into(),
        }
    }

    /// Violation messages, if this is a validation error
    pub fn violations(&self) -> &[Violation] {
        match self {
            SectionError::Validation { violations } => violations,
            _ => &[],
        }
    }

    /// Check if the caller can recover by correcting input and retrying
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SectionError::Validation { .. }
                | SectionError::DegenerateGeometry { .. }
                | SectionError::InvalidInput { .. }
                | SectionError::ShapeNotFound { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SectionError::Validation { .. } => "VALIDATION_FAILED",
            SectionError::DegenerateGeometry { .. } => "DEGENERATE_GEOMETRY",
            SectionError::InvalidInput { .. } => "INVALID_INPUT",
            SectionError::ShapeNotFound { .. } => "SHAPE_NOT_FOUND",
            SectionError::FileError { .. } => "FILE_ERROR",
            SectionError::SerializationError { .. } => "SERIALIZATION_ERROR",
            SectionError::VersionMismatch { .. } => "VERSION_MISMATCH",
            SectionError::ReportFailed { .. } => "REPORT_FAILED",
            SectionError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = SectionError::validation(vec![
            Violation::new("bt", "Top flange width bt must be ≥ web thickness tw."),
            Violation::new("gamma", "Concrete density must be > 0."),
        ]);
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: SectionError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_validation_display_lists_every_message() {
        let error = SectionError::validation(vec![
            Violation::new("bt", "First."),
            Violation::new("bb", "Second."),
        ]);
        assert_eq!(error.to_string(), "Invalid section: First. Second.");
        assert_eq!(error.violations().len(), 2);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(SectionError::degenerate("zero area").error_code(), "DEGENERATE_GEOMETRY");
        assert_eq!(SectionError::shape_not_found("W99X1").error_code(), "SHAPE_NOT_FOUND");
        assert!(SectionError::degenerate("zero area").is_recoverable());
        assert!(!SectionError::report_failed("typst").is_recoverable());
    }
}
