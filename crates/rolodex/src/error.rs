//! Error types for the Rolodex library.

use std::path::PathBuf;
use thiserror::Error;

/// Broad category of a [`RolodexError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input path does not exist.
    NotFound,
    /// The input could not be read as an address-book table.
    Malformed,
    /// A field or record was rejected. Recoverable by re-supplying input.
    Validation,
    /// Reading or writing failed.
    Io,
}

/// Main error type for Rolodex operations.
#[derive(Debug, Error)]
pub enum RolodexError {
    /// The input file does not exist.
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The input has no locatable header row.
    #[error("Malformed input '{source_name}': {message}")]
    Malformed {
        source_name: String,
        message: String,
    },

    /// A single field failed its format rule.
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },

    /// One or more phone numbers occur more than once across the data set.
    #[error("{0}")]
    DuplicateNumber(String),

    /// Two phone fields of the same record hold the same number.
    #[error("Duplicate number inside new row: {number} in {first_field} and {second_field}")]
    DuplicateInRecord {
        number: String,
        first_field: String,
        second_field: String,
    },

    /// A row index past the end of the data set.
    #[error("Row {index} is out of range (data set has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    /// Error reading or writing a file.
    #[error("IO error for '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RolodexError {
    /// Create an IO error bound to a path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RolodexError::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid-field error.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        RolodexError::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RolodexError::NotFound { .. } => ErrorKind::NotFound,
            RolodexError::Malformed { .. } | RolodexError::Config(_) | RolodexError::Json(_) => {
                ErrorKind::Malformed
            }
            RolodexError::InvalidField { .. }
            | RolodexError::DuplicateNumber(_)
            | RolodexError::DuplicateInRecord { .. }
            | RolodexError::RowOutOfRange { .. } => ErrorKind::Validation,
            RolodexError::Io { .. } | RolodexError::Csv(_) => ErrorKind::Io,
        }
    }

    /// Whether the caller can recover by supplying corrected input.
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}

/// Result type alias for Rolodex operations.
pub type Result<T> = std::result::Result<T, RolodexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_names_the_field() {
        let err = RolodexError::invalid_field("Email", "doesn't look like a valid email");
        assert_eq!(err.to_string(), "Email: doesn't look like a valid email");
        assert!(err.is_validation());
    }

    #[test]
    fn test_kinds() {
        let not_found = RolodexError::NotFound {
            path: PathBuf::from("missing.csv"),
        };
        assert_eq!(not_found.kind(), ErrorKind::NotFound);

        let io = RolodexError::io(
            "results",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(io.kind(), ErrorKind::Io);
        assert!(!io.is_validation());
    }
}
