//! Custom error types for ledgerbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledgerbook operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors (e.g. unresolvable data directory)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors for user-supplied input (dates, amounts)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Underlying SQLite storage faults
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Create a validation error for a malformed date string
    pub fn invalid_date(input: impl AsRef<str>) -> Self {
        Self::Validation(format!(
            "Invalid date '{}': expected YYYY-MM-DD",
            input.as_ref()
        ))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

/// Result type alias for ledgerbook operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_date_error() {
        let err = LedgerError::invalid_date("2024-13-40");
        assert_eq!(
            err.to_string(),
            "Validation error: Invalid date '2024-13-40': expected YYYY-MM-DD"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
        assert!(!ledger_err.is_validation());
    }
}
