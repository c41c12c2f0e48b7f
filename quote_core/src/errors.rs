//! # Error Types
//!
//! Structured errors for the fallible edges of the crate: file I/O,
//! JSON handling, and pipeline transitions. The pricing engine itself
//! has no error states: malformed input degrades to zero contributions
//! at the deserialization boundary instead of failing.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Result type alias for quote_core operations
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Structured error type for quoting operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum QuoteError {
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

    /// Schema version mismatch on a saved opportunity file
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// A stage name that is not part of the fixed pipeline
    #[error("Unknown pipeline stage: '{name}'")]
    UnknownStage { name: String },

    /// A ticket id that is not on the board
    #[error("Unknown ticket: {id}")]
    UnknownTicket { id: Uuid },
}

impl QuoteError {
    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        QuoteError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownStage error
    pub fn unknown_stage(name: impl Into<String>) -> Self {
        QuoteError::UnknownStage { name: name.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            QuoteError::FileError { .. } => "FILE_ERROR",
            QuoteError::SerializationError { .. } => "SERIALIZATION_ERROR",
            QuoteError::VersionMismatch { .. } => "VERSION_MISMATCH",
            QuoteError::UnknownStage { .. } => "UNKNOWN_STAGE",
            QuoteError::UnknownTicket { .. } => "UNKNOWN_TICKET",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = QuoteError::file_error("open", "deal.qop", "not found");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: QuoteError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            QuoteError::unknown_stage("Signed").error_code(),
            "UNKNOWN_STAGE"
        );
        assert_eq!(
            QuoteError::UnknownTicket { id: Uuid::nil() }.error_code(),
            "UNKNOWN_TICKET"
        );
    }
}
