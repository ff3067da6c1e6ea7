//! Domain error types
//!
//! This module defines the error hierarchy for bizdir.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main bizdir error type
///
/// This is the primary error type used throughout the library.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum BizdirError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Record collection errors
    #[error("Directory error: {0}")]
    Directory(#[from] DirectoryError),

    /// Import errors
    #[error("Import error: {0}")]
    Import(#[from] ImportError),

    /// Validation errors (manual entry path)
    #[error("Validation error: {0}")]
    Validation(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors raised by the record collection
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// No record with the given id
    #[error("Business not found: {0}")]
    NotFound(String),

    /// A record with the same id is already present
    #[error("Duplicate business id: {0}")]
    DuplicateId(String),
}

/// Errors raised while importing a content source
#[derive(Debug, Error)]
pub enum ImportError {
    /// The source content could not be read
    #[error("Failed to read {source_name}: {message}")]
    ReadFailed {
        source_name: String,
        message: String,
    },

    /// The source content is not valid UTF-8 text
    #[error("{0} is not valid UTF-8 text")]
    InvalidEncoding(String),
}

impl ImportError {
    /// Creates a read failure for the named source
    pub fn read_failed(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ReadFailed {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for BizdirError {
    fn from(err: std::io::Error) -> Self {
        BizdirError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for BizdirError {
    fn from(err: serde_json::Error) -> Self {
        BizdirError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for BizdirError {
    fn from(err: toml::de::Error) -> Self {
        BizdirError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from csv errors
impl From<csv::Error> for BizdirError {
    fn from(err: csv::Error) -> Self {
        BizdirError::Csv(err.to_string())
    }
}
