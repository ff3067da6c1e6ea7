//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output with configurable log levels
//! - JSON-formatted local file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use bizdir::logging::init_logging;
//! use bizdir::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of an import
///
/// # Example
///
/// ```no_run
/// use bizdir::log_import_start;
/// use bizdir::core::codec::CsvDialect;
///
/// log_import_start!("businesses.csv", CsvDialect::Naive);
/// ```
#[macro_export]
macro_rules! log_import_start {
    ($source:expr, $dialect:expr) => {
        tracing::info!(
            source = %$source,
            dialect = %$dialect,
            "Starting import"
        );
    };
}

/// Log the completion of an import
///
/// # Example
///
/// ```no_run
/// use bizdir::log_import_complete;
/// use std::time::Duration;
///
/// log_import_complete!(42, 3, Duration::from_millis(12));
/// ```
#[macro_export]
macro_rules! log_import_complete {
    ($rows:expr, $warnings:expr, $duration:expr) => {
        tracing::info!(
            rows = $rows,
            warnings = $warnings,
            duration_ms = $duration.as_millis() as u64,
            "Import completed"
        );
    };
}

/// Log a field that fell back to its default value
#[macro_export]
macro_rules! log_field_fallback {
    ($line:expr, $field:expr, $issue:expr) => {
        tracing::debug!(
            line = $line,
            field = %$field,
            issue = %$issue,
            "Field replaced with default"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use bizdir::log_error_with_context;
/// use bizdir::domain::BizdirError;
///
/// let error = BizdirError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
