//! Import summary and reporting
//!
//! This module defines structures for tracking and reporting import results.

use crate::core::codec::{CsvDialect, FieldWarning};
use std::time::Duration;

/// Summary of one import operation
#[derive(Debug, Clone)]
pub struct ImportSummary {
    /// Description of the content source
    pub source: String,

    /// Dialect the content was split with
    pub dialect: CsvDialect,

    /// Number of records appended to the directory
    pub rows_imported: usize,

    /// Default substitutions made while decoding
    pub warnings: Vec<FieldWarning>,

    /// Duration of the import
    pub duration: Duration,
}

impl ImportSummary {
    /// Create a new empty import summary
    pub fn new(source: impl Into<String>, dialect: CsvDialect) -> Self {
        Self {
            source: source.into(),
            dialect,
            rows_imported: 0,
            warnings: Vec::new(),
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Whether every row decoded without substitutions
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Number of distinct rows that produced at least one warning
    pub fn rows_with_warnings(&self) -> usize {
        let mut lines: Vec<usize> = self.warnings.iter().map(|w| w.line).collect();
        lines.dedup();
        lines.len()
    }
}
