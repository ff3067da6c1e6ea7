//! Import orchestration
//!
//! This module drives CSV imports:
//! - Content sources (files, in-memory text)
//! - The orchestrator that decodes and appends records
//! - Summary and reporting

pub mod orchestrator;
pub mod source;
pub mod summary;

pub use orchestrator::ImportOrchestrator;
pub use source::{ContentSource, FileSource, TextSource};
pub use summary::ImportSummary;
