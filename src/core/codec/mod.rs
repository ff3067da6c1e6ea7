//! CSV codec: decoding and template encoding
//!
//! - [`splitter`] - Row splitting strategies (naive and RFC 4180)
//! - [`decoder`] - Header mapping, type coercion, and fallback defaults
//! - [`encoder`] - Canonical import template

pub mod decoder;
pub mod encoder;
pub mod splitter;

pub use decoder::{CsvDecoder, DecodedRecord, FieldIssue, FieldMap, FieldWarning};
pub use encoder::{TemplateEncoder, TEMPLATE_FILE_NAME};
pub use splitter::{CsvDialect, NaiveSplitter, RawRow, Rfc4180Splitter, RowSplitter, SplitRows};
