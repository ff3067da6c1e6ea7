//! Row splitting strategies
//!
//! A [`RowSplitter`] turns raw text into a header list and a lazy sequence
//! of data rows. Two strategies exist:
//!
//! - [`NaiveSplitter`]: line-feed and comma splitting with no quote
//!   handling. A comma inside a quoted value shifts every following column.
//! - [`Rfc4180Splitter`]: quoted fields, doubled-quote escapes, and
//!   embedded separators, backed by the `csv` crate.

use crate::domain::BizdirError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A data row with its 1-based source line number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub line: usize,
    pub cells: Vec<String>,
}

/// Header and data rows of a split document
pub struct SplitRows<'a> {
    pub headers: Vec<String>,
    pub rows: Box<dyn Iterator<Item = RawRow> + 'a>,
}

impl SplitRows<'_> {
    fn empty() -> Self {
        Self {
            headers: Vec::new(),
            rows: Box::new(std::iter::empty()),
        }
    }
}

/// Strategy for splitting CSV text into rows and cells
pub trait RowSplitter: Send + Sync {
    /// Dialect implemented by this splitter
    fn dialect(&self) -> CsvDialect;

    /// Splits text into headers and data rows
    ///
    /// Blank data lines are skipped. Cells are trimmed.
    fn split<'a>(&self, text: &'a str) -> SplitRows<'a>;
}

/// CSV dialect selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvDialect {
    /// Comma/line-feed splitting without quote handling
    #[default]
    Naive,
    /// RFC 4180 quoting
    Rfc4180,
}

impl CsvDialect {
    /// Returns the splitter implementing this dialect
    pub fn splitter(self) -> Box<dyn RowSplitter> {
        match self {
            CsvDialect::Naive => Box::new(NaiveSplitter),
            CsvDialect::Rfc4180 => Box::new(Rfc4180Splitter),
        }
    }
}

impl fmt::Display for CsvDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvDialect::Naive => f.write_str("naive"),
            CsvDialect::Rfc4180 => f.write_str("rfc4180"),
        }
    }
}

impl FromStr for CsvDialect {
    type Err = BizdirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "naive" => Ok(CsvDialect::Naive),
            "rfc4180" | "strict" => Ok(CsvDialect::Rfc4180),
            _ => Err(BizdirError::Configuration(format!(
                "Invalid CSV dialect: {s}. Expected 'naive' or 'rfc4180'"
            ))),
        }
    }
}

/// Comma/line-feed splitter without quote handling
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveSplitter;

/// Drops a leading UTF-8 byte order mark, as spreadsheet exports write one
fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

fn split_trimmed(line: &str) -> Vec<String> {
    line.split(',').map(|cell| cell.trim().to_string()).collect()
}

impl RowSplitter for NaiveSplitter {
    fn dialect(&self) -> CsvDialect {
        CsvDialect::Naive
    }

    fn split<'a>(&self, text: &'a str) -> SplitRows<'a> {
        let text = strip_bom(text);
        if text.is_empty() {
            return SplitRows::empty();
        }

        let mut lines = text.split('\n').enumerate();
        let headers = match lines.next() {
            Some((_, line)) => split_trimmed(line),
            None => return SplitRows::empty(),
        };

        let rows = lines
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| RawRow {
                line: index + 1,
                cells: split_trimmed(line),
            });

        SplitRows {
            headers,
            rows: Box::new(rows),
        }
    }
}

/// RFC 4180 splitter backed by the `csv` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct Rfc4180Splitter;

fn is_blank_record(record: &csv::StringRecord) -> bool {
    record.is_empty() || (record.len() == 1 && record[0].trim().is_empty())
}

impl RowSplitter for Rfc4180Splitter {
    fn dialect(&self) -> CsvDialect {
        CsvDialect::Rfc4180
    }

    fn split<'a>(&self, text: &'a str) -> SplitRows<'a> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(strip_bom(text).as_bytes());

        let mut records = reader.into_records();
        let headers = match records.next() {
            Some(Ok(record)) => record.iter().map(str::to_string).collect(),
            Some(Err(e)) => {
                tracing::warn!(error = %e, "Unreadable CSV header, treating input as empty");
                return SplitRows::empty();
            }
            None => return SplitRows::empty(),
        };

        let rows = records.filter_map(|result| match result {
            Ok(record) if is_blank_record(&record) => None,
            Ok(record) => Some(RawRow {
                line: record
                    .position()
                    .map(|pos| pos.line() as usize)
                    .unwrap_or_default(),
                cells: record.iter().map(str::to_string).collect(),
            }),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unreadable CSV row");
                None
            }
        });

        SplitRows {
            headers,
            rows: Box::new(rows),
        }
    }
}
