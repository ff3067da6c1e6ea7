//! CSV decoding with per-field fallback
//!
//! The decoder turns raw CSV text into business records. It never fails:
//! malformed structured cells fall back to defaults, non-numeric counts fall
//! back to zero, and every substitution is reported as a [`FieldWarning`]
//! alongside the record so callers can choose to surface it.

use super::splitter::{CsvDialect, RawRow, RowSplitter, SplitRows};
use crate::domain::{Business, BusinessFields, Coordinates, OpeningHours, RecordField};
use std::collections::HashMap;
use std::fmt;

/// Header name to raw cell mapping for one data row
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldMap {
    line: usize,
    values: HashMap<String, String>,
}

impl FieldMap {
    /// Pairs the i-th cell with the i-th header
    ///
    /// Cells past the last header are dropped; headers past the last cell
    /// stay absent. With duplicate headers the rightmost column wins.
    pub fn from_row(headers: &[String], row: RawRow) -> Self {
        let values = headers
            .iter()
            .zip(row.cells)
            .map(|(header, cell)| (header.clone(), cell))
            .collect();
        Self {
            line: row.line,
            values,
        }
    }

    /// Builds a map from explicit pairs
    pub fn from_pairs<I, K, V>(line: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            line,
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// 1-based line number of the row in its source text
    pub fn line(&self) -> usize {
        self.line
    }

    /// Raw value under a header name, if the row has one
    pub fn get(&self, header: &str) -> Option<&str> {
        self.values.get(header).map(String::as_str)
    }

    /// Raw value for a recognized field
    pub fn field(&self, field: RecordField) -> Option<&str> {
        self.get(field.header())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Why a cell was replaced by a default
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldIssue {
    /// Structured cell could not be parsed
    Malformed(String),
    /// Numeric cell is not a number
    NotNumeric(String),
    /// Numeric cell is outside the accepted range
    OutOfRange(String),
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldIssue::Malformed(reason) => write!(f, "malformed value ({reason})"),
            FieldIssue::NotNumeric(value) => write!(f, "not a number: '{value}'"),
            FieldIssue::OutOfRange(value) => write!(f, "out of range: '{value}'"),
        }
    }
}

/// A default substitution made while decoding a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldWarning {
    pub line: usize,
    pub field: RecordField,
    pub issue: FieldIssue,
}

impl fmt::Display for FieldWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.field, self.issue)
    }
}

/// A normalized record plus the substitutions made to produce it
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedRecord {
    pub line: usize,
    pub business: Business,
    pub warnings: Vec<FieldWarning>,
}

impl DecodedRecord {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// CSV decoder
///
/// # Examples
///
/// ```
/// use bizdir::core::codec::CsvDecoder;
///
/// let decoder = CsvDecoder::default();
/// let text = "name,category,address,phone\nAcme,Retail,1 Main St,555-0100\n";
/// let records: Vec<_> = decoder.decode(text).collect();
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].business.name, "Acme");
/// ```
pub struct CsvDecoder {
    splitter: Box<dyn RowSplitter>,
}

impl Default for CsvDecoder {
    fn default() -> Self {
        Self::new(CsvDialect::default())
    }
}

impl fmt::Debug for CsvDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsvDecoder")
            .field("dialect", &self.dialect())
            .finish()
    }
}

impl CsvDecoder {
    /// Creates a decoder for the given dialect
    pub fn new(dialect: CsvDialect) -> Self {
        Self::with_splitter(dialect.splitter())
    }

    /// Creates a decoder around a custom splitter
    pub fn with_splitter(splitter: Box<dyn RowSplitter>) -> Self {
        Self { splitter }
    }

    pub fn dialect(&self) -> CsvDialect {
        self.splitter.dialect()
    }

    /// Lazily yields one field map per non-blank data line
    pub fn field_maps<'a>(&self, text: &'a str) -> impl Iterator<Item = FieldMap> + 'a {
        let SplitRows { headers, rows } = self.splitter.split(text);
        rows.map(move |row| FieldMap::from_row(&headers, row))
    }

    /// Lazily yields one decoded record per non-blank data line
    pub fn decode<'a>(&self, text: &'a str) -> impl Iterator<Item = DecodedRecord> + 'a {
        self.field_maps(text)
            .map(|map| Self::decode_with_fallback(&map))
    }

    /// Normalizes one row into a record
    ///
    /// Assigns a fresh id and a decode-time timestamp. Missing or empty
    /// structured cells take their defaults silently; present but invalid
    /// cells take their defaults and produce a warning.
    pub fn decode_with_fallback(map: &FieldMap) -> DecodedRecord {
        let line = map.line();
        let mut warnings = Vec::new();
        let mut warn = |field: RecordField, issue: FieldIssue| {
            crate::log_field_fallback!(line, field, issue);
            warnings.push(FieldWarning { line, field, issue });
        };

        let text = |field: RecordField| map.field(field).unwrap_or_default().to_string();

        let rating = match present(map, RecordField::Rating).map(parse_rating) {
            Some(Err(issue)) => {
                warn(RecordField::Rating, issue);
                0.0
            }
            Some(Ok(value)) => value,
            None => 0.0,
        };

        let reviews = match present(map, RecordField::Reviews).map(parse_reviews) {
            Some(Err(issue)) => {
                warn(RecordField::Reviews, issue);
                0
            }
            Some(Ok(value)) => value,
            None => 0,
        };

        let opening_hours = present(map, RecordField::OpeningHours).map(|raw| {
            serde_json::from_str::<OpeningHours>(raw).unwrap_or_else(|e| {
                warn(
                    RecordField::OpeningHours,
                    FieldIssue::Malformed(e.to_string()),
                );
                OpeningHours::fallback()
            })
        });

        let coordinates = present(map, RecordField::Coordinates).map(|raw| {
            serde_json::from_str::<Coordinates>(raw).unwrap_or_else(|e| {
                warn(
                    RecordField::Coordinates,
                    FieldIssue::Malformed(e.to_string()),
                );
                Coordinates::default()
            })
        });

        let fields = BusinessFields {
            name: text(RecordField::Name),
            category: text(RecordField::Category),
            address: text(RecordField::Address),
            phone: text(RecordField::Phone),
            email: text(RecordField::Email),
            website: text(RecordField::Website),
            rating,
            reviews,
            opening_hours,
            coordinates,
        };

        DecodedRecord {
            line,
            business: Business::new(fields),
            warnings,
        }
    }
}

/// Non-empty cell for a field
fn present(map: &FieldMap, field: RecordField) -> Option<&str> {
    map.field(field).map(str::trim).filter(|raw| !raw.is_empty())
}

fn parse_rating(raw: &str) -> Result<f64, FieldIssue> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FieldIssue::NotNumeric(raw.to_string())),
    }
}

fn parse_reviews(raw: &str) -> Result<u64, FieldIssue> {
    if let Ok(count) = raw.parse::<u64>() {
        return Ok(count);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value.trunc() as u64),
        Ok(_) => Err(FieldIssue::OutOfRange(raw.to_string())),
        Err(_) => Err(FieldIssue::NotNumeric(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> FieldMap {
        FieldMap::from_pairs(2, pairs.iter().copied())
    }

    #[test]
    fn test_from_row_pairs_by_position() {
        let headers = vec!["name".to_string(), "phone".to_string(), "email".to_string()];
        let row = RawRow {
            line: 3,
            cells: vec!["Acme".to_string(), "555".to_string()],
        };
        let map = FieldMap::from_row(&headers, row);
        assert_eq!(map.line(), 3);
        assert_eq!(map.get("name"), Some("Acme"));
        assert_eq!(map.get("phone"), Some("555"));
        assert_eq!(map.get("email"), None);
    }

    #[test]
    fn test_from_row_rightmost_duplicate_wins() {
        let headers = vec!["name".to_string(), "name".to_string()];
        let row = RawRow {
            line: 2,
            cells: vec!["First".to_string(), "Second".to_string()],
        };
        assert_eq!(FieldMap::from_row(&headers, row).get("name"), Some("Second"));
    }

    #[test]
    fn test_decode_with_fallback_all_defaults() {
        let decoded = CsvDecoder::decode_with_fallback(&map(&[("name", "Acme")]));
        let business = decoded.business;
        assert_eq!(business.name, "Acme");
        assert_eq!(business.category, "");
        assert_eq!(business.email, "");
        assert_eq!(business.website, "");
        assert_eq!(business.rating, 0.0);
        assert_eq!(business.reviews, 0);
        assert_eq!(business.opening_hours, OpeningHours::fallback());
        assert_eq!(business.coordinates, Coordinates::default());
        assert!(decoded.warnings.is_empty());
    }

    #[test]
    fn test_malformed_structured_cells_warn() {
        let decoded = CsvDecoder::decode_with_fallback(&map(&[
            ("openingHours", "{not json"),
            ("coordinates", r#"{"lat":"north","lng":1}"#),
        ]));
        assert_eq!(decoded.business.opening_hours, OpeningHours::fallback());
        assert_eq!(decoded.business.coordinates, Coordinates::default());

        let fields: Vec<RecordField> = decoded.warnings.iter().map(|w| w.field).collect();
        assert_eq!(
            fields,
            vec![RecordField::OpeningHours, RecordField::Coordinates]
        );
        assert!(decoded
            .warnings
            .iter()
            .all(|w| matches!(w.issue, FieldIssue::Malformed(_)) && w.line == 2));
    }

    #[test]
    fn test_opening_hours_with_non_string_values_fall_back() {
        let decoded =
            CsvDecoder::decode_with_fallback(&map(&[("openingHours", r#"{"Monday": 9}"#)]));
        assert_eq!(decoded.business.opening_hours, OpeningHours::fallback());
        assert_eq!(decoded.warnings.len(), 1);
    }

    #[test]
    fn test_partial_schedule_is_kept() {
        let decoded =
            CsvDecoder::decode_with_fallback(&map(&[("openingHours", r#"{"Monday":"8-6"}"#)]));
        let hours = &decoded.business.opening_hours;
        assert_eq!(hours.len(), 1);
        assert_eq!(hours.get("Monday"), Some("8-6"));
        assert!(decoded.is_clean());
    }

    #[test]
    fn test_valid_coordinates_parse() {
        let decoded = CsvDecoder::decode_with_fallback(&map(&[(
            "coordinates",
            r#"{"lat":40.7128,"lng":-74.006}"#,
        )]));
        assert_eq!(decoded.business.coordinates, Coordinates::new(40.7128, -74.006));
    }

    #[test]
    fn test_numeric_coercion() {
        let decoded =
            CsvDecoder::decode_with_fallback(&map(&[("rating", " 4.5 "), ("reviews", "120")]));
        assert_eq!(decoded.business.rating, 4.5);
        assert_eq!(decoded.business.reviews, 120);
        assert!(decoded.is_clean());
    }

    #[test]
    fn test_numeric_coercion_failures_warn() {
        let decoded =
            CsvDecoder::decode_with_fallback(&map(&[("rating", "great"), ("reviews", "-3")]));
        assert_eq!(decoded.business.rating, 0.0);
        assert_eq!(decoded.business.reviews, 0);
        assert_eq!(
            decoded.warnings[0].issue,
            FieldIssue::NotNumeric("great".to_string())
        );
        assert_eq!(
            decoded.warnings[1].issue,
            FieldIssue::OutOfRange("-3".to_string())
        );
    }

    #[test]
    fn test_fractional_reviews_truncate() {
        assert_eq!(parse_reviews("12.9"), Ok(12));
        assert_eq!(parse_reviews("1e2"), Ok(100));
    }

    #[test]
    fn test_non_finite_rating_is_rejected() {
        assert!(parse_rating("inf").is_err());
        assert!(parse_rating("NaN").is_err());
        assert_eq!(parse_rating("-1"), Ok(-1.0));
    }

    #[test]
    fn test_unrecognized_headers_are_ignored() {
        let decoded =
            CsvDecoder::decode_with_fallback(&map(&[("Name", "wrong case"), ("notes", "x")]));
        assert_eq!(decoded.business.name, "");
        assert!(decoded.is_clean());
    }

    #[test]
    fn test_field_maps_are_lazy_per_line() {
        let decoder = CsvDecoder::default();
        let mut maps = decoder.field_maps("name\nA\nB\n");
        assert_eq!(maps.next().unwrap().get("name"), Some("A"));
        assert_eq!(maps.next().unwrap().get("name"), Some("B"));
        assert!(maps.next().is_none());
    }

    #[test]
    fn test_each_record_gets_a_fresh_id() {
        let decoder = CsvDecoder::default();
        let records: Vec<_> = decoder.decode("name\nA\nA\n").collect();
        assert_ne!(records[0].business.id, records[1].business.id);
    }

    #[test]
    fn test_warning_display() {
        let warning = FieldWarning {
            line: 4,
            field: RecordField::Rating,
            issue: FieldIssue::NotNumeric("abc".to_string()),
        };
        assert_eq!(warning.to_string(), "line 4: rating: not a number: 'abc'");
    }
}
