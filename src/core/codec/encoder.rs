//! CSV template generation
//!
//! The template is a header line naming every field the decoder recognizes,
//! in column order, followed by one fully populated example row. The header
//! is unquoted. Every data cell is quoted, and structured cells hold compact
//! JSON with RFC 4180 quote doubling.

use crate::domain::{BizdirError, BusinessFields, Coordinates, OpeningHours, RecordField, Result};

/// Default file name of the downloadable template
pub const TEMPLATE_FILE_NAME: &str = "business_template.csv";

/// Produces the canonical CSV template
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateEncoder;

impl TemplateEncoder {
    /// The example record carried by the template
    pub fn example_fields() -> BusinessFields {
        BusinessFields {
            name: "Example Business".to_string(),
            category: "Restaurant".to_string(),
            address: "123 Main St, City, Country".to_string(),
            phone: "+1234567890".to_string(),
            email: "contact@example.com".to_string(),
            website: "https://example.com".to_string(),
            rating: 4.5,
            reviews: 100,
            opening_hours: Some(OpeningHours::fallback()),
            coordinates: Some(Coordinates::new(40.7128, -74.006)),
        }
    }

    /// Header names in column order
    pub fn headers() -> Vec<&'static str> {
        RecordField::ALL.iter().map(|field| field.header()).collect()
    }

    /// Renders the template text
    ///
    /// # Errors
    ///
    /// Returns an error if a structured value cannot be serialized
    pub fn encode() -> Result<String> {
        Self::encode_fields(&Self::example_fields())
    }

    /// Renders a header line plus one row for the given fields
    ///
    /// # Errors
    ///
    /// Returns an error if a structured value cannot be serialized
    pub fn encode_fields(fields: &BusinessFields) -> Result<String> {
        let mut out = Self::headers().join(",").into_bytes();
        out.push(b'\n');

        let mut writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::Always)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(out);

        let row = RecordField::ALL
            .iter()
            .map(|field| Self::cell(fields, *field))
            .collect::<Result<Vec<String>>>()?;
        writer.write_record(&row)?;

        let bytes = writer
            .into_inner()
            .map_err(|e| BizdirError::Csv(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| BizdirError::Csv(e.to_string()))
    }

    fn cell(fields: &BusinessFields, field: RecordField) -> Result<String> {
        let value = match field {
            RecordField::Name => fields.name.clone(),
            RecordField::Category => fields.category.clone(),
            RecordField::Address => fields.address.clone(),
            RecordField::Phone => fields.phone.clone(),
            RecordField::Email => fields.email.clone(),
            RecordField::Website => fields.website.clone(),
            RecordField::Rating => fields.rating.to_string(),
            RecordField::Reviews => fields.reviews.to_string(),
            RecordField::OpeningHours => match &fields.opening_hours {
                Some(hours) => serde_json::to_string(hours)?,
                None => String::new(),
            },
            RecordField::Coordinates => match &fields.coordinates {
                Some(coordinates) => serde_json::to_string(coordinates)?,
                None => String::new(),
            },
        };
        Ok(value)
    }
}
