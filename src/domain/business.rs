//! Business record domain model
//!
//! This module defines the Business entity, the field set accepted from
//! external input, and the patch type used for updates.

use super::errors::BizdirError;
use super::ids::BusinessId;
use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Canonical weekday keys of an opening-hours schedule, in calendar order
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const FALLBACK_WEEKDAY_HOURS: &str = "9:00 AM - 5:00 PM";
const FALLBACK_SATURDAY_HOURS: &str = "10:00 AM - 3:00 PM";
const FALLBACK_SUNDAY_HOURS: &str = "Closed";

/// Weekly opening hours, keyed by weekday name
///
/// Any key set is representable: a schedule parsed from input may lack
/// some weekdays or carry extra keys. Serialization emits the canonical
/// weekdays first, in calendar order, followed by other keys.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct OpeningHours(BTreeMap<String, String>);

impl OpeningHours {
    /// The fixed schedule substituted when hours are missing or malformed
    pub fn fallback() -> Self {
        WEEKDAYS
            .iter()
            .map(|day| {
                let hours = match *day {
                    "Saturday" => FALLBACK_SATURDAY_HOURS,
                    "Sunday" => FALLBACK_SUNDAY_HOURS,
                    _ => FALLBACK_WEEKDAY_HOURS,
                };
                (*day, hours)
            })
            .collect()
    }

    /// All seven weekdays with empty hours (manual entry defaults)
    pub fn blank() -> Self {
        WEEKDAYS.iter().map(|day| (*day, "")).collect()
    }

    /// Hours for a given day, if present
    pub fn get(&self, day: &str) -> Option<&str> {
        self.0.get(day).map(String::as_str)
    }

    /// Sets the hours for a day, replacing any previous value
    pub fn set(&mut self, day: impl Into<String>, hours: impl Into<String>) {
        self.0.insert(day.into(), hours.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether every canonical weekday has an entry
    pub fn is_complete(&self) -> bool {
        WEEKDAYS.iter().all(|day| self.0.contains_key(*day))
    }

    /// Iterates entries, weekdays first in calendar order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        let canonical = WEEKDAYS
            .iter()
            .filter_map(move |day| self.0.get_key_value(*day));
        let others = self
            .0
            .iter()
            .filter(|(day, _)| !WEEKDAYS.contains(&day.as_str()));
        canonical
            .chain(others)
            .map(|(day, hours)| (day.as_str(), hours.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for OpeningHours
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(day, hours)| (day.into(), hours.into()))
                .collect(),
        )
    }
}

impl Serialize for OpeningHours {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (day, hours) in self.iter() {
            map.serialize_entry(day, hours)?;
        }
        map.end()
    }
}

/// Geographic position of a business
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Fields a business record can carry from external input
///
/// The header names in CSV files map one-to-one onto these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    Name,
    Category,
    Address,
    Phone,
    Email,
    Website,
    Rating,
    Reviews,
    OpeningHours,
    Coordinates,
}

impl RecordField {
    /// Every recognized field, in template column order
    pub const ALL: [RecordField; 10] = [
        RecordField::Name,
        RecordField::Category,
        RecordField::Address,
        RecordField::Phone,
        RecordField::Email,
        RecordField::Website,
        RecordField::Rating,
        RecordField::Reviews,
        RecordField::OpeningHours,
        RecordField::Coordinates,
    ];

    /// The CSV header name of this field
    pub fn header(self) -> &'static str {
        match self {
            RecordField::Name => "name",
            RecordField::Category => "category",
            RecordField::Address => "address",
            RecordField::Phone => "phone",
            RecordField::Email => "email",
            RecordField::Website => "website",
            RecordField::Rating => "rating",
            RecordField::Reviews => "reviews",
            RecordField::OpeningHours => "openingHours",
            RecordField::Coordinates => "coordinates",
        }
    }

    /// Whether the manual-entry form requires a non-blank value
    pub fn is_required(self) -> bool {
        matches!(
            self,
            RecordField::Name | RecordField::Category | RecordField::Address | RecordField::Phone
        )
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

impl FromStr for RecordField {
    type Err = String;

    /// Header matching is exact and case-sensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordField::ALL
            .iter()
            .copied()
            .find(|field| field.header() == s)
            .ok_or_else(|| format!("Unrecognized field: {s}"))
    }
}

/// The subset of a business record accepted from external input
///
/// Everything except `id` and `last_updated`. Missing opening hours and
/// coordinates are filled in when a [`Business`] is constructed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessFields {
    pub name: String,
    pub category: String,
    pub address: String,
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u64,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

impl BusinessFields {
    /// Empty form defaults: blank text, zero counts, seven empty weekdays
    pub fn blank() -> Self {
        Self {
            opening_hours: Some(OpeningHours::blank()),
            coordinates: Some(Coordinates::default()),
            ..Self::default()
        }
    }

    /// Checks the required text fields of the manual-entry form
    ///
    /// # Errors
    ///
    /// Returns an error naming every required field that is blank
    pub fn validate(&self) -> Result<(), String> {
        let missing: Vec<&str> = RecordField::ALL
            .iter()
            .filter(|field| field.is_required())
            .filter(|field| self.text(**field).is_some_and(|v| v.trim().is_empty()))
            .map(|field| field.header())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(format!("Required fields are empty: {}", missing.join(", ")))
        }
    }

    fn text(&self, field: RecordField) -> Option<&str> {
        match field {
            RecordField::Name => Some(&self.name),
            RecordField::Category => Some(&self.category),
            RecordField::Address => Some(&self.address),
            RecordField::Phone => Some(&self.phone),
            RecordField::Email => Some(&self.email),
            RecordField::Website => Some(&self.website),
            _ => None,
        }
    }
}

/// A business record
///
/// # Examples
///
/// ```
/// use bizdir::domain::business::{Business, BusinessFields, OpeningHours};
///
/// let business = Business::new(BusinessFields {
///     name: "Acme".to_string(),
///     category: "Retail".to_string(),
///     address: "1 Main St".to_string(),
///     phone: "555-0100".to_string(),
///     ..BusinessFields::default()
/// });
///
/// assert_eq!(business.opening_hours, OpeningHours::fallback());
/// assert_eq!(business.coordinates.lat, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Business {
    pub id: BusinessId,
    pub name: String,
    pub category: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub rating: f64,
    pub reviews: u64,
    pub opening_hours: OpeningHours,
    pub coordinates: Coordinates,
    pub last_updated: DateTime<Utc>,
}

impl Business {
    /// Builds a record with a fresh id and timestamp
    ///
    /// Never fails: missing opening hours become the fallback schedule and
    /// missing coordinates become `{0, 0}`.
    pub fn new(fields: BusinessFields) -> Self {
        Self::with_id(BusinessId::generate(), fields, Utc::now())
    }

    /// Builds a record through the manual-entry path
    ///
    /// # Errors
    ///
    /// Returns a validation error if a required field is blank
    pub fn from_form(fields: BusinessFields) -> Result<Self, BizdirError> {
        fields.validate().map_err(BizdirError::Validation)?;
        Ok(Self::new(fields))
    }

    /// Builds a record with an explicit id and timestamp
    pub fn with_id(id: BusinessId, fields: BusinessFields, last_updated: DateTime<Utc>) -> Self {
        Self {
            id,
            name: fields.name,
            category: fields.category,
            address: fields.address,
            phone: fields.phone,
            email: fields.email,
            website: fields.website,
            rating: fields.rating,
            reviews: fields.reviews,
            opening_hours: fields.opening_hours.unwrap_or_else(OpeningHours::fallback),
            coordinates: fields.coordinates.unwrap_or_default(),
            last_updated,
        }
    }

    /// Projects the record back to its input fields
    pub fn fields(&self) -> BusinessFields {
        BusinessFields {
            name: self.name.clone(),
            category: self.category.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            website: self.website.clone(),
            rating: self.rating,
            reviews: self.reviews,
            opening_hours: Some(self.opening_hours.clone()),
            coordinates: Some(self.coordinates),
        }
    }
}

/// Partial replacement of a record's fields
///
/// Fields left as `None` keep their current value. Applying a patch never
/// touches the id and always refreshes `last_updated`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BusinessPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub rating: Option<f64>,
    pub reviews: Option<u64>,
    pub opening_hours: Option<OpeningHours>,
    pub coordinates: Option<Coordinates>,
}

impl BusinessPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// A patch replacing every field (the edit-form submission)
    ///
    /// Structured fields left as `None` keep their current value.
    pub fn from_fields(fields: BusinessFields) -> Self {
        Self {
            name: Some(fields.name),
            category: Some(fields.category),
            address: Some(fields.address),
            phone: Some(fields.phone),
            email: Some(fields.email),
            website: Some(fields.website),
            rating: Some(fields.rating),
            reviews: Some(fields.reviews),
            opening_hours: fields.opening_hours,
            coordinates: fields.coordinates,
        }
    }

    /// Sets the replacement name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the replacement category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the replacement phone
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the replacement rating
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Sets the replacement opening hours
    pub fn with_opening_hours(mut self, hours: OpeningHours) -> Self {
        self.opening_hours = Some(hours);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies the patch in place and stamps the record with `now`
    pub fn apply_to(self, business: &mut Business, now: DateTime<Utc>) {
        if let Some(name) = self.name {
            business.name = name;
        }
        if let Some(category) = self.category {
            business.category = category;
        }
        if let Some(address) = self.address {
            business.address = address;
        }
        if let Some(phone) = self.phone {
            business.phone = phone;
        }
        if let Some(email) = self.email {
            business.email = email;
        }
        if let Some(website) = self.website {
            business.website = website;
        }
        if let Some(rating) = self.rating {
            business.rating = rating;
        }
        if let Some(reviews) = self.reviews {
            business.reviews = reviews;
        }
        if let Some(hours) = self.opening_hours {
            business.opening_hours = hours;
        }
        if let Some(coordinates) = self.coordinates {
            business.coordinates = coordinates;
        }
        business.last_updated = now;
    }
}
