//! Domain models and types for bizdir.
//!
//! This module contains the business record model, its identifier type,
//! and the error hierarchy.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`BusinessId`])
//! - **Domain models** ([`Business`], [`BusinessFields`], [`BusinessPatch`])
//! - **Error types** ([`BizdirError`], [`DirectoryError`], [`ImportError`])
//! - **Result type alias** ([`Result`])
//!
//! # Construction
//!
//! Records built with [`Business::new`] never fail; invalid or missing
//! structured values are replaced by defaults. The manual-entry path,
//! [`Business::from_form`], additionally requires the text fields a form
//! marks as required:
//!
//! ```rust
//! use bizdir::domain::{Business, BusinessFields};
//!
//! let result = Business::from_form(BusinessFields::blank());
//! assert!(result.is_err());
//! ```

pub mod business;
pub mod errors;
pub mod ids;
pub mod result;

// Re-export commonly used types for convenience
pub use business::{
    Business, BusinessFields, BusinessPatch, Coordinates, OpeningHours, RecordField, WEEKDAYS,
};
pub use errors::{BizdirError, DirectoryError, ImportError};
pub use ids::BusinessId;
pub use result::Result;
