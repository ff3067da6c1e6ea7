// bizdir - Business directory CSV import and template tool
// Licensed under the MIT License

//! # bizdir - Business directory records and CSV import
//!
//! bizdir keeps a directory of local business records in memory and fills
//! it from loosely formatted CSV files.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Modelling** business records with opening hours and coordinates
//! - **Decoding** CSV rows into records, substituting defaults for bad cells
//! - **Importing** CSV sources into a directory in file order
//! - **Generating** the canonical CSV template
//!
//! ## Architecture
//!
//! bizdir follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (codec, directory, import)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bizdir::core::directory::BusinessDirectory;
//! use bizdir::core::import::{FileSource, ImportOrchestrator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let orchestrator = ImportOrchestrator::default();
//!     let mut directory = BusinessDirectory::new();
//!
//!     let summary = orchestrator
//!         .import(&FileSource::new("businesses.csv"), &mut directory)
//!         .await?;
//!
//!     println!("Imported {} businesses", summary.rows_imported);
//!     Ok(())
//! }
//! ```
//!
//! ## Default Substitution
//!
//! Cells that cannot be parsed never fail an import. The decoder replaces
//! them with defaults and reports each substitution:
//!
//! ```rust
//! use bizdir::core::codec::CsvDecoder;
//!
//! let decoder = CsvDecoder::default();
//! let records: Vec<_> = decoder.decode("name,rating\nAcme,five\n").collect();
//!
//! assert_eq!(records[0].business.rating, 0.0);
//! assert_eq!(records[0].warnings.len(), 1);
//! ```
//!
//! ## Error Handling
//!
//! bizdir uses the [`domain::BizdirError`] type for all library errors.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
