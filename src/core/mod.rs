//! Core logic for bizdir.
//!
//! # Modules
//!
//! - [`codec`] - Row splitting, decoding with fallback, template encoding
//! - [`directory`] - The in-memory record collection
//! - [`import`] - Import orchestration and reporting
//!
//! # Import Workflow
//!
//! 1. **Read**: Load the whole source text in one asynchronous read
//! 2. **Split**: Break the text into a header and data rows (naive or RFC 4180)
//! 3. **Decode**: Map headers to fields, coerce numbers, parse structured cells
//! 4. **Append**: Add each record to the directory in file order
//! 5. **Report**: Return an import summary with any default substitutions
//!
//! # Example
//!
//! ```rust,no_run
//! use bizdir::core::directory::BusinessDirectory;
//! use bizdir::core::import::{FileSource, ImportOrchestrator};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let orchestrator = ImportOrchestrator::default();
//! let mut directory = BusinessDirectory::new();
//!
//! let summary = orchestrator
//!     .import(&FileSource::new("businesses.csv"), &mut directory)
//!     .await?;
//!
//! println!("Imported: {}", summary.rows_imported);
//! println!("Warnings: {}", summary.warnings.len());
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod directory;
pub mod import;
