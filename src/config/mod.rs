//! Configuration management for bizdir.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! bizdir reads an optional TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `BIZDIR_<SECTION>_<KEY>` overrides
//! - Default values for every setting
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bizdir::config::load_config_or_default;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config_or_default("bizdir.toml")?;
//! println!("Import dialect: {}", config.import.dialect);
//! println!("Template file: {}", config.template.file_name);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`ImportConfig`] - CSV import settings (dialect, warning report)
//! - [`TemplateConfig`] - Template output file name
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [import]
//! dialect = "naive"
//! report_warnings = false
//!
//! [template]
//! file_name = "business_template.csv"
//!
//! [logging]
//! local_enabled = true
//! local_path = "${HOME}/.bizdir/logs"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_or_default, parse_config};
pub use schema::{ApplicationConfig, BizdirConfig, ImportConfig, LoggingConfig, TemplateConfig};
