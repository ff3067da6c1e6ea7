//! Import command implementation
//!
//! This module implements the `import` command: CSV files are imported in
//! order into one in-memory directory, which is then filtered and rendered.

use crate::config::BizdirConfig;
use crate::core::codec::{CsvDialect, FieldWarning};
use crate::core::directory::BusinessDirectory;
use crate::core::import::{FileSource, ImportOrchestrator};
use crate::domain::{BizdirError, Business};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Output format for the imported records
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per record
    Table,
    /// Pretty-printed JSON array
    Json,
}

/// Arguments for the import command
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// CSV files to import, in order
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Row splitting dialect (naive, rfc4180); overrides the config file
    #[arg(long)]
    pub dialect: Option<CsvDialect>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Only show records whose name contains this text (case-insensitive)
    #[arg(long, default_value = "")]
    pub search: String,

    /// Only show records in this category
    #[arg(long, default_value = "")]
    pub category: String,

    /// Print fields that were replaced with defaults
    #[arg(long)]
    pub show_warnings: bool,
}

impl ImportArgs {
    /// Execute the import command
    pub async fn execute(&self, config: &BizdirConfig) -> anyhow::Result<i32> {
        let mut import_config = config.import.clone();
        if let Some(dialect) = self.dialect {
            import_config.dialect = dialect;
        }
        let report_warnings = self.show_warnings || import_config.report_warnings;

        tracing::info!(
            files = self.files.len(),
            dialect = %import_config.dialect,
            "Importing CSV files"
        );

        let orchestrator = ImportOrchestrator::from_config(&import_config);
        let mut directory = BusinessDirectory::new();
        let mut warnings: Vec<(String, FieldWarning)> = Vec::new();
        let mut exit_code = 0;

        for file in &self.files {
            let source = FileSource::new(file);
            match orchestrator.import(&source, &mut directory).await {
                Ok(summary) => {
                    eprintln!(
                        "✅ {}: {} rows imported ({} fields defaulted)",
                        summary.source,
                        summary.rows_imported,
                        summary.warnings.len()
                    );
                    warnings.extend(
                        summary
                            .warnings
                            .into_iter()
                            .map(|warning| (summary.source.clone(), warning)),
                    );
                }
                Err(BizdirError::Import(e)) => {
                    eprintln!("❌ {e}");
                    exit_code = 3;
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        if report_warnings && !warnings.is_empty() {
            eprintln!();
            eprintln!("⚠️  Fields replaced with defaults:");
            for (source, warning) in &warnings {
                eprintln!("   {source} {warning}");
            }
        }

        let visible = filter_businesses(directory.all(), &self.search, &self.category);
        match self.format {
            OutputFormat::Table => {
                println!("{}", render_table(&visible));
                println!("Categories: {}", categories(directory.all()).join(", "));
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            }
        }

        Ok(exit_code)
    }
}

/// Records whose name contains `search` (case-insensitive) and whose
/// category equals `category`; empty criteria match everything
pub fn filter_businesses<'a>(
    businesses: &'a [Business],
    search: &str,
    category: &str,
) -> Vec<&'a Business> {
    let needle = search.to_lowercase();
    businesses
        .iter()
        .filter(|business| business.name.to_lowercase().contains(&needle))
        .filter(|business| category.is_empty() || business.category == category)
        .collect()
}

/// Distinct categories in first-seen order
pub fn categories(businesses: &[Business]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for business in businesses {
        if !seen.contains(&business.category.as_str()) {
            seen.push(&business.category);
        }
    }
    seen
}

/// One line per record: name, category, phone, rating, reviews
pub fn render_table(businesses: &[&Business]) -> String {
    let mut lines = vec![format!(
        "{:<30} {:<16} {:<16} {:>6} {:>8}",
        "NAME", "CATEGORY", "PHONE", "RATING", "REVIEWS"
    )];
    lines.extend(businesses.iter().map(|business| {
        format!(
            "{:<30} {:<16} {:<16} {:>6.1} {:>8}",
            business.name, business.category, business.phone, business.rating, business.reviews
        )
    }));
    lines.join("\n")
}
