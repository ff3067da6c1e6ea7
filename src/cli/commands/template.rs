//! Template command implementation
//!
//! This module implements the `template` command for writing the CSV
//! import template.

use crate::config::BizdirConfig;
use crate::core::codec::{CsvDialect, TemplateEncoder};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the template command
#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Path of the template file (defaults to template.file_name)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl TemplateArgs {
    /// Execute the template command
    pub async fn execute(&self, config: &BizdirConfig) -> anyhow::Result<i32> {
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| config.template.file_name.clone());
        tracing::info!(output = %output, "Writing CSV template");

        if Path::new(&output).exists() && !self.force {
            println!("❌ Template file already exists: {output}");
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        let template = TemplateEncoder::encode()?;
        fs::write(&output, template)?;

        println!("✅ Template written: {output}");
        println!("   Columns: {}", TemplateEncoder::headers().join(", "));
        println!("   {}", import_hint(&output));
        Ok(0)
    }
}

/// Import command for a filled-in template
///
/// Template cells are quoted and hold commas, so only the RFC 4180
/// dialect reads them back.
pub fn import_hint(output: &str) -> String {
    format!(
        "Import it with: bizdir import --dialect {} {output}",
        CsvDialect::Rfc4180
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::CsvDecoder;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_writes_template() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("template.csv");
        let args = TemplateArgs {
            output: Some(path.to_string_lossy().to_string()),
            force: false,
        };

        let code = args.execute(&BizdirConfig::default()).await.unwrap();
        assert_eq!(code, 0);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, TemplateEncoder::encode().unwrap());
    }

    #[test]
    fn test_import_hint_names_a_dialect_that_reads_the_template() {
        let hint = import_hint("template.csv");
        assert_eq!(
            hint,
            "Import it with: bizdir import --dialect rfc4180 template.csv"
        );

        let template = TemplateEncoder::encode().unwrap();
        let hinted: Vec<_> = CsvDecoder::new(CsvDialect::Rfc4180)
            .decode(&template)
            .collect();
        assert!(hinted[0].is_clean());
        assert_eq!(hinted[0].business.name, "Example Business");

        let naive: Vec<_> = CsvDecoder::new(CsvDialect::Naive)
            .decode(&template)
            .collect();
        assert_ne!(naive[0].business.name, "Example Business");
    }

    #[tokio::test]
    async fn test_refuses_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("template.csv");
        fs::write(&path, "keep me").unwrap();

        let mut args = TemplateArgs {
            output: Some(path.to_string_lossy().to_string()),
            force: false,
        };
        assert_eq!(args.execute(&BizdirConfig::default()).await.unwrap(), 2);
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");

        args.force = true;
        assert_eq!(args.execute(&BizdirConfig::default()).await.unwrap(), 0);
        assert_ne!(fs::read_to_string(&path).unwrap(), "keep me");
    }
}
