//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the bizdir configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Import Dialect: {}", config.import.dialect);
        println!("  Report Warnings: {}", config.import.report_warnings);
        println!("  Template File: {}", config.template.file_name);
        if config.logging.local_enabled {
            println!(
                "  File Logging: {} ({})",
                config.logging.local_path, config.logging.local_rotation
            );
        } else {
            println!("  File Logging: disabled");
        }
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_missing_file_exits_2() {
        let args = ValidateArgs {};
        let code = args.execute("/nonexistent/bizdir.toml").await.unwrap();
        assert_eq!(code, 2);
    }

    #[tokio::test]
    async fn test_invalid_config_exits_2() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[logging]\nlocal_rotation = \"weekly\"\n")
            .unwrap();
        file.flush().unwrap();

        let args = ValidateArgs {};
        let code = args
            .execute(&file.path().to_string_lossy())
            .await
            .unwrap();
        assert_eq!(code, 2);
    }

    #[tokio::test]
    async fn test_valid_config_exits_0() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[import]\ndialect = \"rfc4180\"\n").unwrap();
        file.flush().unwrap();

        let args = ValidateArgs {};
        let code = args
            .execute(&file.path().to_string_lossy())
            .await
            .unwrap();
        assert_eq!(code, 0);
    }
}
