//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::BizdirConfig;
use crate::core::codec::CsvDialect;
use crate::domain::errors::BizdirError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into BizdirConfig
/// 4. Applies environment variable overrides (BIZDIR_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use bizdir::config::loader::load_config;
///
/// let config = load_config("bizdir.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<BizdirConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(BizdirError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        BizdirError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Loads configuration from a file, falling back to defaults when it is absent
///
/// A file that exists but fails to parse or validate is still an error.
/// Environment overrides apply in both cases.
///
/// # Errors
///
/// Returns an error if an existing file is invalid or an override is invalid
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<BizdirConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "No configuration file, using defaults");
    let mut config = BizdirConfig::default();
    apply_env_overrides(&mut config)?;
    validate(&config)?;
    Ok(config)
}

/// Parses configuration from TOML text
///
/// # Errors
///
/// Returns an error if substitution, parsing, overrides, or validation fail
pub fn parse_config(contents: &str) -> Result<BizdirConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: BizdirConfig = toml::from_str(&contents)
        .map_err(|e| BizdirError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &BizdirConfig) -> Result<()> {
    config.validate().map_err(|e| {
        BizdirError::Configuration(format!("Configuration validation failed: {}", e))
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied through untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| BizdirError::Configuration(format!("Invalid substitution pattern: {}", e)))?;
    let mut lines = Vec::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        lines.push(processed_line);
    }

    if !missing_vars.is_empty() {
        return Err(BizdirError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(lines.join("\n"))
}

/// Applies environment variable overrides using BIZDIR_* prefix
///
/// Environment variables follow the pattern: BIZDIR_<SECTION>_<KEY>
/// For example: BIZDIR_IMPORT_DIALECT, BIZDIR_LOGGING_LOCAL_PATH
fn apply_env_overrides(config: &mut BizdirConfig) -> Result<()> {
    if let Ok(val) = std::env::var("BIZDIR_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("BIZDIR_IMPORT_DIALECT") {
        config.import.dialect = val.parse::<CsvDialect>()?;
    }
    if let Ok(val) = std::env::var("BIZDIR_IMPORT_REPORT_WARNINGS") {
        config.import.report_warnings = val.parse().unwrap_or(false);
    }

    if let Ok(val) = std::env::var("BIZDIR_TEMPLATE_FILE_NAME") {
        config.template.file_name = val;
    }

    if let Ok(val) = std::env::var("BIZDIR_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("BIZDIR_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("BIZDIR_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
