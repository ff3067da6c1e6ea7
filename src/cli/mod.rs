//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for bizdir using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// bizdir - Business directory CSV import and template tool
#[derive(Parser, Debug)]
#[command(name = "bizdir")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "bizdir.toml", env = "BIZDIR_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "BIZDIR_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import CSV files and list the resulting directory
    Import(commands::import::ImportArgs),

    /// Write the CSV import template
    Template(commands::template::TemplateArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
