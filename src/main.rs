// bizdir - Business directory CSV import and template tool
// Licensed under the MIT License

use bizdir::cli::{Cli, Commands};
use bizdir::config::{load_config_or_default, BizdirConfig};
use bizdir::logging::init_logging;
use clap::Parser;
use std::process;

#[tokio::main]
async fn main() {
    // Optional; a missing .env is ignored
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match load_config_or_default(&cli.config) {
        Ok(config) => config,
        // These commands report on or replace the file themselves
        Err(_) if matches!(cli.command, Commands::ValidateConfig(_) | Commands::Init(_)) => {
            BizdirConfig::default()
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };

    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.application.log_level);
    let guard = match init_logging(log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "bizdir starting");

    let exit_code = match execute_command(&cli, &config).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5
        }
    };

    // Flush file logs before exiting
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli, config: &BizdirConfig) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Import(args) => args.execute(config).await,
        Commands::Template(args) => args.execute(config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
