//! Dirsnap CLI Binary
//!
//! Command-line interface for capturing directory content fingerprints and
//! comparing live directories against them.

use clap::Parser;
use dirsnap::cli::{Cli, RunContext};
use dirsnap::config::{AppConfig, ConfigLoader};
use dirsnap::error::CliError;
use dirsnap::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let app_config = match load_app_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    // Initialize logging early
    let logging_config = build_logging_config(&cli, app_config.logging);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Dirsnap CLI starting");

    let context = match RunContext::new(cli.directory.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Invalid target directory: {}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    match context.execute(&cli) {
        Ok(output) => {
            info!("Run completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Run failed: {}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

/// Load configuration. An explicit --config file must load; the ambient
/// working-directory file is optional and falls back to defaults.
fn load_app_config(cli: &Cli) -> Result<AppConfig, CliError> {
    match cli.config {
        Some(ref config_path) => ConfigLoader::load_from_file(config_path),
        None => Ok(ConfigLoader::load().unwrap_or_default()),
    }
}

/// Build logging configuration from CLI args and the loaded config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, mut config: LoggingConfig) -> LoggingConfig {
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
