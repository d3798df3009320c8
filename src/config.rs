//! Configuration System
//!
//! Ambient settings only: logging. Capture and comparison semantics are
//! fixed by the snapshot format and are never configurable. Sources, last
//! one wins: defaults, an optional TOML file (explicit path, else
//! `dirsnap.toml` in the working directory), then DIRSNAP_* environment
//! variables.

use crate::error::CliError;
use crate::logging::LoggingConfig;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from standard sources
    ///
    /// Reads `dirsnap.toml` from the working directory when present, then
    /// applies DIRSNAP_* environment overrides (`__` separates nested keys,
    /// e.g. DIRSNAP__LOGGING__LEVEL).
    pub fn load() -> Result<AppConfig, CliError> {
        let builder = Config::builder()
            .add_source(File::with_name("dirsnap").required(false))
            .add_source(
                Environment::with_prefix("DIRSNAP")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load configuration from a specific file with environment overlay
    ///
    /// The file must exist and parse; a bad explicit `--config` path is an
    /// error rather than a silent fallback.
    pub fn load_from_file(path: &Path) -> Result<AppConfig, CliError> {
        let builder = Config::builder()
            .add_source(File::from(path))
            .add_source(
                Environment::with_prefix("DIRSNAP")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }
}
