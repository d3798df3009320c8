//! Error types for directory snapshot capture and comparison.

use thiserror::Error;

/// Filesystem-level errors raised while walking trees and hashing files
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Tree I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Operation-level errors for snapshot capture, load, and comparison
#[derive(Debug, Error)]
pub enum SnapError {
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("Snapshot I/O error: {0}")]
    IoError(std::io::Error),

    #[error("Malformed snapshot: {0}")]
    MalformedSnapshot(String),

    #[error("Snapshot encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// CLI-surface errors: argument validation and configuration
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapError),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
