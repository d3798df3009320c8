//! CLI parse: clap types for dirsnap. No behavior; definitions only.

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// dirsnap CLI - directory fingerprint capture and comparison
#[derive(Parser)]
#[command(name = "dirsnap")]
#[command(about = "Capture a directory's content fingerprint and compare a live tree against it")]
#[command(group = ArgGroup::new("mode")
    .required(true)
    .multiple(true)
    .args(["output_info_filename", "info_filename"]))]
pub struct Cli {
    /// Directory to snapshot or compare
    pub directory: PathBuf,

    /// Capture a snapshot of DIRECTORY into this file
    #[arg(short = 'o', long)]
    pub output_info_filename: Option<PathBuf>,

    /// Write the snapshot 4-space indented with sorted keys
    #[arg(short = 'u', long)]
    pub human_readable: bool,

    /// Compare DIRECTORY against this snapshot file
    #[arg(short = 'i', long)]
    pub info_filename: Option<PathBuf>,

    /// Write the comparison summary into this file when differences exist
    #[arg(short = 's', long)]
    pub summary_filename: Option<PathBuf>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}
