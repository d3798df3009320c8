//! CLI route: run context and operation dispatch. Validates arguments, runs
//! capture and comparison, and assembles the terminal report.

use crate::cli::parse::Cli;
use crate::cli::presentation::{format_capture_report, format_compare_report};
use crate::compare::Comparator;
use crate::error::CliError;
use crate::snapshot::{Snapshot, Snapshotter};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Runtime context for one CLI invocation: the validated target directory.
#[derive(Debug)]
pub struct RunContext {
    directory: PathBuf,
}

impl RunContext {
    /// Create a run context, validating the target directory before any
    /// other I/O.
    pub fn new(directory: PathBuf) -> Result<Self, CliError> {
        if !directory.is_dir() {
            return Err(CliError::InvalidArgument(format!(
                "{} is not a directory",
                directory.display()
            )));
        }
        Ok(Self { directory })
    }

    /// Execute the requested operations.
    ///
    /// Capture runs first when `-o` was given, then comparison when `-i`
    /// was given; a single invocation may do both. Finding differences is
    /// still a successful run. Returns the combined report text.
    pub fn execute(&self, cli: &Cli) -> Result<String, CliError> {
        let mut sections = Vec::new();

        if let Some(ref output_path) = cli.output_info_filename {
            let start = Instant::now();
            let capture = Snapshotter::new(self.directory.clone()).capture()?;
            capture.snapshot.write_to(output_path, cli.human_readable)?;
            info!(
                files_hashed = capture.files_hashed,
                duration_ms = start.elapsed().as_millis(),
                "Snapshot written"
            );
            sections.push(format_capture_report(&capture, output_path));
        }

        if let Some(ref info_path) = cli.info_filename {
            let start = Instant::now();
            let snapshot = Snapshot::load(info_path)?;
            let summary = Comparator::new(self.directory.clone()).compare(&snapshot)?;

            // The summary file is only written when something differs
            let summary_written = match cli.summary_filename {
                Some(ref summary_path) if !summary.is_identical() => {
                    summary.write_to(summary_path)?;
                    debug!(path = %summary_path.display(), "Summary file written");
                    Some(summary_path.as_path())
                }
                _ => None,
            };

            info!(
                files_hashed = summary.files_hashed,
                discrepancies = summary.total(),
                duration_ms = start.elapsed().as_millis(),
                "Comparison finished"
            );
            sections.push(format_compare_report(
                &self.directory,
                info_path,
                &summary,
                summary_written,
            ));
        }

        Ok(sections.join("\n"))
    }
}
