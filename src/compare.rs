//! Lock-step comparison of a live directory against a captured snapshot
//!
//! Walks the live tree and the snapshot tree together, classifying every
//! discrepancy into a `CompareSummary`. Content hashes are computed only
//! for files present on both sides; structural mismatches never hash.

use crate::error::SnapError;
use crate::snapshot::Snapshot;
use crate::summary::{CompareSummary, DiffCategory};
use crate::tree::hasher;
use crate::tree::node::TreeNode;
use crate::tree::path::join_relative;
use crate::tree::walker::{self, WalkEntry};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, instrument};

/// Compares a live directory tree against a captured snapshot
pub struct Comparator {
    live_root: PathBuf,
}

impl Comparator {
    /// Create a new comparator for the given live directory
    pub fn new(live_root: PathBuf) -> Self {
        Self { live_root }
    }

    /// Walk the live directory in lock-step with the snapshot tree and
    /// classify every discrepancy
    ///
    /// Fails before any filesystem work when the snapshot's metadata
    /// directory key is absent from its own tree.
    #[instrument(skip(self, snapshot), fields(live = %self.live_root.display()))]
    pub fn compare(&self, snapshot: &Snapshot) -> Result<CompareSummary, SnapError> {
        let start = Instant::now();
        info!("Starting comparison");

        let root = snapshot.root_node()?;
        let mut summary = CompareSummary::new();
        diff_directory(&self.live_root, "", root, &mut summary)?;

        let duration = start.elapsed();
        info!(
            files_hashed = summary.files_hashed,
            discrepancies = summary.total(),
            duration_ms = duration.as_millis(),
            "Comparison completed"
        );

        Ok(summary)
    }
}

/// Diff one directory level
///
/// `rel` is the relative path of `live_dir` from the comparison root; the
/// root level passes the empty string so first-level entries report bare
/// names. The live listing is taken once and serves both diff directions.
fn diff_directory(
    live_dir: &Path,
    rel: &str,
    node: &BTreeMap<String, TreeNode>,
    summary: &mut CompareSummary,
) -> Result<(), SnapError> {
    let live_entries = walker::list_entries(live_dir)?;
    let live_names: BTreeSet<&str> = live_entries.iter().map(|e| e.name()).collect();

    for entry in &live_entries {
        // Membership first: an unrecorded entry is never descended into,
        // hidden or not
        let Some(recorded) = node.get(entry.name()) else {
            summary.record(
                DiffCategory::TargetExtraEntry,
                join_relative(rel, entry.name()),
            );
            continue;
        };

        match entry {
            WalkEntry::File { name, path } => match recorded {
                TreeNode::Directory(_) => {
                    summary.record(
                        DiffCategory::TargetFileInputDirectory,
                        join_relative(rel, name),
                    );
                }
                TreeNode::File(expected) => {
                    let actual = hasher::hash_file(path)?;
                    summary.files_hashed += 1;
                    if actual != *expected {
                        summary.record(DiffCategory::FileHashDiff, join_relative(rel, name));
                    }
                }
            },
            WalkEntry::Directory { name, path } => match recorded {
                TreeNode::File(_) => {
                    summary.record(
                        DiffCategory::InputFileTargetDirectory,
                        join_relative(rel, name),
                    );
                }
                TreeNode::Directory(children) => {
                    diff_directory(path, &join_relative(rel, name), children, summary)?;
                }
            },
        }
    }

    for name in node.keys() {
        if !live_names.contains(name.as_str()) {
            summary.record(DiffCategory::InputExtraEntry, join_relative(rel, name));
        }
    }

    Ok(())
}
