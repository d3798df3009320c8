//! Snapshot capture and persistence
//!
//! A snapshot records one directory tree as nested content digests plus the
//! canonical root path it was captured from. Capture walks the live
//! filesystem depth-first; persistence has two renderings (compact, or
//! 4-space-indented with sorted keys).

use crate::error::SnapError;
use crate::tree::node::TreeNode;
use crate::tree::walker::{self, WalkEntry};
use crate::tree::{hasher, path};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Snapshot metadata: the canonical directory path used at capture time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    pub directory: String,
}

/// A captured directory fingerprint in its persisted shape
///
/// `info` holds exactly one entry: the canonical root path mapped to the
/// captured tree. The same string appears in `metadata.directory`, and
/// loading for comparison verifies that agreement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "_metadata")]
    pub metadata: SnapshotMetadata,
    pub info: BTreeMap<String, TreeNode>,
}

/// Result of one capture run
#[derive(Debug, Clone)]
pub struct Capture {
    /// The captured snapshot
    pub snapshot: Snapshot,
    /// Number of files hashed during the walk
    pub files_hashed: u64,
}

/// Builds snapshots from a live directory tree
pub struct Snapshotter {
    root: PathBuf,
}

impl Snapshotter {
    /// Create a new snapshotter for the given root directory
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Walk the tree depth-first and produce a snapshot
    ///
    /// Entries are visited sorted by name, so identical trees produce
    /// byte-identical snapshots across runs. Hidden-marker entries are
    /// recursed as directories regardless of their filesystem type; a
    /// hidden regular file fails the walk here. The walk finishes before
    /// any snapshot file is written, so a snapshot written into the
    /// captured directory never contains itself.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn capture(&self) -> Result<Capture, SnapError> {
        let start = Instant::now();
        info!("Starting capture");

        let root = path::canonicalize_root(&self.root)?;
        let root_key = root.to_string_lossy().into_owned();

        let mut files_hashed = 0u64;
        let tree = walk_directory(&root, &mut files_hashed)?;
        debug!(files_hashed, "Walked directory tree");

        let mut info = BTreeMap::new();
        info.insert(root_key.clone(), TreeNode::Directory(tree));

        let duration = start.elapsed();
        info!(
            files_hashed,
            duration_ms = duration.as_millis(),
            "Capture completed"
        );

        Ok(Capture {
            snapshot: Snapshot {
                metadata: SnapshotMetadata {
                    directory: root_key,
                },
                info,
            },
            files_hashed,
        })
    }
}

/// Recursively capture the entries of one directory
fn walk_directory(
    dir: &Path,
    files_hashed: &mut u64,
) -> Result<BTreeMap<String, TreeNode>, SnapError> {
    let mut children = BTreeMap::new();

    for entry in walker::list_entries(dir)? {
        match entry {
            WalkEntry::File { name, path } => {
                let digest = hasher::hash_file(&path)?;
                *files_hashed += 1;
                children.insert(name, TreeNode::File(digest));
            }
            WalkEntry::Directory { name, path } => {
                let subtree = walk_directory(&path, files_hashed)?;
                children.insert(name, TreeNode::Directory(subtree));
            }
        }
    }

    Ok(children)
}

impl Snapshot {
    /// Write the snapshot to a file
    ///
    /// Compact JSON by default; `human_readable` switches to a 4-space
    /// indent. Key order is sorted either way.
    pub fn write_to(&self, path: &Path, human_readable: bool) -> Result<(), SnapError> {
        let file = File::create(path).map_err(|e| file_io_error("create", path, e))?;
        let mut writer = BufWriter::new(file);

        if human_readable {
            let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
            let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
            self.serialize(&mut ser)?;
        } else {
            serde_json::to_writer(&mut writer, self)?;
        }

        writer
            .flush()
            .map_err(|e| file_io_error("write", path, e))?;
        Ok(())
    }

    /// Load a snapshot from a file
    ///
    /// An unreadable file is an I/O error; content that does not parse as a
    /// snapshot is malformed.
    pub fn load(path: &Path) -> Result<Snapshot, SnapError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| file_io_error("read", path, e))?;
        serde_json::from_str(&contents)
            .map_err(|e| SnapError::MalformedSnapshot(format!("{:?}: {}", path, e)))
    }

    /// The captured tree recorded under the metadata directory key
    ///
    /// Fails when `info` does not agree with `metadata.directory`, which
    /// means the file was not produced by a well-formed capture.
    pub fn root_node(&self) -> Result<&BTreeMap<String, TreeNode>, SnapError> {
        match self.info.get(&self.metadata.directory) {
            Some(TreeNode::Directory(children)) => Ok(children),
            Some(TreeNode::File(_)) => Err(SnapError::MalformedSnapshot(format!(
                "root entry {:?} is a file digest, not a directory",
                self.metadata.directory
            ))),
            None => Err(SnapError::MalformedSnapshot(format!(
                "metadata directory {:?} missing from info",
                self.metadata.directory
            ))),
        }
    }
}

fn file_io_error(action: &str, path: &Path, e: std::io::Error) -> SnapError {
    SnapError::IoError(std::io::Error::new(
        std::io::ErrorKind::Other,
        format!("Failed to {} snapshot file {:?}: {}", action, path, e),
    ))
}
