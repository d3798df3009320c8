//! Directory listing for capture and comparison walks
//!
//! Lists one directory level at a time, sorted by name, classifying each
//! entry by the capture rule. The same classification drives both the
//! snapshot walk and the lock-step comparison walk.

use crate::error::TreeError;
use std::path::{Path, PathBuf};

/// Marker for hidden entries
///
/// Entries whose names start with this marker are never hashed: both
/// capture and compare treat them as directories unconditionally, even when
/// they are regular files on disk. A hidden regular file therefore fails
/// the walk with an I/O error when it is later listed as a directory.
pub const HIDDEN_MARKER: char = '.';

/// One immediate entry of a walked directory
#[derive(Debug, Clone)]
pub enum WalkEntry {
    /// A regular, non-hidden file; hashed as a leaf
    File { name: String, path: PathBuf },
    /// Everything else, including every hidden-marker name; recursed as a
    /// directory regardless of its filesystem type
    Directory { name: String, path: PathBuf },
}

impl WalkEntry {
    /// Entry name within its parent directory
    pub fn name(&self) -> &str {
        match self {
            WalkEntry::File { name, .. } | WalkEntry::Directory { name, .. } => name,
        }
    }

    /// Full path of the entry
    pub fn path(&self) -> &Path {
        match self {
            WalkEntry::File { path, .. } | WalkEntry::Directory { path, .. } => path,
        }
    }
}

/// List the immediate entries of a directory, sorted by name
///
/// Sorting makes traversal order deterministic across runs and platforms.
/// Classification: a hidden-marker name is always a `Directory` entry;
/// otherwise the filesystem decides, following symlinks.
pub fn list_entries(dir: &Path) -> Result<Vec<WalkEntry>, TreeError> {
    let read_dir = std::fs::read_dir(dir).map_err(|e| {
        TreeError::IoError(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to list directory {:?}: {}", dir, e),
        ))
    })?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| {
            TreeError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to read directory entry in {:?}: {}", dir, e),
            ))
        })?;

        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();

        if !name.starts_with(HIDDEN_MARKER) && path.is_file() {
            entries.push(WalkEntry::File { name, path });
        } else {
            entries.push(WalkEntry::Directory { name, path });
        }
    }

    // Sort entries by name for determinism
    entries.sort_by(|a, b| a.name().cmp(b.name()));

    Ok(entries)
}
