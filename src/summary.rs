//! Comparison summary: discrepancy buckets and the persisted report

use crate::error::SnapError;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Classification of one discrepancy between a live tree and a snapshot
///
/// Variant order is the stable terminal reporting order. "Input" is the
/// snapshot side, "target" is the live directory being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiffCategory {
    /// Entry recorded in the snapshot, absent from the live directory
    InputExtraEntry,
    /// Entry present in the live directory, absent from the snapshot
    TargetExtraEntry,
    /// Snapshot recorded a file digest where the live entry is a directory
    InputFileTargetDirectory,
    /// Live entry is a file where the snapshot recorded a directory
    TargetFileInputDirectory,
    /// Both sides are files and the digests differ
    FileHashDiff,
}

impl DiffCategory {
    /// All categories in stable reporting order
    pub const ALL: [DiffCategory; 5] = [
        DiffCategory::InputExtraEntry,
        DiffCategory::TargetExtraEntry,
        DiffCategory::InputFileTargetDirectory,
        DiffCategory::TargetFileInputDirectory,
        DiffCategory::FileHashDiff,
    ];

    /// Wire name used in the persisted report
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffCategory::InputExtraEntry => "INPUT_EXTRA_ENTRY",
            DiffCategory::TargetExtraEntry => "TARGET_EXTRA_ENTRY",
            DiffCategory::InputFileTargetDirectory => "INPUT_FILE_TARGET_DIRECTORY",
            DiffCategory::TargetFileInputDirectory => "TARGET_FILE_INPUT_DIRECTORY",
            DiffCategory::FileHashDiff => "FILE_HASH_DIFF",
        }
    }
}

impl fmt::Display for DiffCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Accumulated result of one comparison run
///
/// Buckets keep insertion order, which is the sorted-name depth-first
/// traversal order of the comparison walk. `files_hashed` counts live files
/// hash-compared against snapshot digests; it is reporting-only and never
/// part of the persisted report.
#[derive(Debug, Clone, Default)]
pub struct CompareSummary {
    buckets: BTreeMap<DiffCategory, Vec<String>>,
    /// Number of files hashed during the comparison
    pub files_hashed: u64,
}

impl CompareSummary {
    /// Create an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one discrepancy at a relative path
    pub fn record(&mut self, category: DiffCategory, rel_path: String) {
        self.buckets.entry(category).or_default().push(rel_path);
    }

    /// Paths recorded for one category, in traversal order
    pub fn entries(&self, category: DiffCategory) -> &[String] {
        self.buckets
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Check whether the compared trees had no discrepancies
    pub fn is_identical(&self) -> bool {
        self.buckets.values().all(Vec::is_empty)
    }

    /// Total number of recorded discrepancies across all categories
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Write the report file: every category key present (empty buckets
    /// included), keys sorted, 4-space indent
    ///
    /// Callers decide whether to write at all; the CLI route skips the file
    /// when nothing differs.
    pub fn write_to(&self, path: &Path) -> Result<(), SnapError> {
        let file = File::create(path).map_err(|e| {
            SnapError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to create summary file {:?}: {}", path, e),
            ))
        })?;
        let mut writer = BufWriter::new(file);

        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
        self.serialize(&mut ser)?;

        writer.flush().map_err(|e| {
            SnapError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to write summary file {:?}: {}", path, e),
            ))
        })?;
        Ok(())
    }
}

impl Serialize for CompareSummary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Every category is emitted even when empty, sorted by wire name
        let mut ordered: Vec<(&'static str, &[String])> = DiffCategory::ALL
            .iter()
            .map(|category| (category.as_str(), self.entries(*category)))
            .collect();
        ordered.sort_by_key(|(name, _)| *name);

        let mut map = serializer.serialize_map(Some(ordered.len()))?;
        for (name, paths) in ordered {
            map.serialize_entry(name, paths)?;
        }
        map.end()
    }
}
