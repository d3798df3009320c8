//! Path canonicalization and relative report path utilities

use crate::error::TreeError;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a capture root for snapshot metadata
///
/// This function:
/// 1. Canonicalizes the path (resolves symlinks, `..`, `.`)
/// 2. Normalizes Unicode to NFC
/// 3. Removes trailing slashes (except root)
///
/// The same directory therefore always yields the same metadata string,
/// which doubles as the root key of the snapshot tree.
pub fn canonicalize_root(path: &Path) -> Result<PathBuf, TreeError> {
    // Use dunce for cross-platform canonicalization
    let canonical = dunce::canonicalize(path).map_err(|e| {
        TreeError::InvalidPath(format!("Failed to canonicalize {:?}: {}", path, e))
    })?;

    let path_str = canonical.to_string_lossy();

    // Normalize Unicode to NFC (Canonical Composition)
    let normalized: String = path_str.nfc().collect();

    // Remove trailing slashes (except root)
    let mut result = normalized;
    if result.len() > 1 {
        while result.ends_with('/') || result.ends_with('\\') {
            result.pop();
        }
    }

    Ok(PathBuf::from(result))
}

/// Join a relative report path with the next entry name
///
/// The comparison root passes the empty base, so first-level entries report
/// bare names; each descent appends with the platform separator.
pub fn join_relative(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{}{}{}", base, MAIN_SEPARATOR, name)
    }
}
