//! Content digest computation for snapshot leaves using MD5
//!
//! MD5 here is a change-detection fingerprint, not a security control; the
//! snapshot format stores its lowercase hex digests.

use crate::error::TreeError;
use md5::{Digest, Md5};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Fixed read block size for streaming file digests (64 KiB)
pub const BLOCK_SIZE: usize = 64 * 1024;

/// Compute the content digest of a file
///
/// Streams the file through MD5 in `BLOCK_SIZE` chunks so large files are
/// never loaded into memory whole. Returns the lowercase hex digest.
/// Any I/O failure propagates immediately; the handle is dropped on every
/// exit path.
pub fn hash_file(path: &Path) -> Result<String, TreeError> {
    let mut file = File::open(path).map_err(|e| {
        TreeError::IoError(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to open {:?}: {}", path, e),
        ))
    })?;

    let mut hasher = Md5::new();
    let mut block = vec![0u8; BLOCK_SIZE];

    loop {
        let read = file.read(&mut block).map_err(|e| {
            TreeError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to read {:?}: {}", path, e),
            ))
        })?;
        if read == 0 {
            break;
        }
        hasher.update(&block[..read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Compute the content digest of an in-memory byte slice
pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
