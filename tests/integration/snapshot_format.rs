//! Integration tests for the persisted snapshot and summary formats
//!
//! These pin the wire formats byte-for-byte where the contract demands it:
//! compact snapshots have no whitespace, human-readable ones are 4-space
//! indented with sorted keys, and summary files always carry all five
//! category keys.

use dirsnap::compare::Comparator;
use dirsnap::snapshot::{Snapshot, Snapshotter};
use dirsnap::tree::hasher::hash_bytes;
use std::fs;
use tempfile::TempDir;

/// Test that capturing the same tree twice produces byte-identical files
#[test]
fn test_capture_is_idempotent_byte_for_byte() {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("data");
    fs::create_dir(&data).unwrap();
    fs::write(data.join("b.txt"), "bee").unwrap();
    fs::write(data.join("a.txt"), "ay").unwrap();
    fs::create_dir(data.join("sub")).unwrap();
    fs::write(data.join("sub").join("c.txt"), "sea").unwrap();

    let first = temp_dir.path().join("first.json");
    let second = temp_dir.path().join("second.json");

    let snapshotter = Snapshotter::new(data);
    snapshotter.capture().unwrap().snapshot.write_to(&first, false).unwrap();
    snapshotter.capture().unwrap().snapshot.write_to(&second, false).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

/// Test that both renderings load back to the same snapshot
#[test]
fn test_renderings_are_equivalent_on_load() {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("data");
    fs::create_dir(&data).unwrap();
    fs::write(data.join("a.txt"), "alpha").unwrap();

    let compact = temp_dir.path().join("compact.json");
    let pretty = temp_dir.path().join("pretty.json");

    let capture = Snapshotter::new(data).capture().unwrap();
    capture.snapshot.write_to(&compact, false).unwrap();
    capture.snapshot.write_to(&pretty, true).unwrap();

    let compact_bytes = fs::read_to_string(&compact).unwrap();
    let pretty_bytes = fs::read_to_string(&pretty).unwrap();
    assert!(!compact_bytes.contains('\n'));
    assert!(pretty_bytes.contains("\n    \"_metadata\""));
    assert_ne!(compact_bytes, pretty_bytes);

    assert_eq!(
        Snapshot::load(&compact).unwrap(),
        Snapshot::load(&pretty).unwrap()
    );
}

/// Test that a hand-written snapshot in the documented shape is accepted
#[test]
fn test_hand_written_snapshot_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("data");
    fs::create_dir(&data).unwrap();
    fs::write(data.join("a.txt"), "hello world").unwrap();

    // The root key must equal the metadata directory string; the comparator
    // never touches the filesystem path stored there
    let snapshot_file = temp_dir.path().join("snap.json");
    let recorded_root = "/anywhere/at/all";
    let contents = format!(
        "{{\"_metadata\":{{\"directory\":\"{root}\"}},\
         \"info\":{{\"{root}\":{{\"a.txt\":\"{digest}\"}}}}}}",
        root = recorded_root,
        digest = hash_bytes(b"hello world"),
    );
    fs::write(&snapshot_file, contents).unwrap();

    let loaded = Snapshot::load(&snapshot_file).unwrap();
    let summary = Comparator::new(data).compare(&loaded).unwrap();
    assert!(summary.is_identical());
    assert_eq!(summary.files_hashed, 1);
}

/// Test that a snapshot whose info key disagrees with its metadata is
/// rejected before any comparison work
#[test]
fn test_mismatched_root_key_is_malformed() {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("data");
    fs::create_dir(&data).unwrap();

    let snapshot_file = temp_dir.path().join("snap.json");
    fs::write(
        &snapshot_file,
        "{\"_metadata\":{\"directory\":\"/recorded\"},\"info\":{\"/other\":{}}}",
    )
    .unwrap();

    let loaded = Snapshot::load(&snapshot_file).unwrap();
    let result = Comparator::new(data).compare(&loaded);
    assert!(result.is_err());
}

/// Test that truncated snapshot files are malformed rather than I/O errors
#[test]
fn test_truncated_snapshot_is_malformed() {
    let temp_dir = TempDir::new().unwrap();
    let snapshot_file = temp_dir.path().join("snap.json");
    fs::write(&snapshot_file, "{\"_metadata\":{\"directory\":\"/x\"},\"info\":{").unwrap();

    let result = Snapshot::load(&snapshot_file);
    assert!(result.is_err());
}

/// Test that the summary file carries all five categories sorted, with the
/// recorded paths in traversal order
#[test]
fn test_summary_file_shape() {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("data");
    fs::create_dir(&data).unwrap();
    fs::write(data.join("z.txt"), "z").unwrap();
    fs::write(data.join("a.txt"), "a").unwrap();

    let snapshot_file = temp_dir.path().join("snap.json");
    let capture = Snapshotter::new(data.clone()).capture().unwrap();
    capture.snapshot.write_to(&snapshot_file, false).unwrap();

    fs::write(data.join("a.txt"), "changed").unwrap();
    fs::write(data.join("z.txt"), "changed").unwrap();

    let loaded = Snapshot::load(&snapshot_file).unwrap();
    let summary = Comparator::new(data).compare(&loaded).unwrap();

    let summary_file = temp_dir.path().join("summary.json");
    summary.write_to(&summary_file).unwrap();

    let contents = fs::read_to_string(&summary_file).unwrap();

    // All five keys, sorted, 4-space indent
    let positions: Vec<usize> = [
        "\"FILE_HASH_DIFF\"",
        "\"INPUT_EXTRA_ENTRY\"",
        "\"INPUT_FILE_TARGET_DIRECTORY\"",
        "\"TARGET_EXTRA_ENTRY\"",
        "\"TARGET_FILE_INPUT_DIRECTORY\"",
    ]
    .iter()
    .map(|key| contents.find(key).unwrap())
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(contents.starts_with("{\n    \"FILE_HASH_DIFF\""));

    // Traversal order within the bucket is sorted by name
    let a_pos = contents.find("a.txt").unwrap();
    let z_pos = contents.find("z.txt").unwrap();
    assert!(a_pos < z_pos);
}
