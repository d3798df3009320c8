//! Dirsnap: Directory Content Fingerprints
//!
//! Captures a directory tree as nested content digests and compares a live
//! directory against a previously captured snapshot, classifying every
//! structural and content discrepancy.

pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod logging;
pub mod snapshot;
pub mod summary;
pub mod tree;
