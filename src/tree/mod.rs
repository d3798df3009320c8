//! Directory Content Tree
//!
//! Represents a directory tree as nested content digests, where each leaf
//! is a file's hash and each interior node maps entry names to subtrees.

pub mod hasher;
pub mod node;
pub mod path;
pub mod walker;
