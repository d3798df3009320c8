//! Node types for captured directory trees

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single entry in a captured directory tree
///
/// A leaf holds the lowercase hex digest of a regular file's content; an
/// interior node maps entry names to subtrees, sorted by name. Serialized
/// untagged so a leaf is a bare JSON string and a directory is a JSON
/// object, which is exactly the persisted snapshot shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Content digest of a regular file
    File(String),
    /// Nested directory: entry name -> node
    Directory(BTreeMap<String, TreeNode>),
}

impl TreeNode {
    /// Check if this node is a file leaf
    pub fn is_file(&self) -> bool {
        matches!(self, TreeNode::File(_))
    }

    /// Check if this node is a nested directory
    pub fn is_directory(&self) -> bool {
        matches!(self, TreeNode::Directory(_))
    }

    /// The digest of a file leaf, if this is one
    pub fn digest(&self) -> Option<&str> {
        match self {
            TreeNode::File(digest) => Some(digest),
            TreeNode::Directory(_) => None,
        }
    }

    /// The children of a directory node, if this is one
    pub fn children(&self) -> Option<&BTreeMap<String, TreeNode>> {
        match self {
            TreeNode::File(_) => None,
            TreeNode::Directory(children) => Some(children),
        }
    }
}
