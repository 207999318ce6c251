// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Problems found while loading a tree.

use alloc::string::String;
use core::fmt;

/// A single problem found in a [`TreeNode`](crate::TreeNode) hierarchy.
///
/// [`Tree::new`](crate::Tree::new) fails on the first issue.
/// [`Tree::from_untrusted`](crate::Tree::from_untrusted) repairs or drops the
/// offending part and reports every issue it handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeIssue {
    /// A node had an empty id.
    ///
    /// Leniently loaded, an empty root id is replaced by `"root"` and any other
    /// such node is dropped together with its subtree.
    EmptyId {
        /// Id of the parent, `None` for the root.
        parent: Option<String>,
    },
    /// A node reused an id already seen earlier in pre-order.
    ///
    /// The later node and its subtree are dropped.
    DuplicateId {
        /// The repeated id.
        id: String,
    },
    /// Importance outside `1..=5`. Clamped when loaded leniently.
    ImportanceOutOfRange {
        /// Node carrying the value.
        id: String,
        /// The rejected value.
        value: u8,
    },
    /// Nesting exceeded [`MAX_TREE_DEPTH`](crate::MAX_TREE_DEPTH).
    ///
    /// The node and its subtree are dropped.
    TooDeep {
        /// First node past the limit.
        id: String,
        /// Its depth.
        depth: usize,
    },
}

impl fmt::Display for TreeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId { parent: None } => write!(f, "root node has an empty id"),
            Self::EmptyId {
                parent: Some(parent),
            } => write!(f, "child of {parent:?} has an empty id"),
            Self::DuplicateId { id } => write!(f, "duplicate node id {id:?}"),
            Self::ImportanceOutOfRange { id, value } => {
                write!(f, "node {id:?} has importance {value}, expected 1..=5")
            }
            Self::TooDeep { id, depth } => write!(
                f,
                "node {id:?} at depth {depth} exceeds the maximum depth of {}",
                crate::MAX_TREE_DEPTH
            ),
        }
    }
}

/// Error returned by [`Tree::new`](crate::Tree::new) for a malformed hierarchy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeError {
    issue: TreeIssue,
}

impl TreeError {
    pub(crate) fn new(issue: TreeIssue) -> Self {
        Self { issue }
    }

    /// The problem that rejected the tree.
    #[must_use]
    pub fn issue(&self) -> &TreeIssue {
        &self.issue
    }
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed tree: {}", self.issue)
    }
}

impl core::error::Error for TreeError {}
