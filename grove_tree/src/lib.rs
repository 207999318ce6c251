// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grove Tree: the content hierarchy behind a Grove mind map.
//!
//! A mind map is a rooted tree of concepts. This crate provides:
//! - [`TreeNode`]: a nested, owned description of the hierarchy. It is what
//!   generators produce and what `serde` (behind the `serde` feature) reads.
//! - [`Tree`]: the validated, immutable, arena-backed form every other Grove
//!   crate consumes. Ids are unique, lookups are `O(1)`, and nodes are stored
//!   in pre-order so iteration is deterministic.
//! - [`NodeKind`]: an explicit `Root` / `Branch` / `Leaf` tier for every node,
//!   derived from its depth.
//!
//! Trees coming from the outside world are untrusted. [`Tree::from_untrusted`]
//! never fails: it drops subtrees with missing or repeated ids, clamps
//! importance, caps nesting at [`MAX_TREE_DEPTH`], and reports each repair as a
//! [`TreeIssue`]. Use [`Tree::new`] when malformed input is a bug.
//!
//! ## Minimal example
//!
//! ```rust
//! use grove_tree::{NodeKind, Tree, TreeNode};
//!
//! let root = TreeNode::new("root", "Rust")
//!     .with_child(TreeNode::new("own", "Ownership").with_source_page(0))
//!     .with_child(
//!         TreeNode::new("types", "Types")
//!             .with_child(TreeNode::new("traits", "Traits")),
//!     );
//!
//! let tree = Tree::new(root).unwrap();
//! assert_eq!(tree.node_count(), 4);
//! assert_eq!(tree.node_by_id("traits").unwrap().kind(), NodeKind::Leaf);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod issue;
mod node;
mod tree;

pub use issue::{TreeError, TreeIssue};
pub use node::{Node, NodeKey, NodeKind, TreeNode};
pub use tree::{Ancestors, MAX_TREE_DEPTH, Tree};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::TreeNode;

    #[test]
    fn reads_camel_case_json() {
        let json = r#"{
            "id": "root",
            "label": "Root",
            "children": [
                { "id": "b", "label": "Branch", "importance": 4, "sourcePageIndex": 2 }
            ]
        }"#;
        let node: TreeNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].source_page_index, Some(2));
        assert_eq!(node.children[0].importance, Some(4));
        assert!(node.children[0].children.is_empty());
    }
}
