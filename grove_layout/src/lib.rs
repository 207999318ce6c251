// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grove Layout: radial placement of a mind map.
//!
//! Given a [`Tree`](grove_tree::Tree) and an
//! [`ExpansionState`](grove_expansion::ExpansionState), [`compute_layout`]
//! returns the visible nodes with their positions, one [`Connection`] per
//! visible parent/child pair, and the [`Layout::bounds`] a viewport should
//! frame.
//!
//! ## Placement
//!
//! - The root sits at [`LayoutConfig::center`].
//! - Branches (the root's children) are spread evenly on a full circle of
//!   radius [`LayoutConfig::branch_radius`], starting straight up and going
//!   clockwise in screen coordinates. Each branch remembers its bearing.
//! - Children of a branch fan out in a sector of [`LayoutConfig::sector_span`]
//!   centred on the branch's bearing, at [`LayoutConfig::leaf_radius`] from the
//!   *branch* rather than from the root. A lone child continues the branch's
//!   bearing. Because every fan is anchored to its own parent, expanding one
//!   branch never moves the nodes of another.
//!
//! ## Visibility
//!
//! A node is laid out iff every ancestor is expanded and its depth does not
//! exceed [`LayoutConfig::max_depth`] (two tiers below the root by default).
//! Collapsed subtrees are not visited at all, so a pass costs time linear in
//! the number of visible nodes.
//!
//! ## Minimal example
//!
//! ```rust
//! use grove_expansion::ExpansionState;
//! use grove_layout::compute_layout_default;
//! use grove_tree::{Tree, TreeNode};
//!
//! let tree = Tree::new(
//!     TreeNode::new("root", "Rust").with_children([
//!         TreeNode::new("own", "Ownership").with_child(TreeNode::new("moves", "Moves")),
//!         TreeNode::new("types", "Types"),
//!     ]),
//! )
//! .unwrap();
//!
//! let expansion = ExpansionState::initial(&tree);
//! let layout = compute_layout_default(&tree, &expansion);
//! assert_eq!(layout.nodes().len(), 4);
//! assert_eq!(layout.connections().len(), 3);
//! for node in layout.nodes() {
//!     assert!(layout.bounds().contains(node.position));
//! }
//! ```
//!
//! The layout is a pure function of its inputs and uses no randomness.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod layout;

pub use config::{LayoutConfig, TierMetrics};
pub use layout::{Connection, Layout, PositionedNode, compute_layout, compute_layout_default};
