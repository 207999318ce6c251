// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grove Explorer: an interactive session over a mind map.
//!
//! [`Explorer`] ties the Grove crates together the way a UI needs them:
//! - Trees come in through [`Explorer::load`], or are built from source pages
//!   with [`Explorer::rebuild`] (synchronously) or
//!   [`Explorer::begin_generation`] / [`Explorer::complete_generation`]
//!   (asynchronously, with late results for superseded requests dropped).
//! - Expansion changes ([`Explorer::toggle`], [`Explorer::expand_all`], ...)
//!   recompute the layout and view box at once.
//! - Clicks resolve through the viewport to a node and
//!   [`activate`](Explorer::activate) it: branches toggle and page-linked
//!   nodes call the activation handler.
//! - [`Explorer::export_snapshot`] renders the current map to SVG.
//!
//! ```rust
//! use grove_explorer::Explorer;
//! use grove_tree::{Tree, TreeNode};
//!
//! let tree = Tree::new(
//!     TreeNode::new("root", "Garden").with_children([
//!         TreeNode::new("soil", "Soil").with_child(TreeNode::new("ph", "pH")),
//!         TreeNode::new("light", "Light").with_source_page(3),
//!     ]),
//! )
//! .unwrap();
//!
//! let mut explorer = Explorer::default();
//! explorer.load(tree);
//! // The root and its branches start open.
//! assert_eq!(explorer.layout().unwrap().nodes().len(), 4);
//!
//! explorer.toggle("soil");
//! assert!(!explorer.layout().unwrap().is_visible("ph"));
//!
//! let svg = explorer.export_snapshot().unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

mod config;
mod explorer;

pub use config::ExplorerConfig;
pub use explorer::{Activation, Explorer};
