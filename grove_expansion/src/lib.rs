// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grove Expansion: which branches of a mind map are open.
//!
//! [`ExpansionState`] is a set of node ids. A node is *expanded* when its id is
//! in the set. The set is mutated only through the methods here; the layout
//! engine reads it but never writes it.
//!
//! Collapse is **lazy**. Collapsing a node removes only that node's id. Its
//! descendants keep their own open/closed flags, they simply stop being
//! reachable because the layout shows a node only when every ancestor is
//! expanded. Re-expanding the node therefore restores the exact configuration
//! of its subtree.
//!
//! Like a selection, the state carries a revision counter that is bumped only
//! when membership actually changes, so observers can cheaply skip relayout.
//!
//! ```rust
//! use grove_expansion::ExpansionState;
//! use grove_tree::{Tree, TreeNode};
//!
//! let tree = Tree::new(
//!     TreeNode::new("root", "Root").with_child(
//!         TreeNode::new("a", "A").with_child(
//!             TreeNode::new("a1", "A1").with_child(TreeNode::new("a1x", "A1x")),
//!         ),
//!     ),
//! )
//! .unwrap();
//!
//! let mut state = ExpansionState::initial(&tree);
//! assert!(state.is_expanded("root") && state.is_expanded("a"));
//!
//! state.toggle(&tree, "a1"); // open a grandchild
//! state.toggle(&tree, "a"); // collapse its parent
//! assert!(state.is_expanded("a1")); // memory preserved
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use grove_tree::Tree;
use hashbrown::HashSet;

/// Set of expanded node ids plus a change counter.
#[derive(Clone, Debug, Default)]
pub struct ExpansionState {
    expanded: HashSet<String>,
    revision: u64,
}

impl PartialEq for ExpansionState {
    /// Two states are equal when they hold the same ids; revisions are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.expanded == other.expanded
    }
}

impl Eq for ExpansionState {}

impl ExpansionState {
    /// Creates an empty state. Nothing is expanded, not even the root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the default state for a freshly loaded tree: the root and each
    /// of its direct children are expanded.
    #[must_use]
    pub fn initial(tree: &Tree) -> Self {
        let mut state = Self::new();
        state.initialize(tree);
        state
    }

    /// Resets to the default state for `tree`, see [`ExpansionState::initial`].
    pub fn initialize(&mut self, tree: &Tree) {
        let root = tree.root();
        let ids = core::iter::once(root.id())
            .chain(tree.children(tree.root_key()).map(|child| child.id()));
        self.replace_with(ids);
    }

    /// Returns `true` if `id` is expanded.
    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Number of expanded ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Returns `true` if nothing is expanded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Iterates the expanded ids in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.expanded.iter().map(String::as_str)
    }

    /// Expanded ids, sorted. Use this whenever the output must be reproducible.
    #[must_use]
    pub fn sorted_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.iter().collect();
        ids.sort_unstable();
        ids
    }

    /// Change counter, bumped only when membership changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Flips the expansion of `id`.
    ///
    /// Nodes without children (and ids not in `tree`) have no expansion state;
    /// for them this is a no-op. Returns `true` if the set changed.
    ///
    /// Collapsing leaves descendant ids untouched, so toggling twice restores
    /// the original set exactly.
    pub fn toggle(&mut self, tree: &Tree, id: &str) -> bool {
        if !Self::is_expandable(tree, id) {
            return false;
        }
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
        self.bump_revision();
        true
    }

    /// Expands `id` if it has children. Returns `true` if the set changed.
    pub fn expand(&mut self, tree: &Tree, id: &str) -> bool {
        if !Self::is_expandable(tree, id) || self.expanded.contains(id) {
            return false;
        }
        self.expanded.insert(id.to_string());
        self.bump_revision();
        true
    }

    /// Collapses `id`. Descendant flags are preserved. Returns `true` if the
    /// set changed.
    pub fn collapse(&mut self, id: &str) -> bool {
        let changed = self.expanded.remove(id);
        if changed {
            self.bump_revision();
        }
        changed
    }

    /// Expands every ancestor of `id` so that the node becomes visible.
    ///
    /// The node itself is left as it is. Returns `true` if the set changed.
    pub fn reveal(&mut self, tree: &Tree, id: &str) -> bool {
        let Some(key) = tree.find(id) else {
            return false;
        };
        let mut changed = false;
        for ancestor in tree.ancestors(key) {
            if !self.expanded.contains(ancestor.id()) {
                self.expanded.insert(ancestor.id().to_string());
                changed = true;
            }
        }
        if changed {
            self.bump_revision();
        }
        changed
    }

    /// Expands every node in `tree`.
    pub fn expand_all(&mut self, tree: &Tree) {
        self.replace_with(tree.ids());
    }

    /// Collapses everything except the root.
    pub fn collapse_all(&mut self, tree: &Tree) {
        self.replace_with(core::iter::once(tree.root().id()));
    }

    fn is_expandable(tree: &Tree, id: &str) -> bool {
        tree.node_by_id(id).is_some_and(|node| node.has_children())
    }

    fn replace_with<'a, I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let next: HashSet<String> = ids.into_iter().map(str::to_string).collect();
        if next != self.expanded {
            self.expanded = next;
            self.bump_revision();
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use grove_tree::{Tree, TreeNode};

    use super::ExpansionState;

    fn tree() -> Tree {
        Tree::new(TreeNode::new("root", "Root").with_children([
            TreeNode::new("a", "A").with_children([
                TreeNode::new("a1", "A1").with_child(TreeNode::new("a1x", "A1x")),
                TreeNode::new("a2", "A2"),
            ]),
            TreeNode::new("b", "B"),
            TreeNode::new("c", "C").with_child(TreeNode::new("c1", "C1")),
        ]))
        .unwrap()
    }

    #[test]
    fn initial_opens_root_and_branches() {
        let tree = tree();
        let state = ExpansionState::initial(&tree);
        assert_eq!(state.sorted_ids(), ["a", "b", "c", "root"]);
    }

    #[test]
    fn toggle_is_involutive() {
        let tree = tree();
        let mut state = ExpansionState::initial(&tree);
        state.expand(&tree, "a1");
        for id in ["root", "a", "a1", "c"] {
            let before = state.clone();
            assert!(state.toggle(&tree, id));
            assert_ne!(state, before);
            assert!(state.toggle(&tree, id));
            assert_eq!(state, before);
        }
    }

    #[test]
    fn toggle_on_leaf_or_unknown_is_a_no_op() {
        let tree = tree();
        let mut state = ExpansionState::initial(&tree);
        let before = state.clone();
        let rev = state.revision();
        assert!(!state.toggle(&tree, "a2"));
        assert!(!state.toggle(&tree, "missing"));
        assert_eq!(state, before);
        assert_eq!(state.revision(), rev);
    }

    #[test]
    fn toggle_root_without_children_is_a_no_op() {
        let tree = Tree::new(TreeNode::new("solo", "Solo")).unwrap();
        let mut state = ExpansionState::initial(&tree);
        assert_eq!(state.sorted_ids(), ["solo"]);
        assert!(!state.toggle(&tree, "solo"));
        assert_eq!(state.sorted_ids(), ["solo"]);
    }

    #[test]
    fn collapse_preserves_descendant_memory() {
        let tree = tree();
        let mut state = ExpansionState::initial(&tree);
        state.expand(&tree, "a1");
        state.toggle(&tree, "a");
        assert!(!state.is_expanded("a"));
        assert!(state.is_expanded("a1"));
        state.toggle(&tree, "a");
        assert!(state.is_expanded("a") && state.is_expanded("a1"));
    }

    #[test]
    fn expand_and_collapse_all_compose() {
        let tree = tree();
        let mut state = ExpansionState::initial(&tree);

        state.collapse_all(&tree);
        state.expand_all(&tree);
        let all: Vec<&str> = {
            let mut ids: Vec<&str> = tree.ids().collect();
            ids.sort_unstable();
            ids
        };
        assert_eq!(state.sorted_ids(), all);

        state.expand_all(&tree);
        state.collapse_all(&tree);
        assert_eq!(state.sorted_ids(), ["root"]);
    }

    #[test]
    fn reveal_opens_ancestors_only() {
        let tree = tree();
        let mut state = ExpansionState::new();
        assert!(state.reveal(&tree, "a1x"));
        assert_eq!(state.sorted_ids(), ["a", "a1", "root"]);
        assert!(!state.reveal(&tree, "a1x"));
        assert!(!state.reveal(&tree, "nope"));
    }

    #[test]
    fn revision_tracks_real_changes_only() {
        let tree = tree();
        let mut state = ExpansionState::new();
        assert_eq!(state.revision(), 0);
        state.initialize(&tree);
        assert_eq!(state.revision(), 1);
        state.initialize(&tree);
        assert_eq!(state.revision(), 1);
        assert!(!state.collapse("b1-missing"));
        assert_eq!(state.revision(), 1);
        assert!(state.collapse("b"));
        assert_eq!(state.revision(), 2);
        assert!(!state.expand(&tree, "b"));
    }
}
