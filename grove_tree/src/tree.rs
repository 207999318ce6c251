// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::ops::Index;

use hashbrown::HashMap;

use crate::issue::{TreeError, TreeIssue};
use crate::node::{Node, NodeKey, NodeKind, TreeNode};

/// Hard cap on nesting accepted when loading a tree.
///
/// This bounds work on untrusted input. It is independent of how many tiers a
/// layout chooses to render.
pub const MAX_TREE_DEPTH: usize = 16;

/// A validated, immutable content hierarchy.
///
/// Nodes live in a flat arena in pre-order, so the root is always first and
/// iteration order is deterministic. Every id is unique and non-empty, and every
/// importance is within `1..=5`.
#[derive(Clone, Debug)]
pub struct Tree {
    nodes: Vec<Node>,
    by_id: HashMap<String, NodeKey>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Strict,
    Lenient,
}

impl Tree {
    /// Builds a tree, rejecting the first malformed node.
    ///
    /// # Errors
    ///
    /// Returns a [`TreeError`] for an empty or duplicate id, an importance
    /// outside `1..=5`, or nesting deeper than [`MAX_TREE_DEPTH`].
    pub fn new(root: TreeNode) -> Result<Self, TreeError> {
        let mut issues = Vec::new();
        let tree = Self::build(root, Mode::Strict, &mut issues);
        match issues.into_iter().next() {
            Some(issue) => Err(TreeError::new(issue)),
            None => Ok(tree),
        }
    }

    /// Builds a tree from untrusted input without failing.
    ///
    /// Malformed subtrees are dropped and out-of-range values clamped; each
    /// repair is described by one returned [`TreeIssue`].
    #[must_use]
    pub fn from_untrusted(root: TreeNode) -> (Self, Vec<TreeIssue>) {
        let mut issues = Vec::new();
        let tree = Self::build(root, Mode::Lenient, &mut issues);
        (tree, issues)
    }

    fn build(mut root: TreeNode, mode: Mode, issues: &mut Vec<TreeIssue>) -> Self {
        if root.id.is_empty() {
            issues.push(TreeIssue::EmptyId { parent: None });
            root.id = String::from("root");
        }

        let mut nodes: Vec<Node> = Vec::new();
        let mut by_id: HashMap<String, NodeKey> = HashMap::new();
        // (node, parent, depth); children are pushed reversed so pops come out in pre-order.
        let mut stack: Vec<(TreeNode, Option<NodeKey>, usize)> = vec![(root, None, 0)];

        while let Some((mut raw, parent, depth)) = stack.pop() {
            if mode == Mode::Strict && !issues.is_empty() {
                break;
            }
            let parent_id = || parent.map(|p| nodes[p.idx()].id.clone());

            if raw.id.is_empty() {
                issues.push(TreeIssue::EmptyId {
                    parent: parent_id(),
                });
                continue;
            }
            if by_id.contains_key(&raw.id) {
                issues.push(TreeIssue::DuplicateId { id: raw.id });
                continue;
            }
            if depth > MAX_TREE_DEPTH {
                issues.push(TreeIssue::TooDeep { id: raw.id, depth });
                continue;
            }
            let importance = match raw.importance {
                Some(value) if !(1..=5).contains(&value) => {
                    issues.push(TreeIssue::ImportanceOutOfRange {
                        id: raw.id.clone(),
                        value,
                    });
                    Some(value.clamp(1, 5))
                }
                other => other,
            };

            let Ok(slot) = u32::try_from(nodes.len()) else {
                break;
            };
            let key = NodeKey(slot);
            if let Some(p) = parent {
                nodes[p.idx()].children.push(key);
            }

            let children = core::mem::take(&mut raw.children);
            for child in children.into_iter().rev() {
                stack.push((child, Some(key), depth + 1));
            }

            by_id.insert(raw.id.clone(), key);
            nodes.push(Node {
                id: raw.id,
                label: raw.label,
                description: raw.description,
                importance,
                source_page_index: raw.source_page_index,
                depth,
                kind: NodeKind::for_depth(depth),
                parent,
                children: Vec::new(),
            });
        }

        Self { nodes, by_id }
    }

    /// Key of the root node.
    #[must_use]
    pub fn root_key(&self) -> NodeKey {
        NodeKey::ROOT
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.nodes[NodeKey::ROOT.idx()]
    }

    /// Returns the node for `key`, or `None` if the key belongs to another tree.
    #[must_use]
    pub fn get(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key.idx())
    }

    /// Looks up a node key by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<NodeKey> {
        self.by_id.get(id).copied()
    }

    /// Looks up a node by id.
    #[must_use]
    pub fn node_by_id(&self, id: &str) -> Option<&Node> {
        self.find(id).map(|key| &self.nodes[key.idx()])
    }

    /// Returns `true` if a node with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Number of nodes, including the root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Depth of the deepest node.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(Node::depth).max().unwrap_or(0)
    }

    /// Iterates all nodes in pre-order.
    pub fn iter(&self) -> core::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Iterates all ids in pre-order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(Node::id)
    }

    /// Iterates the children of `key` in order.
    pub fn children(&self, key: NodeKey) -> impl Iterator<Item = &Node> + '_ {
        self.get(key)
            .map(Node::children)
            .unwrap_or_default()
            .iter()
            .map(|child| &self.nodes[child.idx()])
    }

    /// Iterates the ancestors of `key`, nearest first, ending with the root.
    pub fn ancestors(&self, key: NodeKey) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.get(key).and_then(Node::parent),
        }
    }
}

impl Index<NodeKey> for Tree {
    type Output = Node;

    fn index(&self, key: NodeKey) -> &Node {
        &self.nodes[key.idx()]
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = &'a Node;
    type IntoIter = core::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the ancestors of a node, see [`Tree::ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors<'a> {
    tree: &'a Tree,
    next: Option<NodeKey>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let key = self.next?;
        let node = &self.tree.nodes[key.idx()];
        self.next = node.parent;
        Some(node)
    }
}
