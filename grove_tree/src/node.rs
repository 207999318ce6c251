// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node types: the nested construction form and the indexed, validated form.

use alloc::string::String;
use alloc::vec::Vec;

/// Nested description of a content hierarchy, as produced by a generator or
/// assembled by hand.
///
/// This is the input to [`Tree::new`](crate::Tree::new) and
/// [`Tree::from_untrusted`](crate::Tree::from_untrusted). It carries no
/// guarantees of its own; ids may repeat, importance may be out of range and
/// nesting may be arbitrarily deep until it is loaded into a [`Tree`](crate::Tree).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct TreeNode {
    /// Identifier, unique across the whole tree.
    pub id: String,
    /// Short display label.
    pub label: String,
    /// Optional longer description.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub description: Option<String>,
    /// Optional importance rank in `1..=5`.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub importance: Option<u8>,
    /// Index of the source page this node was derived from, if any.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub source_page_index: Option<usize>,
    /// Ordered children. Order determines angular placement.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Creates a childless node with the given id and label.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the importance rank.
    #[must_use]
    pub fn with_importance(mut self, importance: u8) -> Self {
        self.importance = Some(importance);
        self
    }

    /// Sets the source page index.
    #[must_use]
    pub fn with_source_page(mut self, index: usize) -> Self {
        self.source_page_index = Some(index);
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several children, preserving their order.
    #[must_use]
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        self.children.extend(children);
        self
    }
}

/// Tier of a node in the hierarchy.
///
/// The renderer and layout treat the three tiers differently (box size,
/// placement radius, edge styling). Anything nested below a branch is a leaf,
/// whatever its actual depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// The single node at depth 0.
    Root,
    /// A direct child of the root.
    Branch,
    /// A node at depth 2 or deeper.
    Leaf,
}

impl NodeKind {
    /// Returns the tier for a node at `depth`.
    #[must_use]
    pub const fn for_depth(depth: usize) -> Self {
        match depth {
            0 => Self::Root,
            1 => Self::Branch,
            _ => Self::Leaf,
        }
    }
}

/// Handle of a node inside a [`Tree`](crate::Tree).
///
/// Keys are plain arena indices. They are only meaningful for the tree that
/// produced them; trees are immutable, so a key never goes stale.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(pub(crate) u32);

impl NodeKey {
    pub(crate) const ROOT: Self = Self(0);

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// A node stored in a validated [`Tree`](crate::Tree).
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub(crate) id: String,
    pub(crate) label: String,
    pub(crate) description: Option<String>,
    pub(crate) importance: Option<u8>,
    pub(crate) source_page_index: Option<usize>,
    pub(crate) depth: usize,
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeKey>,
    pub(crate) children: Vec<NodeKey>,
}

impl Node {
    /// Unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Importance rank in `1..=5`, if any.
    #[must_use]
    pub fn importance(&self) -> Option<u8> {
        self.importance
    }

    /// Source page index, if this node is bound to a page.
    #[must_use]
    pub fn source_page_index(&self) -> Option<usize> {
        self.source_page_index
    }

    /// Distance from the root (root is `0`).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Tier derived from [`Node::depth`].
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns `true` for the root node.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Parent key, `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// Children keys in their original order.
    #[must_use]
    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    /// Returns `true` if the node has at least one child.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
