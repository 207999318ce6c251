// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::VecDeque;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, TAU};

use grove_expansion::ExpansionState;
use grove_tree::{Node, NodeKey, NodeKind, Tree};
use kurbo::{Line, Point, Rect, Size, Vec2};

use crate::config::LayoutConfig;

/// A visible node with its computed placement.
///
/// Positioned nodes are derived data: they are rebuilt on every layout pass and
/// never fed back into the tree.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedNode {
    /// Node id.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Optional description.
    pub description: Option<String>,
    /// Importance rank in `1..=5`, if any.
    pub importance: Option<u8>,
    /// Source page this node navigates to, if any.
    pub source_page_index: Option<usize>,
    /// Centre of the node box.
    pub position: Point,
    /// Bearing from the parent in radians (`0` for the root).
    ///
    /// Angles follow screen coordinates: `-π/2` points up.
    pub angle: f64,
    /// Distance from the root.
    pub depth: usize,
    /// Tier of the node.
    pub kind: NodeKind,
    /// Set only for the root.
    pub is_root: bool,
    /// The node has children that this layout is able to show.
    pub has_children: bool,
    /// The node has children and they are currently shown.
    pub is_expanded: bool,
    /// Size of the node box.
    pub size: Size,
}

impl PositionedNode {
    /// Horizontal centre.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Vertical centre.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// The node box.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.position, self.size)
    }
}

/// A visible parent to child edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
    /// Parent id.
    pub from: String,
    /// Child id.
    pub to: String,
    /// Segment from the parent centre to the child centre.
    pub line: Line,
    /// Depth of the child end.
    pub depth: usize,
}

impl Connection {
    /// Stable identifier of the edge, `"{from}->{to}"`.
    #[must_use]
    pub fn id(&self) -> String {
        format!("{}->{}", self.from, self.to)
    }

    /// Edges into leaves are drawn dashed.
    #[must_use]
    pub fn is_dashed(&self) -> bool {
        self.depth >= 2
    }
}

/// Output of a layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    nodes: Vec<PositionedNode>,
    connections: Vec<Connection>,
    bounds: Rect,
}

impl Layout {
    /// Visible nodes, tier by tier starting with the root.
    #[must_use]
    pub fn nodes(&self) -> &[PositionedNode] {
        &self.nodes
    }

    /// Visible edges, one per visible non-root node.
    #[must_use]
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Box covering every node box plus the configured margin.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The root placement.
    #[must_use]
    pub fn root(&self) -> &PositionedNode {
        // The root is always emitted first.
        &self.nodes[0]
    }

    /// Looks up a visible node by id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&PositionedNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Returns `true` if `id` is visible.
    #[must_use]
    pub fn is_visible(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Number of visible leaves.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| node.kind == NodeKind::Leaf)
            .count()
    }

    /// Topmost node whose box contains `point` (layout coordinates).
    ///
    /// Nodes are drawn in emission order, so later nodes win.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<&PositionedNode> {
        self.nodes.iter().rev().find(|node| node.rect().contains(point))
    }
}

/// Lays out the visible part of `tree` with the default [`LayoutConfig`].
#[must_use]
pub fn compute_layout_default(tree: &Tree, expansion: &ExpansionState) -> Layout {
    compute_layout(tree, expansion, &LayoutConfig::default())
}

/// Lays out the visible part of `tree`.
///
/// A node is visible iff every ancestor is expanded and its depth is at most
/// [`LayoutConfig::max_depth`]. Only visible nodes (and the children list of
/// expanded ones) are visited, so the cost is linear in the visible node count.
///
/// The result depends only on the arguments: the same inputs always yield the
/// same coordinates.
#[must_use]
pub fn compute_layout(tree: &Tree, expansion: &ExpansionState, config: &LayoutConfig) -> Layout {
    let mut nodes: Vec<PositionedNode> = Vec::new();
    let mut connections: Vec<Connection> = Vec::new();

    let root_key = tree.root_key();
    nodes.push(place(tree, root_key, config.center, 0.0, expansion, config));

    // (node, its position, its bearing)
    let mut queue: VecDeque<(NodeKey, Point, f64)> = VecDeque::new();
    queue.push_back((root_key, config.center, 0.0));

    while let Some((key, position, angle)) = queue.pop_front() {
        let node = &tree[key];
        if !shows_children(node, expansion, config) {
            continue;
        }
        let children = node.children();
        let count = children.len();
        for (index, &child_key) in children.iter().enumerate() {
            let (child_angle, offset) = if node.is_root() {
                let bearing = ring_angle(index, count);
                (bearing, Vec2::from_angle(bearing) * config.branch_radius)
            } else {
                let bearing = fan_angle(angle, index, count, config.sector_span);
                (bearing, Vec2::from_angle(bearing) * config.leaf_radius)
            };
            let child_position = position + offset;
            let child = place(tree, child_key, child_position, child_angle, expansion, config);
            connections.push(Connection {
                from: node.id().to_string(),
                to: child.id.clone(),
                line: Line::new(position, child_position),
                depth: child.depth,
            });
            nodes.push(child);
            queue.push_back((child_key, child_position, child_angle));
        }
    }

    let bounds = compute_bounds(&nodes, config);
    Layout {
        nodes,
        connections,
        bounds,
    }
}

/// Whether `node` is expanded and its children fall within the depth limit.
fn shows_children(node: &Node, expansion: &ExpansionState, config: &LayoutConfig) -> bool {
    can_show_children(node, config) && expansion.is_expanded(node.id())
}

fn can_show_children(node: &Node, config: &LayoutConfig) -> bool {
    node.has_children() && node.depth() < config.max_depth
}

/// Bearing of child `index` of `count` on the full ring around the root.
fn ring_angle(index: usize, count: usize) -> f64 {
    -FRAC_PI_2 + step(TAU, count) * as_f64(index)
}

/// Bearing of child `index` of `count` in a fan centred on `parent_angle`.
fn fan_angle(parent_angle: f64, index: usize, count: usize, span: f64) -> f64 {
    if count <= 1 {
        return parent_angle;
    }
    parent_angle - span / 2.0 + step(span, count - 1) * as_f64(index)
}

fn step(span: f64, divisions: usize) -> f64 {
    span / as_f64(divisions)
}

fn as_f64(value: usize) -> f64 {
    value as f64
}

fn place(
    tree: &Tree,
    key: NodeKey,
    position: Point,
    angle: f64,
    expansion: &ExpansionState,
    config: &LayoutConfig,
) -> PositionedNode {
    let node = &tree[key];
    let has_children = can_show_children(node, config);
    PositionedNode {
        id: node.id().to_string(),
        label: node.label().to_string(),
        description: node.description().map(ToString::to_string),
        importance: node.importance(),
        source_page_index: node.source_page_index(),
        position,
        angle,
        depth: node.depth(),
        kind: node.kind(),
        is_root: node.is_root(),
        has_children,
        is_expanded: has_children && expansion.is_expanded(node.id()),
        size: config.tier(node.kind()).size,
    }
}

fn compute_bounds(nodes: &[PositionedNode], config: &LayoutConfig) -> Rect {
    let margin = config.margin;
    let mut rects = nodes.iter().map(PositionedNode::rect);
    let Some(first) = rects.next() else {
        return Rect::from_center_size(config.center, config.min_canvas);
    };
    if nodes.len() == 1 {
        // Only the root: a fixed canvas, grown if the root box would not fit.
        return Rect::from_center_size(config.center, config.min_canvas)
            .union(first.inflate(margin, margin));
    }
    rects
        .fold(first, |acc, rect| acc.union(rect))
        .inflate(margin, margin)
}
