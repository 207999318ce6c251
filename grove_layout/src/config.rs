// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::FRAC_PI_2;

use grove_tree::NodeKind;
use kurbo::{Point, Size};

/// Box and text metrics for one tier of nodes.
///
/// The renderer must draw with the same metrics the layout used for bounds,
/// otherwise node boxes can be clipped by the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierMetrics {
    /// Size of the node box, centred on the node position.
    pub size: Size,
    /// Font size of the label.
    pub font_size: f64,
    /// Horizontal inset between the box edge and the label.
    pub padding: f64,
}

impl TierMetrics {
    /// Width available to the wrapped label.
    #[must_use]
    pub fn text_width(&self) -> f64 {
        (self.size.width - 2.0 * self.padding).max(0.0)
    }
}

/// Parameters of the radial layout.
///
/// All lengths are in layout units; the viewport maps them to pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    /// Position of the root.
    pub center: Point,
    /// Distance of branches from the root.
    pub branch_radius: f64,
    /// Distance of each deeper node from its own parent.
    pub leaf_radius: f64,
    /// Angular span of a fan of children below a branch, in radians.
    pub sector_span: f64,
    /// Margin added around the union of node boxes.
    pub margin: f64,
    /// Bounds used when only the root is visible.
    pub min_canvas: Size,
    /// Deepest depth that is laid out. The root is depth 0.
    pub max_depth: usize,
    /// Metrics of the root box.
    pub root: TierMetrics,
    /// Metrics of branch boxes.
    pub branch: TierMetrics,
    /// Metrics of leaf boxes.
    pub leaf: TierMetrics,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            center: Point::new(600.0, 450.0),
            branch_radius: 260.0,
            leaf_radius: 180.0,
            sector_span: FRAC_PI_2,
            margin: 40.0,
            min_canvas: Size::new(1200.0, 900.0),
            max_depth: 2,
            root: TierMetrics {
                size: Size::new(180.0, 64.0),
                font_size: 15.0,
                padding: 12.0,
            },
            branch: TierMetrics {
                size: Size::new(160.0, 56.0),
                font_size: 13.0,
                padding: 10.0,
            },
            leaf: TierMetrics {
                size: Size::new(140.0, 48.0),
                font_size: 11.0,
                padding: 8.0,
            },
        }
    }
}

impl LayoutConfig {
    /// Metrics for nodes of `kind`.
    #[must_use]
    pub fn tier(&self, kind: NodeKind) -> &TierMetrics {
        match kind {
            NodeKind::Root => &self.root,
            NodeKind::Branch => &self.branch,
            NodeKind::Leaf => &self.leaf,
        }
    }

    /// Sets [`LayoutConfig::max_depth`].
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets [`LayoutConfig::center`].
    #[must_use]
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }
}
