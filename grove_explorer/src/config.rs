// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use grove_layout::LayoutConfig;
use grove_svg::SvgTheme;
use grove_view::{DEFAULT_PADDING, ZoomConfig};

/// Settings for an [`Explorer`](crate::Explorer).
#[derive(Clone, Debug)]
pub struct ExplorerConfig {
    /// Placement and box metrics.
    pub layout: LayoutConfig,
    /// Space between the layout bounds and the view box.
    pub padding: f64,
    /// Zoom limits and step.
    pub zoom: ZoomConfig,
    /// Colors used by [`Explorer::export_snapshot`](crate::Explorer::export_snapshot).
    pub theme: SvgTheme,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            padding: DEFAULT_PADDING,
            zoom: ZoomConfig::default(),
            theme: SvgTheme::default(),
        }
    }
}
