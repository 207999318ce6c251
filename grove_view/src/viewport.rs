// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect};

use crate::zoom::{Zoom, ZoomConfig};

/// Default padding between layout bounds and the view box.
pub const DEFAULT_PADDING: f64 = 40.0;

/// Expands `bounds` by `padding` on every side.
///
/// The result is the rectangle a renderer should use as its view box when
/// drawing the layout unzoomed.
#[must_use]
pub fn compute_view_box(bounds: Rect, padding: f64) -> Rect {
    bounds.inflate(padding, padding)
}

/// View box plus zoom for rendering a layout.
///
/// The view box follows the layout bounds; it is recomputed by
/// [`ViewportState::set_bounds`] whenever they change. Zoom is tracked
/// independently and only affects [`ViewportState::visible_view_box`] and
/// the derived transforms.
#[derive(Clone, Debug)]
pub struct ViewportState {
    bounds: Option<Rect>,
    view_box: Rect,
    padding: f64,
    zoom: Zoom,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(DEFAULT_PADDING, ZoomConfig::default())
    }
}

impl ViewportState {
    /// Creates a viewport with no bounds yet and a neutral zoom.
    #[must_use]
    pub fn new(padding: f64, zoom: ZoomConfig) -> Self {
        Self {
            bounds: None,
            view_box: Rect::ZERO,
            padding,
            zoom: Zoom::new(zoom),
        }
    }

    /// Updates the layout bounds, recomputing the view box if they changed.
    ///
    /// Returns `true` if the view box changed.
    pub fn set_bounds(&mut self, bounds: Rect) -> bool {
        if self.bounds == Some(bounds) {
            return false;
        }
        self.bounds = Some(bounds);
        self.view_box = compute_view_box(bounds, self.padding);
        true
    }

    /// Forgets the bounds, for example when the map becomes empty.
    pub fn clear_bounds(&mut self) {
        self.bounds = None;
        self.view_box = Rect::ZERO;
    }

    /// Last bounds passed to [`ViewportState::set_bounds`].
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Unzoomed view box.
    #[must_use]
    pub fn view_box(&self) -> Rect {
        self.view_box
    }

    /// Padding around the bounds.
    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// The zoom state.
    #[must_use]
    pub fn zoom(&self) -> &Zoom {
        &self.zoom
    }

    /// Mutable access to the zoom state.
    ///
    /// Zoom changes never touch the view box.
    pub fn zoom_mut(&mut self) -> &mut Zoom {
        &mut self.zoom
    }

    /// Region of layout space shown at the current zoom: the view box scaled
    /// about its centre by `1 / zoom`.
    #[must_use]
    pub fn visible_view_box(&self) -> Rect {
        let zoom = self.zoom.value();
        Rect::from_center_size(self.view_box.center(), self.view_box.size() / zoom)
    }

    /// Transform from layout space into `device_rect`.
    ///
    /// The visible view box is fitted into `device_rect` preserving aspect
    /// ratio and centred, the same as SVG's default `xMidYMid meet`.
    /// Degenerate rectangles yield the identity.
    #[must_use]
    pub fn world_to_view(&self, device_rect: Rect) -> Affine {
        let visible = self.visible_view_box();
        if visible.width() <= 0.0
            || visible.height() <= 0.0
            || device_rect.width() <= 0.0
            || device_rect.height() <= 0.0
        {
            return Affine::IDENTITY;
        }
        let sx = device_rect.width() / visible.width();
        let sy = device_rect.height() / visible.height();
        let scale = sx.min(sy);
        Affine::translate(device_rect.center().to_vec2())
            * Affine::scale(scale)
            * Affine::translate(-visible.center().to_vec2())
    }

    /// Converts a point in `device_rect` into layout coordinates, for hit
    /// testing clicks.
    #[must_use]
    pub fn view_to_world_point(&self, device_rect: Rect, point: Point) -> Point {
        self.world_to_view(device_rect).inverse() * point
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            bounds: self.bounds,
            view_box: self.view_box,
            visible_view_box: self.visible_view_box(),
            padding: self.padding,
            zoom: self.zoom.value(),
            min_zoom: self.zoom.config().min,
            max_zoom: self.zoom.config().max,
        }
    }
}

/// Debug snapshot of a [`ViewportState`].
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Layout bounds, if any.
    pub bounds: Option<Rect>,
    /// Unzoomed view box.
    pub view_box: Rect,
    /// View box at the current zoom.
    pub visible_view_box: Rect,
    /// Padding around the bounds.
    pub padding: f64,
    /// Current zoom factor.
    pub zoom: f64,
    /// Minimum zoom factor.
    pub min_zoom: f64,
    /// Maximum zoom factor.
    pub max_zoom: f64,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{ViewportState, compute_view_box};

    #[test]
    fn view_box_pads_bounds() {
        let bounds = Rect::new(10.0, 20.0, 110.0, 70.0);
        let view_box = compute_view_box(bounds, 40.0);
        assert_eq!(view_box.x0, -30.0);
        assert_eq!(view_box.y0, -20.0);
        assert_eq!(view_box.width(), 180.0);
        assert_eq!(view_box.height(), 130.0);
    }

    #[test]
    fn set_bounds_reports_changes() {
        let mut vp = ViewportState::default();
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(vp.set_bounds(bounds));
        assert!(!vp.set_bounds(bounds));
        assert_eq!(vp.view_box(), Rect::new(-40.0, -40.0, 140.0, 140.0));
        vp.clear_bounds();
        assert_eq!(vp.bounds(), None);
    }

    #[test]
    fn zoom_never_changes_view_box() {
        let mut vp = ViewportState::default();
        vp.set_bounds(Rect::new(0.0, 0.0, 200.0, 100.0));
        let before = vp.view_box();
        vp.zoom_mut().zoom_in();
        vp.zoom_mut().zoom_in();
        assert_eq!(vp.view_box(), before);

        let visible = vp.visible_view_box();
        assert!(visible.width() < before.width());
        assert!((visible.center() - before.center()).hypot() < 1e-9);
    }

    #[test]
    fn device_round_trip_and_fit() {
        let mut vp = ViewportState::default();
        vp.set_bounds(Rect::new(0.0, 0.0, 400.0, 200.0));
        let device = Rect::new(0.0, 0.0, 800.0, 600.0);

        let world = Point::new(123.0, 45.0);
        let view = vp.world_to_view(device) * world;
        let back = vp.view_to_world_point(device, view);
        assert!((back - world).hypot() < 1e-9);

        // The whole view box is visible in the device rect at zoom 1.
        let view_box = vp.view_box();
        let xf = vp.world_to_view(device);
        for corner in [
            Point::new(view_box.x0, view_box.y0),
            Point::new(view_box.x1, view_box.y1),
        ] {
            let p = xf * corner;
            assert!(p.x >= -1e-9 && p.x <= device.x1 + 1e-9);
            assert!(p.y >= -1e-9 && p.y <= device.y1 + 1e-9);
        }

        // View box centre maps to the device centre.
        let centre = xf * view_box.center();
        assert!((centre - device.center()).hypot() < 1e-9);
    }

    #[test]
    fn debug_info_reflects_state() {
        let mut vp = ViewportState::default();
        vp.set_bounds(Rect::new(0.0, 0.0, 10.0, 10.0));
        vp.zoom_mut().set(2.0);
        let info = vp.debug_info();
        assert_eq!(info.zoom, 2.0);
        assert!(info.min_zoom <= info.max_zoom);
        assert_eq!(info.view_box, vp.view_box());
    }
}
