// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grove View: framing a mind map layout for rendering.
//!
//! Two independent pieces of state decide what a renderer shows:
//! - The **view box**, derived from layout bounds by [`compute_view_box`]. It
//!   changes whenever the layout changes (tree swapped, branch toggled).
//! - The **zoom**, a scalar the user controls with fixed steps inside a
//!   clamped range ([`Zoom`], [`ZoomConfig`]). It never triggers a relayout
//!   and never alters layout coordinates.
//!
//! [`ViewportState`] combines both and derives the transforms needed to map
//! clicks in device space back into layout space.
//!
//! ```rust
//! use kurbo::Rect;
//! use grove_view::ViewportState;
//!
//! let mut viewport = ViewportState::default();
//! viewport.set_bounds(Rect::new(0.0, 0.0, 1200.0, 900.0));
//! assert_eq!(viewport.view_box(), Rect::new(-40.0, -40.0, 1240.0, 940.0));
//!
//! viewport.zoom_mut().zoom_in();
//! assert!(viewport.visible_view_box().width() < viewport.view_box().width());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod viewport;
mod zoom;

pub use viewport::{DEFAULT_PADDING, ViewportDebugInfo, ViewportState, compute_view_box};
pub use zoom::{Zoom, ZoomConfig};
