// Copyright 2025 the Grove Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG snapshots of a Grove layout.
//!
//! [`export_svg`] turns a [`Layout`] into a standalone SVG document: edges
//! first, then one group per node with its box, wrapped label and, for nodes
//! that can be expanded, a small `+`/`-` badge. Labels are wrapped with
//! [`grove_text`] using the same [`TierMetrics`](grove_layout::TierMetrics) the
//! layout used for bounds, so nothing is clipped by the view box.
//!
//! Export is read-only: it takes shared references and produces a `String`.
//! Descriptions are attached as `<title>` elements so viewers show them as
//! tooltips; truncated labels end with an ellipsis.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt::Write as _;

use grove_layout::{Connection, Layout, LayoutConfig, PositionedNode};
use grove_text::WrapConfig;
use grove_tree::NodeKind;
use kurbo::{Point, Rect};
use peniko::Color;

/// Colors and strokes used by [`export_svg`].
#[derive(Clone, Debug)]
pub struct SvgTheme {
    /// Fill behind everything; `None` leaves the background transparent.
    pub background: Option<Color>,
    /// Fill of the root box.
    pub root_fill: Color,
    /// Fill of branch boxes.
    pub branch_fill: Color,
    /// Fill of leaf boxes.
    pub leaf_fill: Color,
    /// Outline of node boxes.
    pub node_stroke: Color,
    /// Label color on the root box.
    pub root_text: Color,
    /// Label color on branch and leaf boxes.
    pub text: Color,
    /// Edge color.
    pub edge: Color,
    /// Edge width.
    pub edge_width: f64,
    /// Dash pattern for edges into leaves.
    pub dash: [f64; 2],
    /// Corner radius of node boxes.
    pub corner_radius: f64,
    /// CSS font family for labels.
    pub font_family: &'static str,
}

impl Default for SvgTheme {
    fn default() -> Self {
        Self {
            background: Some(Color::from_rgb8(0xf8, 0xfa, 0xfc)),
            root_fill: Color::from_rgb8(0x4f, 0x46, 0xe5),
            branch_fill: Color::from_rgb8(0xe0, 0xe7, 0xff),
            leaf_fill: Color::from_rgb8(0xff, 0xff, 0xff),
            node_stroke: Color::from_rgb8(0x63, 0x66, 0xf1),
            root_text: Color::from_rgb8(0xff, 0xff, 0xff),
            text: Color::from_rgb8(0x1e, 0x29, 0x3b),
            edge: Color::from_rgb8(0x94, 0xa3, 0xb8),
            edge_width: 2.0,
            dash: [6.0, 4.0],
            corner_radius: 12.0,
            font_family: "Inter, system-ui, sans-serif",
        }
    }
}

/// Renders `layout` as an SVG document framed by `view_box`.
///
/// `view_box` is normally the viewport's view box (or its zoomed variant).
/// The document's `width`/`height` match the view box size.
#[must_use]
pub fn export_svg(
    layout: &Layout,
    config: &LayoutConfig,
    view_box: Rect,
    theme: &SvgTheme,
) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\" width=\"{}\" height=\"{}\">",
        fmt_f64(view_box.x0),
        fmt_f64(view_box.y0),
        fmt_f64(view_box.width()),
        fmt_f64(view_box.height()),
        fmt_f64(view_box.width()),
        fmt_f64(view_box.height()),
    );

    if let Some(background) = theme.background {
        let _ = write!(
            out,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}/>",
            fmt_f64(view_box.x0),
            fmt_f64(view_box.y0),
            fmt_f64(view_box.width()),
            fmt_f64(view_box.height()),
            paint_attr("fill", background),
        );
    }

    out.push_str("<g class=\"edges\">");
    for edge in layout.connections() {
        write_edge(&mut out, edge, theme);
    }
    out.push_str("</g>");

    out.push_str("<g class=\"nodes\">");
    for node in layout.nodes() {
        write_node(&mut out, node, config, theme);
    }
    out.push_str("</g></svg>");
    out
}

fn write_edge(out: &mut String, edge: &Connection, theme: &SvgTheme) {
    let _ = write!(
        out,
        "<line data-id=\"{}\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{} stroke-width=\"{}\"",
        escape_xml(&edge.id()),
        fmt_f64(edge.line.p0.x),
        fmt_f64(edge.line.p0.y),
        fmt_f64(edge.line.p1.x),
        fmt_f64(edge.line.p1.y),
        paint_attr("stroke", theme.edge),
        fmt_f64(theme.edge_width),
    );
    if edge.is_dashed() {
        let _ = write!(
            out,
            " stroke-dasharray=\"{} {}\"",
            fmt_f64(theme.dash[0]),
            fmt_f64(theme.dash[1])
        );
    }
    out.push_str("/>");
}

fn write_node(out: &mut String, node: &PositionedNode, config: &LayoutConfig, theme: &SvgTheme) {
    let tier = config.tier(node.kind);
    let rect = node.rect();
    let (fill, text_color, class) = match node.kind {
        NodeKind::Root => (theme.root_fill, theme.root_text, "root"),
        NodeKind::Branch => (theme.branch_fill, theme.text, "branch"),
        NodeKind::Leaf => (theme.leaf_fill, theme.text, "leaf"),
    };

    let _ = write!(
        out,
        "<g class=\"node node-{class}\" data-id=\"{}\"",
        escape_xml(&node.id)
    );
    if let Some(page) = node.source_page_index {
        let _ = write!(out, " data-page=\"{page}\"");
    }
    out.push('>');

    if let Some(description) = &node.description {
        let _ = write!(out, "<title>{}</title>", escape_xml(description));
    }

    let _ = write!(
        out,
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\"{}{} stroke-width=\"{}\"/>",
        fmt_f64(rect.x0),
        fmt_f64(rect.y0),
        fmt_f64(rect.width()),
        fmt_f64(rect.height()),
        fmt_f64(theme.corner_radius),
        paint_attr("fill", fill),
        paint_attr("stroke", theme.node_stroke),
        fmt_f64(stroke_width(node.importance)),
    );

    let wrapped = WrapConfig::for_font_size(tier.font_size).wrap(&node.label, tier.text_width());
    let line_count = wrapped.lines().len();
    if line_count > 0 {
        let line_height = tier.font_size * 1.2;
        let first_baseline = node.position.y - (line_count - 1) as f64 * line_height / 2.0
            + tier.font_size * 0.35;
        let _ = write!(
            out,
            "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\"{}>",
            fmt_f64(node.position.x),
            fmt_f64(first_baseline),
            escape_xml(theme.font_family),
            fmt_f64(tier.font_size),
            paint_attr("fill", text_color),
        );
        for (i, line) in wrapped.lines().iter().enumerate() {
            let dy = if i == 0 { 0.0 } else { line_height };
            let ellipsis = if wrapped.is_truncated() && i + 1 == line_count {
                "\u{2026}"
            } else {
                ""
            };
            let _ = write!(
                out,
                "<tspan x=\"{}\" dy=\"{}\">{}{ellipsis}</tspan>",
                fmt_f64(node.position.x),
                fmt_f64(dy),
                escape_xml(line),
            );
        }
        out.push_str("</text>");
    }

    if node.has_children {
        let badge = Point::new(rect.x1, rect.y0);
        let sign = if node.is_expanded { "\u{2212}" } else { "+" };
        let _ = write!(
            out,
            "<circle class=\"toggle\" cx=\"{}\" cy=\"{}\" r=\"9\"{}{}/>",
            fmt_f64(badge.x),
            fmt_f64(badge.y),
            paint_attr("fill", theme.leaf_fill),
            paint_attr("stroke", theme.node_stroke),
        );
        let _ = write!(
            out,
            "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"12\"{}>{sign}</text>",
            fmt_f64(badge.x),
            fmt_f64(badge.y + 4.0),
            paint_attr("fill", theme.node_stroke),
        );
    }

    out.push_str("</g>");
}

/// Heavier outlines for more important nodes.
fn stroke_width(importance: Option<u8>) -> f64 {
    match importance {
        Some(rank) => 1.0 + 0.5 * f64::from(rank.clamp(1, 5)),
        None => 1.5,
    }
}

fn paint_attr(name: &str, color: Color) -> String {
    let (rgb, alpha) = color_to_svg(color);
    if alpha < 1.0 {
        format!(" {name}=\"{rgb}\" {name}-opacity=\"{}\"", fmt_f64(f64::from(alpha)))
    } else {
        format!(" {name}=\"{rgb}\"")
    }
}

fn color_to_svg(color: Color) -> (String, f32) {
    let rgba = color.to_rgba8();
    let a = f32::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn fmt_f64(v: f64) -> String {
    // Keep output readable and stable across runs.
    if !v.is_finite() {
        return format!("{v}");
    }
    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}
