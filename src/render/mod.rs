// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Astree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Astree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Rendering for laid-out label trees.
//!
//! The renderer only talks to a [`Surface`], which is passed in explicitly. Surfaces provided here
//! write SVG, rasterize onto a character grid, or record the draw calls for later replay (the
//! terminal viewer paints from such a recording).

use serde::Deserialize;

use crate::layout::LayoutMetrics;
use crate::model::LabelNode;

pub mod display_list;
pub mod grid;
pub mod outline;
pub mod svg;
mod text;

pub use display_list::{DisplayList, DrawOp};
pub use grid::{Canvas, CanvasError, GridMetrics, GridSurface};
pub use outline::render_outline;
pub use svg::SvgSurface;

/// A position in surface pixels; `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Stroke {
    /// CSS hex color, `#rrggbb` or `#rgb`.
    pub color: String,
    pub width: f64,
}

impl Default for Stroke {
    fn default() -> Self {
        Self { color: "#000".to_owned(), width: 1.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextStyle {
    pub color: String,
    pub font_family: String,
    pub font_size: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self { color: "#000".to_owned(), font_family: "Arial".to_owned(), font_size: 12.0 }
    }
}

/// Colors, strokes and label policy for node and edge glyphs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderStyle {
    pub node_fill: String,
    pub node_stroke: Stroke,
    pub edge: Stroke,
    pub label: TextStyle,
    /// Gap between the top of a node circle and its label baseline.
    pub label_offset: f64,
    /// Labels longer than this many chars are shortened.
    pub label_max_chars: usize,
    /// Chars kept in front of the `...` of a shortened label.
    pub label_keep_chars: usize,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            node_fill: "#4CAF50".to_owned(),
            node_stroke: Stroke { color: "#333".to_owned(), width: 2.0 },
            edge: Stroke { color: "#555".to_owned(), width: 2.0 },
            label: TextStyle::default(),
            label_offset: 5.0,
            label_max_chars: 20,
            label_keep_chars: 17,
        }
    }
}

impl RenderStyle {
    /// The label as drawn, shortened per `label_max_chars`/`label_keep_chars`.
    pub fn display_label<'a>(&self, label: &'a str) -> std::borrow::Cow<'a, str> {
        text::truncate_label(label, self.label_max_chars, self.label_keep_chars)
    }
}

/// A 2D drawing target.
///
/// Text is horizontally centered on `anchor` with its bottom edge at `anchor.y`.
pub trait Surface {
    /// Discards everything drawn so far and resizes the surface.
    fn clear(&mut self, size: Size);
    fn line(&mut self, from: Point, to: Point, stroke: &Stroke);
    fn circle(&mut self, center: Point, radius: f64, fill: &str, stroke: &Stroke);
    fn text(&mut self, anchor: Point, text: &str, style: &TextStyle);
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("node {label:?} has no position; run the layout before rendering")]
    Unplaced { label: String },
}

/// Draws `node`'s subtree onto `surface`.
///
/// For every child the connecting edge is drawn first, then the child's subtree; the node's own
/// glyph comes last, so edges end up beneath circles on compositing surfaces.
pub fn render_tree(
    node: &LabelNode,
    surface: &mut dyn Surface,
    metrics: &LayoutMetrics,
    style: &RenderStyle,
) -> Result<(), RenderError> {
    let center = center_of(node)?;

    for child in node.children() {
        surface.line(center, center_of(child)?, &style.edge);
        render_tree(child, surface, metrics, style)?;
    }

    draw_node(surface, center, node.label(), metrics, style);
    Ok(())
}

fn center_of(node: &LabelNode) -> Result<Point, RenderError> {
    node.placement()
        .map(|placement| Point { x: placement.x, y: placement.y })
        .ok_or_else(|| RenderError::Unplaced { label: node.label().to_owned() })
}

fn draw_node(
    surface: &mut dyn Surface,
    center: Point,
    label: &str,
    metrics: &LayoutMetrics,
    style: &RenderStyle,
) {
    let radius = metrics.node_radius;
    surface.circle(center, radius, &style.node_fill, &style.node_stroke);

    let anchor = Point { x: center.x, y: center.y - radius - style.label_offset };
    surface.text(anchor, &style.display_label(label), &style.label);
}
