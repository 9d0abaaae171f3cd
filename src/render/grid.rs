// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Astree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Astree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Character-grid surface for terminals and text snapshots.

use std::fmt;

use serde::Deserialize;

use super::text::{canvas_to_string_trimmed, text_len};
use super::{Point, Size, Stroke, Surface, TextStyle};

pub const UNICODE_BOX_HORIZONTAL: char = '─';
pub const UNICODE_BOX_VERTICAL: char = '│';
pub const UNICODE_BOX_TEE_DOWN: char = '┬';
pub const UNICODE_BOX_TEE_UP: char = '┴';
pub const UNICODE_BOX_CROSS: char = '┼';
pub const NODE_GLYPH: char = '●';

/// Largest grid [`GridSurface`] will allocate in either direction.
pub const MAX_GRID_CELLS: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoxEdges(u8);

impl BoxEdges {
    const NONE: Self = Self(0);
    const LEFT: Self = Self(1 << 0);
    const RIGHT: Self = Self(1 << 1);
    const UP: Self = Self(1 << 2);
    const DOWN: Self = Self(1 << 3);

    fn is_empty(self) -> bool {
        self.0 == 0
    }

    fn contains(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

fn box_edges_from_char(ch: char) -> Option<BoxEdges> {
    match ch {
        UNICODE_BOX_HORIZONTAL => Some(BoxEdges::LEFT.union(BoxEdges::RIGHT)),
        UNICODE_BOX_VERTICAL => Some(BoxEdges::UP.union(BoxEdges::DOWN)),
        _ => None,
    }
}

fn box_char_from_edges(edges: BoxEdges) -> char {
    let horizontal = edges.contains(BoxEdges::LEFT) || edges.contains(BoxEdges::RIGHT);
    let up = edges.contains(BoxEdges::UP);
    let down = edges.contains(BoxEdges::DOWN);
    match (horizontal, up, down) {
        (false, false, false) => ' ',
        (true, false, false) => UNICODE_BOX_HORIZONTAL,
        (false, _, _) => UNICODE_BOX_VERTICAL,
        (true, false, true) => UNICODE_BOX_TEE_DOWN,
        (true, true, false) => UNICODE_BOX_TEE_UP,
        (true, true, true) => UNICODE_BOX_CROSS,
    }
}

/// A fixed-size, bounds-checked character grid.
///
/// Collision behavior is deterministic:
/// - non-box characters overwrite (last writer wins)
/// - `─` and `│` merge into junctions (`┼`, `┬`, `┴`) where they meet instead of overwriting
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
    box_edges: Vec<BoxEdges>,
}

impl Canvas {
    /// Creates a new canvas filled with spaces (`' '`).
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        let len = width
            .checked_mul(height)
            .ok_or(CanvasError::AreaOverflow { width, height })?;

        Ok(Self { width, height, cells: vec![' '; len], box_edges: vec![BoxEdges::NONE; len] })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Returns the character at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<char, CanvasError> {
        let idx = self.index_of(x, y)?;
        Ok(self.render_at(idx))
    }

    /// Sets the character at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        if let Some(edges) = box_edges_from_char(ch) {
            self.box_edges[idx] = self.box_edges[idx].union(edges);
        } else {
            self.cells[idx] = ch;
            self.box_edges[idx] = BoxEdges::NONE;
        }
        Ok(())
    }

    /// Writes `text` left-to-right starting at `(x, y)`.
    ///
    /// Behavior:
    /// - If `y` is out of bounds: returns an error.
    /// - If `text` exceeds the row: clips at the right edge.
    pub fn write_str(&mut self, x: usize, y: usize, text: &str) -> Result<(), CanvasError> {
        if y >= self.height {
            return Err(CanvasError::OutOfBounds { x, y, width: self.width, height: self.height });
        }

        let mut x = x;
        for ch in text.chars() {
            if x >= self.width {
                break;
            }
            self.set(x, y, ch)?;
            x += 1;
        }

        Ok(())
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if !self.in_bounds(x, y) {
            return Err(CanvasError::OutOfBounds { x, y, width: self.width, height: self.height });
        }

        Ok((y * self.width) + x)
    }

    fn render_at(&self, idx: usize) -> char {
        let edges = self.box_edges[idx];
        if edges.is_empty() {
            return self.cells[idx];
        }
        box_char_from_edges(edges)
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for y in 0..self.height {
            for x in 0..self.width {
                f.write_char(self.render_at((y * self.width) + x))?;
            }

            if y + 1 < self.height {
                f.write_char('\n')?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanvasError {
    #[error("canvas area overflow: {width}*{height}")]
    AreaOverflow { width: usize, height: usize },
    #[error("out of bounds: ({x},{y}) for {width}x{height} canvas")]
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },
}

/// How many surface pixels one character cell covers.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridMetrics {
    pub cell_width: f64,
    pub cell_height: f64,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self { cell_width: 8.0, cell_height: 20.0 }
    }
}

/// Rasterizes pixel-space drawing calls onto a [`Canvas`].
///
/// Colors and stroke widths are ignored; anything falling outside the grid is clipped.
#[derive(Debug, Clone, Default)]
pub struct GridSurface {
    metrics: GridMetrics,
    canvas: Canvas,
}

impl GridSurface {
    pub fn new(metrics: GridMetrics) -> Self {
        Self { metrics, canvas: Canvas::default() }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The drawing as text, without trailing blanks.
    pub fn finish(&self) -> String {
        canvas_to_string_trimmed(&self.canvas)
    }

    fn col(&self, x: f64) -> i64 {
        (x / self.metrics.cell_width).round() as i64
    }

    fn row(&self, y: f64) -> i64 {
        (y / self.metrics.cell_height).round() as i64
    }

    fn cells_for(&self, extent: f64, cell: f64) -> usize {
        if !(extent > 0.0) || !(cell > 0.0) {
            return 0;
        }
        ((extent / cell).ceil() as usize).min(MAX_GRID_CELLS)
    }

    fn plot(&mut self, col: i64, row: i64, ch: char) {
        let (Ok(x), Ok(y)) = (usize::try_from(col), usize::try_from(row)) else {
            return;
        };
        if self.canvas.in_bounds(x, y) {
            // In bounds by the check above.
            let _ = self.canvas.set(x, y, ch);
        }
    }
}

impl Surface for GridSurface {
    fn clear(&mut self, size: Size) {
        let width = self.cells_for(size.width, self.metrics.cell_width);
        let height = self.cells_for(size.height, self.metrics.cell_height);
        self.canvas = Canvas::new(width, height).unwrap_or_default();
    }

    fn line(&mut self, from: Point, to: Point, _stroke: &Stroke) {
        let (x0, y0) = (self.col(from.x), self.row(from.y));
        let (x1, y1) = (self.col(to.x), self.row(to.y));

        let ch = match (x1 - x0, y1 - y0) {
            (0, _) => UNICODE_BOX_VERTICAL,
            (_, 0) => UNICODE_BOX_HORIZONTAL,
            (dx, dy) if (dx > 0) == (dy > 0) => '\\',
            _ => '/',
        };

        // Bresenham over the whole segment; endpoints are later covered by node glyphs.
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let (mut x, mut y) = (x0, y0);
        let mut err = dx + dy;
        loop {
            self.plot(x, y, ch);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn circle(&mut self, center: Point, _radius: f64, _fill: &str, _stroke: &Stroke) {
        let (x, y) = (self.col(center.x), self.row(center.y));
        self.plot(x, y, NODE_GLYPH);
    }

    fn text(&mut self, anchor: Point, text: &str, _style: &TextStyle) {
        let start = self.col(anchor.x) - (text_len(text) / 2) as i64;
        // Text sits on the row whose bottom edge is the anchor.
        let row = (anchor.y / self.metrics.cell_height).floor() as i64;
        let Ok(y) = usize::try_from(row) else {
            return;
        };
        if y >= self.canvas.height() {
            return;
        }

        // Clip on the left by dropping leading chars; `write_str` clips on the right.
        let skip = usize::try_from(-start).unwrap_or(0);
        let x = usize::try_from(start).unwrap_or(0);
        let visible = text.chars().skip(skip).collect::<String>();
        let _ = self.canvas.write_str(x, y, &visible);
    }
}
