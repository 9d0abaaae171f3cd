// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Astree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Astree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt::Write as _;

use super::text::escape_xml;
use super::{Point, Size, Stroke, Surface, TextStyle};

/// Accumulates draw calls as SVG elements.
///
/// Elements are emitted in draw order, so later calls paint over earlier ones.
#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    size: Size,
    body: String,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// A standalone SVG document for everything drawn since the last `clear`.
    pub fn finish(&self) -> String {
        let Size { width, height } = self.size;
        let mut svg = String::with_capacity(self.body.len() + 160);
        let _ = write!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.2}\" height=\"{height:.2}\" viewBox=\"0 0 {width:.2} {height:.2}\">\n"
        );
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self, size: Size) {
        self.size = size;
        self.body.clear();
    }

    fn line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let _ = writeln!(
            self.body,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            from.x,
            from.y,
            to.x,
            to.y,
            escape_xml(&stroke.color),
            stroke.width
        );
    }

    fn circle(&mut self, center: Point, radius: f64, fill: &str, stroke: &Stroke) {
        let _ = writeln!(
            self.body,
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            center.x,
            center.y,
            radius,
            escape_xml(fill),
            escape_xml(&stroke.color),
            stroke.width
        );
    }

    fn text(&mut self, anchor: Point, text: &str, style: &TextStyle) {
        let _ = writeln!(
            self.body,
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"middle\" dominant-baseline=\"text-after-edge\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
            anchor.x,
            anchor.y,
            escape_xml(&style.font_family),
            style.font_size,
            escape_xml(&style.color),
            escape_xml(text)
        );
    }
}
