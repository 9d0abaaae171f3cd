// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Astree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Astree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{Point, Size, Stroke, Surface, TextStyle};

/// One recorded [`Surface`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Size),
    Line { from: Point, to: Point, stroke: Stroke },
    Circle { center: Point, radius: f64, fill: String, stroke: Stroke },
    Text { anchor: Point, text: String, style: TextStyle },
}

/// A surface that records draw calls in order.
///
/// `clear` drops everything recorded so far, so the list always describes a single frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisplayList {
    ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Size from the last `clear`, if any.
    pub fn size(&self) -> Option<Size> {
        match self.ops.first() {
            Some(DrawOp::Clear(size)) => Some(*size),
            _ => None,
        }
    }

    /// Whether nothing but a `clear` has been recorded.
    pub fn is_blank(&self) -> bool {
        self.ops.iter().all(|op| matches!(op, DrawOp::Clear(_)))
    }
}

impl Surface for DisplayList {
    fn clear(&mut self, size: Size) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear(size));
    }

    fn line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.ops.push(DrawOp::Line { from, to, stroke: stroke.clone() });
    }

    fn circle(&mut self, center: Point, radius: f64, fill: &str, stroke: &Stroke) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            fill: fill.to_owned(),
            stroke: stroke.clone(),
        });
    }

    fn text(&mut self, anchor: Point, text: &str, style: &TextStyle) {
        self.ops.push(DrawOp::Text { anchor, text: text.to_owned(), style: style.clone() });
    }
}

#[cfg(test)]
mod tests {
    use super::{DisplayList, DrawOp};
    use crate::render::{Point, Size, Stroke, Surface};

    #[test]
    fn clear_starts_a_new_frame() {
        let mut list = DisplayList::new();
        assert!(list.is_blank());
        assert_eq!(list.size(), None);

        list.clear(Size { width: 10.0, height: 20.0 });
        list.line(Point::default(), Point { x: 1.0, y: 1.0 }, &Stroke::default());
        assert!(!list.is_blank());

        list.clear(Size { width: 30.0, height: 40.0 });
        assert!(list.is_blank());
        assert_eq!(list.size(), Some(Size { width: 30.0, height: 40.0 }));
        assert_eq!(list.ops(), &[DrawOp::Clear(Size { width: 30.0, height: 40.0 })]);
    }
}
