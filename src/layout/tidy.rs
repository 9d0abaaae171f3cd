// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Astree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Astree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{LabelNode, Placement};

use super::LayoutMetrics;

/// Greedy left-to-right tidy layout.
///
/// - leaves sit at `(origin_x, origin_y)` with a `node_diameter()` square box
/// - children are packed left-to-right one `vertical_spacing` below their parent, each subtree
///   starting where the previous one ended
/// - a parent is centered between its first and last child
///
/// Returns the X cursor where the next sibling subtree may start. Re-running on the same tree and
/// origin overwrites every placement with identical values.
pub fn layout_tree(
    node: &mut LabelNode,
    origin_x: f64,
    origin_y: f64,
    metrics: &LayoutMetrics,
) -> f64 {
    let diameter = metrics.node_diameter();

    if node.is_leaf() {
        node.set_placement(Placement { x: origin_x, y: origin_y, width: diameter, height: diameter });
        return origin_x + diameter + metrics.horizontal_spacing;
    }

    let child_y = origin_y + metrics.vertical_spacing;
    let mut cursor = origin_x;
    let mut first_x = None;
    let mut last_x = origin_x;
    let mut max_child_height = 0.0_f64;

    for child in node.children_mut() {
        cursor = layout_tree(child, cursor, child_y, metrics);
        if let Some(placed) = child.placement() {
            first_x.get_or_insert(placed.x);
            last_x = placed.x;
            max_child_height = max_child_height.max(placed.height);
        }
    }

    let first_x = first_x.unwrap_or(origin_x);
    node.set_placement(Placement {
        x: (first_x + last_x) / 2.0,
        y: origin_y,
        width: last_x + diameter - first_x,
        height: metrics.vertical_spacing + max_child_height,
    });

    cursor
}
