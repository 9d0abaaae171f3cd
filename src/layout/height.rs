// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Astree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Astree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::LabelNode;

use super::LayoutMetrics;

/// Vertical extent of `node`'s subtree, used to size the surface before layout.
///
/// Every level counts one `node_diameter() + vertical_spacing`. This is independent of (and larger
/// than) the `height` that [`layout_tree`](super::layout_tree) stores.
pub fn estimate_height(node: &LabelNode, metrics: &LayoutMetrics) -> f64 {
    let level = metrics.node_diameter() + metrics.vertical_spacing;
    let deepest_child = node
        .children()
        .iter()
        .map(|child| estimate_height(child, metrics))
        .fold(0.0_f64, f64::max);
    level + deepest_child
}

#[cfg(test)]
mod tests {
    use super::estimate_height;
    use crate::layout::{layout_tree, LayoutMetrics};
    use crate::model::LabelNode;

    fn balanced(depth: usize) -> LabelNode {
        let mut node = LabelNode::new("N", "N");
        if depth > 1 {
            node.push_child(balanced(depth - 1));
            node.push_child(balanced(depth - 1));
        }
        node
    }

    #[test]
    fn leaf_is_one_level() {
        assert_eq!(estimate_height(&LabelNode::new("A", "A"), &LayoutMetrics::default()), 140.0);
    }

    #[test]
    fn balanced_binary_tree_of_depth_three() {
        // Three levels of `2 * radius + vertical_spacing` each.
        assert_eq!(estimate_height(&balanced(3), &LayoutMetrics::default()), 3.0 * (2.0 * 20.0 + 100.0));
    }

    #[test]
    fn uses_deepest_branch() {
        let tree = LabelNode::new("R", "R")
            .with_child(LabelNode::new("A", "A"))
            .with_child(LabelNode::new("B", "B").with_child(LabelNode::new("C", "C")));
        assert_eq!(estimate_height(&tree, &LayoutMetrics::default()), 3.0 * 140.0);
    }

    #[test]
    fn does_not_depend_on_layout() {
        let mut tree = balanced(2);
        let before = estimate_height(&tree, &LayoutMetrics::default());
        layout_tree(&mut tree, 50.0, 50.0, &LayoutMetrics::default());
        assert_eq!(estimate_height(&tree, &LayoutMetrics::default()), before);
    }
}
