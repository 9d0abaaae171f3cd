// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Astree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Astree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Kind used when a source node carries no usable `type` tag.
pub const UNKNOWN_KIND: &str = "UNKNOWN";

/// Kind of the synthetic leaves created for bare scalar fields.
pub const VALUE_KIND: &str = "Value";

/// Position and bounding box assigned by the layout engine, in surface pixels.
///
/// `(x, y)` is the node center.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A normalized, owned tree node ready for layout and drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelNode {
    kind: String,
    label: String,
    children: Vec<LabelNode>,
    placement: Option<Placement>,
}

impl LabelNode {
    pub fn new(kind: impl Into<String>, label: impl Into<String>) -> Self {
        Self { kind: kind.into(), label: label.into(), children: Vec::new(), placement: None }
    }

    /// A childless `Value` node labeled `<field>: <value>`.
    pub fn value_leaf(field: &str, value: impl std::fmt::Display) -> Self {
        Self::new(VALUE_KIND, format!("{field}: {value}"))
    }

    /// Builder-style [`LabelNode::push_child`].
    pub fn with_child(mut self, child: LabelNode) -> Self {
        self.push_child(child);
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[LabelNode] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [LabelNode] {
        &mut self.children
    }

    pub fn push_child(&mut self, child: LabelNode) {
        self.children.push(child);
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// `None` until the layout engine has run.
    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    pub fn set_placement(&mut self, placement: Placement) {
        self.placement = Some(placement);
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(LabelNode::node_count).sum::<usize>()
    }

    /// Number of levels in this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(LabelNode::depth).max().unwrap_or(0)
    }

    /// The last child, which for statement chains is the `next` continuation.
    pub fn last_child(&self) -> Option<&LabelNode> {
        self.children.last()
    }
}

#[cfg(test)]
mod tests {
    use super::{LabelNode, Placement, VALUE_KIND};

    #[test]
    fn value_leaf_formats_field_and_value() {
        let leaf = LabelNode::value_leaf("operator", '+');
        assert_eq!(leaf.kind(), VALUE_KIND);
        assert_eq!(leaf.label(), "operator: +");
        assert!(leaf.is_leaf());
        assert!(leaf.placement().is_none());
    }

    #[test]
    fn counts_nodes_and_depth() {
        let tree = LabelNode::new("A", "A")
            .with_child(LabelNode::new("B", "B").with_child(LabelNode::new("C", "C")))
            .with_child(LabelNode::new("D", "D"));

        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.last_child().map(LabelNode::label), Some("D"));
    }

    #[test]
    fn placement_is_stored_per_node() {
        let mut node = LabelNode::new("A", "A");
        node.set_placement(Placement { x: 1.0, y: 2.0, width: 3.0, height: 4.0 });
        assert_eq!(node.placement().map(|p| (p.x, p.y)), Some((1.0, 2.0)));
    }
}
