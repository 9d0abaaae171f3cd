// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Astree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Astree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tree builder: normalizes a schema-less [`RawNode`] into a [`LabelNode`] tree.
//!
//! Rules:
//! - `kind` comes from `type` (or [`UNKNOWN_KIND`]); the label appends `: <name>`, or failing
//!   that `: <value>` for a scalar value.
//! - every other field (except `id`, `next`, `name`, `value`) contributes children in field order:
//!   objects become one child, bare scalars a [`VALUE_KIND`](crate::model::VALUE_KIND) leaf
//!   labeled `<field>: <scalar>`, and arrays one child per element.
//! - array elements and `next` are built as untagged values: objects become nodes, arrays and
//!   strings [`UNKNOWN_KIND`] nodes whose entries are keyed by index, other truthy scalars
//!   [`UNKNOWN_KIND`] leaves. Null and falsy scalars add nothing.
//! - a truthy `next` is appended last, so statement chains become right-nested trees.

use crate::model::{LabelNode, RawNode, RawValue, Scalar, UNKNOWN_KIND};

/// Default for [`BuildOptions::max_depth`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

const SKIPPED_FIELDS: [&str; 5] = ["type", "id", "next", "name", "value"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Maximum number of tree levels (the root is level 1).
    pub max_depth: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("AST nesting exceeds the maximum depth of {max_depth} levels")]
    DepthExceeded { max_depth: usize },
}

/// Builds the label tree for `node`; `None` in, `None` out.
pub fn build_label_tree(
    node: Option<&RawNode>,
    options: &BuildOptions,
) -> Result<Option<LabelNode>, BuildError> {
    node.map(|node| build_label_node(node, options)).transpose()
}

pub fn build_label_node(node: &RawNode, options: &BuildOptions) -> Result<LabelNode, BuildError> {
    Builder { max_depth: options.max_depth }.node(node, 1)
}

struct Builder {
    max_depth: usize,
}

impl Builder {
    fn enter(&self, depth: usize) -> Result<(), BuildError> {
        if depth > self.max_depth {
            return Err(BuildError::DepthExceeded { max_depth: self.max_depth });
        }
        Ok(())
    }

    fn node(&self, raw: &RawNode, depth: usize) -> Result<LabelNode, BuildError> {
        self.enter(depth)?;

        let kind = node_kind(raw);
        let label = node_label(raw, &kind);
        let mut out = LabelNode::new(kind, label);

        for (name, value) in raw.iter() {
            if SKIPPED_FIELDS.contains(&name) {
                continue;
            }
            self.field(&mut out, name, value, depth + 1)?;
        }

        if let Some(next) = raw.field("next") {
            self.element(&mut out, next, depth + 1)?;
        }

        Ok(out)
    }

    /// Adds the children contributed by field `name`; `depth` is the children's level.
    fn field(
        &self,
        parent: &mut LabelNode,
        name: &str,
        value: &RawValue,
        depth: usize,
    ) -> Result<(), BuildError> {
        match value {
            RawValue::Null => {}
            RawValue::Scalar(scalar) => parent.push_child(self.value_leaf(name, scalar, depth)?),
            RawValue::Object(node) => parent.push_child(self.node(node, depth)?),
            RawValue::Array(items) => {
                for item in items {
                    self.element(parent, item, depth)?;
                }
            }
        }
        Ok(())
    }

    /// Adds the child contributed by an array element or a `next` value.
    fn element(
        &self,
        parent: &mut LabelNode,
        item: &RawValue,
        depth: usize,
    ) -> Result<(), BuildError> {
        match item {
            RawValue::Null => {}
            RawValue::Object(node) => parent.push_child(self.node(node, depth)?),
            RawValue::Array(entries) => {
                self.enter(depth)?;
                let mut list = untagged();
                for (idx, entry) in entries.iter().enumerate() {
                    self.field(&mut list, &idx.to_string(), entry, depth + 1)?;
                }
                parent.push_child(list);
            }
            RawValue::Scalar(scalar) if !scalar.is_truthy() => {}
            // A string is walked like a list of its chars.
            RawValue::Scalar(Scalar::String(text)) => {
                self.enter(depth)?;
                let mut list = untagged();
                for (idx, ch) in text.chars().enumerate() {
                    list.push_child(self.value_leaf(&idx.to_string(), ch, depth + 1)?);
                }
                parent.push_child(list);
            }
            RawValue::Scalar(_) => {
                self.enter(depth)?;
                parent.push_child(untagged());
            }
        }
        Ok(())
    }

    fn value_leaf(
        &self,
        name: &str,
        value: impl std::fmt::Display,
        depth: usize,
    ) -> Result<LabelNode, BuildError> {
        self.enter(depth)?;
        Ok(LabelNode::value_leaf(name, value))
    }
}

fn untagged() -> LabelNode {
    LabelNode::new(UNKNOWN_KIND, UNKNOWN_KIND)
}

fn truthy_scalar<'a>(raw: &'a RawNode, field: &str) -> Option<&'a Scalar> {
    raw.field(field).and_then(RawValue::as_scalar).filter(|scalar| scalar.is_truthy())
}

fn node_kind(raw: &RawNode) -> String {
    match truthy_scalar(raw, "type") {
        Some(tag) => tag.to_string(),
        None => UNKNOWN_KIND.to_owned(),
    }
}

fn node_label(raw: &RawNode, kind: &str) -> String {
    if let Some(name) = truthy_scalar(raw, "name") {
        return format!("{kind}: {name}");
    }
    match raw.field("value").and_then(RawValue::as_scalar) {
        Some(value) => format!("{kind}: {value}"),
        None => kind.to_owned(),
    }
}
