// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Astree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Astree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Number, Value};

/// A single input AST node: an ordered mapping from field name to [`RawValue`].
///
/// Field order is the order of the source document. Nodes are deliberately schema-less; the tree
/// builder only looks at `type`, `name`, `value` and `next` by presence and walks everything else.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct RawNode {
    fields: Vec<(String, RawValue)>,
}

impl RawNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`RawNode::insert`].
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets `name` to `value`.
    ///
    /// Replacing an existing field keeps its original position, matching how a JSON object with a
    /// duplicate key is read.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<RawValue>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn field(&self, name: &str) -> Option<&RawValue> {
        self.fields.iter().find(|(existing, _)| existing == name).map(|(_, value)| value)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> + '_ {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for RawNode {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            fields: map.into_iter().map(|(name, value)| (name, RawValue::from(value))).collect(),
        }
    }
}

/// A field value inside a [`RawNode`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum RawValue {
    Null,
    Scalar(Scalar),
    Object(RawNode),
    Array(Vec<RawValue>),
}

impl RawValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&RawNode> {
        match self {
            Self::Object(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[RawValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Self::Scalar(Scalar::Number(n)),
            Value::String(s) => Self::Scalar(Scalar::String(s)),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Object(RawNode::from(map)),
        }
    }
}

impl From<RawNode> for RawValue {
    fn from(node: RawNode) -> Self {
        Self::Object(node)
    }
}

impl From<Scalar> for RawValue {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<Vec<RawValue>> for RawValue {
    fn from(items: Vec<RawValue>) -> Self {
        Self::Array(items)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Scalar(Scalar::String(value.to_owned()))
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Scalar(Scalar::String(value))
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Scalar(Scalar::Bool(value))
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Scalar(Scalar::Number(Number::from(value)))
    }
}

/// A JSON leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Number(Number),
    String(String),
}

impl Scalar {
    /// Whether the value counts as "set" for optional tags such as `type` and `name`.
    ///
    /// `false`, zero and the empty string are treated as unset.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Self::String(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) if n.is_f64() => match n.as_f64() {
                // Integral floats print without a fractional part (`5.0` reads as `5`).
                Some(v) if v == 0.0 => f.write_str("0"),
                Some(v) if v.fract() == 0.0 && v.abs() < 1e21 => write!(f, "{v:.0}"),
                _ => write!(f, "{n}"),
            },
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{RawNode, RawValue, Scalar};

    #[test]
    fn keeps_document_field_order() {
        let node: RawNode = serde_json::from_value(json!({
            "type": "IF",
            "then": null,
            "condition": {"type": "VAR_REF", "name": "x"},
            "else": null
        }))
        .expect("raw node");

        assert_eq!(
            node.field_names().collect::<Vec<_>>(),
            vec!["type", "then", "condition", "else"]
        );
    }

    #[test]
    fn converts_json_values_into_tagged_variants() {
        let value = RawValue::from(json!({"items": [1, null, {"type": "X"}], "flag": true}));
        let node = value.as_object().expect("object");

        let items = node.field("items").and_then(RawValue::as_array).expect("array");
        assert_eq!(items.len(), 3);
        assert!(items[1].is_null());
        assert!(items[2].as_object().is_some());
        assert_eq!(node.field("flag"), Some(&RawValue::Scalar(Scalar::Bool(true))));
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut node = RawNode::new().with_field("a", 1_i64).with_field("b", 2_i64);
        node.insert("a", "again");

        assert_eq!(node.field_names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(node.field("a"), Some(&RawValue::from("again")));
        assert_eq!(node.len(), 2);
    }

    #[test]
    fn scalar_display_matches_json_viewer_conventions() {
        let scalar = |value: serde_json::Value| match RawValue::from(value) {
            RawValue::Scalar(scalar) => scalar,
            other => panic!("expected scalar, got {other:?}"),
        };

        assert_eq!(scalar(json!(5)).to_string(), "5");
        assert_eq!(scalar(json!(-12)).to_string(), "-12");
        assert_eq!(scalar(json!(5.0)).to_string(), "5");
        assert_eq!(scalar(json!(2.5)).to_string(), "2.5");
        assert_eq!(scalar(json!(true)).to_string(), "true");
        assert_eq!(scalar(json!("x + y")).to_string(), "x + y");
    }

    #[test]
    fn truthiness_treats_zero_false_and_empty_as_unset() {
        assert!(!Scalar::Bool(false).is_truthy());
        assert!(!Scalar::String(String::new()).is_truthy());
        assert!(!Scalar::Number(0_i64.into()).is_truthy());
        assert!(Scalar::Number(7_i64.into()).is_truthy());
        assert!(Scalar::String("main".to_owned()).is_truthy());
    }
}
