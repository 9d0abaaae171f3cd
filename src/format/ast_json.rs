// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Astree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Astree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Deserialize;
use serde_json::Value;

use crate::build::DEFAULT_MAX_DEPTH;

use crate::model::RawNode;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("Error parsing JSON: {0}")]
    MalformedJson(String),
    #[error("Invalid AST JSON format: missing statements array or ast root.")]
    InvalidShape,
    #[error("statement {index} is out of range (document has {count} statements)")]
    StatementOutOfRange { index: usize, count: usize },
    #[error("JSON nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedJson(err.to_string())
    }
}

/// Which of the two accepted top-level shapes a document has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentShape {
    /// `{ "statements": [ { "ast": … }, … ] }` with at least one statement.
    Statements { count: usize },
    /// `{ "ast": … }`.
    SingleAst,
}

/// A parsed AST export whose shape has been validated.
#[derive(Debug, Clone, PartialEq)]
pub struct AstDocument {
    root: Value,
    shape: DocumentShape,
}

impl AstDocument {
    /// Parses `text` and classifies its shape, with the nesting ceiling of the default depth.
    pub fn parse(text: &str) -> Result<Self, LoadError> {
        Self::parse_with_limit(text, nesting_limit(DEFAULT_MAX_DEPTH))
    }

    /// Parses `text` and classifies its shape.
    ///
    /// Documents nested deeper than `max_nesting` are refused before parsing. Below that ceiling
    /// there is no fixed recursion limit. A non-empty `statements` array wins over `ast` when both
    /// are present.
    pub fn parse_with_limit(text: &str, max_nesting: usize) -> Result<Self, LoadError> {
        if exceeds_nesting(text, max_nesting) {
            return Err(LoadError::NestingTooDeep { limit: max_nesting });
        }

        let mut de = serde_json::Deserializer::from_str(text);
        de.disable_recursion_limit();
        let root = Value::deserialize(&mut de)?;
        de.end()?;

        let statements = root.get("statements").and_then(Value::as_array);
        let shape = match statements {
            Some(items) if !items.is_empty() => DocumentShape::Statements { count: items.len() },
            _ if root.get("ast").is_some_and(Value::is_object) => DocumentShape::SingleAst,
            _ => return Err(LoadError::InvalidShape),
        };

        Ok(Self { root, shape })
    }

    pub fn shape(&self) -> DocumentShape {
        self.shape
    }

    pub fn statement_count(&self) -> usize {
        match self.shape {
            DocumentShape::Statements { count } => count,
            DocumentShape::SingleAst => 1,
        }
    }

    /// Extracts the AST root of statement `index` (always `0` for single-AST documents).
    pub fn into_root(mut self, index: usize) -> Result<RawNode, LoadError> {
        let count = self.statement_count();
        if index >= count {
            return Err(LoadError::StatementOutOfRange { index, count });
        }

        let ast = match self.shape {
            DocumentShape::Statements { .. } => self
                .root
                .get_mut("statements")
                .and_then(|statements| statements.get_mut(index))
                .and_then(|statement| statement.get_mut("ast"))
                .map(Value::take),
            DocumentShape::SingleAst => self.root.get_mut("ast").map(Value::take),
        };

        match ast {
            Some(Value::Object(map)) => Ok(RawNode::from(map)),
            _ => Err(LoadError::InvalidShape),
        }
    }
}

/// JSON nesting that a tree of `max_depth` levels can need.
///
/// Each tree level costs at most an object and an array, and the `statements` envelope adds a
/// few more.
pub const fn nesting_limit(max_depth: usize) -> usize {
    max_depth.saturating_mul(2).saturating_add(DOCUMENT_ENVELOPE)
}

const DOCUMENT_ENVELOPE: usize = 4;

/// Whether `{`/`[` nesting in `text` goes past `limit`. Brackets inside strings don't count.
fn exceeds_nesting(text: &str, limit: usize) -> bool {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in text.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                if depth > limit {
                    return true;
                }
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    false
}

/// Parses `text` and returns the AST root of statement `index`.
pub fn load_ast_root(text: &str, index: usize) -> Result<RawNode, LoadError> {
    AstDocument::parse(text)?.into_root(index)
}
