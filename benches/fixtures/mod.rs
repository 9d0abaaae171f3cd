// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Astree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Astree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use serde_json::{json, Value};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    /// A handful of statements, like a short script.
    Small,
    /// One node with many leaf children.
    WideFlat,
    /// A long `next` chain of simple statements.
    LongChain,
    /// Full binary expression tree.
    BalancedDeep,
}

impl Case {
    pub const ALL: [Case; 4] = [Case::Small, Case::WideFlat, Case::LongChain, Case::BalancedDeep];

    pub fn id(self) -> &'static str {
        match self {
            Case::Small => "small",
            Case::WideFlat => "wide_flat",
            Case::LongChain => "long_chain",
            Case::BalancedDeep => "balanced_deep",
        }
    }
}

/// The fixture as an `{"statements": [...]}` export.
pub fn ast_json(case: Case) -> String {
    let ast = match case {
        Case::Small => chain(4),
        Case::WideFlat => json!({
            "type": "BLOCK",
            "body": (0..400).map(number).collect::<Vec<_>>(),
        }),
        Case::LongChain => chain(400),
        Case::BalancedDeep => binary_op(9, 0),
    };
    json!({ "statements": [{ "id": 0, "ast": ast }] }).to_string()
}

fn number(i: usize) -> Value {
    json!({ "type": "NUMBER", "value": i })
}

fn assign(i: usize) -> Value {
    json!({
        "type": "ASSIGN",
        "name": format!("var_{i}"),
        "right": {
            "type": "BINARY_OP",
            "operator": if i % 2 == 0 { "+" } else { "*" },
            "left": { "type": "IDENTIFIER", "name": format!("var_{}", i.saturating_sub(1)) },
            "right": number(i),
        },
    })
}

// Built back to front so the statement count is not bounded by recursion depth here.
fn chain(len: usize) -> Value {
    let mut next: Option<Value> = None;
    for i in (0..len).rev() {
        let mut statement = assign(i);
        if let (Some(object), Some(tail)) = (statement.as_object_mut(), next.take()) {
            object.insert("next".to_owned(), tail);
        }
        next = Some(statement);
    }
    next.unwrap_or(Value::Null)
}

fn binary_op(depth: usize, seed: usize) -> Value {
    if depth == 0 {
        return number(seed);
    }
    json!({
        "type": "BINARY_OP",
        "operator": "+",
        "left": binary_op(depth - 1, seed * 2),
        "right": binary_op(depth - 1, seed * 2 + 1),
    })
}
