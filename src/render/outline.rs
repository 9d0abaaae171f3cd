// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Astree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Astree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::LabelNode;

const INDENT: &str = "  ";

/// Indented plain-text outline of a label tree, one node per line, full labels.
pub fn render_outline(node: &LabelNode) -> String {
    let mut out = String::new();
    write_outline(node, 0, &mut out);
    out
}

fn write_outline(node: &LabelNode, depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(node.label());
    out.push('\n');

    for child in node.children() {
        write_outline(child, depth + 1, out);
    }
}
