// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Astree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Astree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Input document formats.
//!
//! Currently this covers the JSON AST export (`{"statements": [...]}` or `{"ast": ...}`).

pub mod ast_json;

pub use ast_json::{load_ast_root, nesting_limit, AstDocument, DocumentShape, LoadError};
