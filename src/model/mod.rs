// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Astree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Astree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! `RawNode` is the schema-less input AST as read from JSON; `LabelNode` is the normalized tree the
//! layout engine positions and the renderer draws.

pub mod label;
pub mod raw;

pub use label::{LabelNode, Placement, UNKNOWN_KIND, VALUE_KIND};
pub use raw::{RawNode, RawValue, Scalar};
