// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Astree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Astree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Astree: tidy-tree drawings of JSON-exported abstract syntax trees.
//!
//! The pipeline runs load ([`format`]) → build ([`build`]) → height estimate and layout
//! ([`layout`]) → draw ([`render`]) onto any [`render::Surface`]. [`pipeline`] wires the stages
//! together; [`tui`] is a terminal viewer on top of it.

pub mod build;
pub mod config;
pub mod format;
pub mod layout;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod tui;
