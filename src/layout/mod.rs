// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Astree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Astree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout algorithms for label trees.
//!
//! `tidy` assigns pixel coordinates to every node; `height` estimates the vertical extent used to
//! size the drawing surface before layout runs.

use serde::Deserialize;

pub mod height;
pub mod tidy;

pub use height::estimate_height;
pub use tidy::layout_tree;

/// Pixel metrics shared by layout, height estimation and node glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutMetrics {
    pub node_radius: f64,
    /// Distance between tree levels.
    pub vertical_spacing: f64,
    /// Gap between sibling subtrees.
    pub horizontal_spacing: f64,
}

impl LayoutMetrics {
    pub fn node_diameter(&self) -> f64 {
        self.node_radius * 2.0
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self { node_radius: 20.0, vertical_spacing: 100.0, horizontal_spacing: 40.0 }
    }
}
