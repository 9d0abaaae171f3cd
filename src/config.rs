// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Astree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Astree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tunable constants for the whole pipeline.
//!
//! Every field has a default, so a config file only needs to name what it overrides:
//!
//! ```json
//! { "layout": { "horizontal_spacing": 60 }, "canvas": { "fit_width": true } }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::build::{BuildOptions, DEFAULT_MAX_DEPTH};
use crate::layout::LayoutMetrics;
use crate::render::{GridMetrics, RenderStyle};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Placement of the tree on the drawing surface and the surface's size.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    /// Where the root's subtree starts.
    pub origin_x: f64,
    pub origin_y: f64,
    /// Added below the estimated tree height.
    pub margin: f64,
    pub width: f64,
    /// Widen the surface to the laid-out tree when it exceeds `width`.
    pub fit_width: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self { origin_x: 50.0, origin_y: 50.0, margin: 100.0, width: 1200.0, fit_width: false }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub layout: LayoutMetrics,
    pub canvas: CanvasConfig,
    pub style: RenderStyle,
    pub grid: GridMetrics,
    pub max_depth: usize,
    /// Which entry of a `statements` document to show.
    pub statement: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: LayoutMetrics::default(),
            canvas: CanvasConfig::default(),
            style: RenderStyle::default(),
            grid: GridMetrics::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            statement: 0,
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        Self::from_json(&text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    pub fn build_options(&self) -> BuildOptions {
        BuildOptions { max_depth: self.max_depth }
    }
}
