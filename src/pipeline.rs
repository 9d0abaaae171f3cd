// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Astree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Astree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end flow: JSON text to a drawn surface.

use tracing::debug;

use crate::build::{build_label_node, BuildError};
use crate::config::Config;
use crate::format::ast_json::{nesting_limit, AstDocument, LoadError};
use crate::layout::{estimate_height, layout_tree, LayoutMetrics};
use crate::model::LabelNode;
use crate::render::{render_tree, RenderError, RenderStyle, Size, Surface};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// A laid-out label tree together with everything needed to draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    tree: LabelNode,
    size: Size,
    next_x: f64,
    metrics: LayoutMetrics,
    style: RenderStyle,
}

impl Scene {
    /// Loads, builds, measures and lays out the AST in `text`.
    pub fn load(text: &str, config: &Config) -> Result<Self, PipelineError> {
        let root = AstDocument::parse_with_limit(text, nesting_limit(config.max_depth))?
            .into_root(config.statement)?;
        let mut tree = build_label_node(&root, &config.build_options())?;
        debug!(nodes = tree.node_count(), depth = tree.depth(), "built label tree");

        let height = estimate_height(&tree, &config.layout) + config.canvas.margin;
        let next_x =
            layout_tree(&mut tree, config.canvas.origin_x, config.canvas.origin_y, &config.layout);

        let width = if config.canvas.fit_width {
            config.canvas.width.max(next_x)
        } else {
            config.canvas.width
        };
        debug!(width, height, next_x, "laid out label tree");

        Ok(Self {
            tree,
            size: Size { width, height },
            next_x,
            metrics: config.layout,
            style: config.style.clone(),
        })
    }

    pub fn tree(&self) -> &LabelNode {
        &self.tree
    }

    pub fn surface_size(&self) -> Size {
        self.size
    }

    /// The layout cursor after the rightmost subtree.
    pub fn next_x(&self) -> f64 {
        self.next_x
    }

    /// Clears `surface` to [`Self::surface_size`] and draws the tree onto it.
    pub fn draw(&self, surface: &mut dyn Surface) -> Result<(), PipelineError> {
        surface.clear(self.size);
        render_tree(&self.tree, surface, &self.metrics, &self.style)?;
        Ok(())
    }
}

/// Runs every stage against `surface`.
///
/// The surface is cleared before parsing, so on error it is left blank rather than showing a
/// previous drawing.
pub fn run_pipeline(
    text: &str,
    surface: &mut dyn Surface,
    config: &Config,
) -> Result<Scene, PipelineError> {
    surface.clear(Size::default());
    let scene = Scene::load(text, config)?;
    scene.draw(surface)?;
    Ok(scene)
}
