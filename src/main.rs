// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Astree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Astree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Astree CLI entrypoint.
//!
//! Reads a JSON AST export and draws it as SVG, as a character grid, as an indented outline, or in
//! a full-screen terminal viewer. Logs go to stderr (`RUST_LOG`, default `warn`).

use std::error::Error;
use std::fs;
use std::io::{self, Write as _};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use astree::config::Config;
use astree::pipeline::{run_pipeline, Scene};
use astree::render::{render_outline, GridSurface, SvgSurface};

#[derive(Parser, Debug)]
#[command(name = "astree", version, about = "Draw JSON-exported abstract syntax trees")]
struct Cli {
    #[command(flatten)]
    options: GlobalOptions,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug, Default, PartialEq)]
struct GlobalOptions {
    /// Statement to show from a `statements` document.
    #[arg(long, global = true, value_name = "N")]
    statement: Option<usize>,

    /// JSON config file overriding layout, canvas and style defaults.
    #[arg(long, global = true, env = "ASTREE_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Maximum AST nesting depth.
    #[arg(long, global = true, value_name = "N")]
    max_depth: Option<usize>,

    /// Widen the surface to fit the laid-out tree.
    #[arg(long, global = true)]
    fit_width: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Write the tree as an SVG document.
    Svg {
        file: PathBuf,
        /// Output path; stdout when omitted.
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
    },
    /// Print the tree rasterized onto a character grid.
    Text { file: PathBuf },
    /// Print an indented outline of the label tree.
    Outline { file: PathBuf },
    /// Open the full-screen viewer (`r` reloads, `q` quits).
    View { file: PathBuf },
}

impl GlobalOptions {
    /// Defaults, then the config file, then flags.
    fn resolve_config(&self) -> Result<Config, Box<dyn Error>> {
        let mut config = match &self.config {
            Some(path) => Config::from_path(path)?,
            None => Config::default(),
        };
        if let Some(statement) = self.statement {
            config.statement = statement;
        }
        if let Some(max_depth) = self.max_depth {
            config.max_depth = max_depth;
        }
        if self.fit_width {
            config.canvas.fit_width = true;
        }
        Ok(config)
    }
}

fn read_input(path: &Path) -> Result<String, Box<dyn Error>> {
    fs::read_to_string(path).map_err(|err| format!("failed to read {}: {err}", path.display()).into())
}

fn print_stdout(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = cli.options.resolve_config()?;

    match cli.command {
        Command::Svg { file, output } => {
            let mut surface = SvgSurface::new();
            run_pipeline(&read_input(&file)?, &mut surface, &config)?;
            let svg = surface.finish();
            match output {
                Some(out) => {
                    fs::write(&out, svg)
                        .map_err(|err| format!("failed to write {}: {err}", out.display()))?;
                    info!(path = %out.display(), "wrote svg");
                }
                None => print_stdout(&svg)?,
            }
        }
        Command::Text { file } => {
            let mut surface = GridSurface::new(config.grid);
            run_pipeline(&read_input(&file)?, &mut surface, &config)?;
            print_stdout(&surface.finish())?;
        }
        Command::Outline { file } => {
            let scene = Scene::load(&read_input(&file)?, &config)?;
            print_stdout(&render_outline(scene.tree()))?;
        }
        Command::View { file } => astree::tui::run(&file, config)?,
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(cli) {
        eprintln!("astree: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Command, GlobalOptions};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_svg_with_output() {
        let cli = Cli::try_parse_from(["astree", "svg", "ast.json", "-o", "out.svg"])
            .expect("parse args");
        assert_eq!(
            cli.command,
            Command::Svg { file: PathBuf::from("ast.json"), output: Some(PathBuf::from("out.svg")) }
        );
        assert!(!cli.options.fit_width);
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::try_parse_from([
            "astree",
            "text",
            "ast.json",
            "--statement",
            "2",
            "--max-depth",
            "64",
            "--fit-width",
        ])
        .expect("parse args");
        assert_eq!(cli.command, Command::Text { file: PathBuf::from("ast.json") });
        assert_eq!(cli.options.statement, Some(2));
        assert_eq!(cli.options.max_depth, Some(64));
        assert!(cli.options.fit_width);
    }

    #[test]
    fn flags_override_defaults() {
        let options = GlobalOptions {
            statement: Some(3),
            max_depth: Some(10),
            fit_width: true,
            ..GlobalOptions::default()
        };
        let config = options.resolve_config().expect("config");
        assert_eq!(config.statement, 3);
        assert_eq!(config.max_depth, 10);
        assert!(config.canvas.fit_width);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let options = GlobalOptions {
            config: Some(PathBuf::from("/nonexistent/astree.json")),
            ..GlobalOptions::default()
        };
        assert!(options.resolve_config().is_err());
    }

    #[test]
    fn rejects_missing_file_argument() {
        Cli::try_parse_from(["astree", "outline"]).unwrap_err();
    }

    #[test]
    fn rejects_unknown_subcommand() {
        Cli::try_parse_from(["astree", "png", "ast.json"]).unwrap_err();
    }
}
