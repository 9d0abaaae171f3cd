// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Astree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Astree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal viewer.
//!
//! Runs the pipeline into a [`DisplayList`] and paints the recorded draw calls on a ratatui
//! canvas. `r` re-reads the file and re-runs every stage; `q` or `Esc` quits.

use std::{
    error::Error,
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Context, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
};
use tracing::debug;

use crate::config::Config;
use crate::pipeline::run_pipeline;
use crate::render::{DisplayList, DrawOp, Size};

mod theme;

use theme::TuiTheme;

const POLL_INTERVAL: Duration = Duration::from_millis(250);
const KEY_HINTS: &str = "r reload  q quit";

/// Opens `path` in the full-screen viewer and blocks until the user quits.
pub fn run(path: &Path, config: Config) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let mut app = App::new(path.to_path_buf(), config, theme);
    app.reload();

    let mut terminal = TerminalSession::new()?;
    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
enum Status {
    Loaded { nodes: usize },
    Failed(String),
}

struct App {
    path: PathBuf,
    config: Config,
    theme: TuiTheme,
    list: DisplayList,
    status: Status,
    should_quit: bool,
}

impl App {
    fn new(path: PathBuf, config: Config, theme: TuiTheme) -> Self {
        Self {
            path,
            config,
            theme,
            list: DisplayList::new(),
            status: Status::Loaded { nodes: 0 },
            should_quit: false,
        }
    }

    /// Re-reads the file and re-runs the pipeline, replacing the previous drawing.
    fn reload(&mut self) {
        debug!(path = %self.path.display(), "reloading");
        self.status = match fs::read_to_string(&self.path) {
            Ok(text) => match run_pipeline(&text, &mut self.list, &self.config) {
                Ok(scene) => Status::Loaded { nodes: scene.tree().node_count() },
                Err(err) => Status::Failed(err.to_string()),
            },
            Err(err) => {
                self.list = DisplayList::new();
                Status::Failed(format!("failed to read {}: {err}", self.path.display()))
            }
        };
        if let Status::Failed(message) = &self.status {
            debug!(%message, "reload failed");
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.reload(),
            _ => {}
        }
    }

    fn status_line(&self) -> String {
        match &self.status {
            Status::Loaded { nodes } => {
                format!(" {}  {nodes} nodes  {KEY_HINTS}", self.path.display())
            }
            Status::Failed(message) => format!(" {message}  {KEY_HINTS}"),
        }
    }
}

fn draw(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.size());

    let size = app.list.size().unwrap_or_default();
    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(" astree "))
        .marker(Marker::Braille)
        .x_bounds([0.0, size.width])
        .y_bounds([0.0, size.height])
        .paint(|ctx| paint(ctx, app.list.ops(), size, &app.theme));
    frame.render_widget(canvas, chunks[0]);

    let status_style = match app.status {
        Status::Loaded { .. } => app.theme.status_style(),
        Status::Failed(_) => app.theme.error_style(),
    };
    frame.render_widget(Paragraph::new(app.status_line()).style(status_style), chunks[1]);
}

/// Replays recorded draw calls; surface `y` grows downward, canvas `y` upward.
fn paint(ctx: &mut Context<'_>, ops: &[DrawOp], size: Size, theme: &TuiTheme) {
    let flip = |y: f64| size.height - y;

    for op in ops {
        match op {
            DrawOp::Clear(_) => {}
            DrawOp::Line { from, to, stroke } => ctx.draw(&CanvasLine {
                x1: from.x,
                y1: flip(from.y),
                x2: to.x,
                y2: flip(to.y),
                color: theme.edge_color(&stroke.color),
            }),
            DrawOp::Circle { center, radius, fill, .. } => ctx.draw(&Circle {
                x: center.x,
                y: flip(center.y),
                radius: *radius,
                color: theme.node_color(fill),
            }),
            DrawOp::Text { anchor, text, style } => {
                let color = theme.label_color(&style.color);
                let label = Span::styled(text.clone(), Style::default().fg(color));
                ctx.print(anchor.x, flip(anchor.y), label);
            }
        }
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}
