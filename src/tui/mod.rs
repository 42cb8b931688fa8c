//! Terminal UI for tic-tac-toe.

mod app;
mod geometry;
mod glyph;
mod input;
mod ui;

pub use app::App;
pub use geometry::{BoardGeometry, ScreenLayout, TileScale, screen_layout};
pub use glyph::glyph_lines;
pub use input::{KeyAction, key_action, left_click, move_cursor};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::config::AppConfig;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the game until the player quits.
///
/// The terminal is restored before returning, also on error.
#[instrument(skip_all, fields(scale = %config.scale(), mouse = config.mouse()))]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let mouse = *config.mouse();
    let mut terminal = setup(mouse)?;

    let mut app = App::new(*config.scale(), mouse);
    let res = run_loop(&mut terminal, &mut app);

    if let Err(err) = restore(terminal.backend_mut(), mouse) {
        warn!(error = %err, "Failed to restore terminal");
        if res.is_ok() {
            return Err(err).context("Failed to restore terminal");
        }
    }

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

/// Enters raw mode and the alternate screen, undoing both if any step fails.
fn setup(mouse: bool) -> Result<Tui> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    let entered = if mouse {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
    } else {
        execute!(stdout, EnterAlternateScreen)
    };

    match entered.and_then(|()| Terminal::new(CrosstermBackend::new(stdout))) {
        Ok(terminal) => Ok(terminal),
        Err(err) => {
            error!(error = %err, "Terminal setup failed");
            if let Err(restore_err) = restore(&mut io::stdout(), mouse) {
                warn!(error = %restore_err, "Failed to restore terminal");
            }
            Err(err).context("Failed to set up terminal")
        }
    }
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Every step runs even when an earlier one fails; the first failure is
/// returned.
fn restore<W: Write>(out: &mut W, mouse: bool) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen);
    let capture = if mouse {
        execute!(out, DisableMouseCapture)
    } else {
        Ok(())
    };
    let cursor = execute!(out, Show);

    match [raw, screen, capture, cursor].into_iter().find_map(Result::err) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Draws, then handles at most one event, until the app asks to quit.
fn run_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut area = Rect::default();

    while !app.should_quit() {
        terminal.draw(|f| {
            area = f.area();
            ui::draw(f, app);
        })?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse, area),
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
            }
            _ => {}
        }
    }

    Ok(())
}
