//! Tictac library - terminal front end for tic-tac-toe
//!
//! Game logic lives in [`tictac_core`]; this crate adds the pieces needed to
//! play it in a terminal.
//!
//! # Architecture
//!
//! - **TUI**: ratatui rendering, tile geometry and mouse/keyboard input
//! - **Config**: TOML settings with command-line overrides
//! - **CLI**: `play` and `eval` subcommands
//! - **Report**: text and JSON evaluation of a board string
//!
//! # Example
//!
//! ```
//! use tictac::EvalReport;
//!
//! let report = EvalReport::from_input("XXX OO. ...")?;
//! assert!(report.outcome.is_decided());
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod report;
mod tui;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use report::EvalReport;
pub use tui::{
    App, BoardGeometry, KeyAction, ScreenLayout, TileScale, glyph_lines, key_action, left_click,
    move_cursor, run_tui, screen_layout,
};
