//! Command-line interface for tictac.

use crate::tui::TileScale;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe with mouse-driven play", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "tictac.toml", global = true)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Tile size
        #[arg(long, value_enum)]
        scale: Option<TileScale>,

        /// Disable mouse capture and play with the keyboard only
        #[arg(long)]
        no_mouse: bool,
    },

    /// Classify a board given as nine marks, e.g. "XO. .X. ..O"
    Eval {
        /// Board in row-major order: X, O, and '.', '-' or '_' for empty
        board: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            scale: None,
            no_mouse: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["tictac"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("tictac.toml"));
    }

    #[test]
    fn test_play_flags() {
        let args = ["tictac", "play", "--scale", "large", "--no-mouse"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Play {
                scale: Some(TileScale::Large),
                no_mouse: true
            })
        );
    }

    #[test]
    fn test_eval_with_global_config() {
        let args = ["tictac", "eval", "XXX......", "--json", "-c", "other.toml"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        assert!(matches!(cli.command, Some(Command::Eval { json: true, .. })));
    }

    #[test]
    fn test_rejects_unknown_scale() {
        assert!(Cli::try_parse_from(["tictac", "play", "--scale", "huge"]).is_err());
    }
}
