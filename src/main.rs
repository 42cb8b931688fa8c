//! Tictac - tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tictac::{AppConfig, Cli, Command, EvalReport};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play { scale, no_mouse } => {
            let config = AppConfig::load(&cli.config)
                .with_context(|| format!("Failed to load {}", cli.config.display()))?;
            run_play(config.with_overrides(scale, no_mouse))
        }
        Command::Eval { board, json } => run_eval(&board, json),
    }
}

/// Run the terminal game, logging to the configured file.
fn run_play(config: AppConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(?config, "Starting tictac");
    tictac::run_tui(&config)
}

/// Print the classification of a board string.
fn run_eval(board: &str, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let report = EvalReport::from_input(board).context("Invalid board")?;
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.to_text());
    }
    Ok(())
}
