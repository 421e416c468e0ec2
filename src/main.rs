//! Tic Tac Toe - Unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::sync::Arc;
use tic_tac_toe::{Settings, format_json, format_text, play_moves, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => run_tui(&settings),
        Command::Play { moves, json } => run_play(&settings, &moves, json),
    }
}

fn env_filter(settings: &Settings) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(settings.log_filter())
            .with_context(|| format!("Invalid log filter: {}", settings.log_filter())),
    }
}

/// Run the terminal UI
fn run_tui(settings: &Settings) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(settings.log_file())
        .with_context(|| format!("Failed to create log file {}", settings.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings)?)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    let palette = settings.theme().palette()?;
    tui::run_tui(palette)
}

/// Apply moves headlessly and print the outcome
fn run_play(settings: &Settings, moves: &[usize], json: bool) -> Result<()> {
    // stdout carries the result
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    info!(count = moves.len(), "Playing moves");
    let session = play_moves(moves);

    let output = if json {
        format_json(&session).context("Failed to serialize snapshot")?
    } else {
        format_text(&session)
    };
    println!("{}", output);

    Ok(())
}
