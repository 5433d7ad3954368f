//! Duel Tic-Tac-Toe - terminal entry point.

#![warn(missing_docs)]

mod cli;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use duel_tictactoe::{DuelConfig, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = DuelConfig::load_or_default(&cli.config)?.with_overrides(cli.overrides());

    initialize_tracing(&config)?;
    info!(config = ?config, "Starting Duel Tic-Tac-Toe");

    run_tui(&config).await
}

/// Logs to a file so the output does not interfere with the TUI.
#[instrument(skip(config))]
fn initialize_tracing(config: &DuelConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}
