//! Turnwise - console tic-tac-toe.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use turnwise::{Cli, Console, GameConfig, session};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    run(cli)
}

#[instrument(skip_all)]
fn run(cli: Cli) -> Result<()> {
    let config = GameConfig::resolve(&cli).context("Failed to load configuration")?;
    let clear = io::stdout().is_terminal() && !cli.no_clear;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), clear);
    let report = session::run(&mut console, &config)?;

    info!(
        rounds = report.rounds_played,
        human = report.human_score,
        computer = report.computer_score,
        "Exiting"
    );
    Ok(())
}
