//! Command-line interface for turnwise.

use clap::Parser;
use std::path::PathBuf;
use turnwise_tictactoe::Marker;

/// Turnwise - console tic-tac-toe against a scripted opponent
#[derive(Parser, Debug, Default)]
#[command(name = "turnwise")]
#[command(about = "Play tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, env = "TURNWISE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Your name (skips the name prompt)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Round wins needed to take the match
    #[arg(short, long)]
    pub target: Option<u32>,

    /// Seed for the computer's random moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Marker that moves first in every round (X or O)
    #[arg(long)]
    pub first: Option<Marker>,

    /// Disable the computer's center-square preference
    #[arg(long)]
    pub no_center: bool,

    /// Never clear the terminal between turns
    #[arg(long)]
    pub no_clear: bool,
}
