//! Command-line interface for noughts.

use crate::config::{Mode, Seat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - play noughts and crosses against a perfect opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Noughts and crosses with a minimax AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to $NOUGHTS_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play at the console
    Play {
        /// Game mode. Asked at the menu if omitted.
        #[arg(short, long, value_enum)]
        mode: Option<Mode>,

        /// Seat the AI plays in ai mode
        #[arg(long, value_enum)]
        computer: Option<Seat>,

        /// Quit after one game instead of offering a replay
        #[arg(long)]
        no_replay: bool,
    },

    /// Print the value and best move of a position
    Analyze {
        /// Cells played so far (1-9), alternating from the first mover
        moves: Vec<usize>,
    },
}
