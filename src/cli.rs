//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui {
        /// Show the move list newest-first
        #[arg(long)]
        reverse: bool,
    },

    /// Apply a sequence of moves and print the resulting game
    Play {
        /// Cell indices (0-8, row-major) played in order, starting with X
        #[arg(value_parser = clap::value_parser!(u8).range(0..=8))]
        cells: Vec<u8>,

        /// Jump to this history step after playing
        #[arg(short, long)]
        jump: Option<usize>,

        /// Show the move list newest-first
        #[arg(long)]
        reverse: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
