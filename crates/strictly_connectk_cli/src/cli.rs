//! Command-line interface for connectk.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Connect-K - five in a row on an N×N board, with time travel
#[derive(Parser, Debug)]
#[command(name = "connectk")]
#[command(about = "Play connect-K in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading commands from stdin
    Play {
        /// Board size (overrides the configured default)
        #[arg(short, long)]
        size: Option<usize>,
    },

    /// Replay a sequence of cell indices and print the result
    Replay {
        /// Board size (overrides the configured default)
        #[arg(short, long)]
        size: Option<usize>,

        /// Comma-separated cell indices, X first
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Print the session as JSON instead of a board
        #[arg(long)]
        json: bool,
    },
}
