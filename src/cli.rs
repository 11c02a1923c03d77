//! Command-line interface for tictactoe_timeline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tictactoe_timeline::DEFAULT_CONFIG_PATH;

/// Tic-tac-toe with time travel through the move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Terminal tic-tac-toe with a navigable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Write logs here instead of the configured log file
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Run a script of events and print the resulting game
    Replay {
        /// Events separated by spaces or commas: a cell 0-8 clicks it, @N jumps to step N
        script: String,

        /// Print the game view as JSON
        #[arg(long)]
        json: bool,
    },
}
