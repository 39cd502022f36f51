//! Command-line interface for tictactoe_engine.

use clap::{Parser, Subcommand};
use tictactoe_engine::Position;

/// Tic-tac-toe engine - replay rounds from the command line
#[derive(Parser, Debug)]
#[command(name = "tictactoe_engine")]
#[command(about = "Replay tic-tac-toe moves through a game session", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a sequence of moves, X first, and print each round
    Replay {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Start a new round whenever one finishes
        #[arg(long)]
        auto_reset: bool,

        /// Print the final session as JSON instead of a status line
        #[arg(long)]
        json: bool,

        /// Moves as "row,column", e.g. 0,0 1,1 0,1
        #[arg(required = true, num_args = 1..)]
        moves: Vec<Position>,
    },
}
