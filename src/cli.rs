//! Command-line interface for the perfect-play engine.

use clap::{Parser, Subcommand};

/// Perfect-play tic-tac-toe engine
#[derive(Parser, Debug)]
#[command(name = "perfect_tictactoe")]
#[command(about = "Exhaustive-search tic-tac-toe engine that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the engine's move for a fixed sample position (smoke test)
    Demo {
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play against the engine in the terminal
    Play,
}
