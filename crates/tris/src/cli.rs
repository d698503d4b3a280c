//! Command-line interface for tris.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tris - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tris")]
#[command(about = "Two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it is missing)
    #[arg(short, long, default_value = "tris.toml", global = true)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play in the full-screen terminal UI
    Play,

    /// Play by typing one command per line
    Console,
}
