//! Tris - unified CLI

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tris::cli::{Cli, Command};
use tris::{TrisConfig, console, logging, tui};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TrisConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Command::Play => {
            logging::init_file(config.log_file())?;
            tui::run_tui(&config)
        }
        Command::Console => {
            logging::init_stderr();
            info!("Starting console mode");
            let mut session = config.new_session();
            console::run(&mut session, std::io::stdin().lock(), std::io::stdout().lock())
        }
    }
}
