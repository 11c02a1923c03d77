//! tictactoe_timeline - CLI entry point.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_timeline::{Config, replay_view};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?;

    match cli.command.unwrap_or(Command::Play { log_file: None }) {
        Command::Play { log_file } => {
            let config = match log_file {
                Some(path) => config.with_log_file(path),
                None => config,
            };
            tui::run_tui(config)
        }
        Command::Replay { script, json } => run_replay(&config, &script, json),
    }
}

/// Run a script and print the final view.
#[instrument(skip(config, script))]
fn run_replay(config: &Config, script: &str, json: bool) -> Result<()> {
    initialize_stderr_tracing(config);

    let view = replay_view(script, &config.labels())?;
    info!(step = view.current_step, status = %view.status, "Printing replay result");

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", view.to_text());
    }
    Ok(())
}

fn initialize_stderr_tracing(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}
