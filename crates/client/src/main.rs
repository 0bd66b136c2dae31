//! Word game command-line client.
//!
//! Composition root that loads configuration, sets up logging, assembles
//! the round and leaderboard services, and runs one command against them.
//! Results are printed to stdout as JSON; logs go to stderr.
//!
//! # Examples
//!
//! ```bash
//! wordgame round --letters 7
//! wordgame check abcde
//! wordgame scores --sort name --limit 10
//! wordgame submit '{"name":"Al","high_score":100,"date":"2021-01-01"}'
//! ```

mod commands;
mod logging;

use anyhow::Result;
use clap::Parser;
use client_bootstrap::{ServiceBuilder, ServiceConfig};
use commands::{Check, Round, Scores, Submit};

/// Letter rounds and leaderboard for the word game
#[derive(Parser)]
#[command(name = "wordgame")]
#[command(about = "Letter rounds and leaderboard for the word game", long_about = None)]
#[command(version)]
struct Cli {
    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate a playable round of letters and its words
    Round(Round),

    /// List the words that can be made from the given letters
    Check(Check),

    /// Read the leaderboard
    Scores(Scores),

    /// Submit a single score record
    Submit(Submit),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = ServiceConfig::from_env();

    let _log_guard = logging::setup_logging(config.log_dir.as_deref())?;

    tracing::debug!("Oracle: {}", config.oracle.kind);
    tracing::debug!("Round policy: {:?}", config.policy);

    let setup = ServiceBuilder::new(config).build()?;
    let output = commands::Output::new(cli.pretty);

    match cli.command {
        Command::Round(cmd) => cmd.run(&setup, &output).await,
        Command::Check(cmd) => cmd.run(&setup, &output).await,
        Command::Scores(cmd) => cmd.run(&setup, &output).await,
        Command::Submit(cmd) => cmd.run(&setup, &output).await,
    }
}
