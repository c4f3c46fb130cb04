//! Strictly Hangman - Unified CLI
//!
//! Terminal hangman with a remote or built-in word source.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_hangman::cli::{Cli, Command, CommonArgs};
use strictly_hangman::{HangmanConfig, provider_for, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play(args) => tui::run_tui(resolve_config(&args)?).await,
        Command::Word(args) => run_word(args).await,
    }
}

/// Merges the config file with command-line overrides.
fn resolve_config(args: &CommonArgs) -> Result<HangmanConfig> {
    let mut config = HangmanConfig::load(args.config.as_deref())
        .context("Failed to load configuration")?
        .with_offline(args.offline);

    if let Some(difficulty) = args.difficulty {
        config = config.with_difficulty(difficulty);
    }

    Ok(config)
}

/// Fetch a single word and print it
#[instrument(skip_all)]
async fn run_word(args: CommonArgs) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = resolve_config(&args)?;
    info!(difficulty = %config.difficulty(), "Fetching word");

    let provider = provider_for(&config)?;
    let word = provider
        .fetch_word(*config.difficulty())
        .await
        .context("Failed to fetch word")?;

    println!("{}", word);
    Ok(())
}
