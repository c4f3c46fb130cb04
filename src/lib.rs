//! Strictly Hangman application library
//!
//! Wires the [`strictly_hangman_game`] session to the outside world.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with environment overrides
//! - **Word service**: HTTP word provider for the hangman micro-service
//! - **TUI**: terminal front-end that owns the canvas and forwards keys
//! - **CLI**: command definitions for the binary
//!
//! # Example
//!
//! ```no_run
//! use strictly_hangman::{HangmanConfig, provider_for};
//! use strictly_hangman_game::Difficulty;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = HangmanConfig::default();
//! let provider = provider_for(&config)?;
//! let word = provider.fetch_word(Difficulty::Easy).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
pub mod tui;
mod word_service;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, HangmanConfig, WORD_SERVICE_URL_ENV};

// Crate-level exports - Word service
pub use word_service::{HttpWordProvider, provider_for};
