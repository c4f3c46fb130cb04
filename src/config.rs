//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use strictly_hangman_game::Difficulty;
use tracing::{debug, info, instrument};

/// Environment variable that overrides the word service URL.
pub const WORD_SERVICE_URL_ENV: &str = "HANGMAN_WORD_SERVICE_URL";

/// Configuration file read when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "strictly_hangman.toml";

/// Settings for the hangman application.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct HangmanConfig {
    /// Base URL of the word service; queried with `?difficulty=<level>`.
    #[serde(default = "default_word_service_url")]
    word_service_url: String,

    /// Difficulty of the first round.
    #[serde(default)]
    difficulty: Difficulty,

    /// Timeout for a single word request.
    #[serde(default = "default_request_timeout_secs")]
    request_timeout_secs: u64,

    /// File that receives logs while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Use the built-in word list instead of the word service.
    #[serde(default)]
    offline: bool,
}

fn default_word_service_url() -> String {
    "https://hangman-micro-service.herokuapp.com/".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_hangman.log")
}

impl Default for HangmanConfig {
    fn default() -> Self {
        Self {
            word_service_url: default_word_service_url(),
            difficulty: Difficulty::default(),
            request_timeout_secs: default_request_timeout_secs(),
            log_file: default_log_file(),
            offline: false,
        }
    }
}

impl HangmanConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.request_timeout_secs == 0 {
            return Err(ConfigError::new(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        info!(url = %config.word_service_url, difficulty = %config.difficulty, "Config loaded");
        Ok(config)
    }

    /// Resolves configuration for the command line.
    ///
    /// An explicit path must exist. Without one, the default file is used
    /// if present and defaults otherwise. The URL environment variable
    /// wins over both.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH)?,
            None => {
                debug!("No config file, using defaults");
                Self::default()
            }
        };

        Ok(config.with_env_overrides(std::env::var(WORD_SERVICE_URL_ENV).ok()))
    }

    /// Applies a word service URL taken from the environment.
    pub fn with_env_overrides(mut self, word_service_url: Option<String>) -> Self {
        if let Some(url) = word_service_url.filter(|url| !url.trim().is_empty()) {
            debug!(%url, "Word service URL overridden by environment");
            self.word_service_url = url;
        }
        self
    }

    /// Overrides the starting difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Forces the built-in word list.
    pub fn with_offline(mut self, offline: bool) -> Self {
        self.offline |= offline;
        self
    }

    /// Request timeout as a duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
