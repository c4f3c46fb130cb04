//! Word sources.

use super::types::Difficulty;
use async_trait::async_trait;
use derive_more::{Display, Error};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, instrument};

/// Failure to obtain a word: transport, status or payload problems.
#[derive(Debug, Clone, Display, Error)]
#[display("Word provider error: {} at {}:{}", message, file, line)]
pub struct WordProviderError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl WordProviderError {
    /// Creates a new provider error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Supplies secret words by difficulty.
///
/// Implementations own timeouts and retries; a returned error is final
/// for the round being started.
#[async_trait]
pub trait WordProvider: Send + Sync {
    /// Fetches a single word for the given difficulty.
    async fn fetch_word(&self, difficulty: Difficulty) -> Result<String, WordProviderError>;
}

/// Offline provider backed by fixed word pools.
///
/// Hands out words from each pool in rotation.
#[derive(Debug, Default)]
pub struct WordList {
    pools: HashMap<Difficulty, Vec<String>>,
    cursor: AtomicUsize,
}

impl WordList {
    /// Creates an empty list; add pools with [`WordList::with_words`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pool for a difficulty, replacing any previous one.
    pub fn with_words<I, S>(mut self, difficulty: Difficulty, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pools
            .insert(difficulty, words.into_iter().map(Into::into).collect());
        self
    }

    /// A small built-in vocabulary for playing without the network.
    pub fn builtin() -> Self {
        Self::new()
            .with_words(
                Difficulty::Easy,
                ["book", "cat", "tree", "fish", "lamp", "rain", "milk", "door"],
            )
            .with_words(
                Difficulty::Medium,
                ["garden", "planet", "window", "bridge", "candle", "rocket"],
            )
            .with_words(
                Difficulty::Hard,
                ["rhythm", "quizzical", "awkward", "jazziest", "zephyr", "syzygy"],
            )
    }
}

#[async_trait]
impl WordProvider for WordList {
    #[instrument(skip(self))]
    async fn fetch_word(&self, difficulty: Difficulty) -> Result<String, WordProviderError> {
        let pool = self
            .pools
            .get(&difficulty)
            .filter(|pool| !pool.is_empty())
            .ok_or_else(|| WordProviderError::new(format!("No words for difficulty {difficulty}")))?;

        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % pool.len();
        debug!(index, "Picked word from list");
        Ok(pool[index].clone())
    }
}
