//! Core domain types for hangman.

use serde::{Deserialize, Serialize};

/// Number of wrong guesses that ends a round.
pub const MAX_WRONG_GUESSES: u8 = 6;

/// Word pool requested from a word provider.
///
/// The meaning of each level is owned entirely by the provider.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    /// Short, common words.
    #[default]
    Easy,
    /// Medium words.
    Medium,
    /// Long or uncommon words.
    Hard,
}

impl Difficulty {
    /// Returns the next difficulty, wrapping from hard back to easy.
    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum RoundStatus {
    /// No round has started successfully yet.
    NotStarted,
    /// Guesses are being accepted.
    InProgress,
    /// Every letter of the word was revealed.
    Won,
    /// The sixth wrong guess was recorded.
    Lost,
}

impl RoundStatus {
    /// Returns true once the round has reached a terminal state.
    pub fn is_over(self) -> bool {
        matches!(self, RoundStatus::Won | RoundStatus::Lost)
    }

    /// Returns true only for a round that ended by revealing the word.
    pub fn did_win(self) -> bool {
        matches!(self, RoundStatus::Won)
    }
}
