//! Guess validation and outcomes.
//!
//! Input checks run in a fixed order and each failure maps to its own
//! rejection, so callers can tell the player exactly what was wrong.

use super::geometry::Stage;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Symbols rejected anywhere in a guess, in addition to digits and whitespace.
const SYMBOLS: &str = "`!@#$%^&*()_+-=[]{};':\"\\|,.<>/?~";

/// Why a guess was not accepted. The session is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GuessRejection {
    /// Nothing was entered.
    #[display("Invalid input. Please include a letter.")]
    Empty,

    /// The input contains a digit, whitespace, symbol or other non-letter.
    #[display("Invalid input. Please include a valid letter.")]
    InvalidCharacter,

    /// More than one letter was entered.
    #[display("Invalid input. Please include a single letter.")]
    NotSingleLetter,

    /// The letter was guessed earlier in this round.
    #[display("Invalid input. That letter has already been guessed.")]
    AlreadyGuessed,

    /// No round has been started.
    #[display("No round in progress. Start a new game first.")]
    NotStarted,

    /// The round has already been won or lost.
    #[display("This round is over. Start a new game to keep playing.")]
    RoundOver,

    /// Catch-all; the built-in checks never produce it.
    #[display("Error")]
    Unknown,
}

impl std::error::Error for GuessRejection {}

/// Effect of an accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// The letter is in the word; letters remain hidden.
    Hit,
    /// The letter revealed the last hidden position.
    Won,
    /// The letter is not in the word; the stage was drawn.
    Miss(Stage),
    /// The sixth wrong guess; the right leg was drawn.
    Lost,
}

/// Returns true for digits, whitespace and the listed symbols.
fn is_special(c: char) -> bool {
    c.is_ascii_digit() || c.is_whitespace() || SYMBOLS.contains(c)
}

/// Validates raw input and returns the lowercased letter.
///
/// Checks, in order: empty input, special characters anywhere in the raw
/// text, then exactly one alphabetic character. Duplicate and round-state
/// checks need the session and happen there.
#[instrument]
pub fn parse_letter(input: &str) -> Result<char, GuessRejection> {
    if input.is_empty() {
        return Err(GuessRejection::Empty);
    }

    if input.chars().any(is_special) {
        return Err(GuessRejection::InvalidCharacter);
    }

    let mut chars = input.chars();
    let (Some(letter), None) = (chars.next(), chars.next()) else {
        return Err(GuessRejection::NotSingleLetter);
    };

    if !letter.is_alphabetic() {
        return Err(GuessRejection::InvalidCharacter);
    }

    Ok(letter.to_lowercase().next().unwrap_or(letter))
}
