//! Strictly Hangman game logic.
//!
//! A [`GameSession`] owns one secret word, the guesses made against it and
//! the gallows drawing on a [`Canvas`]. Words come from any
//! [`WordProvider`]; the crate ships an offline [`WordList`].
//!
//! # Example
//!
//! ```
//! use strictly_hangman_game::{Difficulty, DisplayList, GameSession, GuessOutcome, WordList};
//!
//! # async fn example() -> Result<(), strictly_hangman_game::SessionError> {
//! let provider = WordList::new().with_words(Difficulty::Easy, ["book"]);
//! let mut session = GameSession::new(DisplayList::default())?;
//! session.start(Difficulty::Easy, &provider).await?;
//!
//! assert_eq!(session.guess("o"), Ok(GuessOutcome::Hit));
//! assert_eq!(session.word_holder_text().as_deref(), Some("_ o o _"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod canvas;
mod geometry;
mod guess;
mod provider;
mod session;
mod types;

pub use canvas::{Canvas, DisplayList, DrawCall};
pub use geometry::{MIN_CANVAS_HEIGHT, MIN_CANVAS_WIDTH, Rect, Stage};
pub use guess::{GuessOutcome, GuessRejection, parse_letter};
pub use provider::{WordList, WordProvider, WordProviderError};
pub use session::{GameSession, SessionError};
pub use types::{Difficulty, MAX_WRONG_GUESSES, RoundStatus};
