//! A single player's hangman session.

use super::canvas::Canvas;
use super::geometry::{MIN_CANVAS_HEIGHT, MIN_CANVAS_WIDTH, Stage};
use super::guess::{GuessOutcome, GuessRejection, parse_letter};
use super::provider::{WordProvider, WordProviderError};
use super::types::{Difficulty, MAX_WRONG_GUESSES, RoundStatus};
use derive_more::{Display, From};
use tracing::{debug, info, instrument, warn};

/// Errors from building a session or starting a round.
#[derive(Debug, Clone, Display, From)]
pub enum SessionError {
    /// The canvas cannot hold the gallows.
    #[display(
        "Canvas {}x{} is smaller than the required {}x{}",
        width,
        height,
        MIN_CANVAS_WIDTH,
        MIN_CANVAS_HEIGHT
    )]
    #[from(ignore)]
    CanvasTooSmall {
        /// Width of the rejected canvas.
        width: u32,
        /// Height of the rejected canvas.
        height: u32,
    },

    /// The word provider failed.
    #[display("{}", _0)]
    WordProvider(WordProviderError),

    /// The provider returned something that is not a playable word.
    #[display("Malformed word from provider: {:?}", _0)]
    #[from(ignore)]
    MalformedWord(String),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::WordProvider(err) => Some(err),
            SessionError::CanvasTooSmall { .. } | SessionError::MalformedWord(_) => None,
        }
    }
}

/// Hangman game state bound to the canvas it draws on.
///
/// One session plays any number of rounds; each [`GameSession::start`]
/// discards the previous round.
#[derive(Debug)]
pub struct GameSession<C: Canvas> {
    canvas: C,
    word: Option<String>,
    guesses: Vec<char>,
    wrong_guesses: u8,
    status: RoundStatus,
}

impl<C: Canvas> GameSession<C> {
    /// Creates a session, failing if the canvas is too small for the gallows.
    #[instrument(skip(canvas), fields(width = canvas.width(), height = canvas.height()))]
    pub fn new(canvas: C) -> Result<Self, SessionError> {
        let (width, height) = (canvas.width(), canvas.height());
        if width < MIN_CANVAS_WIDTH || height < MIN_CANVAS_HEIGHT {
            warn!("Rejecting undersized canvas");
            return Err(SessionError::CanvasTooSmall { width, height });
        }

        Ok(Self {
            canvas,
            word: None,
            guesses: Vec::new(),
            wrong_guesses: 0,
            status: RoundStatus::NotStarted,
        })
    }

    /// Starts a new round with a word from `provider`.
    ///
    /// Nothing changes until the word arrives, so dropping the returned
    /// future leaves the session untouched. On failure the session is
    /// left `NotStarted` with a cleared canvas.
    #[instrument(skip(self, provider))]
    pub async fn start<P>(&mut self, difficulty: Difficulty, provider: &P) -> Result<(), SessionError>
    where
        P: WordProvider + ?Sized,
    {
        let fetched = provider.fetch_word(difficulty).await;

        let word = match fetched.map_err(SessionError::from).and_then(normalize_word) {
            Ok(word) => word,
            Err(err) => {
                warn!(error = %err, "Failed to start round");
                self.reset(None);
                self.canvas.clear();
                return Err(err);
            }
        };

        info!(length = word.len(), "Round started");
        self.reset(Some(word));
        self.canvas.clear();
        self.canvas.draw_stage(Stage::Base);
        Ok(())
    }

    fn reset(&mut self, word: Option<String>) {
        self.status = if word.is_some() {
            RoundStatus::InProgress
        } else {
            RoundStatus::NotStarted
        };
        self.word = word;
        self.guesses.clear();
        self.wrong_guesses = 0;
    }

    /// Submits a guess.
    ///
    /// Rejections leave the session unchanged.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn guess(&mut self, input: &str) -> Result<GuessOutcome, GuessRejection> {
        let letter = parse_letter(input)?;

        match self.status {
            RoundStatus::NotStarted => return Err(GuessRejection::NotStarted),
            RoundStatus::Won | RoundStatus::Lost => return Err(GuessRejection::RoundOver),
            RoundStatus::InProgress => {}
        }

        if self.guesses.contains(&letter) {
            debug!(%letter, "Duplicate guess");
            return Err(GuessRejection::AlreadyGuessed);
        }

        self.guesses.push(letter);

        let hit = self
            .word
            .as_deref()
            .is_some_and(|word| word.contains(letter));

        let outcome = if hit {
            self.check_win()
        } else {
            self.on_wrong_guess()
        };
        debug!(%letter, ?outcome, "Guess applied");
        Ok(outcome)
    }

    fn check_win(&mut self) -> GuessOutcome {
        let unknowns = self
            .word
            .as_deref()
            .unwrap_or_default()
            .chars()
            .filter(|c| !self.guesses.contains(c))
            .count();

        if unknowns == 0 {
            info!("Word revealed");
            self.status = RoundStatus::Won;
            GuessOutcome::Won
        } else {
            GuessOutcome::Hit
        }
    }

    fn on_wrong_guess(&mut self) -> GuessOutcome {
        self.wrong_guesses += 1;

        let Some(stage) = Stage::for_wrong_guess(self.wrong_guesses) else {
            return GuessOutcome::Lost;
        };
        self.canvas.draw_stage(stage);

        if self.wrong_guesses == MAX_WRONG_GUESSES {
            info!("Out of guesses");
            self.status = RoundStatus::Lost;
            GuessOutcome::Lost
        } else {
            GuessOutcome::Miss(stage)
        }
    }

    /// The masked word: guessed letters shown, others as `_`, space separated.
    ///
    /// `None` until a round has started.
    pub fn word_holder_text(&self) -> Option<String> {
        let word = self.word.as_deref()?;
        let cells: Vec<String> = word
            .chars()
            .map(|c| {
                if self.guesses.contains(&c) {
                    c.to_string()
                } else {
                    "_".to_string()
                }
            })
            .collect();
        Some(cells.join(" "))
    }

    /// Guesses in the order they were made, comma separated.
    pub fn guesses_text(&self) -> String {
        let letters: Vec<String> = self.guesses.iter().map(char::to_string).collect();
        letters.join(",")
    }

    /// The secret word, once a round has started.
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// Accepted guesses in order.
    pub fn guesses(&self) -> &[char] {
        &self.guesses
    }

    /// Wrong guesses so far this round.
    pub fn wrong_guesses(&self) -> u8 {
        self.wrong_guesses
    }

    /// Wrong guesses left before the round is lost.
    pub fn remaining_guesses(&self) -> u8 {
        MAX_WRONG_GUESSES - self.wrong_guesses
    }

    /// The most recent body-part stage drawn, if any.
    pub fn current_stage(&self) -> Option<Stage> {
        Stage::for_wrong_guess(self.wrong_guesses)
    }

    /// Round status.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// True once the round is won or lost.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// True only if the round ended by revealing the word.
    pub fn did_win(&self) -> bool {
        self.status.did_win()
    }

    /// The canvas being drawn on.
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Consumes the session, returning its canvas.
    pub fn into_canvas(self) -> C {
        self.canvas
    }
}

/// Lowercases a fetched word and rejects anything that cannot be played.
fn normalize_word(raw: String) -> Result<String, SessionError> {
    // Per-char lowering matches how guesses are lowered.
    let word: String = raw.trim().chars().flat_map(char::to_lowercase).collect();
    if word.is_empty() || !word.chars().all(char::is_alphabetic) {
        return Err(SessionError::MalformedWord(raw));
    }
    Ok(word)
}
