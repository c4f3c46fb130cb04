//! Application state and logic.

use strictly_hangman_game::{
    Difficulty, DisplayList, GameSession, GuessOutcome, SessionError, WordProvider,
};
use tracing::{debug, instrument, warn};

use super::input::Input;

/// Main application state: one session plus the provider feeding it.
pub struct App {
    session: GameSession<DisplayList>,
    provider: Box<dyn WordProvider>,
    difficulty: Difficulty,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates an application; no round is started yet.
    #[instrument(skip(provider))]
    pub fn new(provider: Box<dyn WordProvider>, difficulty: Difficulty) -> Result<Self, SessionError> {
        Ok(Self {
            session: GameSession::new(DisplayList::default())?,
            provider,
            difficulty,
            status_message: "Press Enter to start.".to_string(),
            should_quit: false,
        })
    }

    /// The game session.
    pub fn session(&self) -> &GameSession<DisplayList> {
        &self.session
    }

    /// Difficulty used for the next round.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Shows that a word request is pending.
    pub fn announce_fetch(&mut self) {
        self.status_message = format!("Fetching a {} word...", self.difficulty);
    }

    /// Fetches a word and starts a round.
    ///
    /// A provider failure is reported in the status line.
    #[instrument(skip(self), fields(difficulty = %self.difficulty))]
    pub async fn new_round(&mut self) {
        match self.session.start(self.difficulty, self.provider.as_ref()).await {
            Ok(()) => {
                debug!("Round ready");
                self.status_message = "Guess a letter.".to_string();
            }
            Err(e) => {
                warn!(error = %e, "Could not start round");
                self.status_message = format!("Could not get a word: {}. Press Enter to retry.", e);
            }
        }
    }

    /// Applies one input.
    #[instrument(skip(self))]
    pub async fn handle_input(&mut self, input: Input) {
        match input {
            Input::Quit => self.should_quit = true,
            Input::NewRound => {
                self.announce_fetch();
                self.new_round().await;
            }
            Input::CycleDifficulty => {
                self.difficulty = self.difficulty.next();
                self.status_message = format!(
                    "Difficulty set to {}. Press Enter for a new word.",
                    self.difficulty
                );
            }
            Input::Guess(c) => self.guess(c),
        }
    }

    fn guess(&mut self, c: char) {
        self.status_message = match self.session.guess(&c.to_string()) {
            Ok(GuessOutcome::Hit) => format!("Yes, '{}' is in the word.", c),
            Ok(GuessOutcome::Miss(_)) => format!(
                "No '{}'. {} wrong guesses left.",
                c,
                self.session.remaining_guesses()
            ),
            Ok(GuessOutcome::Won) => format!(
                "You won! The word was {}. Press Enter to play again.",
                self.session.word().unwrap_or_default()
            ),
            Ok(GuessOutcome::Lost) => format!(
                "Out of guesses. The word was {}. Press Enter to play again.",
                self.session.word().unwrap_or_default()
            ),
            Err(rejection) => rejection.to_string(),
        };
    }
}
