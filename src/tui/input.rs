//! Keyboard mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Guess the typed character.
    Guess(char),
    /// Fetch a new word and start a round.
    NewRound,
    /// Switch to the next difficulty.
    CycleDifficulty,
    /// Leave the game.
    Quit,
}

/// Maps a key event to an input, ignoring releases and unbound keys.
pub fn map_key(key: KeyEvent) -> Option<Input> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Input::Quit),
        (KeyCode::Esc, _) => Some(Input::Quit),
        (KeyCode::Enter, _) => Some(Input::NewRound),
        (KeyCode::Tab, _) => Some(Input::CycleDifficulty),
        // Plain and shifted keys go to the session for validation.
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Some(Input::Guess(c)),
        _ => None,
    }
}
