//! Command-line interface for strictly_hangman.

use clap::{Args, Parser, Subcommand};
use strictly_hangman_game::Difficulty;

/// Strictly Hangman - terminal hangman backed by a word service
#[derive(Parser, Debug)]
#[command(name = "strictly_hangman")]
#[command(about = "Play hangman in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Path to a TOML config file (defaults to strictly_hangman.toml if present)
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Word difficulty: easy, medium or hard (overrides the config file)
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Use the built-in word list instead of the word service
    #[arg(long)]
    pub offline: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play hangman in the terminal UI
    Play(CommonArgs),

    /// Fetch one word and print it
    Word(CommonArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_with_difficulty() {
        let cli = Cli::try_parse_from(["strictly_hangman", "play", "--difficulty", "hard"]).unwrap();
        let Command::Play(args) = cli.command else {
            panic!("Expected play command");
        };
        assert_eq!(args.difficulty, Some(Difficulty::Hard));
        assert!(!args.offline);
    }

    #[test]
    fn test_parse_word_offline() {
        let cli = Cli::try_parse_from(["strictly_hangman", "word", "--offline", "-c", "my.toml"])
            .unwrap();
        let Command::Word(args) = cli.command else {
            panic!("Expected word command");
        };
        assert!(args.offline);
        assert_eq!(args.config.as_deref(), Some(std::path::Path::new("my.toml")));
    }

    #[test]
    fn test_unknown_difficulty_rejected() {
        assert!(Cli::try_parse_from(["strictly_hangman", "play", "-d", "extreme"]).is_err());
    }
}
