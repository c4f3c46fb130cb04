//! Tests for HangmanConfig loading.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

use strictly_hangman::HangmanConfig;
use strictly_hangman_game::Difficulty;

/// Writes a config file into a temporary directory and returns its path.
fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("strictly_hangman.toml");
    fs::write(&path, content).expect("Failed to write TOML");
    path
}

#[test]
fn test_empty_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "");

    let config = HangmanConfig::from_file(&path).expect("Load failed");
    assert_eq!(config, HangmanConfig::default());
    assert_eq!(
        config.word_service_url(),
        "https://hangman-micro-service.herokuapp.com/"
    );
    assert_eq!(*config.difficulty(), Difficulty::Easy);
    assert_eq!(config.request_timeout(), Duration::from_secs(10));
    assert!(!*config.offline());
}

#[test]
fn test_full_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        r#"word_service_url = "http://localhost:8080/"
difficulty = "hard"
request_timeout_secs = 3
log_file = "/tmp/hangman.log"
offline = true
"#,
    );

    let config = HangmanConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.word_service_url(), "http://localhost:8080/");
    assert_eq!(*config.difficulty(), Difficulty::Hard);
    assert_eq!(config.request_timeout(), Duration::from_secs(3));
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/hangman.log"));
    assert!(*config.offline());
}

#[test]
fn test_unknown_difficulty_rejected() {
    let result = HangmanConfig::from_toml(r#"difficulty = "extreme""#);
    let err = result.expect_err("Should reject difficulty");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_zero_timeout_rejected() {
    assert!(HangmanConfig::from_toml("request_timeout_secs = 0").is_err());
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let result = HangmanConfig::load(Some(dir.path().join("absent.toml").as_path()));
    let err = result.expect_err("Missing file should fail");
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_env_override() {
    let config = HangmanConfig::default()
        .with_env_overrides(Some("http://words.test/".to_string()));
    assert_eq!(config.word_service_url(), "http://words.test/");

    let config = HangmanConfig::default().with_env_overrides(Some("  ".to_string()));
    assert_eq!(config, HangmanConfig::default());
}

#[test]
fn test_cli_overrides() {
    let config = HangmanConfig::default()
        .with_difficulty(Difficulty::Medium)
        .with_offline(true)
        .with_offline(false);
    assert_eq!(*config.difficulty(), Difficulty::Medium);
    assert!(*config.offline());
}
