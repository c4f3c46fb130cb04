//! Tests for the HTTP word provider against a local stand-in service.

use axum::{Json, Router, extract::Query, http::StatusCode, routing::get};
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;

use strictly_hangman::{HangmanConfig, HttpWordProvider, provider_for};
use strictly_hangman_game::{
    Difficulty, DisplayList, GameSession, RoundStatus, SessionError, WordProvider,
};

/// Serves `router` on an ephemeral port and returns its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Server failed");
    });
    format!("http://{}/", addr)
}

/// Answers with a word that names the requested difficulty.
fn echo_service() -> Router {
    Router::new().route(
        "/",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            let word = match params.get("difficulty").map(String::as_str) {
                Some("easy") => "Book",
                Some("medium") => "garden",
                Some("hard") => "rhythm",
                _ => "unknown",
            };
            Json(json!({ "word": word }))
        }),
    )
}

fn provider(base_url: &str) -> HttpWordProvider {
    HttpWordProvider::new(base_url, Duration::from_secs(5)).expect("Valid URL")
}

#[tokio::test]
async fn test_fetches_word_for_difficulty() {
    let base_url = serve(echo_service()).await;
    let provider = provider(&base_url);

    assert_eq!(provider.fetch_word(Difficulty::Easy).await.unwrap(), "Book");
    assert_eq!(provider.fetch_word(Difficulty::Hard).await.unwrap(), "rhythm");
}

#[tokio::test]
async fn test_session_lowercases_fetched_word() {
    let base_url = serve(echo_service()).await;
    let provider = provider(&base_url);

    let mut session = GameSession::new(DisplayList::default()).unwrap();
    session.start(Difficulty::Easy, &provider).await.unwrap();
    assert_eq!(session.word(), Some("book"));
    assert_eq!(session.word_holder_text().as_deref(), Some("_ _ _ _"));
}

#[tokio::test]
async fn test_missing_word_field_fails_start() {
    let router = Router::new().route("/", get(|| async { Json(json!({ "term": "book" })) }));
    let base_url = serve(router).await;
    let provider = provider(&base_url);

    let mut session = GameSession::new(DisplayList::default()).unwrap();
    let err = session
        .start(Difficulty::Easy, &provider)
        .await
        .expect_err("Start should fail");

    let inner = match err {
        SessionError::WordProvider(inner) => inner,
        other => panic!("Expected provider error, got {other}"),
    };
    assert!(inner.message.contains("no word field"));
    assert_eq!(session.status(), RoundStatus::NotStarted);
}

#[tokio::test]
async fn test_error_status_is_failure() {
    let router = Router::new().route("/", get(|| async { StatusCode::SERVICE_UNAVAILABLE }));
    let base_url = serve(router).await;

    let err = provider(&base_url)
        .fetch_word(Difficulty::Medium)
        .await
        .expect_err("Should fail");
    assert!(err.message.contains("503"));
}

#[tokio::test]
async fn test_invalid_json_is_failure() {
    let router = Router::new().route("/", get(|| async { "book" }));
    let base_url = serve(router).await;

    let err = provider(&base_url)
        .fetch_word(Difficulty::Easy)
        .await
        .expect_err("Should fail");
    assert!(err.message.contains("Invalid word service response"));
}

#[tokio::test]
async fn test_slow_service_times_out() {
    let router = Router::new().route(
        "/",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "word": "late" }))
        }),
    );
    let base_url = serve(router).await;
    let provider = HttpWordProvider::new(&base_url, Duration::from_millis(100)).unwrap();

    assert!(provider.fetch_word(Difficulty::Easy).await.is_err());
}

#[tokio::test]
async fn test_config_selects_provider() {
    let base_url = serve(echo_service()).await;

    let online = HangmanConfig::default().with_env_overrides(Some(base_url));
    let provider = provider_for(&online).expect("Provider");
    assert_eq!(provider.fetch_word(Difficulty::Medium).await.unwrap(), "garden");

    let offline = HangmanConfig::default()
        .with_env_overrides(Some("http://127.0.0.1:9/".to_string()))
        .with_offline(true);
    let provider = provider_for(&offline).expect("Provider");
    assert!(provider.fetch_word(Difficulty::Easy).await.is_ok());
}
