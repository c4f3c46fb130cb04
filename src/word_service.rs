//! HTTP client for the remote word service.
//!
//! The service answers `GET <base>?difficulty=<level>` with a JSON object
//! such as `{ "word": "book" }`.

use crate::config::HangmanConfig;
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;
use strictly_hangman_game::{Difficulty, WordList, WordProvider, WordProviderError};
use tracing::{debug, info, instrument, warn};

/// Picks the word source the configuration asks for.
#[instrument(skip(config), fields(offline = config.offline()))]
pub fn provider_for(config: &HangmanConfig) -> Result<Box<dyn WordProvider>, WordProviderError> {
    if *config.offline() {
        info!("Using built-in word list");
        return Ok(Box::new(WordList::builtin()));
    }

    let provider = HttpWordProvider::new(config.word_service_url(), config.request_timeout())?;
    Ok(Box::new(provider))
}

/// Word provider backed by the hangman word service.
#[derive(Debug, Clone)]
pub struct HttpWordProvider {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpWordProvider {
    /// Creates a provider for the service at `base_url`.
    #[instrument(skip(base_url), fields(base_url = %base_url))]
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, WordProviderError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| WordProviderError::new(format!("Invalid word service URL: {}", e)))?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WordProviderError::new(format!("Failed to build HTTP client: {}", e)))?;

        info!(?timeout, "Word service client ready");
        Ok(Self { base_url, client })
    }

    /// URL requested for a difficulty.
    pub fn word_url(&self, difficulty: Difficulty) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("difficulty", &difficulty.to_string());
        url
    }
}

/// Pulls the `word` string out of a service response body.
fn extract_word(body: &serde_json::Value) -> Result<String, WordProviderError> {
    match body.get("word") {
        Some(serde_json::Value::String(word)) => Ok(word.clone()),
        Some(other) => Err(WordProviderError::new(format!(
            "Word service returned a non-string word: {}",
            other
        ))),
        None => Err(WordProviderError::new(
            "Word service response has no word field",
        )),
    }
}

#[async_trait]
impl WordProvider for HttpWordProvider {
    #[instrument(skip(self))]
    async fn fetch_word(&self, difficulty: Difficulty) -> Result<String, WordProviderError> {
        let url = self.word_url(difficulty);
        debug!(%url, "Requesting word");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| WordProviderError::new(format!("Word request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Word service returned an error status");
            return Err(WordProviderError::new(format!(
                "Word service returned status {}",
                status
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| WordProviderError::new(format!("Invalid word service response: {}", e)))?;

        let word = extract_word(&body)?;
        debug!(length = word.len(), "Received word");
        Ok(word)
    }
}
