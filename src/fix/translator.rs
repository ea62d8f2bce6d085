//! Translation providers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://api.lingo.dev/v1/localize";

/// Env var holding the provider API key.
pub const API_KEY_ENV: &str = "LINGO_API_KEY";

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("translation request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("translation provider returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// Translates one text between two locales.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> Result<String, TranslateError>;
}

#[derive(Serialize)]
struct LocalizeRequest<'a> {
    source_locale: &'a str,
    target_locale: &'a str,
    data: LocalizeData<'a>,
}

#[derive(Serialize)]
struct LocalizeData<'a> {
    text: &'a str,
}

#[derive(Deserialize, Default)]
struct LocalizeResponse {
    #[serde(default)]
    data: Option<LocalizedText>,
}

#[derive(Deserialize)]
struct LocalizedText {
    #[serde(default)]
    text: Option<String>,
}

/// HTTP client for the Lingo.dev localize endpoint.
///
/// Requests carry no timeout and are never retried.
pub struct LingoTranslator {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl LingoTranslator {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl Translator for LingoTranslator {
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locale: &str,
    ) -> Result<String, TranslateError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&LocalizeRequest {
                source_locale,
                target_locale,
                data: LocalizeData { text },
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        // A body we cannot read as a translation keeps the source text.
        let body: LocalizeResponse = response.json().await.unwrap_or_default();
        Ok(translated_or_source(body, text))
    }
}

fn translated_or_source(body: LocalizeResponse, source_text: &str) -> String {
    body.data
        .and_then(|data| data.text)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| source_text.to_string())
}
