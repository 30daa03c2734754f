//! Person-name NER collaborator.
//!
//! The pipeline only consults this when the first-three-lines name
//! heuristic fails, and only over the first 500 characters of the text.
//! Carried in `AppState` as `Arc<dyn NameRecognizer>` so the backend can
//! be swapped without touching handlers: an HTTP client when
//! `NER_ENDPOINT` is configured, a disabled no-op otherwise.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum NerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("NER service error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[async_trait]
pub trait NameRecognizer: Send + Sync {
    /// Returns the first PERSON entity found in `text`, if any.
    async fn first_person(&self, text: &str) -> Result<Option<String>, NerError>;
}

#[derive(Debug, Serialize)]
struct NerRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct NerResponse {
    entities: Vec<NerEntity>,
}

#[derive(Debug, Deserialize)]
struct NerEntity {
    label: String,
    text: String,
}

/// HTTP client for an external NER service that answers
/// `POST {endpoint}` with `{"entities": [{"label": "...", "text": "..."}]}`.
#[derive(Clone)]
pub struct HttpNerClient {
    client: Client,
    endpoint: String,
}

impl HttpNerClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint,
        }
    }
}

#[async_trait]
impl NameRecognizer for HttpNerClient {
    async fn first_person(&self, text: &str) -> Result<Option<String>, NerError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&NerRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: NerResponse = response.json().await?;
        debug!(entities = body.entities.len(), "NER service responded");
        Ok(body
            .entities
            .into_iter()
            .find(|e| e.label == "PERSON")
            .map(|e| e.text))
    }
}

/// No-op recognizer used when no NER service is configured. The caller
/// falls through to the "Unknown" placeholder.
pub struct DisabledNer;

#[async_trait]
impl NameRecognizer for DisabledNer {
    async fn first_person(&self, _text: &str) -> Result<Option<String>, NerError> {
        Ok(None)
    }
}
