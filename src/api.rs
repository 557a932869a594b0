use crate::constants::CHAT_ENDPOINT;
use crate::errors::{FeatchatError, FeatchatResult};
use reqwest::Client;
use serde_json::{json, Value};

/// Resolution of one chat round trip, delivered back to the UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    /// The backend answered with a non-empty `results` value.
    Answer(String),
    /// The backend answered, but `results` was absent or empty.
    NoResult,
    /// The request failed or the body was not JSON.
    Failed,
}

/// Client for the backend chat endpoint.
///
/// Holds the base URL rather than a global constant so tests can point it at
/// a mock server. No timeout is configured; a request waits for the transport
/// to resolve or reject.
#[derive(Debug, Clone)]
pub struct ChatApi {
    client: Client,
    base_url: String,
}

impl ChatApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Sends one query to the backend and extracts the `results` field.
    ///
    /// `Ok(Some(text))` is a usable answer, `Ok(None)` means the backend had
    /// no relevant result. Transport failures and non-JSON bodies are errors;
    /// the HTTP status is otherwise not inspected.
    pub async fn query(&self, text: &str) -> FeatchatResult<Option<String>> {
        let url = format!("{}{}", self.base_url, CHAT_ENDPOINT);
        let payload = json!({ "query": text });

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| FeatchatError::api_error(format!("Request failed: {}", e)))?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| FeatchatError::api_error(format!("Failed to parse response: {}", e)))?;

        Ok(coerce_results(&body["results"]))
    }

    /// Runs one full round trip and folds every path into a [`ChatOutcome`].
    pub async fn resolve(&self, text: &str) -> ChatOutcome {
        match self.query(text).await {
            Ok(Some(answer)) => ChatOutcome::Answer(answer),
            Ok(None) => ChatOutcome::NoResult,
            Err(e) => {
                log::warn!("chat request failed: {}", e);
                ChatOutcome::Failed
            }
        }
    }
}

/// Coerces the `results` field to display text.
///
/// Falsy values (absent, null, "", [], false, 0) yield `None`; a string is
/// used as-is; any other truthy JSON value displays as its compact JSON text.
fn coerce_results(results: &Value) -> Option<String> {
    match results {
        Value::Null => None,
        Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) => {
            if n.as_f64() == Some(0.0) {
                None
            } else {
                Some(n.to_string())
            }
        }
        Value::String(s) => {
            if s.is_empty() {
                None
            } else {
                Some(s.clone())
            }
        }
        Value::Array(a) => {
            if a.is_empty() {
                None
            } else {
                Some(results.to_string())
            }
        }
        Value::Object(_) => Some(results.to_string()),
    }
}
