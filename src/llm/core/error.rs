//! Error types for the LLM layer

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while asking a provider for an answer
#[derive(Debug, Error)]
pub enum LlmError {
    /// Credential rejected by the provider
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// HTTP request failures
    #[error("HTTP error (status {status}): {body}")]
    HttpError { status: u16, body: String },

    /// The request did not finish in time
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// JSON encoding/decoding issues
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Response parsed but did not have the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Response carried no answer text
    #[error("Provider returned an empty answer")]
    EmptyAnswer,

    /// Rate limit or quota exceeded
    #[error("Rate limit exceeded: {message}{}", retry_hint(.retry_after))]
    RateLimitExceeded {
        message: String,
        retry_after: Option<Duration>,
    },

    /// Provider-specific errors
    #[error("Provider error ({code}): {message}")]
    ProviderError { code: String, message: String },
}

fn retry_hint(retry_after: &Option<Duration>) -> String {
    match retry_after {
        Some(delay) => format!(" (retry after {}s)", delay.as_secs()),
        None => String::new(),
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        LlmError::SerializationError(err.to_string())
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return LlmError::Timeout(err.to_string());
        }
        if err.is_decode() {
            return LlmError::MalformedResponse(err.to_string());
        }
        LlmError::HttpError {
            status: err.status().map(|s| s.as_u16()).unwrap_or(0),
            body: err.to_string(),
        }
    }
}
