//! Provider trait for answer implementations

use async_trait::async_trait;
use std::sync::Arc;

use super::{
    config::ClientConfig,
    error::LlmError,
    types::{Answer, AnswerRequest},
};
use crate::llm::openai::OpenAiClient;

/// Main interface that every answer provider must satisfy
///
/// The HTTP layer only sees this trait, so tests can swap in a fake
/// implementation that never touches the network.
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    /// Ask the provider a single question
    ///
    /// # Arguments
    /// * `credential` - Secret used to authenticate this call
    /// * `request` - Model, instructions, question and enabled tools
    ///
    /// # Returns
    /// The answer text, or an error describing why the call failed
    async fn answer(&self, credential: &str, request: AnswerRequest) -> Result<Answer, LlmError>;
}

/// Create the provider used by the HTTP service
///
/// # Errors
///
/// Returns an error if the underlying HTTP client cannot be built.
pub fn create_provider(config: ClientConfig) -> Result<Arc<dyn AnswerProvider>, LlmError> {
    let client = OpenAiClient::new(config)?;
    Ok(Arc::new(client))
}
