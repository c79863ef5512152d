//! OpenAI client implementation

use async_trait::async_trait;
use reqwest::header::RETRY_AFTER;
use reqwest::{Client, Response};
use std::time::Duration;

use crate::llm::core::{
    config::ClientConfig,
    error::LlmError,
    provider::AnswerProvider,
    types::{Answer, AnswerRequest, ApiStyle},
};

use super::mapper::{
    from_chat_response, from_error_status, from_responses_response, to_chat_request,
    to_responses_request,
};
use super::types::{ChatCompletionResponse, ResponsesResponse};

/// Client for the OpenAI HTTP API
pub struct OpenAiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Endpoint and timeout settings
    config: ClientConfig,
}

impl OpenAiClient {
    /// Create a new OpenAI client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, LlmError> {
        let mut builder = Client::builder().connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(|e| LlmError::HttpError {
            status: 0,
            body: format!("Failed to create HTTP client: {}", e),
        })?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// POST a JSON body to the configured endpoint and check the status
    async fn post<T: serde::Serialize + ?Sized>(
        &self,
        credential: &str,
        body: &T,
    ) -> Result<Response, LlmError> {
        let url = self.config.endpoint_url();
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(credential)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_secs);
            let body = response.text().await.unwrap_or_default();
            return Err(from_error_status(status.as_u16(), body, retry_after));
        }

        Ok(response)
    }

    async fn ask_responses(
        &self,
        credential: &str,
        request: AnswerRequest,
    ) -> Result<Answer, LlmError> {
        let body = to_responses_request(request);
        let response = self.post(credential, &body).await?;
        let parsed: ResponsesResponse = serde_json::from_slice(&response.bytes().await?)?;
        tracing::debug!(response_id = ?parsed.id, model = ?parsed.model, "responses call finished");
        from_responses_response(parsed)
    }

    async fn ask_chat(&self, credential: &str, request: AnswerRequest) -> Result<Answer, LlmError> {
        if !request.tools.is_empty() {
            tracing::warn!(
                tools = ?request.tools,
                "chat completions cannot use provider tools; sending without them"
            );
        }
        let body = to_chat_request(request);
        let response = self.post(credential, &body).await?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&response.bytes().await?)?;
        tracing::debug!(
            model = ?parsed.model,
            finish_reason = ?parsed.choices.first().and_then(|c| c.finish_reason.as_deref()),
            "chat completion finished"
        );
        from_chat_response(parsed)
    }
}

#[async_trait]
impl AnswerProvider for OpenAiClient {
    async fn answer(&self, credential: &str, request: AnswerRequest) -> Result<Answer, LlmError> {
        match self.config.api_style {
            ApiStyle::Responses => self.ask_responses(credential, request).await,
            ApiStyle::ChatCompletions => self.ask_chat(credential, request).await,
        }
    }
}
