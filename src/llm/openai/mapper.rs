//! Mapping between abstraction types and OpenAI-specific types

use std::time::Duration;

use crate::llm::core::{
    error::LlmError,
    types::{Answer, AnswerRequest, ProviderTool},
};

use super::types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ErrorEnvelope, OutputContent,
    OutputItem, ResponsesRequest, ResponsesResponse, ResponsesTool, ToolContainer,
};

/// Convert our abstraction request to the `/responses` format
pub fn to_responses_request(request: AnswerRequest) -> ResponsesRequest {
    ResponsesRequest {
        model: request.model,
        instructions: request.instructions,
        input: request.input,
        tools: request.tools.into_iter().map(to_responses_tool).collect(),
    }
}

fn to_responses_tool(tool: ProviderTool) -> ResponsesTool {
    match tool {
        ProviderTool::WebSearch => ResponsesTool::WebSearchPreview,
        ProviderTool::CodeInterpreter => ResponsesTool::CodeInterpreter {
            container: ToolContainer::auto(),
        },
    }
}

/// Convert our abstraction request to the `/chat/completions` format
///
/// Chat completions has no hosted tools, so `request.tools` is dropped.
pub fn to_chat_request(request: AnswerRequest) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: request.model,
        messages: vec![
            ChatMessage {
                role: "system".to_string(),
                content: Some(request.instructions),
            },
            ChatMessage {
                role: "user".to_string(),
                content: Some(request.input),
            },
        ],
    }
}

/// Extract the answer text from a `/responses` body
///
/// Prefers the top-level `output_text` aggregate; otherwise joins every
/// `output_text` part of every message item in order.
pub fn from_responses_response(response: ResponsesResponse) -> Result<Answer, LlmError> {
    if let Some(text) = response.output_text {
        return non_empty(text);
    }

    let mut parts = Vec::new();
    let mut refusal = None;
    for item in response.output {
        let OutputItem::Message { content } = item else {
            continue;
        };
        for part in content {
            match part {
                OutputContent::OutputText { text } => parts.push(text),
                OutputContent::Refusal { refusal: r } => refusal = Some(r),
                OutputContent::Other => {}
            }
        }
    }

    if parts.is_empty() {
        if let Some(refusal) = refusal {
            return Err(LlmError::ProviderError {
                code: "refusal".to_string(),
                message: refusal,
            });
        }
    }
    non_empty(parts.join(""))
}

/// Extract the answer text from a `/chat/completions` body
pub fn from_chat_response(response: ChatCompletionResponse) -> Result<Answer, LlmError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::MalformedResponse("response has no choices".to_string()))?;
    non_empty(choice.message.content.unwrap_or_default())
}

fn non_empty(text: String) -> Result<Answer, LlmError> {
    if text.trim().is_empty() {
        Err(LlmError::EmptyAnswer)
    } else {
        Ok(Answer::new(text))
    }
}

/// Map a non-2xx status and its body to an error
pub fn from_error_status(status: u16, body: String, retry_after: Option<Duration>) -> LlmError {
    let envelope = serde_json::from_str::<ErrorEnvelope>(&body).ok();
    let message = envelope
        .as_ref()
        .map(|e| e.error.message.clone())
        .unwrap_or(body);

    match status {
        401 | 403 => LlmError::AuthenticationError(message),
        429 => LlmError::RateLimitExceeded {
            message,
            retry_after,
        },
        _ => match envelope.and_then(|e| e.error.code.or(e.error.error_type)) {
            Some(code) => LlmError::ProviderError {
                code: format!("{status} {code}"),
                message,
            },
            None => LlmError::HttpError {
                status,
                body: message,
            },
        },
    }
}
