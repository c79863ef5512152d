//! OpenAI-specific request and response types
//!
//! These types map directly to the `/responses` and `/chat/completions`
//! JSON schemas. Unknown fields are ignored when deserializing.

use serde::{Deserialize, Serialize};

/// Request body for `POST /responses`
#[derive(Debug, Clone, Serialize)]
pub struct ResponsesRequest {
    pub model: String,
    /// System prompt (top-level field)
    pub instructions: String,
    /// The user's question as a plain string
    pub input: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ResponsesTool>,
}

/// Provider-hosted tool definition
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponsesTool {
    WebSearchPreview,
    CodeInterpreter { container: ToolContainer },
}

/// Sandbox container for the code interpreter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolContainer {
    #[serde(rename = "type")]
    pub container_type: String,
}

impl ToolContainer {
    pub fn auto() -> Self {
        Self {
            container_type: "auto".to_string(),
        }
    }
}

/// Response body from `POST /responses`
#[derive(Debug, Clone, Deserialize)]
pub struct ResponsesResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    /// Convenience aggregate, only present on some API versions
    #[serde(default)]
    pub output_text: Option<String>,
    #[serde(default)]
    pub output: Vec<OutputItem>,
}

/// One item of the `output` array
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputItem {
    /// Assistant message with content parts
    Message {
        #[serde(default)]
        content: Vec<OutputContent>,
    },
    /// Tool calls, reasoning and anything else we do not read
    #[serde(other)]
    Other,
}

/// Content part within an output message
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OutputContent {
    OutputText {
        text: String,
    },
    Refusal {
        refusal: String,
    },
    #[serde(other)]
    Other,
}

/// Request body for `POST /chat/completions`
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// "system", "user" or "assistant"
    pub role: String,
    /// Null when the assistant only called tools
    #[serde(default)]
    pub content: Option<String>,
}

/// Response body from `POST /chat/completions`
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Error envelope returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default, rename = "type")]
    pub error_type: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}
