//! Core types for the answer provider layer

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single question for the provider, fully resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRequest {
    /// Model identifier sent upstream
    pub model: String,
    /// System prompt/instructions
    pub instructions: String,
    /// The user's question
    pub input: String,
    /// Provider-side tools the model may use on its own
    pub tools: Vec<ProviderTool>,
}

/// Text produced by the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
}

impl Answer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Capabilities hosted by the provider itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderTool {
    /// Live web search
    WebSearch,
    /// Sandboxed code execution
    CodeInterpreter,
}

impl ProviderTool {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderTool::WebSearch => "web_search",
            ProviderTool::CodeInterpreter => "code_interpreter",
        }
    }

    /// Parse a comma separated list such as `web_search, code_interpreter`.
    /// Blank entries are skipped and duplicates collapse.
    pub fn parse_list(raw: &str) -> Result<Vec<ProviderTool>, UnknownNameError> {
        let mut tools = Vec::new();
        for name in raw.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            let tool: ProviderTool = name.parse()?;
            if !tools.contains(&tool) {
                tools.push(tool);
            }
        }
        Ok(tools)
    }
}

impl fmt::Display for ProviderTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderTool {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "web_search" | "web_search_preview" => Ok(ProviderTool::WebSearch),
            "code_interpreter" | "code_execution" => Ok(ProviderTool::CodeInterpreter),
            other => Err(UnknownNameError::new("tool", other)),
        }
    }
}

/// Which upstream endpoint family to call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiStyle {
    /// `/responses`, supports provider-side tools
    #[default]
    Responses,
    /// `/chat/completions`, plain text only
    ChatCompletions,
}

impl ApiStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiStyle::Responses => "responses",
            ApiStyle::ChatCompletions => "chat_completions",
        }
    }
}

impl FromStr for ApiStyle {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "responses" => Ok(ApiStyle::Responses),
            "chat_completions" | "chat" => Ok(ApiStyle::ChatCompletions),
            other => Err(UnknownNameError::new("API style", other)),
        }
    }
}

/// A configuration name that matched nothing known
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownNameError {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownNameError {
    fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
