//! Answer provider layer
//!
//! This module provides a single interface for asking a hosted LLM one
//! question, plus the OpenAI implementation behind it.

pub mod core;
pub mod openai;

// Re-export commonly used types
pub use core::{
    config::ClientConfig,
    error::LlmError,
    provider::{create_provider, AnswerProvider},
    types::{Answer, AnswerRequest, ApiStyle, ProviderTool, UnknownNameError},
};
pub use openai::OpenAiClient;
