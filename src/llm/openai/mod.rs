//! OpenAI provider implementation
//!
//! Talks to either the `/responses` endpoint (with hosted tools such as web
//! search and the code interpreter) or the plain `/chat/completions` endpoint.

pub mod client;
pub mod mapper;
pub mod types;

pub use client::OpenAiClient;
