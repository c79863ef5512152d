#![allow(dead_code)]

use ask_service::llm::{Answer, AnswerProvider, AnswerRequest, LlmError};
use ask_service::{configure_routes, AppConfig, AppState};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Canned outcome for the fake provider
pub enum Outcome {
    Answer(&'static str),
    Fail(fn() -> LlmError),
}

/// Provider that never touches the network and records every call
pub struct FakeProvider {
    outcome: Outcome,
    calls: Mutex<Vec<(String, AnswerRequest)>>,
}

impl FakeProvider {
    pub fn answering(text: &'static str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Outcome::Answer(text),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(make_error: fn() -> LlmError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Outcome::Fail(make_error),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<(String, AnswerRequest)> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl AnswerProvider for FakeProvider {
    async fn answer(&self, credential: &str, request: AnswerRequest) -> Result<Answer, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((credential.to_string(), request));
        match &self.outcome {
            Outcome::Answer(text) => Ok(Answer::new(*text)),
            Outcome::Fail(make_error) => Err(make_error()),
        }
    }
}

/// Default configuration with a credential set
pub fn config_with_key() -> AppConfig {
    AppConfig {
        api_key: Some("sk-test".to_string()),
        ..AppConfig::default()
    }
}

pub fn routes(
    config: AppConfig,
    provider: Arc<FakeProvider>,
) -> impl warp::Filter<Extract = impl warp::Reply, Error = std::convert::Infallible> + Clone {
    configure_routes(AppState::new(config, provider))
}

pub fn json_body(body: &[u8]) -> serde_json::Value {
    serde_json::from_slice(body).expect("response body is JSON")
}
