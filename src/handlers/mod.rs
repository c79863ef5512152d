// Handlers module

pub mod ask;
pub mod health;
pub mod hello;

pub use ask::ask_handler;
pub use health::health_handler;
pub use hello::hello_handler;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::llm::AnswerProvider;

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub provider: Arc<dyn AnswerProvider>,
}

impl AppState {
    pub fn new(config: AppConfig, provider: Arc<dyn AnswerProvider>) -> Self {
        Self {
            config: Arc::new(config),
            provider,
        }
    }
}
