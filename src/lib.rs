// HTTP server modules
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

// Answer provider layer
pub mod llm;

pub use config::AppConfig;
pub use handlers::AppState;
pub use routes::configure_routes;
