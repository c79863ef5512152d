use ask_service::llm::create_provider;
use ask_service::{configure_routes, AppConfig, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env().inspect_err(|err| {
        tracing::error!(error = %err, "invalid configuration");
    })?;
    if config.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; /ask will answer 500");
    }

    let provider = create_provider(config.client.clone())?;
    let addr = config.socket_addr();
    tracing::info!(
        %addr,
        model = config.resolve_model(),
        api_style = config.client.api_style.as_str(),
        tools = ?config.tools,
        "starting server"
    );

    let routes = configure_routes(AppState::new(config, provider));
    warp::serve(routes).run(addr).await;
    Ok(())
}
