use std::sync::Arc;

use birthday_recommender::{
    api::{create_router, AppState},
    config::Config,
    services::providers::GeminiClient,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("birthday_recommender=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loads .env before RUST_LOG is read
    let config = Config::from_env()?;
    init_tracing();

    let client = GeminiClient::from_config(&config);
    if client.has_credentials() {
        tracing::info!(model = %client.model(), "Gemini API key found");
    } else {
        tracing::warn!("No Gemini API key found - using fallback responses");
    }

    // Initialize application state
    let state = AppState::new(Arc::new(client), config.model_timeout(), &config.service_name);

    // Create the router with all routes
    let app = create_router(state);

    // Start the server
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %config.bind_address(), "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
