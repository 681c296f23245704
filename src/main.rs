use std::sync::Arc;

use review_radar::api::{create_router, AppState};
use review_radar::config::Config;
use review_radar::services::providers::PlayMarketProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let provider = Arc::new(PlayMarketProvider::new(
        config.market_api_key.clone(),
        config.market_api_url.clone(),
    ));
    let state = AppState::new(provider);

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
