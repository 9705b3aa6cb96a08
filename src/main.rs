use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, warn};

use kotoba::config::Config;
use kotoba::server::{router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("kotoba=info".parse()?),
        )
        .init();

    // Load configuration from environment
    let config = Config::from_env()?;
    if config.provider_api_key.is_none() {
        warn!("TRANSLATE_API_KEY is not set; translation requests will fail with AUTH_ERROR");
    }

    let addr = format!("{}:{}", config.host, config.port);
    let client = reqwest::Client::new();
    let app = router(Arc::new(AppState { config, client }));

    info!("Translation proxy listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind to {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
