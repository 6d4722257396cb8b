use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use travel_advisor::{api, AdviceSynthesizer, Config, WeatherClient};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "travel_advisor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.gemini_api_key.is_none() {
        tracing::warn!("AI_INTEGRATIONS_GEMINI_API_KEY is not set; travel advice requests will fail");
    }

    let weather = WeatherClient::new(&config)?;
    let advisor = AdviceSynthesizer::new(&config)?;
    let app = api::router(weather, advisor);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    tracing::info!("Travel advisor listening on {}", config.bind_addr);
    axum::serve(listener, app).await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
