//! Agent tool entry point: serves `get_weather` over MCP on stdio.

use anyhow::Result;
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use travel_advisor::{Config, WeatherAgent, WeatherClient};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // stdout carries the MCP transport
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "travel_advisor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting weather agent tool server");

    let agent = WeatherAgent::new(WeatherClient::new(&config)?);
    let server = agent.serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
