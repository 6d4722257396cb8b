use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};

use crate::formatters::{format_lookup_failure, format_weather_report};
use crate::models::GetWeatherRequest;
use crate::weather::WeatherClient;

const AGENT_INSTRUCTIONS: &str = "You are a weather information agent. \
    When asked about the weather, you must use the get_weather tool to get the latest forecast. \
    Provide the forecast briefly and accurately.";

/// Answers a weather question for an agent. Always returns a sentence, never an error.
///
/// `date` is accepted to match the agent's calling convention but the forecast
/// is always today's.
pub async fn weather_report(weather: &WeatherClient, city: &str, date: &str) -> String {
    tracing::info!("Agent asked for weather in {} (date: {})", city, date);

    match weather.lookup(city).await {
        Ok(summary) => format_weather_report(&summary),
        Err(e) => {
            tracing::warn!("{}", e);
            format_lookup_failure(city)
        }
    }
}

/// MCP server exposing the weather lookup as an agent tool
#[derive(Clone)]
pub struct WeatherAgent {
    weather: WeatherClient,
    tool_router: ToolRouter<Self>,
}

impl WeatherAgent {
    pub fn new(weather: WeatherClient) -> Self {
        Self {
            weather,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_handler]
impl ServerHandler for WeatherAgent {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "weather_agent".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(AGENT_INSTRUCTIONS.to_string()),
        }
    }
}

#[tool_router]
impl WeatherAgent {
    /// Gets today's forecast for a city
    #[tool(description = "Returns a weather forecast for the given city and date using Open-Meteo. Provide the city name (e.g., 'Paris') and the date or day for the forecast (e.g., 'Sunday'). Returns a weather description including temperatures and rain chance.")]
    async fn get_weather(
        &self,
        Parameters(request): Parameters<GetWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        let report = weather_report(&self.weather, &request.city, &request.date).await;

        Ok(CallToolResult::success(vec![Content::text(report)]))
    }
}
