use anyhow::Result;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;

use crate::config::WeatherConfig;
use crate::constants::DEFAULT_CITY;
use crate::error::WeatherError;
use crate::formatters::format_report;
use crate::models::{
    GetWeatherByCoordinatesRequest, GetWeatherRequest, TemperatureUnit, WeatherQuery,
};
use crate::source::WeatherSource;

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct SkyCast {
    source: Arc<WeatherSource>,
    tool_router: ToolRouter<Self>,
}

impl SkyCast {
    /// Creates a new service from configuration
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        Ok(Self::with_source(WeatherSource::from_config(config)?))
    }

    pub fn with_source(source: WeatherSource) -> Self {
        Self {
            source: Arc::new(source),
            tool_router: Self::tool_router(),
        }
    }

    /// Fetches, aggregates and renders one report
    pub async fn report(
        &self,
        query: WeatherQuery,
        unit: TemperatureUnit,
    ) -> Result<String, McpError> {
        let report = self.source.fetch(&query).await.map_err(to_mcp_error)?;

        let mut output = format_report(&report, unit);
        if self.source.is_mock() {
            output.push_str("(Mock data: set OPENWEATHER_API_KEY for live weather)\n");
        }
        Ok(output)
    }
}

/// Input problems are the caller's; everything else gets the generic retry text
fn to_mcp_error(err: WeatherError) -> McpError {
    match err {
        WeatherError::EmptyQuery | WeatherError::InvalidCoordinates => {
            McpError::invalid_params(err.to_string(), None)
        }
        other => McpError::internal_error(
            format!("{}. Please try again.", other.user_message()),
            None,
        ),
    }
}

#[tool_handler]
impl ServerHandler for SkyCast {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "skycast".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A weather dashboard powered by OpenWeatherMap. Provides current conditions \
                and a 5-day forecast for a city or coordinates, in Celsius or Fahrenheit."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl SkyCast {
    /// Gets current weather and 5-day forecast for a city
    #[tool(description = "Get current weather and a 5-day forecast for a city (e.g., 'London' or 'Paris,FR'). Defaults to London. Optional unit: 'C' or 'F'.")]
    async fn get_weather(
        &self,
        Parameters(request): Parameters<GetWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        let city = request.city.unwrap_or_else(|| DEFAULT_CITY.to_string());
        tracing::info!("Getting weather for city: {}", city);

        let formatted = self.report(WeatherQuery::City(city), request.unit).await?;

        Ok(CallToolResult::success(vec![Content::text(formatted)]))
    }

    /// Gets current weather and 5-day forecast for coordinates
    #[tool(description = "Get current weather and a 5-day forecast for a location given as latitude and longitude (e.g., latitude: 51.5085, longitude: -0.1257 for London). Optional unit: 'C' or 'F'.")]
    async fn get_weather_by_coordinates(
        &self,
        Parameters(request): Parameters<GetWeatherByCoordinatesRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting weather for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let query = WeatherQuery::Coordinates {
            latitude: request.latitude,
            longitude: request.longitude,
        };
        let formatted = self.report(query, request.unit).await?;

        Ok(CallToolResult::success(vec![Content::text(formatted)]))
    }
}
