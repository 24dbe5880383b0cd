use anyhow::Result;
use chrono::Utc;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};

use crate::alerts::Severity;
use crate::client::WeatherClient;
use crate::config::Config;
use crate::formatters::{format_alerts, format_forecast, format_locations};
use crate::models::{GetAlertsRequest, GetForecastRequest, SearchLocationsRequest};

/// The one message a reader sees when the forecast can't be fetched
const FORECAST_UNAVAILABLE: &str =
    "Failed to fetch weather. The forecast is taking a dramatic pause, try again shortly.";

/// Themed weather service that handles MCP requests
#[derive(Clone)]
pub struct Dragcast {
    weather: WeatherClient,
    tool_router: ToolRouter<Self>,
}

impl Dragcast {
    /// Creates a new Dragcast service instance
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            weather: WeatherClient::new(config)?,
            tool_router: Self::tool_router(),
        })
    }
}

#[tool_handler]
impl ServerHandler for Dragcast {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "dragcast".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: Some("The Dragcast".to_string()),
                website_url: None,
            },
            instructions: Some(
                "Weather served with a side of shade. Forecasts come from Open-Meteo, \
                place names from reverse geocoding, and alerts from the National Weather \
                Service (US locations only)."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Dragcast {
    /// Gets the themed forecast for a location
    #[tool(description = "Get the Dragcast for a location: current conditions, the next hours, and the days ahead, with commentary. Provide latitude and longitude (e.g., latitude: 30.2672, longitude: -97.7431 for Austin). Optional unit: \"F\" or \"C\".")]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<GetForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let unit = request.unit.unwrap_or(self.weather.config().unit);

        let (location, bundle) = self
            .weather
            .fetch_forecast(request.latitude, request.longitude)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch forecast: {}", e);
                McpError::internal_error(FORECAST_UNAVAILABLE, None)
            })?;

        let formatted = format_forecast(&location, &bundle, unit, Utc::now());

        Ok(CallToolResult::success(vec![Content::text(formatted)]))
    }

    /// Gets active NOAA alerts for a location
    #[tool(description = "Get weather alerts in force for a US location from the National Weather Service. Provide latitude and longitude. Optional min_severity: \"Extreme\", \"Severe\", \"Moderate\" or \"Minor\".")]
    async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting alerts for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let min_severity = request.min_severity.unwrap_or(Severity::Unknown);
        let alerts = self
            .weather
            .fetch_alerts(request.latitude, request.longitude)
            .await
            .in_force(Utc::now(), min_severity);

        Ok(CallToolResult::success(vec![Content::text(format_alerts(&alerts))]))
    }

    /// Searches for places by name
    #[tool(description = "Search for a city by name and get its coordinates, for use with get_forecast and get_alerts.")]
    async fn search_locations(
        &self,
        Parameters(request): Parameters<SearchLocationsRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Searching locations for: {}", request.query);

        let results = self.weather.search_locations(&request.query).await;

        Ok(CallToolResult::success(vec![Content::text(format_locations(&results))]))
    }
}
