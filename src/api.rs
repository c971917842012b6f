//! OpenWeatherMap current-weather API client
//!
//! The provider endpoint, API key, and units are injected configuration,
//! never embedded. One GET per query; no retries.

use reqwest::StatusCode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherSnapshot;

/// Provider configuration, supplied from the CLI/environment
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    /// Base URL of the current-weather endpoint
    pub endpoint: String,
    /// API key sent as the `appid` query parameter
    pub api_key: String,
    /// Unit system sent as the `units` query parameter
    pub units: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openweathermap.org/data/2.5/weather".into(),
            api_key: String::new(),
            units: "metric".into(),
        }
    }
}

/// Query failure taxonomy. Every kind collapses to the same error display
/// path, but the distinction is kept so callers can tell them apart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub enum QueryError {
    /// Provider reported the queried city does not exist (`cod == "404"`)
    NotFound,
    /// Non-success HTTP status or network-level failure
    Transport(String),
    /// Payload did not match the expected schema
    Malformed(String),
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::NotFound => write!(f, "City not found"),
            QueryError::Transport(msg) => write!(f, "Request failed: {}", msg),
            QueryError::Malformed(msg) => write!(f, "Unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for QueryError {}

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Deserialize)]
struct WeatherPayload {
    name: String,
    main: MainReadings,
    wind: WindReadings,
    visibility: Option<u32>,
    weather: Vec<ConditionEntry>,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f32,
    feels_like: f32,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct WindReadings {
    speed: f32,
    deg: Option<f32>,
}

#[derive(Debug, Deserialize)]
struct ConditionEntry {
    icon: String,
}

fn snapshot_from_payload(payload: WeatherPayload) -> Result<WeatherSnapshot, QueryError> {
    let condition = payload
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| QueryError::Malformed("empty weather array".into()))?;

    Ok(WeatherSnapshot {
        city: payload.name,
        temperature: payload.main.temp,
        feels_like: payload.main.feels_like,
        humidity: payload.main.humidity,
        wind_speed: payload.wind.speed,
        wind_deg: payload.wind.deg,
        pressure: payload.main.pressure,
        visibility: payload.visibility,
        condition_code: condition.icon,
    })
}

// ============================================================================
// Client
// ============================================================================

/// Build the request URL for a city query. The city is URL-encoded so names
/// with spaces or special characters survive the query string.
pub fn build_url(config: &ProviderConfig, city: &str) -> String {
    format!(
        "{}?units={}&q={}&appid={}",
        config.endpoint,
        config.units,
        urlencoding::encode(city),
        config.api_key
    )
}

/// Decode one provider response. The string `cod == "404"` marker is checked
/// before the HTTP status and before any nested field, so an unknown city is
/// reported as NotFound rather than a generic transport failure.
pub fn parse_response(status: StatusCode, body: &str) -> Result<WeatherSnapshot, QueryError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| QueryError::Malformed(e.to_string()))?;

    if value.get("cod").and_then(|c| c.as_str()) == Some("404") {
        return Err(QueryError::NotFound);
    }

    if !status.is_success() {
        return Err(QueryError::Transport(format!("HTTP status {}", status)));
    }

    let payload: WeatherPayload =
        serde_json::from_value(value).map_err(|e| QueryError::Malformed(e.to_string()))?;

    snapshot_from_payload(payload)
}

/// Fetch current weather for a city
pub async fn fetch_current(
    config: &ProviderConfig,
    city: &str,
) -> Result<WeatherSnapshot, QueryError> {
    let url = build_url(config, city);

    let response = reqwest::get(&url)
        .await
        .map_err(|e| QueryError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| QueryError::Transport(e.to_string()))?;

    parse_response(status, &body)
}
