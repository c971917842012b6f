//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::api::QueryError;

/// One query's parsed weather values. Produced fresh per query and consumed
/// by the presenter; never cached across queries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherSnapshot {
    /// Provider-normalized city name
    pub city: String,
    /// Temperature in °C
    pub temperature: f32,
    /// Perceived temperature in °C
    pub feels_like: f32,
    /// Relative humidity in percent
    pub humidity: u8,
    /// Wind speed (metric units from the provider)
    pub wind_speed: f32,
    /// Wind direction in degrees, when the provider reports one
    pub wind_deg: Option<f32>,
    /// Atmospheric pressure in hPa
    pub pressure: u32,
    /// Visibility distance in meters, when the provider reports one
    pub visibility: Option<u32>,
    /// Provider condition icon code (e.g. "01d", "10n")
    pub condition_code: String,
}

/// Spinner timing for the loading icon
pub const LOADING_SPINNER_TICK_MS: u64 = 120;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// City name of the most recently submitted query (trimmed)
    #[debug(section = "Query", label = "City")]
    pub city_query: String,

    /// Display state lifecycle: Empty → Loading → Loaded/Failed
    #[debug(section = "Weather", label = "Data", debug_fmt)]
    pub weather: DataResource<WeatherSnapshot>,

    /// Kind of the last failure. The display path collapses all failures to
    /// one message; the kind is kept here so it is not lost.
    #[debug(section = "Weather", label = "Last error", debug_fmt)]
    pub last_error: Option<QueryError>,

    /// Spinner frame counter while loading
    #[debug(skip)]
    pub tick_count: u32,

    /// Whether the city search overlay is open
    #[debug(skip)]
    pub search_mode: bool,

    /// Text in the search input
    #[debug(skip)]
    pub search_input: String,
}

impl AppState {
    /// Create state ready to query the given city
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city_query: city.into(),
            weather: DataResource::Empty,
            last_error: None,
            tick_count: 0,
            search_mode: false,
            search_input: String::new(),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.weather.is_loading()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new("tanger")
    }
}
