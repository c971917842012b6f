//! Actions with automatic category inference

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::api::QueryError;
use crate::state::WeatherSnapshot;

/// Application actions
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Weather category =====
    /// Intent: query the given city (raw input, trimmed by the reducer)
    WeatherQuery(String),

    /// Result: snapshot fetched and decoded
    WeatherDidLoad(WeatherSnapshot),

    /// Result: query failed
    WeatherDidError(QueryError),

    // ===== Search category =====
    /// Open the city search overlay
    SearchOpen,

    /// Close the search overlay without querying
    SearchClose,

    /// Search input text changed
    SearchInputChange(String),

    /// Submit the search input as a query
    SearchSubmit(String),

    // ===== Uncategorized (global) =====
    /// Force a re-render (cursor movement in the input)
    Render,

    /// Spinner frame advance while loading
    Tick,

    /// Exit the application
    Quit,
}
