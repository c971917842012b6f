//! Reducer - pure function: (state, action) -> DispatchResult
//!
//! Query lifecycle: Empty/Loaded/Failed → Loading → Loaded | Failed. One
//! transition per resolved query; blank input causes no transition at all.

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Weather actions =====
        Action::WeatherQuery(raw) => {
            let city = raw.trim();
            // Blank or whitespace-only input: no transition, no request
            if city.is_empty() {
                return DispatchResult::unchanged();
            }
            state.city_query = city.to_string();
            state.weather = DataResource::Loading;
            state.last_error = None;
            state.tick_count = 0;
            DispatchResult::changed_with(Effect::FetchWeather {
                city: state.city_query.clone(),
            })
        }

        Action::WeatherDidLoad(snapshot) => {
            state.weather = DataResource::Loaded(snapshot);
            state.last_error = None;
            DispatchResult::changed()
        }

        Action::WeatherDidError(error) => {
            // Display path collapses every failure to one message; the kind
            // stays available in last_error.
            state.weather = DataResource::Failed(error.to_string());
            state.last_error = Some(error);
            DispatchResult::changed()
        }

        // ===== Search actions =====
        Action::SearchOpen => {
            state.search_mode = true;
            state.search_input.clear();
            DispatchResult::changed()
        }

        Action::SearchClose => {
            state.search_mode = false;
            state.search_input.clear();
            DispatchResult::changed()
        }

        Action::SearchInputChange(text) => {
            state.search_input = text;
            DispatchResult::changed()
        }

        Action::SearchSubmit(raw) => {
            let city = raw.trim().to_string();
            if city.is_empty() {
                // Keep the overlay open; nothing to query
                return DispatchResult::unchanged();
            }
            state.search_mode = false;
            state.search_input.clear();
            state.city_query = city.clone();
            state.weather = DataResource::Loading;
            state.last_error = None;
            state.tick_count = 0;
            DispatchResult::changed_with(Effect::FetchWeather { city })
        }

        // ===== Global actions =====
        Action::Render => DispatchResult::changed(),

        Action::Tick => {
            if state.is_loading() {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}
