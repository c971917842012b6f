//! Render snapshot tests using RenderHarness

use skycast::{
    components::{Component, WeatherDisplay, WeatherDisplayProps},
    state::{AppState, WeatherSnapshot},
};
use tui_dispatch::{DataResource, testing::*};

fn render_state(state: &AppState) -> String {
    let mut render = RenderHarness::new(80, 24);
    let mut component = WeatherDisplay;
    render.render_to_string_plain(|frame| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

#[test]
fn test_render_initial_state_prompts_search() {
    let state = AppState::default();
    let output = render_state(&state);

    assert!(
        output.contains("to search for a city"),
        "Should show search prompt:\n{output}"
    );
}

#[test]
fn test_render_loading_state() {
    let state = AppState {
        weather: DataResource::Loading,
        ..Default::default()
    };
    let output = render_state(&state);

    assert!(output.contains("Loading..."), "Should show loading:\n{output}");
}

#[test]
fn test_render_populated_metrics() {
    let state = AppState {
        weather: DataResource::Loaded(WeatherSnapshot {
            city: "Tanger".into(),
            temperature: 22.4,
            feels_like: 24.6,
            humidity: 64,
            wind_speed: 3.6,
            wind_deg: Some(250.0),
            pressure: 1012,
            visibility: Some(10000),
            condition_code: "01d".into(),
        }),
        ..Default::default()
    };
    let output = render_state(&state);

    assert!(output.contains("64%"), "humidity slot:\n{output}");
    assert!(output.contains("3.6 km/h"), "wind slot:\n{output}");
    assert!(output.contains("1012 hPa"), "pressure slot:\n{output}");
    assert!(output.contains("10 km"), "visibility slot:\n{output}");
    assert!(output.contains("25°C"), "feels-like slot:\n{output}");
    assert!(
        output.contains("visibility good"),
        "visibility tier indicator:\n{output}"
    );
    assert!(output.contains("250°"), "wind direction indicator:\n{output}");
    assert!(output.contains("uv-moderate"), "uv placeholder:\n{output}");
}

#[test]
fn test_render_error_placeholders() {
    let state = AppState {
        weather: DataResource::Failed("City not found".into()),
        ..Default::default()
    };
    let output = render_state(&state);

    assert!(output.contains("--%"), "humidity placeholder:\n{output}");
    assert!(output.contains("--°C"), "feels-like placeholder:\n{output}");
    // Icon forced to the default sunny category
    assert!(output.contains("\u{2600}"), "sunny icon:\n{output}");
    // No indicator rows in the error state
    assert!(!output.contains("visibility good"), "stale tier:\n{output}");
}

#[test]
fn test_render_help_bar() {
    let state = AppState::default();
    let output = render_state(&state);

    assert!(output.contains("search"), "Should show search hint");
    assert!(output.contains("retry"), "Should show retry hint");
    assert!(output.contains("quit"), "Should show quit hint");
}
