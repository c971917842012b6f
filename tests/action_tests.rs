//! Action and state tests using TestHarness

use skycast::{
    action::Action,
    api::QueryError,
    components::{Component, WeatherDisplay, WeatherDisplayProps},
    effect::Effect,
    reducer::reducer,
    state::{AppState, WeatherSnapshot},
};
use tui_dispatch::testing::*;
use tui_dispatch::{EffectStore, NumericComponentId, assert_emitted, assert_not_emitted};

#[test]
fn test_reducer_query_flow() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    assert!(store.state().weather.is_empty());

    let result = store.dispatch(Action::WeatherQuery("tanger".into()));
    assert!(result.changed, "State should change");
    assert!(store.state().weather.is_loading());
    assert_eq!(result.effects.len(), 1);
    assert!(matches!(result.effects[0], Effect::FetchWeather { .. }));
}

#[test]
fn test_reducer_blank_query_no_transition_no_request() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    let result = store.dispatch(Action::WeatherQuery("   ".into()));

    assert!(!result.changed);
    assert!(result.effects.is_empty());
    assert!(store.state().weather.is_empty());
}

#[test]
fn test_reducer_load_after_error_replaces_state() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    store.dispatch(Action::WeatherQuery("nowhere".into()));
    store.dispatch(Action::WeatherDidError(QueryError::NotFound));
    assert!(store.state().weather.is_failed());

    store.dispatch(Action::WeatherQuery("tanger".into()));
    store.dispatch(Action::WeatherDidLoad(WeatherSnapshot {
        city: "Tanger".into(),
        ..Default::default()
    }));

    assert!(store.state().weather.is_loaded());
    assert_eq!(store.state().weather.data().unwrap().city, "Tanger");
    assert!(store.state().last_error.is_none());
}

#[test]
fn test_component_keyboard_events() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = WeatherDisplay;

    let actions = harness.send_keys::<NumericComponentId, _, _>("/", |state, event| {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_count(1);
    actions.assert_first(Action::SearchOpen);
}

#[test]
fn test_component_ignores_when_unfocused() {
    let mut harness = TestHarness::<AppState, Action>::default();
    let mut component = WeatherDisplay;

    let actions = harness.send_keys::<NumericComponentId, _, _>("/ r q", |state, event| {
        let props = WeatherDisplayProps {
            state,
            is_focused: false,
        };
        component
            .handle_event(&event.kind, props)
            .into_iter()
            .collect::<Vec<_>>()
    });

    actions.assert_empty();
}

#[test]
fn test_action_categories() {
    let did_load = Action::WeatherDidLoad(WeatherSnapshot::default());
    let open = Action::SearchOpen;
    let tick = Action::Tick;

    assert_eq!(did_load.category(), Some("weather_did"));
    assert_eq!(open.category(), Some("search"));
    assert_eq!(tick.category(), None);

    assert!(did_load.is_weather_did());
    assert!(open.is_search());
}

#[test]
fn test_assert_emitted_macro() {
    let actions = vec![
        Action::WeatherQuery("tanger".into()),
        Action::WeatherDidError(QueryError::Transport("HTTP status 500".into())),
    ];

    assert_emitted!(actions, Action::WeatherQuery(_));
    assert_emitted!(actions, Action::WeatherDidError(_));
    assert_not_emitted!(actions, Action::Quit);
    assert_not_emitted!(actions, Action::WeatherDidLoad(_));
}
