//! skycast - city weather lookup TUI

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use skycast::action::Action;
use skycast::api::{self, ProviderConfig};
use skycast::components::{
    Component, SearchOverlay, SearchOverlayProps, WeatherDisplay, WeatherDisplayProps,
};
use skycast::effect::Effect;
use skycast::reducer::reducer;
use skycast::state::{AppState, LOADING_SPINNER_TICK_MS};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_components::centered_rect;
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

/// City weather lookup
#[derive(Parser, Debug)]
#[command(name = "skycast")]
#[command(about = "Look up current weather for a city")]
struct Args {
    /// City queried at startup
    #[arg(long, short, default_value = "tanger")]
    city: String,

    /// Current-weather endpoint base URL
    #[arg(long, default_value = "https://api.openweathermap.org/data/2.5/weather")]
    endpoint: String,

    /// Provider API key
    #[arg(long, env = "OPENWEATHER_API_KEY")]
    api_key: String,

    /// Unit system for the provider query
    #[arg(long, default_value = "metric")]
    units: String,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum SkycastComponentId {
    Display,
    Search,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum SkycastContext {
    Main,
    Search,
}

impl EventRoutingState<SkycastComponentId, SkycastContext> for AppState {
    fn focused(&self) -> Option<SkycastComponentId> {
        if self.search_mode {
            Some(SkycastComponentId::Search)
        } else {
            Some(SkycastComponentId::Display)
        }
    }

    fn modal(&self) -> Option<SkycastComponentId> {
        if self.search_mode {
            Some(SkycastComponentId::Search)
        } else {
            None
        }
    }

    fn binding_context(&self, id: SkycastComponentId) -> SkycastContext {
        match id {
            SkycastComponentId::Display => SkycastContext::Main,
            SkycastComponentId::Search => SkycastContext::Search,
        }
    }

    fn default_context(&self) -> SkycastContext {
        SkycastContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        city,
        endpoint,
        api_key,
        units,
        debug: debug_args,
    } = Args::parse();

    let config = Arc::new(ProviderConfig {
        endpoint,
        api_key,
        units,
    });

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let initial_city = city.clone();
    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::new(initial_city))
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, config, city, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct SkycastUi {
    display: WeatherDisplay,
    search: SearchOverlay,
}

impl SkycastUi {
    fn new() -> Self {
        Self {
            display: WeatherDisplay,
            search: SearchOverlay::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<SkycastComponentId>,
    ) {
        event_ctx.set_component_area(SkycastComponentId::Display, area);

        let props = WeatherDisplayProps {
            state,
            is_focused: render_ctx.is_focused() && !state.search_mode,
        };
        self.display.render(frame, area, props);

        self.search.set_open(state.search_mode);
        if state.search_mode {
            let modal_area = centered_rect(50, 5, area);
            event_ctx.set_component_area(SkycastComponentId::Search, modal_area);
            let props = SearchOverlayProps {
                query: &state.search_input,
                is_focused: render_ctx.is_focused(),
                on_change: Action::SearchInputChange,
                on_submit: Action::SearchSubmit,
            };
            self.search.render(frame, area, props);
        } else {
            event_ctx
                .component_areas
                .remove(&SkycastComponentId::Search);
        }
    }

    fn handle_display_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .display
            .handle_event(event, props)
            .into_iter()
            .collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }

    fn handle_search_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        self.search.set_open(state.search_mode);
        let props = SearchOverlayProps {
            query: &state.search_input,
            is_focused: true,
            on_change: Action::SearchInputChange,
            on_submit: Action::SearchSubmit,
        };
        let actions: Vec<_> = self.search.handle_event(event, props).into_iter().collect();
        HandlerResponse {
            actions,
            consumed: true,
            needs_render: false,
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    config: Arc<ProviderConfig>,
    startup_city: String,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(SkycastUi::new()));
    let mut bus: EventBus<AppState, Action, SkycastComponentId, SkycastContext> = EventBus::new();
    let keybindings: Keybindings<SkycastContext> = Keybindings::new();

    let ui_display = Rc::clone(&ui);
    bus.register(SkycastComponentId::Display, move |event, state| {
        ui_display
            .borrow_mut()
            .handle_display_event(&event.kind, state)
    });

    let ui_search = Rc::clone(&ui);
    bus.register(SkycastComponentId::Search, move |event, state| {
        ui_search
            .borrow_mut()
            .handle_search_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::WeatherQuery(startup_city)),
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(LOADING_SPINNER_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect: Effect, ctx: &mut EffectContext<Action>| match effect {
                Effect::FetchWeather { city } => {
                    let config = Arc::clone(&config);
                    // One keyed task: a newer query supersedes an unresolved
                    // one, so the latest response always wins.
                    ctx.tasks().spawn("weather", async move {
                        match api::fetch_current(&config, &city).await {
                            Ok(snapshot) => Action::WeatherDidLoad(snapshot),
                            Err(e) => Action::WeatherDidError(e),
                        }
                    });
                }
            },
        )
        .await
}
