use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use tui_dispatch::DataResource;

use super::Component;
use crate::action::Action;
use crate::icons::wind_arrow;
use crate::present::{self, IconState, Slot, SlotBoard};
use crate::state::AppState;

pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub state: &'a AppState,
}

/// Spinner frames for the loading icon
const SPINNER: [&str; 4] = ["\u{25d0}", "\u{25d3}", "\u{25d1}", "\u{25d2}"];

fn font_stack() -> Vec<artbox::Font> {
    fonts::stack(&["terminus", "miniwi"])
}

/// Build the slot board for the current display state. The board starts at
/// its defaults and the presenter applies exactly one transition.
fn board_for(state: &AppState) -> SlotBoard {
    let mut board = SlotBoard::default();
    match &state.weather {
        DataResource::Loaded(snapshot) => present::apply_snapshot(snapshot, &mut board),
        DataResource::Failed(_) => present::apply_error(&mut board),
        DataResource::Loading => present::apply_loading(&mut board),
        DataResource::Empty => {}
    }
    board
}

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        match &state.weather {
            DataResource::Empty => render_hint(frame, area, state),
            DataResource::Loading => render_loading(frame, area, state),
            DataResource::Loaded(_) | DataResource::Failed(_) => {
                render_board(frame, area, state, &board_for(state));
            }
        }
    }
}

fn make_layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::vertical([
        Constraint::Max(6),    // City name (FIGlet, shrinks to plain)
        Constraint::Length(1), // blank
        Constraint::Length(1), // Icon
        Constraint::Length(1), // blank
        Constraint::Max(4),    // Temperature
        Constraint::Length(1), // blank
        Constraint::Length(1), // Primary metrics row
        Constraint::Length(1), // Secondary metrics row
        Constraint::Length(1), // Indicators row
    ])
    .flex(Flex::Center)
    .split(area)
}

fn render_city(frame: &mut Frame, area: Rect, name: &str, temperature: Option<f32>) {
    let renderer = Renderer::new(font_stack())
        .with_plain_fallback()
        .with_alignment(ArtAlignment::Center)
        .with_fill(temperature_fill(temperature));
    frame.render_widget(ArtBox::new(&renderer, name), area);
}

fn render_hint(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = make_layout(area);
    render_city(frame, chunks[0], &state.city_query, None);

    let hint = Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("/", Style::default().fg(Color::Cyan).bold()),
        Span::styled(" to search for a city", Style::default().fg(Color::DarkGray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(hint), chunks[6]);
}

fn render_loading(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = make_layout(area);
    render_city(frame, chunks[0], &state.city_query, None);

    let spinner = SPINNER[state.tick_count as usize % SPINNER.len()];
    frame.render_widget(
        Paragraph::new(Line::from(spinner).centered()),
        chunks[2],
    );
    let msg = Line::from(vec![Span::styled(
        "Loading...",
        Style::default().fg(Color::DarkGray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(msg), chunks[6]);
}

fn render_board(frame: &mut Frame, area: Rect, state: &AppState, board: &SlotBoard) {
    let chunks = make_layout(area);

    let temperature = state.weather.data().map(|s| s.temperature);
    render_city(frame, chunks[0], board.slot(Slot::City), temperature);

    let icon = match board.icon {
        IconState::Category(category) => category.emoji(),
        IconState::Loading => SPINNER[state.tick_count as usize % SPINNER.len()],
    };
    frame.render_widget(Paragraph::new(Line::from(icon).centered()), chunks[2]);

    let renderer = Renderer::new(font_stack())
        .with_plain_fallback()
        .with_alignment(ArtAlignment::Center)
        .with_fill(temperature_fill(temperature));
    frame.render_widget(
        ArtBox::new(&renderer, board.slot(Slot::Temperature)),
        chunks[4],
    );

    let (primary, secondary) = metrics_lines(board);
    frame.render_widget(Paragraph::new(primary).alignment(Alignment::Center), chunks[6]);
    frame.render_widget(
        Paragraph::new(secondary).alignment(Alignment::Center),
        chunks[7],
    );
    frame.render_widget(
        Paragraph::new(indicators_line(board)).alignment(Alignment::Center),
        chunks[8],
    );
}

fn metric<'a>(label: &'a str, value: &'a str) -> Vec<Span<'a>> {
    vec![
        Span::styled(label, Style::default().fg(Color::DarkGray)),
        Span::raw(" "),
        Span::styled(value, Style::default().fg(Color::Gray)),
    ]
}

fn metrics_lines(board: &SlotBoard) -> (Line<'_>, Line<'_>) {
    let sep = Span::styled("  \u{2502}  ", Style::default().fg(Color::DarkGray));

    let mut primary = Vec::new();
    primary.extend(metric("feels like", board.slot(Slot::FeelsLike)));
    primary.push(sep.clone());
    primary.extend(metric("humidity", board.slot(Slot::Humidity)));
    primary.push(sep.clone());
    primary.extend(metric("wind", board.slot(Slot::WindSpeed)));

    let mut secondary = Vec::new();
    secondary.extend(metric("pressure", board.slot(Slot::Pressure)));
    secondary.push(sep);
    secondary.extend(metric("visibility", board.slot(Slot::Visibility)));

    (Line::from(primary), Line::from(secondary))
}

fn indicators_line(board: &SlotBoard) -> Line<'_> {
    let mut spans = Vec::new();

    if let Some(degrees) = board.wind_angle {
        spans.push(Span::styled(
            format!("{} {}\u{00b0}", wind_arrow(degrees), degrees as i32),
            Style::default().fg(Color::Cyan),
        ));
    }

    if let Some(tier) = board.visibility_tier {
        if !spans.is_empty() {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!("visibility {}", tier.label()),
            Style::default().fg(tier.color()),
        ));
    }

    if let Some(uv) = board.uv_level {
        if !spans.is_empty() {
            spans.push(Span::raw("   "));
        }
        // Placeholder level: the payload carries no UV data
        spans.push(Span::styled(
            uv.class_name().to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(spans)
}

fn temperature_fill(temperature: Option<f32>) -> Fill {
    let (start, end) = match temperature {
        Some(t) if t < 0.0 => (ArtColor::rgb(160, 205, 255), ArtColor::rgb(210, 235, 255)),
        Some(t) if t < 18.0 => (ArtColor::rgb(110, 190, 230), ArtColor::rgb(140, 220, 180)),
        Some(t) if t < 30.0 => (ArtColor::rgb(120, 210, 140), ArtColor::rgb(255, 210, 110)),
        Some(_) => (ArtColor::rgb(255, 150, 90), ArtColor::rgb(255, 90, 70)),
        None => (ArtColor::rgb(180, 180, 180), ArtColor::rgb(220, 220, 220)),
    };
    Fill::Linear(LinearGradient::horizontal(start, end))
}
