//! Presenter: writes a display state into a named-slot surface
//!
//! The surface is an abstraction over whatever actually shows the values
//! (here a terminal UI, in tests a recording double). The presenter is the
//! only writer: `apply_loading`, `apply_snapshot`, and `apply_error` are the
//! three transitions, and each one leaves the surface fully determined by
//! the state it was given.

use crate::icons::{IconCategory, UvLevel, VisibilityTier, ERROR_FALLBACK_CODE};
use crate::state::WeatherSnapshot;

/// Named display slots, one text value each
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    City,
    Temperature,
    FeelsLike,
    Humidity,
    WindSpeed,
    Pressure,
    Visibility,
}

impl Slot {
    pub const ALL: [Slot; 7] = [
        Slot::City,
        Slot::Temperature,
        Slot::FeelsLike,
        Slot::Humidity,
        Slot::WindSpeed,
        Slot::Pressure,
        Slot::Visibility,
    ];

    /// Placeholder shown in the error display state
    pub fn placeholder(self) -> &'static str {
        match self {
            Slot::City => "City not found",
            Slot::Temperature | Slot::FeelsLike => "--°C",
            Slot::Humidity => "--%",
            Slot::WindSpeed | Slot::Pressure | Slot::Visibility => "--",
        }
    }
}

/// The icon slot holds exactly one of these at a time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconState {
    Loading,
    Category(IconCategory),
}

/// Rendering target: a set of named slots plus icon and indicator state
pub trait DisplaySurface {
    fn set_slot(&mut self, slot: Slot, value: String);
    fn set_icon(&mut self, icon: IconState);
    fn set_wind_angle(&mut self, degrees: f32);
    fn set_visibility_tier(&mut self, tier: VisibilityTier);
    fn set_uv_level(&mut self, level: UvLevel);
}

/// In-memory surface the TUI renders from
#[derive(Clone, Debug, PartialEq)]
pub struct SlotBoard {
    pub city: String,
    pub temperature: String,
    pub feels_like: String,
    pub humidity: String,
    pub wind_speed: String,
    pub pressure: String,
    pub visibility: String,
    pub icon: IconState,
    pub wind_angle: Option<f32>,
    pub visibility_tier: Option<VisibilityTier>,
    pub uv_level: Option<UvLevel>,
}

impl Default for SlotBoard {
    fn default() -> Self {
        Self {
            city: String::new(),
            temperature: String::new(),
            feels_like: String::new(),
            humidity: String::new(),
            wind_speed: String::new(),
            pressure: String::new(),
            visibility: String::new(),
            icon: IconState::Category(IconCategory::from_code(ERROR_FALLBACK_CODE)),
            wind_angle: None,
            visibility_tier: None,
            uv_level: None,
        }
    }
}

impl SlotBoard {
    pub fn slot(&self, slot: Slot) -> &str {
        match slot {
            Slot::City => &self.city,
            Slot::Temperature => &self.temperature,
            Slot::FeelsLike => &self.feels_like,
            Slot::Humidity => &self.humidity,
            Slot::WindSpeed => &self.wind_speed,
            Slot::Pressure => &self.pressure,
            Slot::Visibility => &self.visibility,
        }
    }
}

impl DisplaySurface for SlotBoard {
    fn set_slot(&mut self, slot: Slot, value: String) {
        match slot {
            Slot::City => self.city = value,
            Slot::Temperature => self.temperature = value,
            Slot::FeelsLike => self.feels_like = value,
            Slot::Humidity => self.humidity = value,
            Slot::WindSpeed => self.wind_speed = value,
            Slot::Pressure => self.pressure = value,
            Slot::Visibility => self.visibility = value,
        }
    }

    fn set_icon(&mut self, icon: IconState) {
        self.icon = icon;
    }

    fn set_wind_angle(&mut self, degrees: f32) {
        self.wind_angle = Some(degrees);
    }

    fn set_visibility_tier(&mut self, tier: VisibilityTier) {
        self.visibility_tier = Some(tier);
    }

    fn set_uv_level(&mut self, level: UvLevel) {
        self.uv_level = Some(level);
    }
}

// ============================================================================
// Transitions
// ============================================================================

/// Loading: only the icon changes; text slots keep whatever they show
pub fn apply_loading(surface: &mut impl DisplaySurface) {
    surface.set_icon(IconState::Loading);
}

/// Populated: icon first (one category, replacing loading), then every text
/// slot, then the secondary indicators.
pub fn apply_snapshot(snapshot: &WeatherSnapshot, surface: &mut impl DisplaySurface) {
    surface.set_icon(IconState::Category(IconCategory::from_code(
        &snapshot.condition_code,
    )));

    surface.set_slot(Slot::City, snapshot.city.clone());
    surface.set_slot(
        Slot::Temperature,
        format!("{}°C", snapshot.temperature.round() as i32),
    );
    surface.set_slot(
        Slot::FeelsLike,
        format!("{}°C", snapshot.feels_like.round() as i32),
    );
    surface.set_slot(Slot::Humidity, format!("{}%", snapshot.humidity));
    surface.set_slot(Slot::WindSpeed, format!("{} km/h", snapshot.wind_speed));
    surface.set_slot(Slot::Pressure, format!("{} hPa", snapshot.pressure));
    if let Some(meters) = snapshot.visibility {
        let km = (meters as f32 / 1000.0).round() as u32;
        surface.set_slot(Slot::Visibility, format!("{} km", km));
    } else {
        surface.set_slot(Slot::Visibility, "--".into());
    }

    // Secondary indicators
    surface.set_wind_angle(snapshot.wind_deg.unwrap_or(0.0));
    if let Some(meters) = snapshot.visibility {
        surface.set_visibility_tier(VisibilityTier::from_meters(meters));
    }
    // No UV data source exists in the current-weather payload; fixed stub.
    surface.set_uv_level(UvLevel::Moderate);
}

/// Error: placeholders in every slot and the default sunny icon, whatever
/// the failure was.
pub fn apply_error(surface: &mut impl DisplaySurface) {
    surface.set_icon(IconState::Category(IconCategory::from_code(
        ERROR_FALLBACK_CODE,
    )));
    for slot in Slot::ALL {
        surface.set_slot(slot, slot.placeholder().to_string());
    }
}
