//! Condition-code classification and secondary indicator tiers
//!
//! The provider identifies sky state with short icon codes ("01d", "10n", ...).
//! Each code maps to exactly one display category; unknown codes fall back to
//! `Cloudy`, so classification is total.

use ratatui::style::Color;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Display category for the condition icon slot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum IconCategory {
    Sunny,
    Moon,
    PartlyCloudyDay,
    PartlyCloudyNight,
    Cloudy,
    Overcast,
    RainHeavy,
    Rain,
    Thunderstorm,
    Snow,
    Fog,
}

/// Icon category applied to the error display state (code "01d")
pub const ERROR_FALLBACK_CODE: &str = "01d";

impl IconCategory {
    /// Classify a provider icon code. Unknown codes map to `Cloudy`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "01d" => IconCategory::Sunny,
            "01n" => IconCategory::Moon,
            "02d" => IconCategory::PartlyCloudyDay,
            "02n" => IconCategory::PartlyCloudyNight,
            "03d" | "03n" => IconCategory::Cloudy,
            "04d" | "04n" => IconCategory::Overcast,
            "09d" | "09n" => IconCategory::RainHeavy,
            "10d" | "10n" => IconCategory::Rain,
            "11d" | "11n" => IconCategory::Thunderstorm,
            "13d" | "13n" => IconCategory::Snow,
            "50d" | "50n" => IconCategory::Fog,
            _ => IconCategory::Cloudy,
        }
    }

    /// Stable class-name token, one per category (the icon slot value)
    pub fn class_name(self) -> &'static str {
        match self {
            IconCategory::Sunny => "weather-sunny",
            IconCategory::Moon => "weather-moon",
            IconCategory::PartlyCloudyDay => "weather-partly-cloudy-day",
            IconCategory::PartlyCloudyNight => "weather-partly-cloudy-night",
            IconCategory::Cloudy => "weather-cloudy",
            IconCategory::Overcast => "weather-overcast",
            IconCategory::RainHeavy => "weather-rain-heavy",
            IconCategory::Rain => "weather-rain",
            IconCategory::Thunderstorm => "weather-thunderstorm",
            IconCategory::Snow => "weather-snow",
            IconCategory::Fog => "weather-fog",
        }
    }

    /// Glyph rendered in the icon slot
    pub fn emoji(self) -> &'static str {
        match self {
            IconCategory::Sunny => "\u{2600}\u{fe0f}",
            IconCategory::Moon => "\u{1f319}",
            IconCategory::PartlyCloudyDay => "\u{26c5}",
            IconCategory::PartlyCloudyNight => "\u{1f325}\u{fe0f}",
            IconCategory::Cloudy => "\u{2601}\u{fe0f}",
            IconCategory::Overcast => "\u{1f32b}\u{fe0f}",
            IconCategory::RainHeavy => "\u{1f327}\u{fe0f}",
            IconCategory::Rain => "\u{1f326}\u{fe0f}",
            IconCategory::Thunderstorm => "\u{26c8}\u{fe0f}",
            IconCategory::Snow => "\u{2744}\u{fe0f}",
            IconCategory::Fog => "\u{1f32b}\u{fe0f}",
        }
    }
}

/// Visibility tier derived from the snapshot's visibility distance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum VisibilityTier {
    Poor,
    Moderate,
    Good,
}

impl VisibilityTier {
    /// Tier boundaries: < 1 km poor, 1–5 km moderate, >= 5 km good
    pub fn from_meters(meters: u32) -> Self {
        let km = meters as f32 / 1000.0;
        if km < 1.0 {
            VisibilityTier::Poor
        } else if km < 5.0 {
            VisibilityTier::Moderate
        } else {
            VisibilityTier::Good
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            VisibilityTier::Poor => "visibility-poor",
            VisibilityTier::Moderate => "visibility-moderate",
            VisibilityTier::Good => "visibility-good",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VisibilityTier::Poor => "poor",
            VisibilityTier::Moderate => "moderate",
            VisibilityTier::Good => "good",
        }
    }

    pub fn color(self) -> Color {
        match self {
            VisibilityTier::Poor => Color::Red,
            VisibilityTier::Moderate => Color::Yellow,
            VisibilityTier::Good => Color::Green,
        }
    }
}

/// UV indicator level. The provider's current-weather payload carries no UV
/// data, so the only value ever applied is the `Moderate` placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum UvLevel {
    Moderate,
}

impl UvLevel {
    pub fn class_name(self) -> &'static str {
        match self {
            UvLevel::Moderate => "uv-moderate",
        }
    }
}

/// Compass arrow for a wind direction in degrees (0 = from the north)
pub fn wind_arrow(degrees: f32) -> &'static str {
    const ARROWS: [&str; 8] = ["↓", "↙", "←", "↖", "↑", "↗", "→", "↘"];
    let normalized = degrees.rem_euclid(360.0);
    let octant = ((normalized + 22.5) / 45.0) as usize % 8;
    ARROWS[octant]
}
