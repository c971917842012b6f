//! Presenter contract tests against a recording surface double
//!
//! The presenter is exercised through the DisplaySurface trait, so these
//! tests see exactly what a real rendering target would see: the order and
//! content of every write.

use skycast::icons::{IconCategory, UvLevel, VisibilityTier};
use skycast::present::{
    apply_error, apply_loading, apply_snapshot, DisplaySurface, IconState, Slot, SlotBoard,
};
use skycast::state::WeatherSnapshot;

/// Every call made against the surface, in order
#[derive(Clone, Debug, PartialEq)]
enum SurfaceCall {
    Slot(Slot, String),
    Icon(IconState),
    WindAngle(f32),
    VisibilityTier(VisibilityTier),
    Uv(UvLevel),
}

#[derive(Default)]
struct RecordingSurface {
    calls: Vec<SurfaceCall>,
}

impl DisplaySurface for RecordingSurface {
    fn set_slot(&mut self, slot: Slot, value: String) {
        self.calls.push(SurfaceCall::Slot(slot, value));
    }
    fn set_icon(&mut self, icon: IconState) {
        self.calls.push(SurfaceCall::Icon(icon));
    }
    fn set_wind_angle(&mut self, degrees: f32) {
        self.calls.push(SurfaceCall::WindAngle(degrees));
    }
    fn set_visibility_tier(&mut self, tier: VisibilityTier) {
        self.calls.push(SurfaceCall::VisibilityTier(tier));
    }
    fn set_uv_level(&mut self, level: UvLevel) {
        self.calls.push(SurfaceCall::Uv(level));
    }
}

fn fixture() -> WeatherSnapshot {
    WeatherSnapshot {
        city: "Tanger".into(),
        temperature: 22.4,
        feels_like: 24.6,
        humidity: 64,
        wind_speed: 3.6,
        wind_deg: Some(250.0),
        pressure: 1012,
        visibility: Some(10000),
        condition_code: "01d".into(),
    }
}

#[test]
fn test_loading_touches_only_the_icon() {
    let mut surface = RecordingSurface::default();
    apply_loading(&mut surface);

    assert_eq!(surface.calls, vec![SurfaceCall::Icon(IconState::Loading)]);
}

#[test]
fn test_snapshot_applies_icon_before_any_slot() {
    let mut surface = RecordingSurface::default();
    apply_snapshot(&fixture(), &mut surface);

    assert_eq!(
        surface.calls.first(),
        Some(&SurfaceCall::Icon(IconState::Category(IconCategory::Sunny)))
    );
}

#[test]
fn test_snapshot_writes_every_slot_formatted() {
    let mut board = SlotBoard::default();
    apply_snapshot(&fixture(), &mut board);

    assert_eq!(board.slot(Slot::City), "Tanger");
    assert_eq!(board.slot(Slot::Temperature), "22°C");
    assert_eq!(board.slot(Slot::FeelsLike), "25°C");
    assert_eq!(board.slot(Slot::Humidity), "64%");
    assert_eq!(board.slot(Slot::WindSpeed), "3.6 km/h");
    assert_eq!(board.slot(Slot::Pressure), "1012 hPa");
    assert_eq!(board.slot(Slot::Visibility), "10 km");
    assert_eq!(board.icon, IconState::Category(IconCategory::Sunny));
    assert_eq!(board.wind_angle, Some(250.0));
    assert_eq!(board.visibility_tier, Some(VisibilityTier::Good));
    assert_eq!(board.uv_level, Some(UvLevel::Moderate));
}

#[test]
fn test_snapshot_is_idempotent() {
    let mut once = SlotBoard::default();
    apply_snapshot(&fixture(), &mut once);

    let mut twice = SlotBoard::default();
    apply_snapshot(&fixture(), &mut twice);
    apply_snapshot(&fixture(), &mut twice);

    assert_eq!(once, twice);
}

#[test]
fn test_missing_wind_direction_defaults_to_zero() {
    let snapshot = WeatherSnapshot {
        wind_deg: None,
        ..fixture()
    };
    let mut board = SlotBoard::default();
    apply_snapshot(&snapshot, &mut board);

    assert_eq!(board.wind_angle, Some(0.0));
}

#[test]
fn test_missing_visibility_skips_tier() {
    let snapshot = WeatherSnapshot {
        visibility: None,
        ..fixture()
    };
    let mut surface = RecordingSurface::default();
    apply_snapshot(&snapshot, &mut surface);

    assert!(
        !surface
            .calls
            .iter()
            .any(|c| matches!(c, SurfaceCall::VisibilityTier(_)))
    );
    assert!(
        surface
            .calls
            .contains(&SurfaceCall::Slot(Slot::Visibility, "--".into()))
    );
}

#[test]
fn test_unknown_condition_code_renders_cloudy() {
    let snapshot = WeatherSnapshot {
        condition_code: "77z".into(),
        ..fixture()
    };
    let mut board = SlotBoard::default();
    apply_snapshot(&snapshot, &mut board);

    assert_eq!(board.icon, IconState::Category(IconCategory::Cloudy));
}

#[test]
fn test_error_writes_placeholders_and_sunny_icon() {
    let mut board = SlotBoard::default();
    apply_error(&mut board);

    assert_eq!(board.slot(Slot::City), "City not found");
    assert_eq!(board.slot(Slot::Temperature), "--°C");
    assert_eq!(board.slot(Slot::FeelsLike), "--°C");
    assert_eq!(board.slot(Slot::Humidity), "--%");
    assert_eq!(board.slot(Slot::WindSpeed), "--");
    assert_eq!(board.slot(Slot::Pressure), "--");
    assert_eq!(board.slot(Slot::Visibility), "--");
    assert_eq!(board.icon, IconState::Category(IconCategory::Sunny));
}

#[test]
fn test_populated_fully_overwrites_prior_error() {
    let mut board = SlotBoard::default();
    apply_error(&mut board);
    apply_snapshot(&fixture(), &mut board);

    // No placeholder may survive the transition
    for slot in Slot::ALL {
        assert_ne!(board.slot(slot), slot.placeholder(), "stale {slot:?}");
    }
    assert_eq!(board.slot(Slot::City), "Tanger");
    assert_eq!(board.icon, IconState::Category(IconCategory::Sunny));
}

#[test]
fn test_error_overwrites_prior_populated() {
    let mut board = SlotBoard::default();
    apply_snapshot(&fixture(), &mut board);
    apply_error(&mut board);

    for slot in Slot::ALL {
        assert_eq!(board.slot(slot), slot.placeholder());
    }
}

#[test]
fn test_visibility_tier_scenarios() {
    for (meters, tier) in [
        (500, VisibilityTier::Poor),
        (3000, VisibilityTier::Moderate),
        (8000, VisibilityTier::Good),
    ] {
        let snapshot = WeatherSnapshot {
            visibility: Some(meters),
            ..fixture()
        };
        let mut board = SlotBoard::default();
        apply_snapshot(&snapshot, &mut board);
        assert_eq!(board.visibility_tier, Some(tier), "{meters} m");
    }
}
