//! skycast - city weather lookup TUI
//!
//! Query a city, fetch current conditions from OpenWeatherMap, and render
//! them into a fixed set of display slots with a condition icon.

pub mod action;
pub mod api;
pub mod components;
pub mod effect;
pub mod icons;
pub mod present;
pub mod reducer;
pub mod state;
