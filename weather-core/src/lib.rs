//! Core library for the `weather-lookup` tool.
//!
//! This crate defines:
//! - The fixed table of supported cities and input normalisation
//! - Fetching current conditions from Open-Meteo
//! - Weather-code classification and SVG icon generation
//! - The search state machine rendered by front-ends
//!
//! It is used by `weather-lookup-cli`, but any front-end implementing
//! [`ui::Surface`] can drive it.

pub mod city;
pub mod classify;
pub mod error;
pub mod icon;
pub mod model;
pub mod provider;
pub mod ui;

pub use city::{CityEntry, resolve};
pub use classify::{WeatherCategory, classify};
pub use error::LookupError;
pub use icon::{Icon, icon_for};
pub use model::WeatherResult;
pub use provider::{OpenMeteoProvider, WeatherProvider};
pub use ui::{DisplayModel, ResultView, Surface, UiState, WeatherLookup};
