//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Unit conversion and time formatting for display
//! - The display selection (filters, readings, units) and its transitions
//! - The OpenWeather client and the search state built on it
//! - Text rendering of a reading as a `Parameter | Value` table
//! - Configuration & credentials handling
//!
//! It is used by `weather-cli`, but can also be reused by other frontends.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod query;
pub mod report;
pub mod selection;
pub mod time;
pub mod units;

#[cfg(test)]
mod fixtures;

pub use config::Config;
pub use error::{ParseError, QueryError};
pub use model::{CityName, WeatherReading};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider, provider_from_config};
pub use query::{View, WeatherQuery};
pub use report::Report;
pub use selection::{DisplaySelection, Field, TemperatureVariant, Unit, Variant, WindVariant};
pub use units::{TemperatureUnit, WindUnit, to_fahrenheit, to_mph};
