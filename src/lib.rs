//! SkyCast weather service
//!
//! Fetches current conditions and the 3-hour forecast from OpenWeatherMap (or
//! static mock data when no API key is configured), collapses the forecast into
//! daily summaries and renders both as text for MCP clients.

pub mod aggregator;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod mock;
pub mod models;
pub mod service;
pub mod source;

pub use aggregator::{aggregate, date_key_of, DayKey};
pub use client::OpenWeatherClient;
pub use config::WeatherConfig;
pub use error::WeatherError;
pub use models::{DailySummary, ForecastSample, TemperatureUnit, WeatherQuery, WeatherReport};
pub use service::SkyCast;
pub use source::WeatherSource;
