//! The Dragcast: weather with commentary.
//!
//! The engine (`units`, `codes`, `icons`, `phrases`, `forecast`) is pure and
//! synchronous. `client` fetches from Open-Meteo, BigDataCloud and NOAA,
//! `formatters` renders text, and `service` exposes it all as MCP tools.

pub mod alerts;
pub mod client;
pub mod codes;
pub mod config;
pub mod constants;
pub mod error;
pub mod forecast;
pub mod formatters;
pub mod icons;
pub mod models;
pub mod phrases;
pub mod service;
pub mod units;

pub use client::WeatherClient;
pub use codes::{classify, ConditionCategory, Intensity, WeatherCode};
pub use error::WeatherError;
pub use forecast::{CurrentConditions, DailyForecast, ForecastBundle, HourlyForecast, Location};
pub use icons::{icon_for, IconContext, IconId};
pub use units::{Measurement, MeasurementUnit, TemperatureUnit};
