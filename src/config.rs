//! Runtime configuration: compiled-in defaults with environment overrides.

use std::time::Duration;

use crate::constants::{
    DEFAULT_FORECAST_DAYS, DEFAULT_FORECAST_HOURS, GEOCODING_API_BASE, NWS_API_BASE,
    OPEN_METEO_API_BASE, REQUEST_TIMEOUT_SECS, REVERSE_GEOCODE_API_BASE, USER_AGENT,
};
use crate::error::WeatherError;
use crate::units::TemperatureUnit;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub open_meteo_url: String,
    pub geocoding_url: String,
    pub reverse_geocode_url: String,
    pub nws_url: String,
    pub user_agent: String,
    pub forecast_hours: u32,
    pub forecast_days: u32,
    pub unit: TemperatureUnit,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            open_meteo_url: OPEN_METEO_API_BASE.to_string(),
            geocoding_url: GEOCODING_API_BASE.to_string(),
            reverse_geocode_url: REVERSE_GEOCODE_API_BASE.to_string(),
            nws_url: NWS_API_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
            forecast_hours: DEFAULT_FORECAST_HOURS,
            forecast_days: DEFAULT_FORECAST_DAYS,
            unit: TemperatureUnit::default(),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Points every API at one base URL, used by tests against a mock server
    pub fn with_base_url(base: &str) -> Self {
        let base = normalize_base_url(base);
        Self {
            open_meteo_url: base.clone(),
            geocoding_url: base.clone(),
            reverse_geocode_url: base.clone(),
            nws_url: base,
            ..Self::default()
        }
    }

    pub fn from_env() -> Result<Self, WeatherError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Applies overrides from any key/value source on top of the defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, WeatherError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let urls = [
            ("DRAGCAST_OPEN_METEO_URL", &mut config.open_meteo_url),
            ("DRAGCAST_GEOCODING_URL", &mut config.geocoding_url),
            ("DRAGCAST_REVERSE_GEOCODE_URL", &mut config.reverse_geocode_url),
            ("DRAGCAST_NWS_URL", &mut config.nws_url),
        ];
        for (key, slot) in urls {
            if let Some(raw) = lookup(key) {
                let normalized = normalize_base_url(&raw);
                if normalized.is_empty() {
                    tracing::warn!("Ignoring empty {} override", key);
                } else {
                    tracing::info!("Using {} override: {}", key, normalized);
                    *slot = normalized;
                }
            }
        }

        if let Some(raw) = lookup("DRAGCAST_HOURS") {
            config.forecast_hours = parse_positive(&raw, "DRAGCAST_HOURS")?;
        }
        if let Some(raw) = lookup("DRAGCAST_DAYS") {
            config.forecast_days = parse_positive(&raw, "DRAGCAST_DAYS")?;
        }
        if let Some(raw) = lookup("DRAGCAST_UNIT") {
            config.unit = TemperatureUnit::parse(&raw)
                .ok_or_else(|| WeatherError::Config("DRAGCAST_UNIT must be F or C".into()))?;
        }

        Ok(config)
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn parse_positive(raw: &str, name: &str) -> Result<u32, WeatherError> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(WeatherError::Config(format!(
            "{} must be an integer > 0",
            name
        ))),
    }
}
