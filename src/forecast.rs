//! Normalized forecast records.
//!
//! The fetch layer builds these once from the wire models; everything downstream
//! reads them and nothing mutates them. Temperatures are Fahrenheit and wind is
//! mph, as ingested.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};

use crate::codes::{ConditionCategory, WeatherCode};
use crate::constants::EXTENDED_FORECAST_DAYS;
use crate::icons::{icon_for, IconContext, IconId};
use crate::phrases::{daily_phrase, drag_weekday};
use crate::units::{Measurement, TemperatureUnit};

/// Coordinates plus whatever place name reverse geocoding produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub name: Option<String>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            name: None,
        }
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    /// Place name, or the coordinates when geocoding came back empty
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{:.4}, {:.4}", self.latitude, self.longitude),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub time: DateTime<FixedOffset>,
    pub weather_code: WeatherCode,
    pub temperature_f: f64,
    pub apparent_temperature_f: Option<f64>,
    pub wind_speed_mph: f64,
    pub humidity: f64,
    pub precipitation_probability: Option<f64>,
    pub is_day: bool,
}

impl CurrentConditions {
    pub fn category(&self) -> ConditionCategory {
        self.weather_code.category()
    }

    pub fn icon(&self) -> IconId {
        icon_for(
            self.category(),
            Some(IconContext {
                is_night: !self.is_day,
            }),
        )
    }

    pub fn temperature(&self) -> Measurement {
        Measurement::fahrenheit(self.temperature_f)
    }

    pub fn wind_speed(&self) -> Measurement {
        Measurement::mph(self.wind_speed_mph)
    }

    pub fn humidity(&self) -> Measurement {
        Measurement::percent(self.humidity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub time: DateTime<FixedOffset>,
    pub weather_code: WeatherCode,
    pub temperature_f: f64,
    pub wind_speed_mph: f64,
    pub precipitation_probability: Option<f64>,
}

impl HourlyForecast {
    pub fn category(&self) -> ConditionCategory {
        self.weather_code.category()
    }

    /// Night-aware icon, judged from the local clock hour
    pub fn icon(&self) -> IconId {
        icon_for(self.category(), Some(IconContext::from_hour(self.time.hour())))
    }

    pub fn temperature(&self) -> Measurement {
        Measurement::fahrenheit(self.temperature_f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub weather_code: WeatherCode,
    pub high_f: f64,
    pub low_f: f64,
    pub precipitation_probability: Option<f64>,
    pub humidity: Option<f64>,
}

impl DailyForecast {
    pub fn category(&self) -> ConditionCategory {
        self.weather_code.category()
    }

    pub fn icon(&self) -> IconId {
        icon_for(self.category(), None)
    }
}

/// Everything fetched for one location at one moment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastBundle {
    pub current: CurrentConditions,
    pub hourly: Vec<HourlyForecast>,
    pub daily: Vec<DailyForecast>,
}

impl ForecastBundle {
    /// Structural assembly only. Sequences pass through untouched and may be empty.
    pub fn aggregate(
        current: CurrentConditions,
        hourly: Vec<HourlyForecast>,
        daily: Vec<DailyForecast>,
    ) -> Self {
        Self {
            current,
            hourly,
            daily,
        }
    }

    /// The record for the current local date, if the daily window has it
    pub fn today(&self) -> Option<&DailyForecast> {
        let today = self.current.time.date_naive();
        self.daily.iter().find(|d| d.date == today)
    }
}

/// Three days starting tomorrow. When tomorrow is missing from the window the
/// second record is assumed to be tomorrow.
pub fn extended_window(daily: &[DailyForecast], today: NaiveDate) -> &[DailyForecast] {
    let start = today
        .succ_opt()
        .and_then(|tomorrow| daily.iter().position(|d| d.date == tomorrow))
        .unwrap_or(1);

    if start >= daily.len() {
        return &[];
    }
    let end = (start + EXTENDED_FORECAST_DAYS).min(daily.len());
    &daily[start..end]
}

/// Display-ready content for one day tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTile {
    pub day_label: &'static str,
    pub emoji: &'static str,
    pub text: &'static str,
    pub temps: String,
}

impl DailyTile {
    pub fn from_daily(day: &DailyForecast, unit: TemperatureUnit) -> Self {
        // The tile reads the same rounded high that it prints
        let shown_high = unit.display(day.high_f);
        let high_f = TemperatureUnit::Fahrenheit.display(day.high_f);

        Self {
            day_label: drag_weekday(day.date.weekday()),
            emoji: day.icon().glyph(),
            text: daily_phrase(high_f as f64, day.weather_code.0),
            temps: format!(
                "{}\u{00b0} / {}{}",
                shown_high,
                unit.display(day.low_f),
                unit.symbol()
            ),
        }
    }
}
