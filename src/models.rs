use chrono::{DateTime, FixedOffset};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::alerts::Severity;
use crate::codes::WeatherCode;
use crate::error::WeatherError;
use crate::forecast::{CurrentConditions, DailyForecast, HourlyForecast};
use crate::units::TemperatureUnit;

// ============================================================================
// Open-Meteo Forecast API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct OpenMeteoCurrentResponse {
    #[serde(default)]
    pub utc_offset_seconds: i32,
    pub current: Option<CurrentData>,
}

#[derive(Debug, Deserialize)]
pub struct CurrentData {
    pub time: i64,
    #[serde(rename = "temperature_2m")]
    pub temperature: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub is_day: Option<u8>,
    pub weather_code: Option<i32>,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: Option<f64>,
    #[serde(rename = "relative_humidity_2m")]
    pub humidity: Option<f64>,
    pub precipitation_probability: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct OpenMeteoHourlyResponse {
    #[serde(default)]
    pub utc_offset_seconds: i32,
    pub hourly: Option<HourlyData>,
}

#[derive(Debug, Deserialize)]
pub struct HourlyData {
    pub time: Vec<i64>,
    #[serde(rename = "temperature_2m")]
    pub temperature: Option<Vec<Option<f64>>>,
    pub weather_code: Option<Vec<Option<i32>>>,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: Option<Vec<Option<f64>>>,
    pub precipitation_probability: Option<Vec<Option<f64>>>,
}

#[derive(Debug, Deserialize)]
pub struct OpenMeteoDailyResponse {
    #[serde(default)]
    pub utc_offset_seconds: i32,
    pub daily: Option<DailyData>,
}

#[derive(Debug, Deserialize)]
pub struct DailyData {
    pub time: Vec<i64>,
    pub weather_code: Option<Vec<Option<i32>>>,
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Option<Vec<Option<f64>>>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Option<Vec<Option<f64>>>,
    #[serde(rename = "precipitation_probability_max")]
    pub precipitation_probability: Option<Vec<Option<f64>>>,
    #[serde(rename = "relative_humidity_2m_mean")]
    pub humidity: Option<Vec<Option<f64>>>,
}

/// Unix seconds shifted into the location's own offset
pub fn local_time(unix: i64, utc_offset_seconds: i32) -> Result<DateTime<FixedOffset>, WeatherError> {
    let offset = FixedOffset::east_opt(utc_offset_seconds)
        .ok_or_else(|| WeatherError::payload(format!("bad utc offset {}", utc_offset_seconds)))?;
    let utc = DateTime::from_timestamp(unix, 0)
        .ok_or_else(|| WeatherError::payload(format!("bad timestamp {}", unix)))?;
    Ok(utc.with_timezone(&offset))
}

fn required<T>(series: Option<Vec<T>>, name: &str) -> Result<Vec<T>, WeatherError> {
    series.ok_or_else(|| WeatherError::payload(format!("missing {} series", name)))
}

fn optional_at(series: &Option<Vec<Option<f64>>>, i: usize) -> Option<f64> {
    series.as_ref().and_then(|s| s.get(i).copied().flatten())
}

impl OpenMeteoCurrentResponse {
    pub fn into_current(self) -> Result<CurrentConditions, WeatherError> {
        let current = self
            .current
            .ok_or_else(|| WeatherError::payload("No current weather data available"))?;

        let (Some(temperature), Some(is_day), Some(code), Some(wind), Some(humidity)) = (
            current.temperature,
            current.is_day,
            current.weather_code,
            current.wind_speed,
            current.humidity,
        ) else {
            return Err(WeatherError::payload("Unexpected current weather payload"));
        };

        Ok(CurrentConditions {
            time: local_time(current.time, self.utc_offset_seconds)?,
            weather_code: WeatherCode(code),
            temperature_f: temperature,
            apparent_temperature_f: current.apparent_temperature,
            wind_speed_mph: wind,
            humidity,
            precipitation_probability: current.precipitation_probability,
            is_day: is_day != 0,
        })
    }
}

impl OpenMeteoHourlyResponse {
    /// At most `hours` records, fewer when the source returned fewer. Hours with
    /// a null temperature, code or wind are skipped.
    pub fn into_hourly(self, hours: usize) -> Result<Vec<HourlyForecast>, WeatherError> {
        let hourly = self
            .hourly
            .ok_or_else(|| WeatherError::payload("No hourly forecast available"))?;

        let temps = required(hourly.temperature, "hourly temperature")?;
        let codes = required(hourly.weather_code, "hourly weather code")?;
        let winds = required(hourly.wind_speed, "hourly wind speed")?;

        let len = hours
            .min(hourly.time.len())
            .min(temps.len())
            .min(codes.len())
            .min(winds.len());

        let mut items = Vec::with_capacity(len);
        for i in 0..len {
            let (Some(temperature), Some(code), Some(wind)) = (temps[i], codes[i], winds[i]) else {
                tracing::debug!("Skipping hour {} with missing values", i);
                continue;
            };
            items.push(HourlyForecast {
                time: local_time(hourly.time[i], self.utc_offset_seconds)?,
                weather_code: WeatherCode(code),
                temperature_f: temperature,
                wind_speed_mph: wind,
                precipitation_probability: optional_at(&hourly.precipitation_probability, i),
            });
        }
        Ok(items)
    }
}

impl OpenMeteoDailyResponse {
    pub fn into_daily(self, days: usize) -> Result<Vec<DailyForecast>, WeatherError> {
        let daily = self
            .daily
            .ok_or_else(|| WeatherError::payload("No daily forecast available"))?;

        let codes = required(daily.weather_code, "daily weather code")?;
        let highs = required(daily.temperature_max, "daily high")?;
        let lows = required(daily.temperature_min, "daily low")?;

        let len = days
            .min(daily.time.len())
            .min(codes.len())
            .min(highs.len())
            .min(lows.len());

        let mut items = Vec::with_capacity(len);
        for i in 0..len {
            let (Some(code), Some(high), Some(low)) = (codes[i], highs[i], lows[i]) else {
                tracing::debug!("Skipping day {} with missing values", i);
                continue;
            };
            items.push(DailyForecast {
                date: local_time(daily.time[i], self.utc_offset_seconds)?.date_naive(),
                weather_code: WeatherCode(code),
                high_f: high,
                low_f: low,
                precipitation_probability: optional_at(&daily.precipitation_probability, i),
                humidity: optional_at(&daily.humidity, i),
            });
        }
        Ok(items)
    }
}

// ============================================================================
// Geocoding Models
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseGeocodeResponse {
    pub city: Option<String>,
    pub locality: Option<String>,
    pub principal_subdivision_code: Option<String>,
}

impl ReverseGeocodeResponse {
    /// "City, ST" where the subdivision code has a suffix after the dash
    pub fn place_name(&self) -> String {
        let city = [&self.city, &self.locality]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .map(String::as_str)
            .unwrap_or("Unknown");

        let state = self
            .principal_subdivision_code
            .as_deref()
            .and_then(|code| code.split('-').nth(1))
            .filter(|s| !s.is_empty());

        match state {
            Some(state) => format!("{}, {}", city, state),
            None => city.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LocationSearchResponse {
    #[serde(default)]
    pub results: Option<Vec<LocationResult>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub admin1: Option<String>,
}

impl LocationResult {
    /// "Texas, United States" style region line
    pub fn region(&self) -> String {
        match (&self.admin1, &self.country) {
            (Some(admin), Some(country)) => format!("{}, {}", admin, country),
            (Some(admin), None) => admin.clone(),
            (None, Some(country)) => country.clone(),
            (None, None) => String::new(),
        }
    }
}

// ============================================================================
// National Weather Service Alert Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AlertCollection {
    #[serde(default)]
    pub features: Vec<AlertFeature>,
}

#[derive(Debug, Deserialize)]
pub struct AlertFeature {
    pub id: String,
    pub properties: AlertProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertProperties {
    pub event: String,
    pub headline: Option<String>,
    pub description: Option<String>,
    pub instruction: Option<String>,
    pub severity: Option<String>,
    pub urgency: Option<String>,
    pub effective: Option<DateTime<FixedOffset>>,
    pub expires: Option<DateTime<FixedOffset>>,
    pub sender_name: Option<String>,
    pub area_desc: Option<String>,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetForecastRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// "F" or "C"; defaults to the server's configured unit
    pub unit: Option<TemperatureUnit>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetAlertsRequest {
    pub latitude: f64,
    pub longitude: f64,
    /// Lowest severity to report: "Extreme", "Severe", "Moderate" or "Minor"
    pub min_severity: Option<Severity>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct SearchLocationsRequest {
    pub query: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};
    use serde_json::json;

    #[test]
    fn test_local_time_applies_offset() {
        let t = local_time(1_717_513_200, -18_000).unwrap();
        assert_eq!(t.offset().local_minus_utc(), -18_000);
        assert_eq!(t.timestamp(), 1_717_513_200);
        assert_eq!(t.hour(), 10);
        assert!(local_time(0, 100_000).is_err());
    }

    #[test]
    fn test_current_payload() {
        let body = json!({
            "utc_offset_seconds": 0,
            "current": {
                "time": 1_717_513_200,
                "temperature_2m": 88.4,
                "apparent_temperature": 93.1,
                "is_day": 1,
                "weather_code": 2,
                "wind_speed_10m": 7.2,
                "relative_humidity_2m": 55,
                "precipitation_probability": 20
            }
        });
        let parsed: OpenMeteoCurrentResponse = serde_json::from_value(body).unwrap();
        let current = parsed.into_current().unwrap();
        assert_eq!(current.weather_code, WeatherCode(2));
        assert_eq!(current.temperature_f, 88.4);
        assert_eq!(current.apparent_temperature_f, Some(93.1));
        assert_eq!(current.humidity, 55.0);
        assert_eq!(current.precipitation_probability, Some(20.0));
        assert!(current.is_day);
    }

    #[test]
    fn test_current_payload_missing_fields() {
        let body = json!({
            "utc_offset_seconds": 0,
            "current": { "time": 1_717_513_200, "temperature_2m": 70.0 }
        });
        let parsed: OpenMeteoCurrentResponse = serde_json::from_value(body).unwrap();
        assert!(matches!(parsed.into_current(), Err(WeatherError::Payload(_))));

        let parsed: OpenMeteoCurrentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(parsed.into_current().is_err());
    }

    #[test]
    fn test_hourly_payload_truncates_and_skips_nulls() {
        let body = json!({
            "utc_offset_seconds": 3600,
            "hourly": {
                "time": [1_717_513_200, 1_717_516_800, 1_717_520_400, 1_717_524_000],
                "temperature_2m": [70.0, null, 72.0, 73.0],
                "weather_code": [0, 1, 61, 63],
                "wind_speed_10m": [3.0, 4.0, 5.0, 6.0]
            }
        });
        let parsed: OpenMeteoHourlyResponse = serde_json::from_value(body).unwrap();
        let hours = parsed.into_hourly(3).unwrap();
        assert_eq!(hours.len(), 2);
        assert_eq!(hours[0].weather_code, WeatherCode(0));
        assert_eq!(hours[1].weather_code, WeatherCode(61));
        assert_eq!(hours[1].precipitation_probability, None);
        assert_eq!(hours[0].time.offset().local_minus_utc(), 3600);
    }

    #[test]
    fn test_hourly_payload_missing_series() {
        let body = json!({
            "hourly": { "time": [1_717_513_200], "temperature_2m": [70.0] }
        });
        let parsed: OpenMeteoHourlyResponse = serde_json::from_value(body).unwrap();
        assert!(parsed.into_hourly(12).is_err());
    }

    #[test]
    fn test_daily_payload() {
        // Local midnights for UTC-5
        let body = json!({
            "utc_offset_seconds": -18_000,
            "daily": {
                "time": [1_717_477_200, 1_717_563_600],
                "weather_code": [95, 71],
                "temperature_2m_max": [60.0, 20.0],
                "temperature_2m_min": [50.0, 10.0],
                "precipitation_probability_max": [80, null]
            }
        });
        let parsed: OpenMeteoDailyResponse = serde_json::from_value(body).unwrap();
        let days = parsed.into_daily(5).unwrap();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 6, 4).unwrap());
        assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2024, 6, 5).unwrap());
        assert_eq!(days[0].precipitation_probability, Some(80.0));
        assert_eq!(days[1].precipitation_probability, None);
        assert_eq!(days[0].humidity, None);
    }

    #[test]
    fn test_reverse_geocode_place_name() {
        let r: ReverseGeocodeResponse = serde_json::from_value(json!({
            "city": "Austin",
            "locality": "Downtown",
            "principalSubdivisionCode": "US-TX"
        }))
        .unwrap();
        assert_eq!(r.place_name(), "Austin, TX");

        let r: ReverseGeocodeResponse = serde_json::from_value(json!({
            "city": "",
            "locality": "Hamlet",
            "principalSubdivisionCode": ""
        }))
        .unwrap();
        assert_eq!(r.place_name(), "Hamlet");

        let r: ReverseGeocodeResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(r.place_name(), "Unknown");
    }

    #[test]
    fn test_location_result_region() {
        let r: LocationResult = serde_json::from_value(json!({
            "name": "Paris",
            "latitude": 33.66,
            "longitude": -95.55,
            "country": "United States",
            "admin1": "Texas"
        }))
        .unwrap();
        assert_eq!(r.region(), "Texas, United States");
    }

    #[test]
    fn test_alert_properties_parse() {
        let f: AlertFeature = serde_json::from_value(json!({
            "id": "urn:oid:1",
            "properties": {
                "event": "Heat Advisory",
                "headline": "Heat Advisory until 8 PM",
                "severity": "Moderate",
                "urgency": "Expected",
                "effective": "2024-06-04T10:00:00-05:00",
                "expires": "2024-06-04T20:00:00-05:00",
                "senderName": "NWS Austin/San Antonio TX",
                "areaDesc": "Travis",
                "instruction": null
            }
        }))
        .unwrap();
        assert_eq!(f.properties.event, "Heat Advisory");
        assert_eq!(f.properties.area_desc.as_deref(), Some("Travis"));
        assert!(f.properties.instruction.is_none());
        assert!(f.properties.effective.is_some());
    }
}
