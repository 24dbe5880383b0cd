//! WMO weather code classification.
//!
//! Codes are categorical identifiers, so every mapping here is exact membership
//! in a literal set. Nothing compares codes numerically.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every code Open-Meteo documents for `weather_code`
pub const KNOWN_CODES: [i32; 28] = [
    0, 1, 2, 3, 45, 48, 51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 71, 73, 75, 77, 80, 81, 82, 85,
    86, 95, 96, 99,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionCategory {
    Clear,
    Cloud,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
    Unknown,
}

impl ConditionCategory {
    /// Drizzle and rain are both "wet" for messaging purposes
    pub fn is_wet(&self) -> bool {
        matches!(self, Self::Drizzle | Self::Rain)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Cloud => "Cloudy",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Thunderstorm => "Thunderstorm",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Magnitude within a category, fixed per code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Slight,
    Moderate,
    Heavy,
    Violent,
}

/// Maps a WMO code to its category. Anything outside the table is `Unknown`.
pub fn classify(code: i32) -> ConditionCategory {
    match code {
        0 | 1 => ConditionCategory::Clear,
        2 | 3 => ConditionCategory::Cloud,
        45 | 48 => ConditionCategory::Fog,
        51 | 53 | 55 | 56 | 57 => ConditionCategory::Drizzle,
        61 | 63 | 65 | 66 | 67 | 80 | 81 | 82 => ConditionCategory::Rain,
        71 | 73 | 75 | 77 | 85 | 86 => ConditionCategory::Snow,
        95 | 96 | 99 => ConditionCategory::Thunderstorm,
        _ => ConditionCategory::Unknown,
    }
}

pub fn is_known(code: i32) -> bool {
    classify(code) != ConditionCategory::Unknown
}

pub fn is_clear(code: i32) -> bool {
    classify(code) == ConditionCategory::Clear
}

pub fn is_cloud(code: i32) -> bool {
    classify(code) == ConditionCategory::Cloud
}

pub fn is_fog(code: i32) -> bool {
    classify(code) == ConditionCategory::Fog
}

/// True for the whole wet family: drizzle, rain, freezing variants and showers
pub fn is_rain(code: i32) -> bool {
    classify(code).is_wet()
}

pub fn is_drizzle(code: i32) -> bool {
    classify(code) == ConditionCategory::Drizzle
}

pub fn is_snow(code: i32) -> bool {
    classify(code) == ConditionCategory::Snow
}

pub fn is_thunderstorm(code: i32) -> bool {
    classify(code) == ConditionCategory::Thunderstorm
}

pub fn is_freezing(code: i32) -> bool {
    matches!(code, 56 | 57 | 66 | 67)
}

pub fn is_shower(code: i32) -> bool {
    matches!(code, 80 | 81 | 82 | 85 | 86)
}

pub fn has_hail(code: i32) -> bool {
    matches!(code, 96 | 99)
}

/// Severity bucket inside the category. Clear, cloud, fog and snow grains have none.
pub fn intensity(code: i32) -> Option<Intensity> {
    use Intensity::*;

    match code {
        51 | 56 | 61 | 66 | 71 | 80 | 85 => Some(Slight),
        53 | 63 | 73 | 81 | 95 => Some(Moderate),
        55 | 57 | 65 | 67 | 75 | 86 | 96 => Some(Heavy),
        82 | 99 => Some(Violent),
        _ => None,
    }
}

/// Plain WMO wording for a code
pub fn description(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Foggy",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow",
        73 => "Moderate snow",
        75 => "Heavy snow",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}

/// A raw code as delivered by the forecast source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherCode(pub i32);

impl WeatherCode {
    pub fn category(&self) -> ConditionCategory {
        classify(self.0)
    }

    pub fn intensity(&self) -> Option<Intensity> {
        intensity(self.0)
    }

    pub fn description(&self) -> &'static str {
        description(self.0)
    }

    pub fn is_known(&self) -> bool {
        is_known(self.0)
    }
}

impl From<i32> for WeatherCode {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predicates(code: i32) -> [bool; 6] {
        [
            is_clear(code),
            is_cloud(code),
            is_fog(code),
            is_rain(code),
            is_snow(code),
            is_thunderstorm(code),
        ]
    }

    #[test]
    fn test_wmo_code_clear() {
        assert_eq!(classify(0), ConditionCategory::Clear);
        assert_eq!(classify(1), ConditionCategory::Clear);
    }

    #[test]
    fn test_wmo_code_cloud() {
        assert_eq!(classify(2), ConditionCategory::Cloud);
        assert_eq!(classify(3), ConditionCategory::Cloud);
    }

    #[test]
    fn test_wmo_code_fog() {
        assert_eq!(classify(45), ConditionCategory::Fog);
        assert_eq!(classify(48), ConditionCategory::Fog);
    }

    #[test]
    fn test_wmo_code_drizzle() {
        for code in [51, 53, 55, 56, 57] {
            assert_eq!(classify(code), ConditionCategory::Drizzle, "code {}", code);
            assert!(is_rain(code));
            assert!(is_drizzle(code));
        }
    }

    #[test]
    fn test_wmo_code_rain() {
        for code in [61, 63, 65, 66, 67, 80, 81, 82] {
            assert_eq!(classify(code), ConditionCategory::Rain, "code {}", code);
            assert!(!is_drizzle(code));
        }
    }

    #[test]
    fn test_wmo_code_snow() {
        for code in [71, 73, 75, 77, 85, 86] {
            assert_eq!(classify(code), ConditionCategory::Snow, "code {}", code);
        }
    }

    #[test]
    fn test_wmo_code_thunderstorm() {
        for code in [95, 96, 99] {
            assert_eq!(classify(code), ConditionCategory::Thunderstorm, "code {}", code);
        }
    }

    #[test]
    fn test_unknown_codes() {
        for code in [-1, 4, 10, 44, 50, 52, 60, 62, 70, 90, 98, 100, i32::MIN, i32::MAX] {
            assert_eq!(classify(code), ConditionCategory::Unknown, "code {}", code);
            assert!(!is_known(code));
            assert_eq!(description(code), "Unknown");
            assert_eq!(intensity(code), None);
            assert!(predicates(code).iter().all(|p| !p));
        }
    }

    #[test]
    fn test_predicates_partition_known_codes() {
        for code in KNOWN_CODES {
            let hits = predicates(code).iter().filter(|p| **p).count();
            assert_eq!(hits, 1, "code {} matched {} predicates", code, hits);
        }
    }

    #[test]
    fn test_every_known_code_has_description() {
        for code in KNOWN_CODES {
            assert!(is_known(code));
            assert_ne!(description(code), "Unknown", "code {}", code);
        }
    }

    #[test]
    fn test_intensity_literal_mapping() {
        assert_eq!(intensity(61), Some(Intensity::Slight));
        assert_eq!(intensity(63), Some(Intensity::Moderate));
        assert_eq!(intensity(65), Some(Intensity::Heavy));
        assert_eq!(intensity(82), Some(Intensity::Violent));
        assert_eq!(intensity(55), Some(Intensity::Heavy));
        assert_eq!(intensity(99), Some(Intensity::Violent));
        assert_eq!(intensity(0), None);
        assert_eq!(intensity(3), None);
        assert_eq!(intensity(48), None);
        assert_eq!(intensity(77), None);
    }

    #[test]
    fn test_special_sub_classifiers() {
        assert!(is_freezing(56) && is_freezing(67));
        assert!(!is_freezing(61));
        assert!(is_shower(80) && is_shower(86));
        assert!(!is_shower(71));
        assert!(has_hail(96) && has_hail(99));
        assert!(!has_hail(95));
    }

    #[test]
    fn test_weather_code_newtype() {
        let code = WeatherCode::from(61);
        assert_eq!(code.category(), ConditionCategory::Rain);
        assert_eq!(code.intensity(), Some(Intensity::Slight));
        assert_eq!(code.to_string(), "Slight rain (61)");
        assert!(!WeatherCode(7).is_known());

        let parsed: WeatherCode = serde_json::from_str("95").unwrap();
        assert_eq!(parsed, WeatherCode(95));
    }
}
