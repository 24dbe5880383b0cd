use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Kilometres in one statute mile
pub const KPH_PER_MPH: f64 = 1.60934;

/// Converts Fahrenheit to Celsius
pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

/// Converts Celsius to Fahrenheit
pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

/// Converts mph to kph
pub fn mph_to_kph(mph: f64) -> f64 {
    mph * KPH_PER_MPH
}

/// Converts kph to mph
pub fn kph_to_mph(kph: f64) -> f64 {
    kph / KPH_PER_MPH
}

/// Rounds half up, the way the cards have always shown numbers.
///
/// Only renderers call this, once, after any conversion.
pub fn round_for_display(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasurementUnit {
    Fahrenheit,
    Celsius,
    Mph,
    Kph,
    Percent,
}

impl MeasurementUnit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Fahrenheit => "\u{00b0}F",
            Self::Celsius => "\u{00b0}C",
            Self::Mph => " mph",
            Self::Kph => " kph",
            Self::Percent => "%",
        }
    }
}

/// A raw value tagged with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub value: f64,
    pub unit: MeasurementUnit,
}

impl Measurement {
    pub fn new(value: f64, unit: MeasurementUnit) -> Self {
        Self { value, unit }
    }

    pub fn fahrenheit(value: f64) -> Self {
        Self::new(value, MeasurementUnit::Fahrenheit)
    }

    pub fn mph(value: f64) -> Self {
        Self::new(value, MeasurementUnit::Mph)
    }

    pub fn percent(value: f64) -> Self {
        Self::new(value, MeasurementUnit::Percent)
    }

    /// Converts within the same dimension. Temperature and speed never mix,
    /// so asking for mph from a Fahrenheit reading yields `None`.
    pub fn convert_to(&self, target: MeasurementUnit) -> Option<Measurement> {
        use MeasurementUnit::*;

        let value = match (self.unit, target) {
            (from, to) if from == to => self.value,
            (Fahrenheit, Celsius) => fahrenheit_to_celsius(self.value),
            (Celsius, Fahrenheit) => celsius_to_fahrenheit(self.value),
            (Mph, Kph) => mph_to_kph(self.value),
            (Kph, Mph) => kph_to_mph(self.value),
            _ => return None,
        };
        Some(Measurement::new(value, target))
    }

    /// Rounded text for a card, e.g. `72°F` or `15 mph`
    pub fn display(&self) -> String {
        format!("{}{}", round_for_display(self.value), self.unit.suffix())
    }
}

/// Which temperature scale the reader wants on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum TemperatureUnit {
    #[default]
    #[serde(rename = "F", alias = "f", alias = "fahrenheit")]
    Fahrenheit,
    #[serde(rename = "C", alias = "c", alias = "celsius")]
    Celsius,
}

impl TemperatureUnit {
    pub fn toggle(self) -> Self {
        match self {
            Self::Fahrenheit => Self::Celsius,
            Self::Celsius => Self::Fahrenheit,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Fahrenheit => "\u{00b0}F",
            Self::Celsius => "\u{00b0}C",
        }
    }

    /// Converts a Fahrenheit reading into this scale and rounds it for display
    pub fn display(&self, temp_f: f64) -> i64 {
        match self {
            Self::Fahrenheit => round_for_display(temp_f),
            Self::Celsius => round_for_display(fahrenheit_to_celsius(temp_f)),
        }
    }

    /// Parses the short forms accepted on the command line and in env vars
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "f" | "fahrenheit" => Some(Self::Fahrenheit),
            "c" | "celsius" => Some(Self::Celsius),
            _ => None,
        }
    }
}
