use chrono::{DateTime, FixedOffset, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::AlertFeature;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Severity {
    Extreme,
    Severe,
    Moderate,
    Minor,
    Unknown,
}

impl Severity {
    /// Anything NOAA sends outside the documented set becomes `Unknown`
    pub fn sanitize(raw: Option<&str>) -> Self {
        match raw {
            Some("Extreme") => Self::Extreme,
            Some("Severe") => Self::Severe,
            Some("Moderate") => Self::Moderate,
            Some("Minor") => Self::Minor,
            _ => Self::Unknown,
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            Self::Extreme => 4,
            Self::Severe => 3,
            Self::Moderate => 2,
            Self::Minor => 1,
            Self::Unknown => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Extreme => "Extreme",
            Self::Severe => "Severe",
            Self::Moderate => "Moderate",
            Self::Minor => "Minor",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Urgency {
    Immediate,
    Expected,
    Future,
    Past,
    Unknown,
}

impl Urgency {
    pub fn sanitize(raw: Option<&str>) -> Self {
        match raw {
            Some("Immediate") => Self::Immediate,
            Some("Expected") => Self::Expected,
            Some("Future") => Self::Future,
            Some("Past") => Self::Past,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherAlert {
    pub id: String,
    pub event: String,
    pub headline: String,
    pub description: String,
    pub instruction: String,
    pub severity: Severity,
    pub urgency: Urgency,
    pub effective: Option<DateTime<FixedOffset>>,
    pub expires: Option<DateTime<FixedOffset>>,
    pub sender_name: String,
    pub area_desc: String,
}

impl WeatherAlert {
    /// In force between `effective` and `expires`, both inclusive. A missing
    /// bound is treated as open.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        let started = self.effective.map_or(true, |t| t <= now);
        let not_expired = self.expires.map_or(true, |t| now <= t);
        started && not_expired
    }

    pub fn display_line(&self) -> String {
        format!("{} - {}: {}", self.severity, self.event, self.headline)
    }
}

impl From<AlertFeature> for WeatherAlert {
    fn from(feature: AlertFeature) -> Self {
        let props = feature.properties;
        Self {
            id: feature.id,
            severity: Severity::sanitize(props.severity.as_deref()),
            urgency: Urgency::sanitize(props.urgency.as_deref()),
            event: props.event,
            headline: props.headline.unwrap_or_default(),
            description: props.description.unwrap_or_default(),
            instruction: props.instruction.unwrap_or_default(),
            effective: props.effective,
            expires: props.expires,
            sender_name: props.sender_name.unwrap_or_default(),
            area_desc: props.area_desc.unwrap_or_default(),
        }
    }
}

/// Outcome of a best-effort alert lookup. Failures still produce a value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlertResponse {
    pub alerts: Vec<WeatherAlert>,
    pub has_alerts: bool,
    pub error: Option<String>,
}

impl AlertResponse {
    pub fn new(alerts: Vec<WeatherAlert>) -> Self {
        Self {
            has_alerts: !alerts.is_empty(),
            alerts,
            error: None,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// Only the alerts in force at `now` and at or above `min_severity`.
    /// NOAA keeps expired alerts in the active feed for a while.
    pub fn in_force(&self, now: DateTime<Utc>, min_severity: Severity) -> Self {
        let alerts = filter_by_severity(&self.alerts, min_severity)
            .into_iter()
            .filter(|a| a.is_active(now))
            .cloned()
            .collect();

        Self {
            error: self.error.clone(),
            ..Self::new(alerts)
        }
    }
}

/// Alerts at or above `min_severity`
pub fn filter_by_severity(alerts: &[WeatherAlert], min_severity: Severity) -> Vec<&WeatherAlert> {
    alerts
        .iter()
        .filter(|a| a.severity.rank() >= min_severity.rank())
        .collect()
}

/// Highest severity wins; among equals the earliest in the list is kept
pub fn most_critical(alerts: &[WeatherAlert]) -> Option<&WeatherAlert> {
    alerts.iter().fold(None, |best: Option<&WeatherAlert>, alert| match best {
        Some(b) if alert.severity.rank() <= b.severity.rank() => Some(b),
        _ => Some(alert),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn alert(id: &str, severity: Severity) -> WeatherAlert {
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        WeatherAlert {
            id: id.to_string(),
            event: "Heat Advisory".to_string(),
            headline: "Hot, hot, hot".to_string(),
            description: String::new(),
            instruction: String::new(),
            severity,
            urgency: Urgency::Expected,
            effective: Some(tz.with_ymd_and_hms(2024, 6, 4, 10, 0, 0).unwrap()),
            expires: Some(tz.with_ymd_and_hms(2024, 6, 4, 20, 0, 0).unwrap()),
            sender_name: "NWS".to_string(),
            area_desc: "Travis".to_string(),
        }
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(Severity::sanitize(Some("Severe")), Severity::Severe);
        assert_eq!(Severity::sanitize(Some("severe")), Severity::Unknown);
        assert_eq!(Severity::sanitize(None), Severity::Unknown);
        assert_eq!(Urgency::sanitize(Some("Immediate")), Urgency::Immediate);
        assert_eq!(Urgency::sanitize(Some("Soonish")), Urgency::Unknown);
    }

    #[test]
    fn test_filter_by_severity() {
        let alerts = vec![
            alert("a", Severity::Minor),
            alert("b", Severity::Moderate),
            alert("c", Severity::Extreme),
            alert("d", Severity::Unknown),
        ];
        let ids: Vec<_> = filter_by_severity(&alerts, Severity::Moderate)
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "c"]);
        assert_eq!(filter_by_severity(&alerts, Severity::Unknown).len(), 4);
    }

    #[test]
    fn test_most_critical() {
        assert!(most_critical(&[]).is_none());

        let alerts = vec![
            alert("a", Severity::Moderate),
            alert("b", Severity::Severe),
            alert("c", Severity::Severe),
            alert("d", Severity::Minor),
        ];
        assert_eq!(most_critical(&alerts).map(|a| a.id.as_str()), Some("b"));
    }

    #[test]
    fn test_is_active() {
        let a = alert("a", Severity::Minor);
        let during = Utc.with_ymd_and_hms(2024, 6, 4, 18, 0, 0).unwrap();
        let before = Utc.with_ymd_and_hms(2024, 6, 4, 14, 59, 59).unwrap();
        let at_expiry = Utc.with_ymd_and_hms(2024, 6, 5, 1, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 6, 5, 1, 0, 1).unwrap();

        assert!(a.is_active(during));
        assert!(!a.is_active(before));
        assert!(a.is_active(at_expiry));
        assert!(!a.is_active(after));
    }

    #[test]
    fn test_display_line() {
        assert_eq!(
            alert("a", Severity::Severe).display_line(),
            "Severe - Heat Advisory: Hot, hot, hot"
        );
    }

    #[test]
    fn test_response_constructors() {
        assert!(!AlertResponse::empty().has_alerts);
        assert!(AlertResponse::new(vec![alert("a", Severity::Minor)]).has_alerts);
        let failed = AlertResponse::failed("boom");
        assert!(failed.alerts.is_empty());
        assert_eq!(failed.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_in_force_drops_expired_alerts() {
        let mut expired = alert("old", Severity::Extreme);
        expired.expires = Some(Utc.with_ymd_and_hms(2024, 6, 4, 12, 0, 0).unwrap().fixed_offset());
        let response = AlertResponse::new(vec![expired, alert("now", Severity::Minor)]);

        let during = Utc.with_ymd_and_hms(2024, 6, 4, 18, 0, 0).unwrap();
        let current = response.in_force(during, Severity::Unknown);
        assert!(current.has_alerts);
        assert_eq!(current.alerts.len(), 1);
        assert_eq!(current.alerts[0].id, "now");

        let after = Utc.with_ymd_and_hms(2024, 6, 6, 0, 0, 0).unwrap();
        let none_left = response.in_force(after, Severity::Unknown);
        assert!(!none_left.has_alerts);
        assert!(none_left.alerts.is_empty());
    }

    #[test]
    fn test_in_force_applies_min_severity() {
        let response = AlertResponse::new(vec![
            alert("a", Severity::Minor),
            alert("b", Severity::Severe),
        ]);
        let during = Utc.with_ymd_and_hms(2024, 6, 4, 18, 0, 0).unwrap();

        let severe = response.in_force(during, Severity::Severe);
        assert_eq!(severe.alerts.len(), 1);
        assert_eq!(severe.alerts[0].id, "b");
        assert!(response.in_force(during, Severity::Extreme).alerts.is_empty());
    }

    #[test]
    fn test_in_force_keeps_error() {
        let failed = AlertResponse::failed("timeout");
        let now = Utc.with_ymd_and_hms(2024, 6, 4, 18, 0, 0).unwrap();
        assert_eq!(failed.in_force(now, Severity::Unknown).error.as_deref(), Some("timeout"));
    }
}
