use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::alerts::{most_critical, AlertResponse};
use crate::codes::description;
use crate::forecast::{
    extended_window, CurrentConditions, DailyForecast, DailyTile, ForecastBundle, HourlyForecast,
    Location,
};
use crate::icons::precipitation_glyph;
use crate::models::LocationResult;
use crate::phrases::{
    drag_description, drag_messages, drag_weekday, feels_like_phrase, humidity_phrase,
    precipitation_phrase, wind_phrase,
};
use crate::units::{round_for_display, Measurement, MeasurementUnit, TemperatureUnit};

/// "5 minutes ago" style label for the last refresh
pub fn updated_label(updated: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(updated) = updated else {
        return "\u{2014}".to_string();
    };

    let mins = (now - updated).num_minutes();
    let hrs = mins / 60;
    let days = hrs / 24;

    fn plural(n: i64) -> &'static str {
        if n == 1 {
            ""
        } else {
            "s"
        }
    }

    if mins < 1 {
        "Just now".to_string()
    } else if mins < 60 {
        format!("{} minute{} ago", mins, plural(mins))
    } else if hrs < 24 {
        format!("{} hour{} ago", hrs, plural(hrs))
    } else {
        format!("{} day{} ago", days, plural(days))
    }
}

/// Wind in whichever speed unit goes with the temperature scale
fn wind_text(mph: f64, unit: TemperatureUnit) -> String {
    let wind = Measurement::mph(mph);
    match unit {
        TemperatureUnit::Fahrenheit => wind.display(),
        TemperatureUnit::Celsius => wind
            .convert_to(MeasurementUnit::Kph)
            .unwrap_or(wind)
            .display(),
    }
}

/// Formats the headline card for current conditions
pub fn format_current(current: &CurrentConditions, unit: TemperatureUnit) -> String {
    let mut output = format!(
        "{} {}{}  {}\n",
        current.icon().glyph(),
        unit.display(current.temperature_f),
        unit.symbol(),
        description(current.weather_code.0)
    );

    if let Some(feels) = current.apparent_temperature_f {
        output.push_str(&format!(
            "  Feels Like: {}{} | {}\n",
            unit.display(feels),
            unit.symbol(),
            feels_like_phrase(feels)
        ));
    }
    output.push_str(&format!(
        "  Humidity: {} | {}\n",
        current.humidity().display(),
        humidity_phrase(current.humidity)
    ));
    if let Some(pop) = current.precipitation_probability {
        output.push_str(&format!(
            "  Precipitation: {} | {}\n",
            Measurement::percent(pop).display(),
            precipitation_phrase(pop)
        ));
    }
    output.push_str(&format!(
        "  Wind: {} | {}\n",
        wind_text(current.wind_speed_mph, unit),
        wind_phrase(current.wind_speed_mph)
    ));

    output.push('\n');
    for msg in drag_messages(current.temperature_f, current.weather_code.0) {
        output.push_str(&format!("  \u{2022} {}\n", msg));
    }
    output
}

/// Formats the next-hours strip
pub fn format_hourly(hourly: &[HourlyForecast], unit: TemperatureUnit) -> String {
    let mut output = format!("Next {} Hours:\n", hourly.len());
    if hourly.is_empty() {
        output.push_str("  No hourly forecast yet, darling.\n");
        return output;
    }

    for hour in hourly {
        output.push_str(&format!(
            "  {}  {} {}{}",
            hour.time.format("%I:%M %p"),
            hour.icon().glyph(),
            unit.display(hour.temperature_f),
            unit.symbol()
        ));
        if let Some(pop) = hour.precipitation_probability {
            output.push_str(&format!(
                "  {} {}%",
                precipitation_glyph(hour.weather_code.0),
                round_for_display(pop)
            ));
        }
        output.push('\n');
    }
    output
}

/// Formats the three extended forecast tiles that follow today
pub fn format_extended(daily: &[DailyForecast], today: NaiveDate, unit: TemperatureUnit) -> String {
    let window = extended_window(daily, today);
    if window.is_empty() {
        return String::new();
    }

    let mut output = String::from("Extended Shade Forecast:\n\n");
    for day in window {
        let tile = DailyTile::from_daily(day, unit);
        output.push_str(&format!(
            "{}:\n  {} {}\n  {}\n  {}\n  Dress accordingly, diva.\n\n",
            tile.day_label,
            tile.emoji,
            tile.text,
            tile.temps,
            drag_description(day.weather_code.0)
        ));
    }
    output
}

/// Formats the week at a glance
pub fn format_weekly(daily: &[DailyForecast], unit: TemperatureUnit) -> String {
    if daily.is_empty() {
        return String::new();
    }

    let mut output = String::from("The Week Ahead:\n");
    for day in daily {
        output.push_str(&format!(
            "  {} {:<20} {} {}\u{00b0} / {}\u{00b0}",
            day.date.format("%b %-d"),
            drag_weekday(day.date.weekday()),
            day.icon().glyph(),
            unit.display(day.high_f),
            unit.display(day.low_f)
        ));
        if let Some(pop) = day.precipitation_probability {
            output.push_str(&format!("  \u{1f4a7} {}%", round_for_display(pop)));
        }
        if let Some(humidity) = day.humidity {
            output.push_str(&format!("  \u{1f4a6} {}%", round_for_display(humidity)));
        }
        output.push('\n');
    }
    output
}

/// Formats the full themed forecast for one location
pub fn format_forecast(
    location: &Location,
    bundle: &ForecastBundle,
    unit: TemperatureUnit,
    now: DateTime<Utc>,
) -> String {
    let updated = bundle.current.time.with_timezone(&Utc);
    let today = bundle.current.time.date_naive();

    let mut output = format!(
        "The Dragcast\nYour Location: {} \u{2022} Last updated: {}\n\n",
        location.label(),
        updated_label(Some(updated), now)
    );

    output.push_str(&format_current(&bundle.current, unit));
    output.push('\n');
    output.push_str(&format_hourly(&bundle.hourly, unit));

    let extended = format_extended(&bundle.daily, today, unit);
    if !extended.is_empty() {
        output.push('\n');
        output.push_str(&extended);
    }

    let weekly = format_weekly(&bundle.daily, unit);
    if !weekly.is_empty() {
        output.push('\n');
        output.push_str(&weekly);
    }
    output
}

/// Formats weather alerts into a human-readable string
pub fn format_alerts(response: &AlertResponse) -> String {
    if let Some(error) = &response.error {
        return format!("Couldn't check alerts right now: {}", error);
    }
    if !response.has_alerts {
        return "No active weather alerts. Serve your look, sis.".to_string();
    }

    let mut output = String::from("Active Weather Alerts:\n\n");
    if let Some(top) = most_critical(&response.alerts) {
        output.push_str(&format!("Most critical: {}\n\n", top.display_line()));
    }

    for (i, alert) in response.alerts.iter().enumerate() {
        output.push_str(&format!(
            "Alert {}:\n  Event: {}\n  Severity: {}\n  Area: {}\n",
            i + 1,
            alert.event,
            alert.severity,
            alert.area_desc
        ));
        if !alert.headline.is_empty() {
            output.push_str(&format!("  Headline: {}\n", alert.headline));
        }
        if !alert.instruction.is_empty() {
            output.push_str(&format!("  Instruction: {}\n", alert.instruction));
        }
        output.push('\n');
    }
    output
}

/// Formats place search results
pub fn format_locations(results: &[LocationResult]) -> String {
    if results.is_empty() {
        return "No results found".to_string();
    }

    let mut output = String::from("Locations:\n");
    for result in results {
        let region = result.region();
        let place = if region.is_empty() {
            result.name.clone()
        } else {
            format!("{} ({})", result.name, region)
        };
        output.push_str(&format!(
            "  {} at {:.4}, {:.4}\n",
            place, result.latitude, result.longitude
        ));
    }
    output
}
