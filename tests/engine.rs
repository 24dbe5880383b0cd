//! Cross-module properties of the classification and phrasing engine.

use dragcast::codes::{
    classify, is_clear, is_cloud, is_fog, is_rain, is_snow, is_thunderstorm, ConditionCategory,
    KNOWN_CODES,
};
use dragcast::icons::{icon_for, IconContext, IconId};
use dragcast::phrases::{
    daily_phrase, drag_messages, feels_like_phrase, humidity_phrase, precipitation_phrase,
    temperature_phrase, wind_phrase,
};
use dragcast::units::{celsius_to_fahrenheit, fahrenheit_to_celsius, mph_to_kph};

#[test]
fn test_codes_outside_table_are_unknown() {
    for code in -500..=500 {
        if KNOWN_CODES.contains(&code) {
            assert_ne!(classify(code), ConditionCategory::Unknown, "code {}", code);
        } else {
            assert_eq!(classify(code), ConditionCategory::Unknown, "code {}", code);
        }
    }
}

#[test]
fn test_exactly_one_membership_per_known_code() {
    let checks: [fn(i32) -> bool; 6] = [is_clear, is_cloud, is_fog, is_rain, is_snow, is_thunderstorm];
    for code in KNOWN_CODES {
        let hits = checks.iter().filter(|check| check(code)).count();
        assert_eq!(hits, 1, "code {}", code);
    }
}

#[test]
fn test_unit_conversions() {
    assert_eq!(fahrenheit_to_celsius(32.0), 0.0);
    assert_eq!(fahrenheit_to_celsius(212.0), 100.0);
    for tenth in -500..=1500 {
        let f = tenth as f64 / 10.0;
        assert!((celsius_to_fahrenheit(fahrenheit_to_celsius(f)) - f).abs() < 1e-9);
    }
    assert_eq!(mph_to_kph(0.0), 0.0);
    assert!((mph_to_kph(1.0) - 1.60934).abs() < 1e-12);
}

#[test]
fn test_phrase_bands_are_total() {
    for t in -50..=150 {
        let t = t as f64;
        assert!(!temperature_phrase(t).is_empty());
        assert!(!feels_like_phrase(t).is_empty());
        for code in KNOWN_CODES.iter().copied().chain([-1, 1000]) {
            assert!(!daily_phrase(t, code).is_empty());
            assert!(drag_messages(t, code).iter().all(|m| !m.is_empty()));
        }
    }
    for p in 0..=100 {
        let p = p as f64;
        assert!(!humidity_phrase(p).is_empty());
        assert!(!precipitation_phrase(p).is_empty());
        assert!(!wind_phrase(p).is_empty());
    }
}

#[test]
fn test_thunderstorm_beats_temperature() {
    let phrase = daily_phrase(60.0, 95);
    assert!(phrase.contains("Thunder"));
    assert_ne!(phrase, daily_phrase(60.0, 0));
    for high in [-20.0, 60.0, 110.0] {
        assert_eq!(daily_phrase(high, 95), phrase);
    }
}

#[test]
fn test_slight_rain_scenario() {
    assert_eq!(classify(61), ConditionCategory::Rain);
    assert_eq!(icon_for(ConditionCategory::Rain, None), IconId::Rain);
    assert_eq!(
        icon_for(ConditionCategory::Rain, Some(IconContext::night())),
        IconId::Rain
    );
}

#[test]
fn test_hot_and_clear_scenario() {
    let category = classify(0);
    assert_eq!(category, ConditionCategory::Clear);
    assert_eq!(icon_for(category, None), IconId::ClearDay);

    let mut phrases: Vec<&str> = drag_messages(95.0, 0).to_vec();
    phrases.push(daily_phrase(95.0, 0));

    let joined = phrases.join(" ").to_lowercase();
    assert!(joined.contains("hot") || joined.contains("sweat"));
    assert!(joined.contains("flawless skies"));
    assert!(!joined.contains("rain"));
    assert!(!joined.contains("snow"));
}

#[test]
fn test_cold_snow_scenario() {
    assert_eq!(classify(71), ConditionCategory::Snow);
    assert_eq!(icon_for(classify(71), None), IconId::Snow);

    let phrase = daily_phrase(20.0, 71).to_lowercase();
    assert!(phrase.contains("snow"));
    assert!(phrase.contains("cold"));
    assert!(!phrase.contains("rain"));

    let msgs = drag_messages(20.0, 71);
    assert_eq!(msgs[0], "Serving Frozen Eleganza, Bundle Up");
    assert!(msgs[1].to_lowercase().contains("snow"));
}
