use serde::{Deserialize, Serialize};

use crate::codes::{classify, is_snow, ConditionCategory};

/// Extra context for picking a glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IconContext {
    pub is_night: bool,
}

impl IconContext {
    pub fn night() -> Self {
        Self { is_night: true }
    }

    pub fn day() -> Self {
        Self { is_night: false }
    }

    /// Night runs from 18:00 to 05:59 local time
    pub fn from_hour(hour: u32) -> Self {
        Self {
            is_night: is_night_hour(hour),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconId {
    ClearDay,
    ClearNight,
    Cloud,
    Fog,
    Rain,
    Snow,
    Thunderstorm,
    Sparkles,
}

impl IconId {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::ClearDay => "\u{2600}\u{fe0f}",
            Self::ClearNight => "\u{1f319}",
            Self::Cloud => "\u{26c5}",
            Self::Fog => "\u{1f32b}\u{fe0f}",
            Self::Rain => "\u{1f327}\u{fe0f}",
            Self::Snow => "\u{2744}\u{fe0f}",
            Self::Thunderstorm => "\u{26c8}\u{fe0f}",
            Self::Sparkles => "\u{2728}",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::ClearDay => "clear-day",
            Self::ClearNight => "clear-night",
            Self::Cloud => "cloud",
            Self::Fog => "fog",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Thunderstorm => "thunderstorm",
            Self::Sparkles => "sparkles",
        }
    }
}

/// Picks the glyph for a category. Only clear skies have a night variant;
/// everything else ignores the context.
pub fn icon_for(category: ConditionCategory, context: Option<IconContext>) -> IconId {
    let is_night = context.map(|c| c.is_night).unwrap_or(false);

    match category {
        ConditionCategory::Clear if is_night => IconId::ClearNight,
        ConditionCategory::Clear => IconId::ClearDay,
        ConditionCategory::Cloud => IconId::Cloud,
        ConditionCategory::Fog => IconId::Fog,
        ConditionCategory::Drizzle | ConditionCategory::Rain => IconId::Rain,
        ConditionCategory::Snow => IconId::Snow,
        ConditionCategory::Thunderstorm => IconId::Thunderstorm,
        ConditionCategory::Unknown => IconId::Sparkles,
    }
}

/// Shortcut from a raw code straight to its glyph
pub fn emoji_for_code(code: i32, context: Option<IconContext>) -> &'static str {
    icon_for(classify(code), context).glyph()
}

pub fn is_night_hour(hour: u32) -> bool {
    hour < 6 || hour >= 18
}

/// Marker shown next to a precipitation percentage
pub fn precipitation_glyph(code: i32) -> &'static str {
    if is_snow(code) {
        "\u{2744}\u{fe0f}"
    } else {
        "\u{1f4a7}"
    }
}
