//! Threshold tables that turn numbers into commentary.
//!
//! Each table is ordered from the highest lower bound down. The first band whose
//! bound the value reaches wins, and values under every bound (NaN included) get
//! the table's floor phrase, so every finite input has a description.

use chrono::Weekday;

use crate::codes::{classify, ConditionCategory};

struct Bands {
    steps: &'static [(f64, &'static str)],
    floor: &'static str,
}

impl Bands {
    fn pick(&self, value: f64) -> &'static str {
        self.steps
            .iter()
            .find(|(bound, _)| value >= *bound)
            .map(|(_, phrase)| *phrase)
            .unwrap_or(self.floor)
    }
}

const TEMPERATURE: Bands = Bands {
    steps: &[
        (90.0, "Hotter Than a Tucked Behind"),
        (80.0, "Your Wig is Melting, Sis"),
        (45.0, "Cute & Comfy, Queen"),
    ],
    floor: "Serving Frozen Eleganza, Bundle Up",
};

const FEELS_LIKE: Bands = Bands {
    steps: &[
        (100.0, "Feels Like the Devil's Own Dressing Room"),
        (85.0, "Feels Like a Spotlight on Full Blast"),
        (65.0, "Feels Like Perfection, Darling"),
        (45.0, "Feels Like Light-Jacket Couture"),
        (32.0, "Feels Like a Cold Shoulder From Your Ex"),
    ],
    floor: "Feels Like an Ice Queen's Stare",
};

const HUMIDITY: Bands = Bands {
    steps: &[
        (80.0, "Humidity So High It's Giving Frizz"),
        (60.0, "Edges Are Under Attack, Pack the Gel"),
        (40.0, "Hair Is Laid and the Air Is Behaving"),
        (20.0, "Crisp Enough to Set a Wig"),
    ],
    floor: "Desert Drag Realness, Moisturize Hunty",
};

const PRECIPITATION: Bands = Bands {
    steps: &[
        (80.0, "Umbrella Is Tonight's Main Accessory"),
        (60.0, "Rain Is Auditioning, Bring Cover"),
        (30.0, "Might Spit, Keep a Poncho in the Clutch"),
        (10.0, "A Little Mist Never Ruined a Look"),
    ],
    floor: "Dry as Her Sense of Humor",
};

const WIND: Bands = Bands {
    steps: &[
        (40.0, "Wig Snatched by Mother Nature Herself"),
        (25.0, "Hold On to Your Lace Front"),
        (15.0, "Free Wind Machine, Work the Angles"),
        (5.0, "Gentle Breeze, Music Video Hair"),
    ],
    floor: "Still Air, Not a Strand Out of Place",
};

const DAILY_TEMPERATURE: Bands = Bands {
    steps: &[
        (90.0, "Still a Sweaty Mess, Hunty"),
        (50.0, "Serving Pleasant Realness"),
    ],
    floor: "Chilly Tea, Layer Up",
};

pub fn temperature_phrase(temp_f: f64) -> &'static str {
    TEMPERATURE.pick(temp_f)
}

pub fn feels_like_phrase(apparent_f: f64) -> &'static str {
    FEELS_LIKE.pick(apparent_f)
}

pub fn humidity_phrase(percent: f64) -> &'static str {
    HUMIDITY.pick(percent)
}

pub fn precipitation_phrase(percent: f64) -> &'static str {
    PRECIPITATION.pick(percent)
}

pub fn wind_phrase(mph: f64) -> &'static str {
    WIND.pick(mph)
}

/// One line about the sky itself
pub fn condition_phrase(category: ConditionCategory) -> &'static str {
    match category {
        ConditionCategory::Thunderstorm => "Thunder & Drama Incoming",
        ConditionCategory::Drizzle | ConditionCategory::Rain => {
            "Humidity So High It's Giving Frizz"
        }
        ConditionCategory::Snow => "Snow Day Slay, Faux Fur Mandatory",
        ConditionCategory::Fog => "Foggy Mystique, Free Smoke Machine",
        ConditionCategory::Cloud => "Overcast but Still Overdressed",
        ConditionCategory::Clear => "Flawless Skies, Werk!",
        ConditionCategory::Unknown => "Mystery Weather, Serve Anyway",
    }
}

/// Tile phrase for a day. Severe categories always beat the temperature read:
/// thunderstorm, then rain (drizzle included), then snow, then fog.
pub fn daily_phrase(high_f: f64, code: i32) -> &'static str {
    match classify(code) {
        ConditionCategory::Thunderstorm => "Possible Thunder & Drama",
        ConditionCategory::Drizzle | ConditionCategory::Rain => {
            "Humidity So High It's Giving Frizz"
        }
        ConditionCategory::Snow => "Snow Queen Realness, Freezing Cold Glam",
        ConditionCategory::Fog => "Foggy Mystique, Serve It Anyway",
        _ => DAILY_TEMPERATURE.pick(high_f),
    }
}

/// The four headline messages for the current conditions: temperature vibe,
/// sky, comfort, makeup
pub fn drag_messages(temp_f: f64, code: i32) -> [&'static str; 4] {
    let category = classify(code);

    let comfort = if temp_f >= 88.0 {
        "Sweating Like a Sinner in Church"
    } else {
        "Keep It Cute, Hydrate"
    };

    let makeup = if temp_f >= 92.0 || category.is_wet() {
        "Makeup Meltdown Realness"
    } else {
        "Beat Stays Put, Diva"
    };

    [
        temperature_phrase(temp_f),
        condition_phrase(category),
        comfort,
        makeup,
    ]
}

pub fn drag_weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mani Monday",
        Weekday::Tue => "Tuck Tuesday",
        Weekday::Wed => "Wig Wednesday",
        Weekday::Thu => "Throwback Thirstday",
        Weekday::Fri => "Fierce Friday",
        Weekday::Sat => "Slay-turday",
        Weekday::Sun => "Sunday Brunch-day",
    }
}

/// Themed take on the WMO description for a code
pub fn drag_description(code: i32) -> &'static str {
    match code {
        0 => "Clear Skies, Clear Skin",
        1 => "Mostly Clear, Mostly Flawless",
        2 => "Partly Cloudy, Partly Shady",
        3 => "Overcast, Like Her Personality",
        45 => "Fog Machine Turned All the Way Up",
        48 => "Frosty Fog, Icy Entrance",
        51 => "Light Drizzle, Setting Spray Weather",
        53 => "Drizzle With Commitment Issues",
        55 => "Dense Drizzle, Lashes at Risk",
        56 => "Freezing Drizzle, Glazed Like a Donut",
        57 => "Heavy Freezing Drizzle, Slippery Runway",
        61 => "A Little Rain, a Little Drama",
        63 => "Moderate Rain, Waterproof Mascara Only",
        65 => "Heavy Rain, Full Soak Fantasy",
        66 => "Freezing Rain, Ice Ice Baby",
        67 => "Heavy Freezing Rain, Stay Home and Contour",
        71 => "Slight Snow, Powdered Like a Beat Face",
        73 => "Moderate Snow, Winter Wonderland Couture",
        75 => "Heavy Snow, Snowed In and Still Serving",
        77 => "Snow Grains, Glitter From the Heavens",
        80 => "Passing Showers, Quick Change Moment",
        81 => "Rain Showers, Surprise Reveal",
        82 => "Violent Showers, Death Drop Downpour",
        85 => "Snow Showers, Tossing Fake Snow on the Crowd",
        86 => "Heavy Snow Showers, Blizzard Ballroom",
        95 => "Thunderstorm, the Sky Is Lip Syncing for Its Life",
        96 => "Thunderstorm With Hail, Rhinestones Falling",
        99 => "Thunderstorm With Heavy Hail, Sashay Away Indoors",
        _ => "Weather Unknown, Serve Mystery",
    }
}
