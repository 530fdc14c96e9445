use serde::Serialize;
use strum::{Display, EnumIter};

/// Visual category derived from a WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WeatherCategory {
    Clear,
    PartlyCloudy,
    Fog,
    Rain,
    Snow,
    Thunderstorm,
}

impl WeatherCategory {
    /// Short description used for the icon's alternative text.
    pub fn alt_text(&self) -> &'static str {
        match self {
            WeatherCategory::Clear => "Clear sky",
            WeatherCategory::PartlyCloudy => "Partly cloudy",
            WeatherCategory::Fog => "Fog or mist",
            WeatherCategory::Rain => "Rainy conditions",
            WeatherCategory::Snow => "Snowy weather",
            WeatherCategory::Thunderstorm => "Thunderstorm",
        }
    }
}

/// Alternative text for a weather code. Codes that only reach
/// [`WeatherCategory::PartlyCloudy`] through the fallback read "Mixed cloud cover".
pub fn alt_text_for_code(code: i32) -> &'static str {
    match classify(code) {
        WeatherCategory::PartlyCloudy if !(1..=3).contains(&code) => "Mixed cloud cover",
        category => category.alt_text(),
    }
}

/// Map a weather code to its category.
///
/// Total over `i32`: codes outside the known ranges fall back to
/// [`WeatherCategory::PartlyCloudy`].
/// See: https://open-meteo.com/en/docs#weathervariables
pub fn classify(code: i32) -> WeatherCategory {
    match code {
        0 => WeatherCategory::Clear,
        1..=3 => WeatherCategory::PartlyCloudy,
        45 | 48 => WeatherCategory::Fog,
        51..=67 | 80..=82 => WeatherCategory::Rain,
        71..=77 => WeatherCategory::Snow,
        95.. => WeatherCategory::Thunderstorm,
        _ => WeatherCategory::PartlyCloudy,
    }
}
