//! Weather string parser
//!
//! Turns a free-text weather description into a [`ParsedWeather`].

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Substrings that mark an entry as rainy (matched case-insensitively)
pub const RAIN_KEYWORDS: &[&str] = &["rain", "drizzle", "shower", "thunderstorm", "🌧", "⛈"];

static TEMPERATURE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(-?\d+)°").ok());

static HUMIDITY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)%\s*humidity").ok());

// Temperature token, optional "C", optional separating comma, then the label
// up to the next comma or digit.
static CONDITION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"-?\d+°C?\s*,?\s*([^,\d]*)").ok());

/// Fields extracted from a weather description
///
/// Every field is independent: a missing temperature says nothing about
/// humidity or rain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedWeather {
    /// Temperature in degrees Celsius
    pub temperature_celsius: Option<i32>,
    /// Relative humidity, 0-100
    pub humidity_percent: Option<u8>,
    /// Whether the text mentions any rain keyword
    pub is_raining: bool,
    /// Free-text condition following the temperature (e.g. "light rain")
    pub condition_label: Option<String>,
}

impl ParsedWeather {
    /// Label used when grouping entries by condition
    ///
    /// Falls back to `"rainy"` or `"unknown"` when no label was parsed.
    pub fn condition_or_fallback(&self) -> &str {
        match self.condition_label.as_deref() {
            Some(label) => label,
            None if self.is_raining => "rainy",
            None => "unknown",
        }
    }
}

/// Parse a weather description
///
/// Never fails; fields whose pattern does not match (or whose digits do not
/// fit the target integer) are left as `None`. The condition label is only
/// taken when a temperature was parsed.
pub fn parse_weather(text: &str) -> ParsedWeather {
    let temperature_celsius = first_capture(&TEMPERATURE, text).and_then(|t| t.parse().ok());

    let humidity_percent = first_capture(&HUMIDITY, text)
        .and_then(|h| h.parse::<u8>().ok())
        .filter(|h| *h <= 100);

    let lower = text.to_lowercase();
    let is_raining = RAIN_KEYWORDS.iter().any(|kw| lower.contains(kw));

    // A label only exists relative to a usable temperature
    let condition_label = temperature_celsius
        .and(first_capture(&CONDITION, text))
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string);

    ParsedWeather {
        temperature_celsius,
        humidity_percent,
        is_raining,
        condition_label,
    }
}

fn first_capture<'t>(pattern: &LazyLock<Option<Regex>>, text: &'t str) -> Option<&'t str> {
    let re = pattern.as_ref()?;
    re.captures(text)?.get(1).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_description() {
        let parsed = parse_weather("18°C, light rain, 72% humidity");
        assert_eq!(parsed.temperature_celsius, Some(18));
        assert_eq!(parsed.humidity_percent, Some(72));
        assert!(parsed.is_raining);
        assert_eq!(parsed.condition_label.as_deref(), Some("light rain"));
    }

    #[test]
    fn test_parse_negative_temperature() {
        let parsed = parse_weather("-4°C, snow");
        assert_eq!(parsed.temperature_celsius, Some(-4));
        assert_eq!(parsed.condition_label.as_deref(), Some("snow"));
        assert!(!parsed.is_raining);
    }

    #[test]
    fn test_parse_without_celsius_suffix() {
        let parsed = parse_weather("21° sunny");
        assert_eq!(parsed.temperature_celsius, Some(21));
        assert_eq!(parsed.condition_label.as_deref(), Some("sunny"));
    }

    #[test]
    fn test_label_stops_at_digit() {
        let parsed = parse_weather("12°C overcast 80% humidity");
        assert_eq!(parsed.condition_label.as_deref(), Some("overcast"));
        assert_eq!(parsed.humidity_percent, Some(80));
    }

    #[test]
    fn test_humidity_case_insensitive() {
        assert_eq!(parse_weather("65%HUMIDITY").humidity_percent, Some(65));
        assert_eq!(parse_weather("65 %  humidity").humidity_percent, None);
        assert_eq!(parse_weather("40%   Humidity").humidity_percent, Some(40));
    }

    #[test]
    fn test_humidity_out_of_range_is_absent() {
        assert_eq!(parse_weather("150% humidity").humidity_percent, None);
        assert_eq!(parse_weather("9999% humidity").humidity_percent, None);
    }

    #[test]
    fn test_rain_keywords() {
        assert!(parse_weather("Thunderstorms expected").is_raining);
        assert!(parse_weather("DRIZZLE").is_raining);
        assert!(parse_weather("passing showers").is_raining);
        assert!(parse_weather("🌧").is_raining);
        assert!(!parse_weather("sunny and dry").is_raining);
    }

    #[test]
    fn test_invalid_string_leaves_everything_absent() {
        let parsed = parse_weather("invalid-weather-string");
        assert_eq!(parsed, ParsedWeather::default());
        assert_eq!(parsed.condition_or_fallback(), "unknown");
    }

    #[test]
    fn test_temperature_only_has_no_label() {
        let parsed = parse_weather("15°C");
        assert_eq!(parsed.temperature_celsius, Some(15));
        assert_eq!(parsed.condition_label, None);
    }

    #[test]
    fn test_rainy_fallback_label() {
        let parsed = parse_weather("rain all day");
        assert_eq!(parsed.condition_label, None);
        assert_eq!(parsed.condition_or_fallback(), "rainy");
    }

    #[test]
    fn test_overflowing_temperature_is_absent() {
        let parsed = parse_weather("99999999999999°C, hot");
        assert_eq!(parsed.temperature_celsius, None);
        assert_eq!(parsed.condition_label, None);
    }

    #[test]
    fn test_first_temperature_wins() {
        let parsed = parse_weather("3°C, frost, later 9°C");
        assert_eq!(parsed.temperature_celsius, Some(3));
        assert_eq!(parsed.condition_label.as_deref(), Some("frost"));
    }
}
