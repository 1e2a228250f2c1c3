//! Journal entry type
//!
//! A [`JournalEntry`] is the read-only input to every analysis in this crate.
//! Only the pain score and the weather text matter to the analysis; the
//! timestamp is carried so imported entries keep their order and provenance.

use serde::{Deserialize, Serialize};

/// Lowest pain score on the journal scale
pub const MIN_PAIN_SCORE: f64 = 0.0;

/// Highest pain score on the journal scale
pub const MAX_PAIN_SCORE: f64 = 10.0;

/// A single pain journal entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalEntry {
    /// Unix timestamp in milliseconds, when known
    #[serde(default)]
    pub timestamp: Option<i64>,
    /// Self-reported pain, 0 (none) to 10 (worst)
    pub pain_score: f64,
    /// Free-text weather description, e.g. "18°C, light rain, 72% humidity"
    #[serde(default)]
    pub weather: Option<String>,
}

impl JournalEntry {
    /// Create an entry with no weather annotation
    pub fn new(pain_score: f64) -> Self {
        Self {
            timestamp: None,
            pain_score,
            weather: None,
        }
    }

    /// Builder method: set weather text
    pub fn weather(mut self, weather: impl Into<String>) -> Self {
        self.weather = Some(weather.into());
        self
    }

    /// Builder method: set timestamp
    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Weather text, if present and not blank
    pub fn weather_text(&self) -> Option<&str> {
        self.weather
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
    }

    /// Whether this entry carries any weather annotation
    pub fn has_weather(&self) -> bool {
        self.weather_text().is_some()
    }

    /// Whether the pain score lies on the 0-10 scale
    pub fn pain_in_range(&self) -> bool {
        (MIN_PAIN_SCORE..=MAX_PAIN_SCORE).contains(&self.pain_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_weather_is_absent() {
        assert!(!JournalEntry::new(4.0).has_weather());
        assert!(!JournalEntry::new(4.0).weather("").has_weather());
        assert!(!JournalEntry::new(4.0).weather("   ").has_weather());
        assert!(JournalEntry::new(4.0).weather("sunny").has_weather());
    }

    #[test]
    fn test_weather_text_is_trimmed() {
        let entry = JournalEntry::new(4.0).weather("  10°C, fog ");
        assert_eq!(entry.weather_text(), Some("10°C, fog"));
    }

    #[test]
    fn test_pain_range() {
        assert!(JournalEntry::new(0.0).pain_in_range());
        assert!(JournalEntry::new(10.0).pain_in_range());
        assert!(!JournalEntry::new(10.5).pain_in_range());
        assert!(!JournalEntry::new(-1.0).pain_in_range());
        assert!(!JournalEntry::new(f64::NAN).pain_in_range());
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let entry: JournalEntry = serde_json::from_str(r#"{"pain_score": 6}"#).unwrap();
        assert_eq!(entry, JournalEntry::new(6.0));
    }
}
