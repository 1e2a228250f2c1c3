//! Weather factors
//!
//! Each [`WeatherFactor`] splits the parsed entries into a "with" group and a
//! "without" group and compares their average pain. Entries missing the field
//! a factor looks at sit out that factor entirely.

use super::thresholds::Thresholds;
use crate::stats;
use crate::weather::ParsedWeather;
use serde::Serialize;
use std::fmt;

/// A parsed weather description paired with the pain reported alongside it
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub weather: ParsedWeather,
    pub pain_score: f64,
}

/// Weather dimensions compared against pain, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WeatherFactor {
    #[serde(rename = "Cold Weather")]
    Cold,
    #[serde(rename = "Rain/Precipitation")]
    Rain,
    #[serde(rename = "High Humidity")]
    HighHumidity,
}

impl WeatherFactor {
    /// All factors in report order
    pub fn all() -> &'static [WeatherFactor] {
        &[
            WeatherFactor::Cold,
            WeatherFactor::Rain,
            WeatherFactor::HighHumidity,
        ]
    }

    /// Display name used in reports
    pub fn name(&self) -> &'static str {
        match self {
            WeatherFactor::Cold => "Cold Weather",
            WeatherFactor::Rain => "Rain/Precipitation",
            WeatherFactor::HighHumidity => "High Humidity",
        }
    }

    /// Which side of the comparison an observation falls on
    ///
    /// `Some(true)` is the with-factor group, `Some(false)` the baseline and
    /// `None` means the observation is excluded from this factor.
    pub fn classify(&self, weather: &ParsedWeather, t: &Thresholds) -> Option<bool> {
        match self {
            WeatherFactor::Cold => {
                let temp = weather.temperature_celsius?;
                if temp < t.cold_below_celsius {
                    Some(true)
                } else if temp <= t.mild_max_celsius {
                    Some(false)
                } else {
                    None
                }
            }
            WeatherFactor::Rain => Some(weather.is_raining),
            WeatherFactor::HighHumidity => weather
                .humidity_percent
                .map(|h| h >= t.high_humidity_percent),
        }
    }

    /// Sentence describing the effect of this factor
    pub fn narrative(&self, diff: f64, t: &Thresholds) -> String {
        let magnitude = diff.abs();

        if diff > t.narrative_band {
            format!("{} increases pain by {:.1} points", self.name(), magnitude)
        } else if diff < -t.narrative_band {
            match self {
                WeatherFactor::Cold => {
                    format!("Pain is {:.1} points lower on cold days", magnitude)
                }
                WeatherFactor::Rain => {
                    format!("Rainy days bring {:.1} points of relief", magnitude)
                }
                WeatherFactor::HighHumidity => {
                    format!("High humidity eases pain by {:.1} points", magnitude)
                }
            }
        } else {
            match self {
                WeatherFactor::Cold => "Temperature has minimal impact on pain".to_string(),
                WeatherFactor::Rain => "Rain has minimal impact on pain".to_string(),
                WeatherFactor::HighHumidity => "Humidity has minimal impact on pain".to_string(),
            }
        }
    }

    /// Compare the with-factor and baseline groups
    ///
    /// Returns `None` when either group is smaller than `min_group_size`.
    pub fn evaluate(
        &self,
        observations: &[Observation],
        t: &Thresholds,
    ) -> Option<CorrelationFactorResult> {
        let mut with = Vec::new();
        let mut without = Vec::new();

        for obs in observations {
            match self.classify(&obs.weather, t) {
                Some(true) => with.push(obs.pain_score),
                Some(false) => without.push(obs.pain_score),
                None => {}
            }
        }

        if with.len() < t.min_group_size || without.len() < t.min_group_size {
            tracing::debug!(
                factor = %self,
                with = with.len(),
                without = without.len(),
                "Skipping factor with too few samples"
            );
            return None;
        }

        let avg_with = stats::mean(&with)?;
        let avg_without = stats::mean(&without)?;
        let diff = avg_with - avg_without;

        Some(CorrelationFactorResult {
            factor: *self,
            direction: Direction::classify(diff, t),
            strength: Strength::classify(diff, t),
            avg_pain_with_factor: avg_with,
            avg_pain_without_factor: avg_without,
            sample_size: with.len() + without.len(),
            narrative: self.narrative(diff, t),
        })
    }
}

impl fmt::Display for WeatherFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a factor goes with more or less pain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Positive,
    Negative,
    Neutral,
}

impl Direction {
    /// Classify an average pain difference; the band itself is neutral
    pub fn classify(diff: f64, t: &Thresholds) -> Self {
        if diff > t.direction_band {
            Direction::Positive
        } else if diff < -t.direction_band {
            Direction::Negative
        } else {
            Direction::Neutral
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Positive => write!(f, "positive"),
            Direction::Negative => write!(f, "negative"),
            Direction::Neutral => write!(f, "neutral"),
        }
    }
}

/// Magnitude bucket of an average pain difference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Strong,
    Moderate,
    Weak,
    None,
}

impl Strength {
    /// Classify |diff| against the strength thresholds (inclusive lower edges)
    pub fn classify(diff: f64, t: &Thresholds) -> Self {
        let magnitude = diff.abs();
        if magnitude >= t.strong_difference {
            Strength::Strong
        } else if magnitude >= t.moderate_difference {
            Strength::Moderate
        } else if magnitude >= t.weak_difference {
            Strength::Weak
        } else {
            Strength::None
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Strong => write!(f, "strong"),
            Strength::Moderate => write!(f, "moderate"),
            Strength::Weak => write!(f, "weak"),
            Strength::None => write!(f, "none"),
        }
    }
}

/// Outcome of comparing one factor's groups
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationFactorResult {
    pub factor: WeatherFactor,
    pub direction: Direction,
    pub strength: Strength,
    pub avg_pain_with_factor: f64,
    pub avg_pain_without_factor: f64,
    /// Entries in both groups combined
    pub sample_size: usize,
    pub narrative: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::parse_weather;

    fn obs(weather: &str, pain: f64) -> Observation {
        Observation {
            weather: parse_weather(weather),
            pain_score: pain,
        }
    }

    #[test]
    fn test_cold_classification_bands() {
        let t = Thresholds::default();
        let cold = WeatherFactor::Cold;
        assert_eq!(cold.classify(&parse_weather("-2°C"), &t), Some(true));
        assert_eq!(cold.classify(&parse_weather("9°C"), &t), Some(true));
        assert_eq!(cold.classify(&parse_weather("10°C"), &t), Some(false));
        assert_eq!(cold.classify(&parse_weather("25°C"), &t), Some(false));
        assert_eq!(cold.classify(&parse_weather("26°C"), &t), None);
        assert_eq!(cold.classify(&parse_weather("cloudy"), &t), None);
    }

    #[test]
    fn test_humidity_classification() {
        let t = Thresholds::default();
        let humid = WeatherFactor::HighHumidity;
        assert_eq!(humid.classify(&parse_weather("70% humidity"), &t), Some(true));
        assert_eq!(humid.classify(&parse_weather("69% humidity"), &t), Some(false));
        assert_eq!(humid.classify(&parse_weather("muggy"), &t), None);
    }

    #[test]
    fn test_rain_always_classified() {
        let t = Thresholds::default();
        assert_eq!(WeatherFactor::Rain.classify(&parse_weather("rain"), &t), Some(true));
        assert_eq!(WeatherFactor::Rain.classify(&parse_weather("???"), &t), Some(false));
    }

    #[test]
    fn test_direction_boundaries_are_strict() {
        let t = Thresholds::default();
        assert_eq!(Direction::classify(0.3, &t), Direction::Neutral);
        assert_eq!(Direction::classify(-0.3, &t), Direction::Neutral);
        assert_eq!(Direction::classify(0.31, &t), Direction::Positive);
        assert_eq!(Direction::classify(-0.31, &t), Direction::Negative);
        assert_eq!(Direction::classify(f64::NAN, &t), Direction::Neutral);
    }

    #[test]
    fn test_strength_boundaries_are_inclusive() {
        let t = Thresholds::default();
        assert_eq!(Strength::classify(2.0, &t), Strength::Strong);
        assert_eq!(Strength::classify(-1.0, &t), Strength::Moderate);
        assert_eq!(Strength::classify(0.5, &t), Strength::Weak);
        assert_eq!(Strength::classify(0.49, &t), Strength::None);
        assert_eq!(Strength::classify(0.3, &t), Strength::None);
    }

    #[test]
    fn test_narrative_branches() {
        let t = Thresholds::default();
        assert_eq!(
            WeatherFactor::Cold.narrative(2.46, &t),
            "Cold Weather increases pain by 2.5 points"
        );
        assert_eq!(
            WeatherFactor::Rain.narrative(-1.2, &t),
            "Rainy days bring 1.2 points of relief"
        );
        assert_eq!(
            WeatherFactor::HighHumidity.narrative(0.5, &t),
            "Humidity has minimal impact on pain"
        );
        assert_eq!(
            WeatherFactor::HighHumidity.narrative(-0.5, &t),
            "Humidity has minimal impact on pain"
        );
    }

    #[test]
    fn test_evaluate_requires_both_groups() {
        let t = Thresholds::default();
        let observations = vec![
            obs("rain", 7.0),
            obs("sunny", 3.0),
            obs("clear", 2.0),
            obs("dry", 4.0),
        ];
        assert!(WeatherFactor::Rain.evaluate(&observations, &t).is_none());
    }

    #[test]
    fn test_evaluate_rain() {
        let t = Thresholds::default();
        let observations = vec![
            obs("rain", 7.0),
            obs("drizzle", 5.0),
            obs("sunny", 3.0),
            obs("clear", 2.0),
        ];

        let result = WeatherFactor::Rain.evaluate(&observations, &t).unwrap();
        assert_eq!(result.avg_pain_with_factor, 6.0);
        assert_eq!(result.avg_pain_without_factor, 2.5);
        assert_eq!(result.sample_size, 4);
        assert_eq!(result.direction, Direction::Positive);
        assert_eq!(result.strength, Strength::Strong);
        assert_eq!(result.narrative, "Rain/Precipitation increases pain by 3.5 points");
    }

    #[test]
    fn test_factor_serializes_with_display_name() {
        let json = serde_json::to_string(&WeatherFactor::Rain).unwrap();
        assert_eq!(json, "\"Rain/Precipitation\"");
        let json = serde_json::to_string(&Strength::None).unwrap();
        assert_eq!(json, "\"none\"");
    }
}
