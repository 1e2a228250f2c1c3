//! Analysis thresholds
//!
//! Every cut-off used by the weather correlation analysis lives here so it can
//! be tuned from the `[analysis]` config table. The defaults are the values the
//! journal dashboard has always used; they are heuristics on raw average pain
//! differences, not statistical significance levels.

use serde::{Deserialize, Serialize};

/// Cut-offs for partitioning entries and classifying factor results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Weather-annotated entries required before a report is produced
    pub min_weather_entries: usize,
    /// Members required in both the with-factor and without-factor groups
    pub min_group_size: usize,
    /// Temperatures strictly below this are cold
    pub cold_below_celsius: i32,
    /// Inclusive upper bound of the mild baseline compared against cold days
    pub mild_max_celsius: i32,
    /// Humidity at or above this is high
    pub high_humidity_percent: u8,
    /// |diff| must exceed this for a positive/negative direction
    pub direction_band: f64,
    /// |diff| must exceed this for the narrative to report an effect
    pub narrative_band: f64,
    pub weak_difference: f64,
    pub moderate_difference: f64,
    pub strong_difference: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_weather_entries: 3,
            min_group_size: 2,
            cold_below_celsius: 10,
            mild_max_celsius: 25,
            high_humidity_percent: 70,
            direction_band: 0.3,
            narrative_band: 0.5,
            weak_difference: 0.5,
            moderate_difference: 1.0,
            strong_difference: 2.0,
        }
    }
}
