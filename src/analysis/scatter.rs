//! Temperature/pain scatter series
//!
//! Data behind the scatter view: one point per entry with a parsed
//! temperature, the fitted trend line and the spread of pain scores.

use super::analyzer::observations;
use crate::journal::{JournalEntry, MAX_PAIN_SCORE, MIN_PAIN_SCORE};
use crate::stats::{self, HistogramBin, Regression};
use serde::Serialize;

/// Number of unit-wide pain histogram buckets
const PAIN_BINS: usize = 10;

/// A single plotted entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub temperature_celsius: i32,
    pub pain_score: f64,
}

/// Temperature against pain, with summary statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub points: Vec<ScatterPoint>,
    /// Pearson coefficient between temperature and pain
    pub correlation: f64,
    /// Trend line; absent when every point shares one temperature
    pub regression: Option<Regression>,
    pub pain_histogram: Vec<HistogramBin>,
}

/// Build the temperature/pain series, or `None` with fewer than two points
pub fn temperature_scatter(entries: &[JournalEntry]) -> Option<ScatterSeries> {
    let points: Vec<ScatterPoint> = observations(entries)
        .into_iter()
        .filter_map(|obs| {
            obs.weather.temperature_celsius.map(|t| ScatterPoint {
                temperature_celsius: t,
                pain_score: obs.pain_score,
            })
        })
        .collect();

    if points.len() < 2 {
        tracing::debug!(points = points.len(), "Too few temperature readings to plot");
        return None;
    }

    let temps: Vec<f64> = points.iter().map(|p| f64::from(p.temperature_celsius)).collect();
    let pains: Vec<f64> = points.iter().map(|p| p.pain_score).collect();

    Some(ScatterSeries {
        correlation: stats::pearson_correlation(&temps, &pains),
        regression: stats::linear_regression(&temps, &pains),
        pain_histogram: stats::histogram(&pains, PAIN_BINS, MIN_PAIN_SCORE, MAX_PAIN_SCORE),
        points,
    })
}
