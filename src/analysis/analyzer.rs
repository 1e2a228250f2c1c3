//! Weather Correlation Analyzer
//!
//! Compares average pain on days with and without each weather factor and
//! groups entries by the condition named in their weather text.

use super::factors::{CorrelationFactorResult, Observation, WeatherFactor};
use super::thresholds::Thresholds;
use crate::journal::JournalEntry;
use crate::weather::parse_weather;
use serde::Serialize;
use std::collections::HashMap;

/// Pain statistics for one weather condition label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherBreakdownEntry {
    /// Parsed condition, or "rainy"/"unknown" when none was found
    pub condition: String,
    pub count: usize,
    pub average_pain: f64,
}

/// Full weather/pain analysis over a journal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub total_entries: usize,
    pub entries_with_weather: usize,
    /// Share of entries carrying weather text, rounded to a whole percent
    pub coverage_percent: u32,
    /// Factors with enough samples, in cold, rain, humidity order
    pub correlations: Vec<CorrelationFactorResult>,
    /// Conditions sorted by descending average pain
    pub weather_breakdown: Vec<WeatherBreakdownEntry>,
}

/// Analyze weather/pain correlations with the default thresholds
///
/// Shorthand for `WeatherCorrelationAnalyzer::default().analyze(entries)`.
pub fn analyze(entries: &[JournalEntry]) -> Option<AnalysisReport> {
    WeatherCorrelationAnalyzer::default().analyze(entries)
}

/// Weather/pain correlation analysis
///
/// Holds only its thresholds; every call to [`analyze`](Self::analyze) starts
/// from scratch, so one analyzer can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct WeatherCorrelationAnalyzer {
    thresholds: Thresholds,
}

impl WeatherCorrelationAnalyzer {
    /// Create an analyzer with custom thresholds
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds in use
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Produce a report, or `None` when too few entries carry weather text
    pub fn analyze(&self, entries: &[JournalEntry]) -> Option<AnalysisReport> {
        let observations = observations(entries);

        if observations.len() < self.thresholds.min_weather_entries {
            tracing::debug!(
                entries = entries.len(),
                with_weather = observations.len(),
                required = self.thresholds.min_weather_entries,
                "Insufficient weather data for correlation analysis"
            );
            return None;
        }

        let correlations: Vec<CorrelationFactorResult> = WeatherFactor::all()
            .iter()
            .filter_map(|factor| factor.evaluate(&observations, &self.thresholds))
            .collect();

        let report = AnalysisReport {
            total_entries: entries.len(),
            entries_with_weather: observations.len(),
            coverage_percent: coverage_percent(observations.len(), entries.len()),
            correlations,
            weather_breakdown: weather_breakdown(&observations),
        };

        tracing::debug!(
            entries = report.total_entries,
            coverage = report.coverage_percent,
            factors = report.correlations.len(),
            conditions = report.weather_breakdown.len(),
            "Weather correlation analysis complete"
        );

        Some(report)
    }
}

/// Parse every entry that carries weather text, keeping journal order
pub fn observations(entries: &[JournalEntry]) -> Vec<Observation> {
    entries
        .iter()
        .filter_map(|entry| {
            entry.weather_text().map(|text| Observation {
                weather: parse_weather(text),
                pain_score: entry.pain_score,
            })
        })
        .collect()
}

/// Rounded percentage of entries with weather; 0 for an empty journal
pub fn coverage_percent(with_weather: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (with_weather as f64 / total as f64 * 100.0).round() as u32
}

/// Group observations by condition label, highest average pain first
///
/// Labels with equal averages keep the order they first appeared in.
fn weather_breakdown(observations: &[Observation]) -> Vec<WeatherBreakdownEntry> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, usize, f64)> = Vec::new();

    for obs in observations {
        let label = obs.weather.condition_or_fallback();
        let slot = *index.entry(label).or_insert_with(|| {
            groups.push((label, 0, 0.0));
            groups.len() - 1
        });
        groups[slot].1 += 1;
        groups[slot].2 += obs.pain_score;
    }

    let mut breakdown: Vec<WeatherBreakdownEntry> = groups
        .into_iter()
        .map(|(label, count, total)| WeatherBreakdownEntry {
            condition: label.to_string(),
            count,
            average_pain: total / count as f64,
        })
        .collect();

    breakdown.sort_by(|a, b| {
        b.average_pain
            .partial_cmp(&a.average_pain)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    breakdown
}
