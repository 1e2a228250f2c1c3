//! Weather/Pain Analysis
//!
//! Turns journal entries into the numbers the weather dashboard shows.
//!
//! - **analyzer**: [`WeatherCorrelationAnalyzer`] and the [`AnalysisReport`] it builds
//! - **factors**: per-factor partitioning, scoring and narratives
//! - **thresholds**: tunable cut-offs
//! - **scatter**: temperature/pain series for the scatter view
//!
//! # Pipeline
//!
//! ```text
//!   JournalEntry[] → parse weather text → Observation[]
//!       → per factor: with/without groups → CorrelationFactorResult
//!       → per condition label: count + mean pain → WeatherBreakdownEntry
//! ```
//!
//! # Example
//!
//! ```rust
//! use painlog::analysis::analyze;
//! use painlog::journal::JournalEntry;
//!
//! let entries = vec![
//!     JournalEntry::new(8.0).weather("5°C, light rain"),
//!     JournalEntry::new(7.0).weather("6°C, rain"),
//!     JournalEntry::new(3.0).weather("20°C, sunny"),
//!     JournalEntry::new(2.0).weather("22°C, clear"),
//! ];
//!
//! let report = analyze(&entries).expect("enough weather data");
//! assert_eq!(report.coverage_percent, 100);
//! ```

mod analyzer;
mod factors;
mod scatter;
mod thresholds;

pub use analyzer::{
    analyze, coverage_percent, observations, AnalysisReport, WeatherBreakdownEntry,
    WeatherCorrelationAnalyzer,
};
pub use factors::{CorrelationFactorResult, Direction, Observation, Strength, WeatherFactor};
pub use scatter::{temperature_scatter, ScatterPoint, ScatterSeries};
pub use thresholds::Thresholds;
