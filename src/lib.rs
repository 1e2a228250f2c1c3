//! # Painlog
//!
//! Pain journal analytics: finds out whether weather goes along with the pain
//! recorded in a personal pain journal.
//!
//! ## Features
//!
//! - **Weather parsing**: pulls temperature, humidity, rain and a condition
//!   label out of free-text weather notes
//! - **Correlation report**: compares average pain with and without cold,
//!   rain and high humidity, and breaks pain down by condition
//! - **Scatter data**: temperature/pain points with a trend line and histogram
//! - **Import**: journal entries from CSV exports or JSON dumps
//!
//! ## Modules
//!
//! - [`weather`]: Weather text parser
//! - [`analysis`]: Correlation analyzer and scatter series
//! - [`journal`]: Journal entries and importers
//! - [`stats`]: Numeric helpers
//! - [`config`]: TOML configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use painlog::journal::JournalImporter;
//! use painlog::analysis::WeatherCorrelationAnalyzer;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let imported = JournalImporter::new().import_path(Path::new("journal.csv"))?;
//!
//!     match WeatherCorrelationAnalyzer::default().analyze(&imported.entries) {
//!         Some(report) => {
//!             for factor in &report.correlations {
//!                 println!("{}: {}", factor.factor, factor.narrative);
//!             }
//!         }
//!         None => println!("Not enough weather data yet"),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod config;
pub mod journal;
pub mod stats;
pub mod weather;

// Re-export top-level types for convenience
pub use analysis::{
    analyze, temperature_scatter, AnalysisReport, CorrelationFactorResult, Direction,
    ScatterSeries, Strength, Thresholds, WeatherBreakdownEntry, WeatherCorrelationAnalyzer,
    WeatherFactor,
};

pub use config::{Config, ConfigError, ImportConfig, LoggingConfig};

pub use journal::{ImportResult, JournalEntry, JournalError, JournalImporter, JournalResult};

pub use weather::{parse_weather, ParsedWeather};
