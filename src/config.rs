//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use crate::analysis::Thresholds;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: Thresholds,

    #[serde(default)]
    pub import: ImportConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Journal import configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    /// Header of the timestamp column; auto-detected when unset
    pub timestamp_column: Option<String>,

    /// Header of the pain score column; auto-detected when unset
    pub pain_column: Option<String>,

    /// Header of the weather column; auto-detected when unset
    pub weather_column: Option<String>,
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            timestamp_column: None,
            pain_column: None,
            weather_column: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_toml_str(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// The first existing file wins. A file that exists but fails to load is
    /// an error rather than a silent fallback to defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_first_existing(&Self::default_paths())
    }

    /// Candidate config files, in lookup order
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("painlog").join("config.toml")),
            Some(PathBuf::from("./painlog.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load the first of `paths` that exists, or the environment-only config
    pub fn load_first_existing(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        match paths.iter().find(|p| p.exists()) {
            Some(path) => {
                let config = Self::load_with_env(path)?;
                tracing::info!("Loaded config from {:?}", path);
                Ok(config)
            }
            None => {
                tracing::debug!("Using default config with environment overrides");
                Ok(Self::from_env())
            }
        }
    }

    /// Check that the analysis thresholds are mutually consistent
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.analysis;

        if t.min_weather_entries == 0 || t.min_group_size == 0 {
            return Err(ConfigError::Invalid(
                "sample size gates must be at least 1".to_string(),
            ));
        }
        if t.cold_below_celsius > t.mild_max_celsius {
            return Err(ConfigError::Invalid(format!(
                "cold_below_celsius ({}) exceeds mild_max_celsius ({})",
                t.cold_below_celsius, t.mild_max_celsius
            )));
        }
        if t.high_humidity_percent > 100 {
            return Err(ConfigError::Invalid(format!(
                "high_humidity_percent ({}) exceeds 100",
                t.high_humidity_percent
            )));
        }
        if !(t.direction_band >= 0.0 && t.narrative_band >= 0.0) {
            return Err(ConfigError::Invalid(
                "direction_band and narrative_band must be non-negative numbers".to_string(),
            ));
        }
        if !(t.weak_difference >= 0.0
            && t.weak_difference <= t.moderate_difference
            && t.moderate_difference <= t.strong_difference)
        {
            return Err(ConfigError::Invalid(
                "strength thresholds must satisfy 0 <= weak <= moderate <= strong".to_string(),
            ));
        }

        Ok(())
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("PAINLOG_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("PAINLOG_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Painlog Configuration
#
# Environment variables override these settings:
# - PAINLOG_LOG_LEVEL
# - PAINLOG_LOG_FORMAT

[analysis]
# Minimum number of weather-annotated entries before any report is produced
min_weather_entries = 3

# Minimum size of both the with-factor and without-factor groups
min_group_size = 2

# Entries below this temperature count as cold
cold_below_celsius = 10

# Entries from cold_below_celsius up to and including this are the mild baseline
mild_max_celsius = 25

# Entries at or above this humidity count as humid
high_humidity_percent = 70

# Average pain difference needed to call a factor positive or negative
direction_band = 0.3

# Average pain difference needed before the narrative mentions an effect
narrative_band = 0.5

# Strength buckets on the average pain difference
weak_difference = 0.5
moderate_difference = 1.0
strong_difference = 2.0

[import]
# Timestamp format (strftime) tried first when reading CSV files
timestamp_format = "%Y-%m-%d"

# Column headers; auto-detected when omitted
# timestamp_column = "date"
# pain_column = "pain"
# weather_column = "weather"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for machine consumption)
format = "pretty"
"#
    .to_string()
}
