//! Journal Import
//!
//! Loads journal entries from CSV exports or JSON dumps.
//! CSV columns are located by header name, either configured explicitly or
//! auto-detected (`date`/`time`/`timestamp`, `pain`, `weather`).

use super::error::{JournalError, JournalResult};
use super::types::JournalEntry;
use crate::config::ImportConfig;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::path::Path;

/// Maximum number of row errors kept in an [`ImportResult`]
const MAX_REPORTED_ERRORS: usize = 100;

/// Journal importer with configurable column mapping
#[derive(Debug, Clone)]
pub struct JournalImporter {
    /// Format string for parsing timestamps
    timestamp_format: String,
    /// Explicit timestamp column header (auto-detected when `None`)
    timestamp_column: Option<String>,
    /// Explicit pain column header (auto-detected when `None`)
    pain_column: Option<String>,
    /// Explicit weather column header (auto-detected when `None`)
    weather_column: Option<String>,
}

/// Result of an import operation
#[derive(Debug, Default)]
pub struct ImportResult {
    pub entries: Vec<JournalEntry>,
    pub rows_processed: usize,
    pub rows_failed: usize,
    pub errors: Vec<String>,
}

impl ImportResult {
    fn reject(&mut self, message: String) {
        self.rows_failed += 1;
        self.errors.push(message);
    }

    fn accept(&mut self, entry: JournalEntry) {
        self.rows_processed += 1;
        self.entries.push(entry);
    }

    fn truncate_errors(&mut self) {
        if self.errors.len() > MAX_REPORTED_ERRORS {
            let total = self.errors.len();
            self.errors.truncate(MAX_REPORTED_ERRORS);
            self.errors
                .push(format!("... and {} more errors", total - MAX_REPORTED_ERRORS));
        }
    }
}

/// Resolved CSV column positions
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    timestamp: Option<usize>,
    pain: usize,
    weather: Option<usize>,
}

impl Default for JournalImporter {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&ImportConfig> for JournalImporter {
    fn from(config: &ImportConfig) -> Self {
        Self {
            timestamp_format: config.timestamp_format.clone(),
            timestamp_column: config.timestamp_column.clone(),
            pain_column: config.pain_column.clone(),
            weather_column: config.weather_column.clone(),
        }
    }
}

impl JournalImporter {
    /// Create a new importer with auto-detected columns
    pub fn new() -> Self {
        Self {
            timestamp_format: "%Y-%m-%d".to_string(),
            timestamp_column: None,
            pain_column: None,
            weather_column: None,
        }
    }

    /// Set the timestamp format string
    pub fn with_timestamp_format(mut self, format: &str) -> Self {
        self.timestamp_format = format.to_string();
        self
    }

    /// Set the timestamp column header
    pub fn with_timestamp_column(mut self, header: &str) -> Self {
        self.timestamp_column = Some(header.to_string());
        self
    }

    /// Set the pain column header
    pub fn with_pain_column(mut self, header: &str) -> Self {
        self.pain_column = Some(header.to_string());
        self
    }

    /// Set the weather column header
    pub fn with_weather_column(mut self, header: &str) -> Self {
        self.weather_column = Some(header.to_string());
        self
    }

    /// Import from a file, choosing JSON or CSV by extension
    pub fn import_path(&self, path: &Path) -> JournalResult<ImportResult> {
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let result = if is_json {
            self.import_json(path)?
        } else {
            self.import_csv(path)?
        };

        tracing::info!(
            path = %path.display(),
            entries = result.entries.len(),
            failed = result.rows_failed,
            "Imported journal"
        );

        Ok(result)
    }

    /// Import entries from a CSV file
    pub fn import_csv(&self, path: &Path) -> JournalResult<ImportResult> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;
        self.read_csv(reader)
    }

    /// Import entries from a CSV string
    pub fn import_csv_str(&self, csv_data: &str) -> JournalResult<ImportResult> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());
        self.read_csv(reader)
    }

    /// Import entries from a JSON file holding an array of entries
    pub fn import_json(&self, path: &Path) -> JournalResult<ImportResult> {
        let content = std::fs::read_to_string(path)?;
        self.import_json_str(&content)
    }

    /// Import entries from a JSON array string
    ///
    /// Entries with a pain score off the 0-10 scale are rejected individually.
    pub fn import_json_str(&self, json: &str) -> JournalResult<ImportResult> {
        let entries: Vec<JournalEntry> = serde_json::from_str(json)?;
        let mut result = ImportResult::default();

        for (idx, entry) in entries.into_iter().enumerate() {
            if entry.pain_in_range() {
                result.accept(entry);
            } else {
                result.reject(format!(
                    "Entry {}: {}",
                    idx + 1,
                    JournalError::InvalidPainScore(entry.pain_score)
                ));
            }
        }

        result.truncate_errors();
        Ok(result)
    }

    fn read_csv<R: std::io::Read>(
        &self,
        mut reader: csv::Reader<R>,
    ) -> JournalResult<ImportResult> {
        let headers = reader.headers()?.clone();
        let columns = self.resolve_columns(&headers)?;

        tracing::debug!(?columns, "Resolved journal columns");

        let mut result = ImportResult::default();

        for (line_num, record) in reader.records().enumerate() {
            // Header occupies line 1
            let actual_line = line_num + 2;

            let record = match record {
                Ok(r) => r,
                Err(e) => {
                    result.reject(format!("Line {}: {}", actual_line, e));
                    continue;
                }
            };

            match self.parse_record(&record, columns) {
                Ok(entry) => result.accept(entry),
                Err(e) => result.reject(format!("Line {}: {}", actual_line, e)),
            }
        }

        result.truncate_errors();
        Ok(result)
    }

    fn parse_record(
        &self,
        record: &csv::StringRecord,
        columns: ColumnMap,
    ) -> JournalResult<JournalEntry> {
        let pain_str = record
            .get(columns.pain)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| JournalError::Parse("missing pain score".to_string()))?;

        let pain_score: f64 = pain_str
            .parse()
            .map_err(|_| JournalError::Parse(format!("invalid pain score '{}'", pain_str)))?;

        let mut entry = JournalEntry::new(pain_score);
        if !entry.pain_in_range() {
            return Err(JournalError::InvalidPainScore(pain_score));
        }

        if let Some(ts_str) = columns
            .timestamp
            .and_then(|idx| record.get(idx))
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            entry = entry.timestamp(self.parse_timestamp(ts_str)?);
        }

        if let Some(weather) = columns
            .weather
            .and_then(|idx| record.get(idx))
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            entry = entry.weather(weather);
        }

        Ok(entry)
    }

    fn resolve_columns(&self, headers: &csv::StringRecord) -> JournalResult<ColumnMap> {
        let pain = match &self.pain_column {
            Some(name) => Some(find_exact(headers, name)?),
            None => find_containing(headers, &["pain"]),
        }
        .ok_or_else(|| JournalError::MissingColumn("pain".to_string()))?;

        let timestamp = match &self.timestamp_column {
            Some(name) => Some(find_exact(headers, name)?),
            None => find_containing(headers, &["date", "time", "timestamp"]),
        };

        let weather = match &self.weather_column {
            Some(name) => Some(find_exact(headers, name)?),
            None => find_containing(headers, &["weather"]),
        };

        Ok(ColumnMap {
            timestamp,
            pain,
            weather,
        })
    }

    /// Parse a timestamp string using the configured format
    fn parse_timestamp(&self, ts_str: &str) -> JournalResult<i64> {
        // Try the configured format first, then common fallbacks
        let formats = [
            self.timestamp_format.as_str(),
            "%Y-%m-%d %H:%M:%S",
            "%Y-%m-%dT%H:%M:%S",
            "%Y-%m-%d",
            "%m/%d/%Y",
            "%Y/%m/%d",
        ];

        for fmt in formats {
            if let Ok(dt) = NaiveDateTime::parse_from_str(ts_str, fmt) {
                return Ok(dt.and_utc().timestamp_millis());
            }
            if let Some(noon) = NaiveDate::parse_from_str(ts_str, fmt)
                .ok()
                .and_then(|date| date.and_hms_opt(12, 0, 0))
            {
                return Ok(noon.and_utc().timestamp_millis());
            }
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(ts_str) {
            return Ok(dt.with_timezone(&Utc).timestamp_millis());
        }

        if let Ok(millis) = ts_str.parse::<i64>() {
            return Ok(millis);
        }

        Err(JournalError::Parse(format!(
            "could not parse timestamp '{}'",
            ts_str
        )))
    }
}

fn find_exact(headers: &csv::StringRecord, name: &str) -> JournalResult<usize> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name))
        .ok_or_else(|| JournalError::MissingColumn(name.to_string()))
}

fn find_containing(headers: &csv::StringRecord, needles: &[&str]) -> Option<usize> {
    headers.iter().position(|h| {
        let lower = h.to_lowercase();
        needles.iter().any(|n| lower.contains(n))
    })
}
