//! Journal error types

use thiserror::Error;

/// Errors that can occur while loading journal entries
#[derive(Error, Debug)]
pub enum JournalError {
    /// I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON document could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required column is missing from the CSV header
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Field could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Pain score outside the 0-10 scale
    #[error("Pain score {0} is outside the 0-10 scale")]
    InvalidPainScore(f64),
}

/// Result type alias for journal operations
pub type JournalResult<T> = Result<T, JournalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = JournalError::MissingColumn("pain".to_string());
        assert_eq!(err.to_string(), "Missing column: pain");

        let err = JournalError::InvalidPainScore(11.5);
        assert_eq!(err.to_string(), "Pain score 11.5 is outside the 0-10 scale");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let journal_err: JournalError = io_err.into();
        assert!(matches!(journal_err, JournalError::Io(_)));
    }
}
