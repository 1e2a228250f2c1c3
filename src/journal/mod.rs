//! Pain Journal
//!
//! Journal entries as they arrive from the outside world, plus importers that
//! read them from CSV exports and JSON dumps.
//!
//! - **types**: [`JournalEntry`]
//! - **import**: [`JournalImporter`] for CSV/JSON files
//! - **error**: Error types

pub mod error;
pub mod import;
pub mod types;

pub use error::{JournalError, JournalResult};
pub use import::{ImportResult, JournalImporter};
pub use types::{JournalEntry, MAX_PAIN_SCORE, MIN_PAIN_SCORE};
