//! Weather Text Parsing
//!
//! Journal entries carry weather as free text written by whatever produced the
//! entry, e.g. `"18°C, light rain, 72% humidity"`. This module extracts the
//! fields the analysis needs from that text.
//!
//! Parsing is lexical and best-effort: a field whose pattern does not match is
//! simply left empty. Nothing here returns an error.

mod parser;

pub use parser::{parse_weather, ParsedWeather, RAIN_KEYWORDS};
