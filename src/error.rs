//! Error types for the fallible edges of the crate.
//!
//! Layout and aggregation are total over their input and never return
//! errors; malformed records are skipped. Errors only surface where the
//! caller hands us raw text: hex colors, configuration, and API envelopes.

use thiserror::Error;

/// Main error type for timeline operations.
#[derive(Error, Debug)]
pub enum TimelineError {
    /// A color string is not a `#RRGGBB` hex value.
    #[error("Invalid hex color: {0}")]
    InvalidColor(String),

    /// A timestamp or date string could not be parsed.
    #[error("Failed to parse date: {0}")]
    DateParse(String),

    /// A zoom level name is not one of `1hour|3hour|5hour|12hour|day`.
    #[error("Unknown zoom level: {0}")]
    UnknownZoom(String),

    /// The configuration is structurally valid JSON but semantically unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON decoding failed (configuration or API envelope).
    #[error("Failed to decode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Type alias for Results using `TimelineError`.
pub type Result<T> = std::result::Result<T, TimelineError>;
