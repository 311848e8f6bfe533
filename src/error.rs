//! Error types for Forgerank.
//!
//! Scoring itself never fails: anomalies surface as flags on the breakdown.
//! These errors only cover the edges (parsing, configuration, CLI input).

use thiserror::Error;

/// Errors raised when a scoring configuration is internally inconsistent.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("invalid range for {field}: min {min} exceeds max {max}")]
    InvertedRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
}

/// Errors surfaced at the crate boundary.
#[derive(Debug, Error)]
pub enum ForgerankError {
    #[error("unknown unit system: {0} (expected lb or kg)")]
    UnknownUnit(String),

    #[error("unknown sex: {0} (expected male, female or unspecified)")]
    UnknownSex(String),

    #[error("invalid scoring configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("cannot read {path}: {source}")]
    CannotRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    InvalidJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
