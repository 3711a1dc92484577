//! Error types for the tracker_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for tracker_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Workout code outside the closed RUN/WLK/SWM set
    #[error("unknown workout type: {code}")]
    InvalidWorkoutType { code: String },

    /// Raw value count does not match the variant's constructor
    #[error("workout type {code} expects {expected} raw values, got {got}")]
    ArgumentCountMismatch {
        code: String,
        expected: usize,
        got: usize,
    },
}
