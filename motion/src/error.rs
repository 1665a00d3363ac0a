//! Error type shared by the motion crate.
//!
//! The mapping functions in [`crate::progress`] are total and never fail; errors
//! only come from constructing validated configuration (thresholds, scripts,
//! timings) or from loading tuning files.

use std::path::PathBuf;

/// Errors raised while building or loading motion configuration.
#[derive(Debug, thiserror::Error)]
pub enum MotionError {
    /// A scroll window must be finite, non-negative and satisfy `start < end`.
    #[error("invalid scroll threshold {start}..{end}: expected 0 <= start < end")]
    InvalidThreshold { start: f64, end: f64 },

    /// A terminal script needs at least one line to type.
    #[error("terminal script has no lines")]
    EmptyScript,

    /// Character delay bounds are a half-open range `[min, max)`.
    #[error("invalid character delay range {min_ms}..{max_ms} ms")]
    InvalidDelayRange { min_ms: u64, max_ms: u64 },

    /// Tuning document failed to parse or validate.
    #[error("invalid tuning document: {0}")]
    Config(#[from] serde_json::Error),

    /// Tuning file could not be read.
    #[error("cannot read tuning file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for fallible motion operations.
pub type Result<T> = std::result::Result<T, MotionError>;
