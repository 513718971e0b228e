// src/error.rs

use thiserror::Error;

/// Errors reported by the checked (`try_*`) variants of the vector and camera API.
///
/// The unchecked API never fails: it degrades silently (zero vector, absolute
/// value) and logs a warning instead.
#[derive(Debug, Error)]
pub enum VisionError {
    #[error("cannot normalize a zero-length vector")]
    ZeroVector,

    #[error("camera {field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("invalid camera configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VisionError>;
