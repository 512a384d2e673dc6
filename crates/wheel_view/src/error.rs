//! Error types for wheel_view

use thiserror::Error;

/// Errors from the fallible wheel surfaces (config loading, snapshot decoding)
///
/// The engine itself never fails: out-of-range input is clamped.
#[derive(Error, Debug)]
pub enum WheelError {
    /// Configuration text could not be parsed
    #[error("Config parsing failed: {0}")]
    ConfigParse(String),

    /// Snapshot bytes have the wrong length
    #[error("Snapshot must be {expected} bytes, got {actual}")]
    SnapshotLength {
        /// Required length
        expected: usize,
        /// Provided length
        actual: usize,
    },

    /// Snapshot JSON could not be encoded or decoded
    #[error("Snapshot encoding failed: {0}")]
    SnapshotFormat(String),
}

impl From<toml::de::Error> for WheelError {
    fn from(err: toml::de::Error) -> Self {
        WheelError::ConfigParse(err.to_string())
    }
}

/// Result type for wheel_view operations
pub type Result<T> = std::result::Result<T, WheelError>;
