//! Error types for climplot.
//!
//! Every failure in this crate is a caller-input problem, reported
//! synchronously through [`ClimplotError`].

use thiserror::Error;

/// The main error type for climplot operations.
#[derive(Error, Debug)]
pub enum ClimplotError {
    /// IO errors (reading configuration files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A value range that cannot produce levels (e.g. `vmin >= vmax`)
    #[error("Invalid range: {message}")]
    InvalidRange { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Boundary normalization could not be built
    #[error("Normalization error: {message}")]
    Norm { message: String },
}

impl ClimplotError {
    pub(crate) fn invalid_parameter(param: &str, message: impl Into<String>) -> Self {
        ClimplotError::InvalidParameter {
            param: param.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_range(message: impl Into<String>) -> Self {
        ClimplotError::InvalidRange {
            message: message.into(),
        }
    }
}

/// Convenience type alias for Results with ClimplotError
pub type Result<T> = std::result::Result<T, ClimplotError>;
