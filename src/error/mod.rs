//! Failures of a single symbol's fetch or analysis, plus startup configuration.

use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoversError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Chart request timed out after {}s", .0.as_secs())]
    UpstreamTimeout(Duration),

    #[error("Chart API returned {status}: {message}")]
    ChartStatus { status: u16, message: String },

    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid price data: {message}")]
    InvalidPriceData { message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, MoversError>;

impl MoversError {
    pub fn invalid_data(message: impl Into<String>) -> Self {
        MoversError::InvalidPriceData {
            message: message.into(),
        }
    }

    /// Maps a transport failure, keeping timeouts distinct from other errors.
    pub fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            MoversError::UpstreamTimeout(timeout)
        } else {
            MoversError::HttpError(err)
        }
    }
}
