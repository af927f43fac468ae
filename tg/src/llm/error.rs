//! Generation client error types

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during structured generation
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Duration },

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Model produced no usable output for capability '{capability}'")]
    EmptyResponse { capability: String },

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl GenerationError {
    /// Check if this is a rate limit error
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, GenerationError::RateLimited { .. })
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            GenerationError::RateLimited { .. } => true,
            GenerationError::ApiError { status, .. } => *status >= 500,
            GenerationError::Network(_) => true,
            GenerationError::Timeout(_) => true,
            GenerationError::EmptyResponse { .. } => false,
            GenerationError::Json(_) => false,
            GenerationError::Config(_) => false,
        }
    }

    /// Get the retry duration if this is a rate limit error
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            GenerationError::RateLimited { retry_after } => Some(*retry_after),
            _ => None,
        }
    }
}
