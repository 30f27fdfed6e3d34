//! Planner API error types

use thiserror::Error;

/// Errors that can occur talking to the planner services
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
