//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Cohort
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum CohortError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CohortError {
    /// The bare message, without the category prefix added by `Display`.
    ///
    /// Remote endpoints return human-readable failure reasons (for example
    /// `"email exists"`); callers that surface those to a user want the
    /// message as-is.
    pub fn message(&self) -> &str {
        match self {
            Self::Network(message)
            | Self::Auth(message)
            | Self::Config(message)
            | Self::NotFound(message)
            | Self::InvalidInput(message)
            | Self::Internal(message) => message,
        }
    }
}

/// Result type alias for Cohort operations
pub type Result<T> = std::result::Result<T, CohortError>;
