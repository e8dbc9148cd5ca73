use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Failure of a single request against the scoring service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Request failed with status {0}")]
    Status(u16),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status(404) | FetchError::Rejected { status: 404, .. })
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing required setting {0}")]
    Missing(&'static str),
    #[error("Invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Error body returned by the host's catchers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error body the scoring service uses for rejected writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceMessage {
    pub message: String,
}

pub type Result<T> = std::result::Result<T, FetchError>;
