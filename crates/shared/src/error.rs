use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body the backend attaches to 4xx/5xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub success: bool,
    pub error: u16,
    pub message: String,
}

#[derive(Debug, Error)]
#[error("backend error {status}: {message}")]
pub struct ApiException {
    pub status: u16,
    pub message: String,
}

impl ApiException {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<ApiError> for ApiException {
    fn from(value: ApiError) -> Self {
        Self {
            status: value.error,
            message: value.message,
        }
    }
}

#[cfg(test)]
#[path = "tests/error_tests.rs"]
mod tests;
