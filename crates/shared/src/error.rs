use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by one of the question services, either as an
/// envelope with `success: false` or as an unreadable error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{endpoint} failed: {}", .message.as_deref().unwrap_or("no detail provided"))]
pub struct ApiError {
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ApiError {
    pub fn new(endpoint: impl Into<String>, message: Option<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http_status: None,
            message,
        }
    }

    pub fn with_http_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }
}
