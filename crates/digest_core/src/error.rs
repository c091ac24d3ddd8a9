//! Failure taxonomy for the digest workflows.

use std::path::PathBuf;

use shared::error::ApiError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Service,
    Validation,
    Clipboard,
}

#[derive(Debug, Error)]
pub enum WorkbenchError {
    #[error("could not reach {endpoint}: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error(transparent)]
    Service(#[from] ApiError),
    #[error("unsupported file format for '{filename}'; only .json files are accepted")]
    UnsupportedFormat { filename: String },
    #[error("malformed question file: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
    #[error("no answer to copy")]
    NothingToCopy,
}

impl WorkbenchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Transport { .. } => ErrorCategory::Transport,
            Self::Service(_) => ErrorCategory::Service,
            Self::UnsupportedFormat { .. } | Self::Malformed(_) | Self::Io { .. } => {
                ErrorCategory::Validation
            }
            Self::Clipboard(_) | Self::NothingToCopy => ErrorCategory::Clipboard,
        }
    }
}

pub type Result<T, E = WorkbenchError> = std::result::Result<T, E>;
