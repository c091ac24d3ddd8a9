use serde::{Deserialize, Serialize};

use crate::{
    domain::{ClusterCollection, QuestionRecord, QuestionSet, SummaryResult},
    error::ApiError,
};

/// Common response shape of the question services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Yields the payload, or the service failure for `endpoint`.
    /// A successful envelope without a payload counts as a failure.
    pub fn into_result(self, endpoint: &str) -> Result<T, ApiError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(ApiError::new(
                endpoint,
                Some("response is missing its data payload".to_string()),
            )),
            (false, _) => Err(ApiError::new(endpoint, self.error)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterRequest {
    pub questions: QuestionSet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusteringData {
    pub total_questions: usize,
    pub clusters: ClusterCollection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub questions: Vec<QuestionRecord>,
}

pub type ClusteringResponse = ApiEnvelope<ClusteringData>;
pub type SummaryResponse = ApiEnvelope<SummaryResult>;
