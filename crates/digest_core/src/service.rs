//! Client side of the clustering and summarization services.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::{QuestionRecord, QuestionSet, SummaryResult},
    error::ApiError,
    protocol::{ApiEnvelope, ClusterRequest, ClusteringData, SummarizeRequest},
};

use crate::{
    config::Endpoints,
    error::{Result, WorkbenchError},
};

pub const SAMPLE_DATA_ENDPOINT: &str = "sample data";
pub const CLUSTERING_ENDPOINT: &str = "clustering";
pub const SUMMARIZATION_ENDPOINT: &str = "summarization";

#[async_trait]
pub trait QuestionService: Send + Sync {
    async fn fetch_sample(&self) -> Result<QuestionSet>;
    async fn cluster(&self, questions: &[QuestionRecord]) -> Result<ClusteringData>;
    async fn summarize(&self, questions: &[QuestionRecord]) -> Result<SummaryResult>;
}

pub struct HttpQuestionService {
    http: Client,
    endpoints: Endpoints,
}

impl HttpQuestionService {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            http: Client::new(),
            endpoints,
        }
    }
}

#[async_trait]
impl QuestionService for HttpQuestionService {
    async fn fetch_sample(&self) -> Result<QuestionSet> {
        let res = self
            .http
            .get(self.endpoints.sample_data.clone())
            .send()
            .await
            .map_err(|source| WorkbenchError::Transport {
                endpoint: SAMPLE_DATA_ENDPOINT,
                source,
            })?;
        read_envelope(SAMPLE_DATA_ENDPOINT, res).await
    }

    async fn cluster(&self, questions: &[QuestionRecord]) -> Result<ClusteringData> {
        let res = self
            .http
            .post(self.endpoints.clustering.clone())
            .json(&ClusterRequest {
                questions: questions.to_vec(),
            })
            .send()
            .await
            .map_err(|source| WorkbenchError::Transport {
                endpoint: CLUSTERING_ENDPOINT,
                source,
            })?;
        read_envelope(CLUSTERING_ENDPOINT, res).await
    }

    async fn summarize(&self, questions: &[QuestionRecord]) -> Result<SummaryResult> {
        let res = self
            .http
            .post(self.endpoints.summarize.clone())
            .json(&SummarizeRequest {
                questions: questions.to_vec(),
            })
            .send()
            .await
            .map_err(|source| WorkbenchError::Transport {
                endpoint: SUMMARIZATION_ENDPOINT,
                source,
            })?;
        read_envelope(SUMMARIZATION_ENDPOINT, res).await
    }
}

/// The services report failures as `{success: false}` bodies, usually with a
/// 500 status, so the envelope is decoded before the status is consulted.
async fn read_envelope<T: DeserializeOwned>(endpoint: &'static str, res: Response) -> Result<T> {
    let status = res.status();
    let body = res
        .bytes()
        .await
        .map_err(|source| WorkbenchError::Transport { endpoint, source })?;

    match serde_json::from_slice::<ApiEnvelope<T>>(&body) {
        Ok(envelope) => envelope.into_result(endpoint).map_err(|err| {
            let err = if status.is_success() {
                err
            } else {
                err.with_http_status(status.as_u16())
            };
            WorkbenchError::Service(err)
        }),
        Err(_) if !status.is_success() => Err(ApiError::new(
            endpoint,
            Some(format!("HTTP {status}")),
        )
        .with_http_status(status.as_u16())
        .into()),
        Err(err) => Err(ApiError::new(endpoint, Some(format!("unreadable response: {err}"))).into()),
    }
}

#[cfg(test)]
#[path = "tests/service_tests.rs"]
mod tests;
