//! Orchestration core of the question digest workbench: intake of a question
//! batch, clustering through the clustering service, cluster selection, and
//! per-cluster summaries from the summarization service.

use std::sync::Arc;

use tokio::sync::Mutex;

pub mod cluster;
pub mod config;
pub mod error;
pub mod intake;
pub mod render;
pub mod selection;
pub mod service;
pub mod session;
pub mod status;
pub mod summary;

pub use config::{load_settings, Endpoints, Settings, StatusDurations};
pub use error::{ErrorCategory, WorkbenchError};
pub use render::{
    ClipboardSink, ClusterDetail, ClusterListItem, ClusterListView, ClusteringStats, DetailEntry,
    DetailView, Renderer, Status, StatusKind, StatusView, SummaryPanel, SummaryView, Views,
};
pub use service::{HttpQuestionService, QuestionService};
pub use session::{SessionSnapshot, SessionState};
pub use status::StatusReporter;

/// How an asynchronous step ended once its response arrived.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion<T> {
    Applied(T),
    /// A newer request was issued while this one was in flight; its
    /// response was dropped.
    Superseded,
}

impl<T> Completion<T> {
    pub fn applied(self) -> Option<T> {
        match self {
            Self::Applied(value) => Some(value),
            Self::Superseded => None,
        }
    }
}

pub struct Workbench {
    service: Arc<dyn QuestionService>,
    views: Views,
    status: StatusReporter,
    state: Mutex<SessionState>,
}

impl Workbench {
    pub fn new(
        service: Arc<dyn QuestionService>,
        views: Views,
        durations: StatusDurations,
    ) -> Arc<Self> {
        let status = StatusReporter::new(views.status.clone(), durations);
        Arc::new(Self {
            service,
            views,
            status,
            state: Mutex::new(SessionState::default()),
        })
    }

    pub fn from_settings(settings: &Settings, views: Views) -> anyhow::Result<Arc<Self>> {
        let service = HttpQuestionService::new(settings.endpoints()?);
        Ok(Self::new(
            Arc::new(service),
            views,
            settings.status_durations(),
        ))
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.state.lock().await.snapshot()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
