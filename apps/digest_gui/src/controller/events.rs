//! Events flowing from the backend worker to the UI thread.

use digest_core::{ClusterDetail, ClusterListItem, ClusteringStats, Status, SummaryPanel};
use shared::domain::ClusterIndex;

#[derive(Debug, Clone)]
pub enum UiEvent {
    Status(Status),
    StatusDismissed,
    Statistics(ClusteringStats),
    Clusters(Vec<ClusterListItem>),
    ActiveCluster(ClusterIndex),
    RevealContent,
    Detail(ClusterDetail),
    DetailCleared,
    SummaryLoading,
    Summary(SummaryPanel),
    SummaryFailed(String),
    SummaryHidden,
    /// The worker could not start; the UI stays usable but commands go nowhere.
    BackendUnavailable(String),
}

impl UiEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Status(_) => "status",
            Self::StatusDismissed => "status_dismissed",
            Self::Statistics(_) => "statistics",
            Self::Clusters(_) => "clusters",
            Self::ActiveCluster(_) => "active_cluster",
            Self::RevealContent => "reveal_content",
            Self::Detail(_) => "detail",
            Self::DetailCleared => "detail_cleared",
            Self::SummaryLoading => "summary_loading",
            Self::Summary(_) => "summary",
            Self::SummaryFailed(_) => "summary_failed",
            Self::SummaryHidden => "summary_hidden",
            Self::BackendUnavailable(_) => "backend_unavailable",
        }
    }
}
