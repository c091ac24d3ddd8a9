//! Active cluster tracking and the cluster detail view.

use shared::domain::ClusterIndex;
use tracing::{debug, warn};

use crate::{
    error::Result,
    render::{ClusterDetail, SummaryPanel},
    session::SessionState,
    Completion, Workbench,
};

impl Workbench {
    /// Makes `index` the active cluster, renders its questions and requests
    /// a fresh summary. Returns `Ok(None)` when no such cluster exists.
    pub async fn select_cluster(
        &self,
        index: ClusterIndex,
    ) -> Result<Option<Completion<SummaryPanel>>> {
        {
            let mut state = self.state.lock().await;
            let Some(cluster) = state.cluster(index) else {
                warn!(index = index.0, "ignoring selection of unknown cluster");
                return Ok(None);
            };
            let detail = ClusterDetail::from_cluster(index, cluster);

            state.selected = Some(index);
            self.views.clusters.mark_active(index);
            self.views.detail.show_detail(&detail);
            debug!(index = index.0, size = detail.entries.len(), "cluster selected");
        }

        self.summarize_selected().await
    }

    /// Called when a new cluster collection replaces the old one; the old
    /// index would point into the wrong collection.
    pub(crate) fn reset_selection(&self, state: &mut SessionState) {
        if state.selected.take().is_some() {
            debug!("selection cleared for new cluster collection");
        }
        self.discard_summary(state);
    }
}
