//! Sends a question set to the clustering service and publishes the result.

use std::time::Instant;

use shared::domain::QuestionSet;
use tracing::{debug, info, warn};

use crate::{
    error::Result,
    render::{cluster_list_items, ClusteringStats},
    Completion, Workbench,
};

impl Workbench {
    pub async fn cluster(&self, questions: QuestionSet) -> Result<Completion<ClusteringStats>> {
        let question_count = questions.len();
        let generation = {
            let mut state = self.state.lock().await;
            state.cluster_generation += 1;
            state.cluster_generation
        };

        self.status
            .loading(format!("Clustering {question_count} questions..."));
        let started = Instant::now();
        let result = self.service.cluster(&questions).await;
        let elapsed = started.elapsed();

        let mut state = self.state.lock().await;
        if state.cluster_generation != generation {
            debug!(
                generation,
                current = state.cluster_generation,
                "dropping superseded clustering response"
            );
            return Ok(Completion::Superseded);
        }

        let data = match result {
            Ok(data) => data,
            Err(err) => {
                warn!(error = %err, question_count, "clustering failed");
                self.status.error(format!("Clustering failed: {err}"));
                return Err(err);
            }
        };

        let member_total: usize = data.clusters.iter().map(|c| c.size).sum();
        if member_total != data.total_questions {
            warn!(
                member_total,
                total_questions = data.total_questions,
                "cluster sizes do not add up to the reported question total"
            );
        }

        let stats = ClusteringStats {
            total_questions: data.total_questions,
            cluster_count: data.clusters.len(),
            elapsed,
        };
        let items = cluster_list_items(&data.clusters);

        state.question_set = Some(questions);
        state.clusters = Some(data.clusters);
        state.total_questions = data.total_questions;
        state.content_revealed = true;
        self.reset_selection(&mut state);

        self.views.detail.clear_detail();
        self.views.summary.hide();
        self.views.clusters.show_statistics(&stats);
        self.views.clusters.show_clusters(&items);
        self.views.clusters.reveal_content();
        drop(state);

        info!(
            total_questions = stats.total_questions,
            cluster_count = stats.cluster_count,
            elapsed_ms = elapsed.as_millis() as u64,
            "clustering applied"
        );
        self.status.success(format!(
            "Clustered {} questions into {} clusters",
            stats.total_questions, stats.cluster_count
        ));
        Ok(Completion::Applied(stats))
    }
}
