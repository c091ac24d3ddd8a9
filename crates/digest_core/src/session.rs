use shared::domain::{Cluster, ClusterCollection, ClusterIndex, QuestionSet, SummaryResult};

/// In-memory state for one run of the workbench. Each field has one writer:
/// the cluster orchestrator owns `question_set`, `clusters`,
/// `total_questions`, `content_revealed` and `cluster_generation`; cluster
/// selection owns `selected`; the summary orchestrator owns `summary`,
/// `rendered_answer` and `summary_generation`.
#[derive(Debug, Default)]
pub struct SessionState {
    pub question_set: Option<QuestionSet>,
    pub clusters: Option<ClusterCollection>,
    pub total_questions: usize,
    pub content_revealed: bool,
    pub cluster_generation: u64,
    pub selected: Option<ClusterIndex>,
    pub summary: Option<SummaryResult>,
    pub rendered_answer: Option<String>,
    pub summary_generation: u64,
}

impl SessionState {
    pub fn cluster(&self, index: ClusterIndex) -> Option<&Cluster> {
        self.clusters.as_ref()?.get(index.0)
    }

    pub fn selected_cluster(&self) -> Option<(ClusterIndex, &Cluster)> {
        let index = self.selected?;
        self.cluster(index).map(|cluster| (index, cluster))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            question_count: self.question_set.as_ref().map_or(0, Vec::len),
            total_questions: self.total_questions,
            clusters: self.clusters.clone().unwrap_or_default(),
            selected: self.selected,
            summary: self.summary.clone(),
            content_revealed: self.content_revealed,
        }
    }
}

/// Read-only copy handed to front ends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub question_count: usize,
    pub total_questions: usize,
    pub clusters: ClusterCollection,
    pub selected: Option<ClusterIndex>,
    pub summary: Option<SummaryResult>,
    pub content_revealed: bool,
}
