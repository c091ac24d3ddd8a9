//! Render capabilities the orchestrators draw through, and the plain view
//! models they hand over. Front ends implement the traits; the core never
//! touches a widget.

use std::{sync::Arc, time::Duration};

use shared::domain::{Cluster, ClusterIndex, SummaryResult};

pub const NO_SUMMARY: &str = "No summary";
pub const NO_ANSWER: &str = "No answer";
const PREVIEW_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusteringStats {
    pub total_questions: usize,
    pub cluster_count: usize,
    pub elapsed: Duration,
}

impl ClusteringStats {
    pub fn elapsed_label(&self) -> String {
        format!("{:.2}s", self.elapsed.as_secs_f64())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterListItem {
    pub index: ClusterIndex,
    pub label: String,
    pub size: usize,
    pub preview: String,
}

impl ClusterListItem {
    pub fn from_cluster(index: ClusterIndex, cluster: &Cluster) -> Self {
        let text = &cluster.representative_question.question_text;
        let mut preview: String = text.chars().take(PREVIEW_CHARS).collect();
        preview.push_str("...");
        Self {
            index,
            label: format!("Cluster {index}"),
            size: cluster.size,
            preview,
        }
    }
}

pub fn cluster_list_items(clusters: &[Cluster]) -> Vec<ClusterListItem> {
    clusters
        .iter()
        .enumerate()
        .map(|(i, cluster)| ClusterListItem::from_cluster(ClusterIndex(i), cluster))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailEntry {
    pub timestamp: String,
    pub question: String,
    pub existing_answer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterDetail {
    pub index: ClusterIndex,
    pub heading: String,
    pub entries: Vec<DetailEntry>,
}

impl ClusterDetail {
    /// Keeps the cluster's own question order.
    pub fn from_cluster(index: ClusterIndex, cluster: &Cluster) -> Self {
        Self {
            index,
            heading: format!("Questions in this cluster ({})", cluster.size),
            entries: cluster
                .questions
                .iter()
                .map(|q| DetailEntry {
                    timestamp: q.timestamp.clone(),
                    question: q.question_text.clone(),
                    existing_answer: q.answer().map(str::to_string),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryPanel {
    pub summary: String,
    pub key_points: Vec<String>,
    pub answer_lines: Vec<String>,
}

impl SummaryPanel {
    pub fn from_result(result: &SummaryResult) -> Self {
        let summary = non_blank(result.summary.as_deref()).unwrap_or(NO_SUMMARY);
        let answer = non_blank(result.answer.as_deref()).unwrap_or(NO_ANSWER);
        Self {
            summary: summary.to_string(),
            key_points: result.key_points.clone(),
            answer_lines: answer.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn answer_text(&self) -> String {
        self.answer_lines.join("\n")
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

pub trait StatusView: Send + Sync {
    fn show_status(&self, status: &Status);
    fn dismiss_status(&self);
}

pub trait ClusterListView: Send + Sync {
    fn show_statistics(&self, stats: &ClusteringStats);
    fn show_clusters(&self, items: &[ClusterListItem]);
    /// Exactly one item is active afterwards.
    fn mark_active(&self, index: ClusterIndex);
    fn reveal_content(&self);
}

pub trait DetailView: Send + Sync {
    fn show_detail(&self, detail: &ClusterDetail);
    fn clear_detail(&self);
}

pub trait SummaryView: Send + Sync {
    fn show_loading(&self);
    fn show_summary(&self, panel: &SummaryPanel);
    fn show_error(&self, message: &str);
    fn hide(&self);
}

pub trait ClipboardSink: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), String>;
}

pub trait Renderer: StatusView + ClusterListView + DetailView + SummaryView + ClipboardSink {}

impl<T> Renderer for T where T: StatusView + ClusterListView + DetailView + SummaryView + ClipboardSink {}

#[derive(Clone)]
pub struct Views {
    pub status: Arc<dyn StatusView>,
    pub clusters: Arc<dyn ClusterListView>,
    pub detail: Arc<dyn DetailView>,
    pub summary: Arc<dyn SummaryView>,
    pub clipboard: Arc<dyn ClipboardSink>,
}

impl Views {
    /// All capabilities served by one renderer.
    pub fn from_renderer<R: Renderer + 'static>(renderer: Arc<R>) -> Self {
        Self {
            status: renderer.clone(),
            clusters: renderer.clone(),
            detail: renderer.clone(),
            summary: renderer.clone(),
            clipboard: renderer,
        }
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
