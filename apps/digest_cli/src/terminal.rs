use std::{fs, path::PathBuf};

use digest_core::{
    ClipboardSink, ClusterDetail, ClusterListItem, ClusterListView, ClusteringStats, DetailView,
    Status, StatusKind, StatusView, SummaryPanel, SummaryView,
};
use shared::domain::ClusterIndex;

/// Prints what a window would show. Notices go to stderr, content to stdout.
pub struct TerminalRenderer {
    answer_out: Option<PathBuf>,
}

impl TerminalRenderer {
    pub fn new(answer_out: Option<PathBuf>) -> Self {
        Self { answer_out }
    }
}

impl StatusView for TerminalRenderer {
    fn show_status(&self, status: &Status) {
        let tag = match status.kind {
            StatusKind::Loading => "..",
            StatusKind::Success => "ok",
            StatusKind::Error => "error",
        };
        eprintln!("[{tag}] {}", status.message);
    }

    fn dismiss_status(&self) {}
}

impl ClusterListView for TerminalRenderer {
    fn show_statistics(&self, stats: &ClusteringStats) {
        println!(
            "{} questions, {} clusters, {}",
            stats.total_questions,
            stats.cluster_count,
            stats.elapsed_label()
        );
    }

    fn show_clusters(&self, items: &[ClusterListItem]) {
        for item in items {
            println!("  {:<12} {:>4} questions  {}", item.label, item.size, item.preview);
        }
    }

    fn mark_active(&self, index: ClusterIndex) {
        println!();
        println!("> Cluster {index}");
    }

    fn reveal_content(&self) {}
}

impl DetailView for TerminalRenderer {
    fn show_detail(&self, detail: &ClusterDetail) {
        println!("{}", detail.heading);
        for entry in &detail.entries {
            println!("  [{}] {}", entry.timestamp, entry.question);
            if let Some(answer) = &entry.existing_answer {
                println!("      existing answer: {answer}");
            }
        }
    }

    fn clear_detail(&self) {}
}

impl SummaryView for TerminalRenderer {
    fn show_loading(&self) {
        eprintln!("[..] Generating summary...");
    }

    fn show_summary(&self, panel: &SummaryPanel) {
        println!();
        println!("Summary: {}", panel.summary);
        for point in &panel.key_points {
            println!("  - {point}");
        }
        println!("Suggested answer:");
        for line in &panel.answer_lines {
            println!("  {line}");
        }
    }

    fn show_error(&self, message: &str) {
        eprintln!("[error] {message}");
    }

    fn hide(&self) {}
}

/// The terminal has no clipboard; the answer is exported to a file instead.
impl ClipboardSink for TerminalRenderer {
    fn write_text(&self, text: &str) -> Result<(), String> {
        let Some(path) = &self.answer_out else {
            return Err("no --answer-out path given".to_string());
        };
        fs::write(path, text).map_err(|err| format!("{}: {err}", path.display()))
    }
}
