//! Render capabilities for the workbench, forwarded to the UI thread.

use arboard::Clipboard;
use crossbeam_channel::{Sender, TrySendError};
use digest_core::{
    ClipboardSink, ClusterDetail, ClusterListItem, ClusterListView, ClusteringStats, DetailView,
    Status, StatusView, SummaryPanel, SummaryView,
};
use shared::domain::ClusterIndex;

use crate::controller::events::UiEvent;

pub struct ChannelRenderer {
    ui_tx: Sender<UiEvent>,
}

impl ChannelRenderer {
    pub fn new(ui_tx: Sender<UiEvent>) -> Self {
        Self { ui_tx }
    }

    fn emit(&self, event: UiEvent) {
        match self.ui_tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                tracing::warn!(event = event.name(), "ui event queue is full; dropping event");
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::debug!("ui event queue closed");
            }
        }
    }
}

impl StatusView for ChannelRenderer {
    fn show_status(&self, status: &Status) {
        self.emit(UiEvent::Status(status.clone()));
    }

    fn dismiss_status(&self) {
        self.emit(UiEvent::StatusDismissed);
    }
}

impl ClusterListView for ChannelRenderer {
    fn show_statistics(&self, stats: &ClusteringStats) {
        self.emit(UiEvent::Statistics(*stats));
    }

    fn show_clusters(&self, items: &[ClusterListItem]) {
        self.emit(UiEvent::Clusters(items.to_vec()));
    }

    fn mark_active(&self, index: ClusterIndex) {
        self.emit(UiEvent::ActiveCluster(index));
    }

    fn reveal_content(&self) {
        self.emit(UiEvent::RevealContent);
    }
}

impl DetailView for ChannelRenderer {
    fn show_detail(&self, detail: &ClusterDetail) {
        self.emit(UiEvent::Detail(detail.clone()));
    }

    fn clear_detail(&self) {
        self.emit(UiEvent::DetailCleared);
    }
}

impl SummaryView for ChannelRenderer {
    fn show_loading(&self) {
        self.emit(UiEvent::SummaryLoading);
    }

    fn show_summary(&self, panel: &SummaryPanel) {
        self.emit(UiEvent::Summary(panel.clone()));
    }

    fn show_error(&self, message: &str) {
        self.emit(UiEvent::SummaryFailed(message.to_string()));
    }

    fn hide(&self) {
        self.emit(UiEvent::SummaryHidden);
    }
}

impl ClipboardSink for ChannelRenderer {
    fn write_text(&self, text: &str) -> Result<(), String> {
        let mut clipboard = Clipboard::new().map_err(|err| err.to_string())?;
        clipboard
            .set_text(text.to_string())
            .map_err(|err| err.to_string())
    }
}
