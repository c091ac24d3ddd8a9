use crossbeam_channel::{Receiver, Sender};
use digest_core::{
    ClusterDetail, ClusterListItem, ClusteringStats, Status, StatusKind, SummaryPanel,
};
use eframe::egui;
use shared::domain::ClusterIndex;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SummaryPanelState {
    #[default]
    Hidden,
    Loading,
    Ready(SummaryPanel),
    Failed(String),
}

/// Everything the window shows, folded from backend events.
#[derive(Debug, Default)]
pub struct WorkbenchViewModel {
    pub status: Option<Status>,
    pub stats: Option<ClusteringStats>,
    pub clusters: Vec<ClusterListItem>,
    pub active: Option<ClusterIndex>,
    pub content_visible: bool,
    pub detail: Option<ClusterDetail>,
    pub summary: SummaryPanelState,
    pub backend_error: Option<String>,
}

impl WorkbenchViewModel {
    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::Status(status) => self.status = Some(status),
            UiEvent::StatusDismissed => self.status = None,
            UiEvent::Statistics(stats) => self.stats = Some(stats),
            UiEvent::Clusters(items) => {
                self.clusters = items;
                self.active = None;
            }
            UiEvent::ActiveCluster(index) => self.active = Some(index),
            UiEvent::RevealContent => self.content_visible = true,
            UiEvent::Detail(detail) => self.detail = Some(detail),
            UiEvent::DetailCleared => self.detail = None,
            UiEvent::SummaryLoading => self.summary = SummaryPanelState::Loading,
            UiEvent::Summary(panel) => self.summary = SummaryPanelState::Ready(panel),
            UiEvent::SummaryFailed(message) => self.summary = SummaryPanelState::Failed(message),
            UiEvent::SummaryHidden => self.summary = SummaryPanelState::Hidden,
            UiEvent::BackendUnavailable(message) => self.backend_error = Some(message),
        }
    }

    pub fn is_active(&self, index: ClusterIndex) -> bool {
        self.active == Some(index)
    }
}

pub struct DigestApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    model: WorkbenchViewModel,
    queue_notice: Option<String>,
}

impl DigestApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            model: WorkbenchViewModel::default(),
            queue_notice: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.model.apply(event);
        }
    }

    fn send(&mut self, cmd: BackendCommand) {
        self.queue_notice = None;
        dispatch_backend_command(&self.cmd_tx, cmd, &mut self.queue_notice);
    }

    fn pick_question_file(&mut self) {
        let path = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .add_filter("All files", &["*"])
            .pick_file();
        self.send(BackendCommand::LoadFile { path });
    }

    fn show_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Question Digest");
                ui.add_space(16.0);
                if ui.button("Load sample").clicked() {
                    self.send(BackendCommand::LoadSample);
                }
                if ui.button("Upload JSON…").clicked() {
                    self.pick_question_file();
                }
            });
            self.show_status_banner(ui);
            ui.add_space(6.0);
        });
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        let notice = self
            .model
            .backend_error
            .clone()
            .or_else(|| self.queue_notice.clone());
        if let Some(message) = notice {
            ui.colored_label(egui::Color32::from_rgb(220, 90, 90), message);
        }

        let Some(status) = self.model.status.clone() else {
            return;
        };
        let (fill, prefix) = match status.kind {
            StatusKind::Loading => (egui::Color32::from_rgb(44, 72, 110), "⏳ "),
            StatusKind::Success => (egui::Color32::from_rgb(40, 96, 60), ""),
            StatusKind::Error => (egui::Color32::from_rgb(111, 53, 53), ""),
        };
        egui::Frame::new()
            .fill(fill)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 6))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(format!("{prefix}{}", status.message))
                        .color(egui::Color32::WHITE),
                );
            });
    }

    fn show_cluster_list(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("clusters")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                if let Some(stats) = self.model.stats {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(format!("Questions: {}", stats.total_questions));
                        ui.separator();
                        ui.label(format!("Clusters: {}", stats.cluster_count));
                        ui.separator();
                        ui.label(format!("Time: {}", stats.elapsed_label()));
                    });
                    ui.separator();
                }

                let mut clicked = None;
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for item in &self.model.clusters {
                        let active = self.model.is_active(item.index);
                        let text = format!("{}  ({} questions)\n{}", item.label, item.size, item.preview);
                        if ui.selectable_label(active, text).clicked() {
                            clicked = Some(item.index);
                        }
                        ui.add_space(4.0);
                    }
                });
                if let Some(index) = clicked {
                    self.send(BackendCommand::SelectCluster { index });
                }
            });
    }

    fn show_summary_panel(&mut self, ui: &mut egui::Ui) {
        let state = self.model.summary.clone();
        if state == SummaryPanelState::Hidden {
            return;
        }

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.heading("AI summary and suggested answer");
            match &state {
                SummaryPanelState::Hidden => {}
                SummaryPanelState::Loading => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Generating summary...");
                    });
                }
                SummaryPanelState::Failed(message) => {
                    ui.colored_label(egui::Color32::from_rgb(220, 90, 90), message);
                }
                SummaryPanelState::Ready(panel) => {
                    ui.strong("Summary");
                    ui.label(&panel.summary);
                    ui.add_space(6.0);
                    ui.strong("Key points");
                    for point in &panel.key_points {
                        ui.label(format!("• {point}"));
                    }
                    ui.add_space(6.0);
                    ui.strong("Suggested answer");
                    for line in &panel.answer_lines {
                        ui.label(line);
                    }
                }
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let ready = matches!(state, SummaryPanelState::Ready(_));
                if ui.add_enabled(ready, egui::Button::new("Copy answer")).clicked() {
                    self.send(BackendCommand::CopyAnswer);
                }
                if ui.button("Regenerate").clicked() {
                    self.send(BackendCommand::Regenerate);
                }
            });
        });
    }

    fn show_detail(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.show_summary_panel(ui);
                ui.add_space(8.0);

                let Some(detail) = self.model.detail.clone() else {
                    ui.label("Select a cluster to see its questions.");
                    return;
                };
                ui.heading(&detail.heading);
                for entry in &detail.entries {
                    egui::Frame::new()
                        .inner_margin(egui::Margin::symmetric(8, 6))
                        .show(ui, |ui| {
                            ui.small(&entry.timestamp);
                            ui.label(&entry.question);
                            if let Some(answer) = &entry.existing_answer {
                                ui.colored_label(
                                    egui::Color32::from_rgb(90, 170, 110),
                                    format!("Existing answer: {answer}"),
                                );
                            }
                        });
                    ui.separator();
                }
            });
        });
    }
}

impl eframe::App for DigestApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_toolbar(ctx);

        if self.model.content_visible {
            self.show_cluster_list(ctx);
            self.show_detail(ctx);
        } else {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.label("Load the sample data or upload a JSON question file to begin.");
            });
        }

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
