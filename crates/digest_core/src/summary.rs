//! Summary generation for the selected cluster, plus regenerate and copy.

use tracing::{debug, info, warn};

use crate::{
    error::{Result, WorkbenchError},
    render::SummaryPanel,
    session::SessionState,
    Completion, Workbench,
};

impl Workbench {
    /// Summarizes the selected cluster. Does nothing without a selection.
    pub async fn summarize_selected(&self) -> Result<Option<Completion<SummaryPanel>>> {
        let (index, questions, generation) = {
            let mut state = self.state.lock().await;
            let Some((index, cluster)) = state.selected_cluster() else {
                debug!("no cluster selected; summary request skipped");
                return Ok(None);
            };
            let questions = cluster.questions.clone();

            self.discard_summary(&mut state);
            self.views.summary.show_loading();
            (index, questions, state.summary_generation)
        };

        debug!(index = index.0, question_count = questions.len(), generation, "requesting summary");
        let result = self.service.summarize(&questions).await;

        let mut state = self.state.lock().await;
        if state.summary_generation != generation {
            debug!(
                index = index.0,
                generation,
                current = state.summary_generation,
                "dropping superseded summary response"
            );
            return Ok(Some(Completion::Superseded));
        }

        match result {
            Ok(summary) => {
                let panel = SummaryPanel::from_result(&summary);
                state.rendered_answer = Some(panel.answer_text());
                state.summary = Some(summary);
                self.views.summary.show_summary(&panel);
                info!(
                    index = index.0,
                    key_points = panel.key_points.len(),
                    "summary rendered"
                );
                Ok(Some(Completion::Applied(panel)))
            }
            Err(err) => {
                warn!(index = index.0, error = %err, "summary generation failed");
                self.views
                    .summary
                    .show_error(&format!("Failed to generate summary: {err}"));
                Err(err)
            }
        }
    }

    pub async fn regenerate(&self) -> Result<Option<Completion<SummaryPanel>>> {
        self.summarize_selected().await
    }

    /// Copies the answer currently shown in the summary panel.
    pub async fn copy_answer(&self) -> Result<()> {
        let answer = self.state.lock().await.rendered_answer.clone();
        let Some(answer) = answer else {
            self.status.error("No answer to copy");
            return Err(WorkbenchError::NothingToCopy);
        };

        match self.views.clipboard.write_text(&answer) {
            Ok(()) => {
                self.status.success("Copied answer to clipboard");
                Ok(())
            }
            Err(reason) => {
                warn!(%reason, "clipboard write failed");
                self.status.error(format!("Failed to copy answer: {reason}"));
                Err(WorkbenchError::Clipboard(reason))
            }
        }
    }

    /// Forgets the current summary and invalidates any request in flight.
    pub(crate) fn discard_summary(&self, state: &mut SessionState) {
        state.summary_generation += 1;
        state.summary = None;
        state.rendered_answer = None;
    }
}
