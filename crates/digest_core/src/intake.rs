//! Question intake from the sample endpoint or a local JSON file.

use std::path::Path;

use shared::domain::QuestionSet;
use tracing::{info, warn};

use crate::{
    error::{Result, WorkbenchError},
    render::ClusteringStats,
    Completion, Workbench,
};

pub const SUPPORTED_EXTENSION: &str = ".json";

/// Rejects anything but `.json` by name alone; the file is not opened.
pub fn ensure_supported(path: &Path) -> Result<()> {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    if filename.ends_with(SUPPORTED_EXTENSION) {
        Ok(())
    } else {
        Err(WorkbenchError::UnsupportedFormat { filename })
    }
}

pub async fn read_question_file(path: &Path) -> Result<QuestionSet> {
    ensure_supported(path)?;
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| WorkbenchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(serde_json::from_str(&raw)?)
}

impl Workbench {
    pub async fn load_sample(&self) -> Result<Completion<ClusteringStats>> {
        self.status.loading("Loading sample data...");

        let questions = match self.service.fetch_sample().await {
            Ok(questions) => questions,
            Err(err) => {
                warn!(error = %err, "sample data request failed");
                self.status.error(format!("Failed to load sample data: {err}"));
                return Err(err);
            }
        };
        info!(question_count = questions.len(), "sample data loaded");

        self.cluster(questions).await
    }

    /// `None` means the picker was dismissed and nothing happens.
    pub async fn load_file(&self, path: Option<&Path>) -> Result<Option<Completion<ClusteringStats>>> {
        let Some(path) = path else {
            return Ok(None);
        };

        if let Err(err) = ensure_supported(path) {
            warn!(path = %path.display(), "rejected question file with unsupported extension");
            self.status.error("Only JSON files are currently supported");
            return Err(err);
        }

        self.status.loading("Processing file...");
        let questions = match read_question_file(path).await {
            Ok(questions) => questions,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "question file could not be loaded");
                self.status.error(format!("Failed to read file: {err}"));
                return Err(err);
            }
        };
        info!(
            path = %path.display(),
            question_count = questions.len(),
            "question file loaded"
        );

        self.cluster(questions).await.map(Some)
    }
}
