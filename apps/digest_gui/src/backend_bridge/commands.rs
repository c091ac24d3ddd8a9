//! Backend commands queued from UI to backend worker.

use shared::domain::ClusterIndex;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    LoadSample,
    /// `None` when the file picker was dismissed.
    LoadFile {
        path: Option<PathBuf>,
    },
    SelectCluster {
        index: ClusterIndex,
    },
    Regenerate,
    CopyAnswer,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadSample => "load_sample",
            Self::LoadFile { .. } => "load_file",
            Self::SelectCluster { .. } => "select_cluster",
            Self::Regenerate => "regenerate",
            Self::CopyAnswer => "copy_answer",
        }
    }
}
