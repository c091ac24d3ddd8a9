//! Transient loading/success/error notices.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use tracing::{debug, info, warn};

use crate::{
    config::StatusDurations,
    render::{Status, StatusKind, StatusView},
};

/// Each notice replaces the previous one. Loading notices stay until
/// superseded; success and error notices dismiss themselves after their
/// configured duration unless something newer was shown in between.
#[derive(Clone)]
pub struct StatusReporter {
    view: Arc<dyn StatusView>,
    durations: StatusDurations,
    generation: Arc<Mutex<u64>>,
}

impl StatusReporter {
    pub fn new(view: Arc<dyn StatusView>, durations: StatusDurations) -> Self {
        Self {
            view,
            durations,
            generation: Arc::new(Mutex::new(0)),
        }
    }

    pub fn loading(&self, message: impl Into<String>) {
        let message = message.into();
        debug!(%message, "status: loading");
        self.show(StatusKind::Loading, message, None);
    }

    pub fn success(&self, message: impl Into<String>) {
        let message = message.into();
        info!(%message, "status: success");
        self.show(StatusKind::Success, message, Some(self.durations.success));
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        warn!(%message, "status: error");
        self.show(StatusKind::Error, message, Some(self.durations.error));
    }

    fn show(&self, kind: StatusKind, message: String, dismiss_after: Option<Duration>) {
        let shown = {
            let mut generation = lock_generation(&self.generation);
            *generation += 1;
            self.view.show_status(&Status { kind, message });
            *generation
        };

        let Some(delay) = dismiss_after else {
            return;
        };
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("no async runtime available; status will not auto-dismiss");
            return;
        };

        let view = self.view.clone();
        let generation = self.generation.clone();
        runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let current = lock_generation(&generation);
            if *current == shown {
                view.dismiss_status();
            }
        });
    }
}

fn lock_generation(generation: &Mutex<u64>) -> std::sync::MutexGuard<'_, u64> {
    generation
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[cfg(test)]
#[path = "tests/status_tests.rs"]
mod tests;
