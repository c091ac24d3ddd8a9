//! Runtime bridge between UI command queue and the workbench.

use std::{sync::Arc, thread};

use crossbeam_channel::{Receiver, Sender};
use digest_core::{Settings, Views, Workbench};

use crate::backend_bridge::{commands::BackendCommand, renderer::ChannelRenderer};
use crate::controller::events::UiEvent;

/// Starts the backend worker thread. Each command runs as its own task so a
/// slow service call never holds up the next user action.
pub fn launch(settings: Settings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };

        let renderer = Arc::new(ChannelRenderer::new(ui_tx.clone()));
        let workbench = match Workbench::from_settings(&settings, Views::from_renderer(renderer)) {
            Ok(workbench) => workbench,
            Err(err) => {
                tracing::error!("invalid service settings: {err:#}");
                let _ = ui_tx.try_send(UiEvent::BackendUnavailable(format!(
                    "invalid service settings: {err:#}"
                )));
                return;
            }
        };
        tracing::info!(base_url = %settings.base_url, "backend worker ready");

        while let Ok(cmd) = cmd_rx.recv() {
            let workbench = workbench.clone();
            runtime.spawn(run_command(workbench, cmd));
        }
        tracing::debug!("command queue closed; backend worker exiting");
    });
}

/// Failures are already on screen through the render capabilities; here they
/// are only logged.
async fn run_command(workbench: Arc<Workbench>, cmd: BackendCommand) {
    let name = cmd.name();
    let outcome = match cmd {
        BackendCommand::LoadSample => workbench.load_sample().await.map(|_| ()),
        BackendCommand::LoadFile { path } => {
            workbench.load_file(path.as_deref()).await.map(|_| ())
        }
        BackendCommand::SelectCluster { index } => {
            workbench.select_cluster(index).await.map(|_| ())
        }
        BackendCommand::Regenerate => workbench.regenerate().await.map(|_| ()),
        BackendCommand::CopyAnswer => workbench.copy_answer().await,
    };

    if let Err(err) = outcome {
        tracing::debug!(command = name, category = ?err.category(), "command finished with error: {err}");
    }
}
