//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues `cmd` for the backend worker. Queue problems are reported through
/// `notice` instead of failing the frame.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    notice: &mut Option<String>,
) {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            *notice = Some("UI command queue is full; please retry".to_string());
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "ui->backend command queue disconnected");
            *notice = Some(
                "Backend worker is not running (possible startup failure); restart the app"
                    .to_string(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    #[test]
    fn queued_command_leaves_notice_untouched() {
        let (cmd_tx, cmd_rx) = bounded(1);
        let mut notice = None;

        dispatch_backend_command(&cmd_tx, BackendCommand::LoadSample, &mut notice);

        assert_eq!(notice, None);
        assert_eq!(cmd_rx.try_recv().ok(), Some(BackendCommand::LoadSample));
    }

    #[test]
    fn full_queue_sets_retry_notice() {
        let (cmd_tx, _cmd_rx) = bounded(1);
        let mut notice = None;

        dispatch_backend_command(&cmd_tx, BackendCommand::Regenerate, &mut notice);
        dispatch_backend_command(&cmd_tx, BackendCommand::CopyAnswer, &mut notice);

        assert_eq!(
            notice.as_deref(),
            Some("UI command queue is full; please retry")
        );
    }

    #[test]
    fn disconnected_worker_sets_restart_notice() {
        let (cmd_tx, cmd_rx) = bounded(1);
        drop(cmd_rx);
        let mut notice = None;

        dispatch_backend_command(&cmd_tx, BackendCommand::LoadSample, &mut notice);

        assert!(notice.expect("notice").contains("restart the app"));
    }
}
