//! Bridge between the form loop and the order intake: commands go out, resolved submissions come back.

use std::sync::Arc;

use client_core::OrderIntake;
use order_form::{run_submission, SubmissionResult};
use shared::protocol::OrderRequest;
use tokio::{
    sync::mpsc::{self, error::TrySendError},
    task::JoinHandle,
};

pub enum BackendCommand {
    Submit(OrderRequest),
}

/// Runs every queued submission on its own task; results arrive in resolution order.
pub fn spawn_backend(
    intake: Arc<dyn OrderIntake>,
    mut cmd_rx: mpsc::Receiver<BackendCommand>,
    ui_tx: mpsc::Sender<SubmissionResult>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(cmd) = cmd_rx.recv().await {
            match cmd {
                BackendCommand::Submit(request) => {
                    let intake = Arc::clone(&intake);
                    let ui_tx = ui_tx.clone();
                    tokio::spawn(async move {
                        let result = run_submission(intake.as_ref(), request).await;
                        if ui_tx.send(result).await.is_err() {
                            tracing::debug!("form loop gone; dropping submission result");
                        }
                    });
                }
            }
        }
    })
}

/// Queues `cmd`, returning a status line when the queue cannot take it.
pub fn dispatch_backend_command(
    cmd_tx: &mpsc::Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), String> {
    let cmd_name = match &cmd {
        BackendCommand::Submit(_) => "submit",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued form->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => Err("submission queue is full; please retry".to_string()),
        Err(TrySendError::Closed(_)) => {
            Err("order backend stopped; restart the form to submit".to_string())
        }
    }
}
