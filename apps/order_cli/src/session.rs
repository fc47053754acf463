use std::sync::Arc;

use anyhow::Context;
use client_core::OrderIntake;
use order_form::{FormEffect, FormEvent, FormView, OrderFormController, SubmissionResult};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc,
};
use tracing::info;

use crate::{
    bridge::{dispatch_backend_command, spawn_backend, BackendCommand},
    commands::{parse_command, Command, HELP},
};

const COMMAND_QUEUE: usize = 16;

/// Interactive form over `input`. Returns the final form once input ends (or
/// `quit` is entered) and every in-flight submission has resolved.
pub async fn run<R>(intake: Arc<dyn OrderIntake>, input: R) -> anyhow::Result<OrderFormController>
where
    R: AsyncBufRead + Unpin,
{
    let (cmd_tx, cmd_rx) = mpsc::channel(COMMAND_QUEUE);
    let (ui_tx, mut ui_rx) = mpsc::channel::<SubmissionResult>(COMMAND_QUEUE);
    let backend = spawn_backend(intake, cmd_rx, ui_tx);

    let mut form = OrderFormController::new();
    let mut lines = input.lines();
    let mut input_open = true;
    let mut in_flight = 0usize;

    println!("{}\n", FormView::new(&form));
    println!("{HELP}");

    while input_open || in_flight > 0 {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line.context("failed to read form input")? else {
                    input_open = false;
                    continue;
                };
                let command = match parse_command(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(err) => {
                        println!("{err}");
                        continue;
                    }
                };
                match command {
                    Command::Quit => {
                        input_open = false;
                        if in_flight > 0 {
                            println!("waiting for {in_flight} submission(s) to finish...");
                        }
                    }
                    Command::Help => println!("{HELP}"),
                    Command::Show => println!("{}", FormView::new(&form)),
                    Command::Event(event) => {
                        let submit_requested = matches!(event, FormEvent::SubmitRequested);
                        match form.apply(event) {
                            Some(FormEffect::Submit(request)) => {
                                match dispatch_backend_command(&cmd_tx, BackendCommand::Submit(request)) {
                                    Ok(()) => {
                                        in_flight += 1;
                                        info!(in_flight, "form: submission queued");
                                        println!("submitting order...");
                                    }
                                    Err(status) => println!("{status}"),
                                }
                            }
                            None if submit_requested => {
                                println!("submit is disabled until the form is valid");
                            }
                            None => println!("{}", FormView::new(&form)),
                        }
                    }
                }
            }
            Some(result) = ui_rx.recv() => {
                in_flight = in_flight.saturating_sub(1);
                form.apply(FormEvent::SubmissionResolved(result));
                println!("{}", FormView::new(&form));
            }
            else => break,
        }
    }

    backend.abort();
    Ok(form)
}
