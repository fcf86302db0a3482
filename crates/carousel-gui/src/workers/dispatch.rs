use std::sync::mpsc;

use crate::messages::{WorkerCommand, WorkerResult};

use super::{io, LoadGeneration, SlideFetcher};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    latest: LoadGeneration,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("carousel-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx, latest);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

pub(crate) fn send_log(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Log {
            message: msg.into(),
        },
    );
}

pub(crate) fn send_error(
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
    msg: impl Into<String>,
) {
    send(
        tx,
        ctx,
        WorkerResult::Error {
            message: msg.into(),
        },
    );
}

/// Commands queued for a load the UI has since replaced are skipped.
fn should_run(cmd: &WorkerCommand, latest: &LoadGeneration) -> bool {
    latest.is_current(cmd.generation())
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
    latest: LoadGeneration,
) {
    let fetcher = match SlideFetcher::new() {
        Ok(f) => Some(f),
        Err(e) => {
            send_error(&tx, &ctx, format!("Image downloads unavailable: {e:#}"));
            None
        }
    };

    while let Ok(cmd) = cmd_rx.recv() {
        if !should_run(&cmd, &latest) {
            tracing::debug!(generation = cmd.generation(), "Skipping stale command");
            continue;
        }

        match cmd {
            WorkerCommand::LoadSource {
                generation,
                location,
                allowed_hosts,
            } => {
                io::handle_load_source(generation, &location, &allowed_hosts, &tx, &ctx);
            }
            WorkerCommand::FetchSlide {
                generation,
                index,
                url,
            } => {
                io::handle_fetch_slide(generation, index, &url, fetcher.as_ref(), &tx, &ctx);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use carousel_core::source::{AllowList, ImageUrl};

    use super::*;

    fn fetch(generation: u64) -> WorkerCommand {
        let url = ImageUrl::new("drive.google.com/a", &AllowList::default()).unwrap();
        WorkerCommand::FetchSlide {
            generation,
            index: 0,
            url,
        }
    }

    #[test]
    fn queued_fetches_skipped_once_new_load_requested() {
        let latest = LoadGeneration::default();
        let first = latest.advance();
        let queued = [fetch(first), fetch(first)];
        assert!(queued.iter().all(|cmd| should_run(cmd, &latest)));

        let second = latest.advance();
        let reload = WorkerCommand::LoadSource {
            generation: second,
            location: "files".into(),
            allowed_hosts: AllowList::default(),
        };
        assert!(queued.iter().all(|cmd| !should_run(cmd, &latest)));
        assert!(should_run(&reload, &latest));
        assert!(should_run(&fetch(second), &latest));
    }

    #[test]
    fn superseded_load_is_skipped() {
        let latest = LoadGeneration::default();
        let first = latest.advance();
        latest.advance();
        let stale = WorkerCommand::LoadSource {
            generation: first,
            location: "files".into(),
            allowed_hosts: AllowList::default(),
        };
        assert!(!should_run(&stale, &latest));
    }
}
