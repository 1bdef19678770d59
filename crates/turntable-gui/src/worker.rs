use std::path::Path;
use std::sync::mpsc;

use turntable_core::consts::DEFAULT_EXTENSION;
use turntable_core::loader::{load_frame, preload_rest};
use turntable_core::sequence::discover;

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the worker thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("turntable-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })
        .expect("Failed to spawn worker thread");

    cmd_tx
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn send_error(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Error { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::OpenSequence { dir, prefix } => {
                handle_open_sequence(&dir, &prefix, &tx, &ctx);
            }
        }
    }
}

fn handle_open_sequence(
    dir: &Path,
    prefix: &str,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let spec = match discover(dir, prefix, DEFAULT_EXTENSION) {
        Ok(spec) => spec,
        Err(e) => {
            send_error(tx, ctx, format!("Failed to open sequence: {e}"));
            return;
        }
    };
    // A broken first frame must not abort the open: the player mounts
    // anyway, shows the failure, and the batch still loads the rest.
    let info = spec.probe().ok();
    match info {
        Some(ref info) => send_log(
            tx,
            ctx,
            format!(
                "Opened {} ({} frames, {}x{})",
                spec.dir.display(),
                info.count,
                info.width,
                info.height
            ),
        ),
        None => send_log(
            tx,
            ctx,
            format!("Opened {} ({} frames)", spec.dir.display(), spec.count),
        ),
    }
    send(
        tx,
        ctx,
        WorkerResult::SequenceOpened {
            spec: spec.clone(),
            info,
        },
    );

    // Frame 0 first, for instant feedback. Its outcome is sent either way;
    // the batch follows regardless so a broken first frame does not stall
    // the rest of the sequence.
    let first = load_frame(&spec, 0);
    send(tx, ctx, WorkerResult::FrameSettled { index: 0, outcome: first });

    let report = preload_rest(&spec, |index, outcome| {
        let _ = tx.send(WorkerResult::FrameSettled { index, outcome });
        ctx.request_repaint();
    });

    if report.failed.is_empty() {
        send_log(tx, ctx, format!("Preloaded {} frames", spec.count));
    } else {
        send_log(
            tx,
            ctx,
            format!(
                "Preloaded {} frames, {} failed",
                report.loaded(),
                report.failed.len()
            ),
        );
    }
    send(tx, ctx, WorkerResult::PreloadFinished { report });
}
