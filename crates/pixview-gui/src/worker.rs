use std::sync::mpsc;
use std::time::Instant;

use pixview_core::io::image_io::load_image;
use tracing::debug;

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the decode thread. Returns the command sender.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> std::io::Result<mpsc::Sender<WorkerCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("pixview-decoder".into())
        .spawn(move || worker_loop(cmd_rx, result_tx, ctx))?;

    Ok(cmd_tx)
}

pub(crate) fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadImage { source, path } => {
                let start = Instant::now();
                let result = match load_image(&path) {
                    Ok(image) => {
                        debug!(path = %path.display(), elapsed = ?start.elapsed(), "image decoded");
                        WorkerResult::ImageLoaded {
                            source,
                            path,
                            image,
                        }
                    }
                    Err(e) => WorkerResult::Error {
                        source,
                        message: format!("Failed to open {}: {e}", path.display()),
                    },
                };
                send(&tx, &ctx, result);
            }
        }
    }
}
