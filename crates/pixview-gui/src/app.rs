use std::path::PathBuf;
use std::sync::mpsc;

use pixview_core::config::ViewerConfig;
use pixview_core::engine::ViewportEngine;
use pixview_core::io::image_io::DecodedImage;
use pixview_core::navigation::ImageNavigator;
use pixview_core::observe::SourceId;
use tracing::{debug, warn};

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::shortcuts::{self, AppAction};
use crate::states::{UIState, ViewportState};
use crate::worker;

pub struct PixviewApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub config: ViewerConfig,
    pub engine: ViewportEngine,
    pub navigator: ImageNavigator,
    pub viewport: ViewportState,
    pub ui_state: UIState,
}

impl PixviewApp {
    pub fn new(ctx: &egui::Context, config: ViewerConfig) -> std::io::Result<Self> {
        // Ctrl +/- belong to the image, not to egui's UI scale.
        ctx.options_mut(|o| o.zoom_with_keyboard = false);

        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone())?;

        Ok(Self {
            cmd_tx,
            result_tx,
            result_rx,
            engine: ViewportEngine::new(&config),
            navigator: ImageNavigator::new(config.image_extensions.clone()),
            viewport: ViewportState::new(config.wheel_multiplier),
            ui_state: UIState::default(),
            config,
        })
    }

    /// Show `path`: list its siblings and start decoding it.
    pub fn open_path(&mut self, path: PathBuf) {
        if let Err(e) = self.navigator.open(&path) {
            warn!("Failed to list images next to {}: {e}", path.display());
        }
        self.load_current();
    }

    fn load_current(&mut self) {
        let Some(path) = self.navigator.current().map(PathBuf::from) else {
            return;
        };
        let source = self.viewport.metrics.assign();
        self.viewport.texture = None;
        self.engine.set_image_size(self.viewport.metrics.size());
        self.ui_state.loading = true;
        let _ = self.cmd_tx.send(WorkerCommand::LoadImage { source, path });
    }

    pub fn next_image(&mut self) {
        if self.navigator.next().is_some() {
            self.load_current();
        }
    }

    pub fn previous_image(&mut self) {
        if self.navigator.previous().is_some() {
            self.load_current();
        }
    }

    /// Re-list the directory and decode the current image again.
    pub fn reload(&mut self) {
        if let Err(e) = self.navigator.refresh() {
            warn!("Failed to refresh image list: {e}");
        }
        self.load_current();
    }

    /// Open the native file dialog on a helper thread. Ignored while one is
    /// already open.
    pub fn pick_file(&mut self) {
        if self.ui_state.picker_open {
            return;
        }
        self.ui_state.picker_open = true;

        let result_tx = self.result_tx.clone();
        let extensions = self.config.image_extensions.clone();
        std::thread::spawn(move || {
            let picked = rfd::FileDialog::new()
                .add_filter("Images", extensions.as_slice())
                .add_filter("All files", &["*"])
                .pick_file();
            let _ = result_tx.send(WorkerResult::FilePicked { path: picked });
        });
    }

    pub fn dispatch(&mut self, action: AppAction) {
        match action {
            AppAction::View(cmd) => self.engine.apply(cmd),
            AppAction::Next => self.next_image(),
            AppAction::Previous => self.previous_image(),
            AppAction::Open => self.pick_file(),
            AppAction::Reload => self.reload(),
        }
    }

    /// Drain all pending results from the worker and file dialog.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded {
                    source,
                    path,
                    image,
                } => self.on_image_loaded(ctx, source, path, image),
                WorkerResult::FilePicked { path } => {
                    self.ui_state.picker_open = false;
                    if let Some(path) = path {
                        self.open_path(path);
                    }
                }
                WorkerResult::Error { source, message } => {
                    if self.viewport.metrics.current_source() != Some(source) {
                        debug!(?source, "ignoring error from superseded decode");
                        continue;
                    }
                    self.ui_state.loading = false;
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    fn on_image_loaded(
        &mut self,
        ctx: &egui::Context,
        source: SourceId,
        path: PathBuf,
        image: DecodedImage,
    ) {
        if !self
            .viewport
            .metrics
            .decoded(source, image.width, image.height)
        {
            return;
        }
        self.ui_state.loading = false;

        let color_image = egui::ColorImage::from_rgba_unmultiplied(
            [image.width as usize, image.height as usize],
            &image.rgba,
        );
        let texture = ctx.load_texture("viewport", color_image, egui::TextureOptions::LINEAR);
        self.viewport.texture = Some(texture);
        self.engine.set_image_size(self.viewport.metrics.size());

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(format!("{name} - Image Viewer")));
        self.ui_state
            .add_log(format!("Opened: {} ({}x{})", path.display(), image.width, image.height));
    }
}

impl eframe::App for PixviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        for action in shortcuts::collect_actions(ctx) {
            self.dispatch(action);
        }

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.ui_state.show_about {
            egui::Window::new("About")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Image Viewer");
                        ui.label("Pan and zoom a single image");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}
