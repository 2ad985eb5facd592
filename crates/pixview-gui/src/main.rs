mod app;
mod messages;
mod panels;
mod shortcuts;
mod states;
mod worker;

use std::path::PathBuf;

use clap::Parser;
use pixview_core::config::ViewerConfig;

#[derive(Parser)]
#[command(name = "pixview-gui", about = "Pan/zoom image viewer")]
#[command(version)]
struct Cli {
    /// Image to open on startup
    file: Option<PathBuf>,

    /// Viewer config (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = match cli.config.as_deref().map(ViewerConfig::load) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            tracing::warn!("Failed to load config, using defaults: {e}");
            ViewerConfig::default()
        }
        None => ViewerConfig::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([320.0, 240.0])
            .with_title("Image Viewer"),
        ..Default::default()
    };

    eframe::run_native(
        "pixview",
        options,
        Box::new(move |cc| {
            let mut app = app::PixviewApp::new(&cc.egui_ctx, config)?;
            if let Some(path) = cli.file {
                app.open_path(path);
            }
            Ok(Box::new(app))
        }),
    )
}
