use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pixview_core::engine::ViewportEngine;
use pixview_core::geometry::ViewportRect;
use pixview_core::io::image_io::probe_image_size;

use crate::summary::print_fit_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,

    /// Viewport to fit the image into
    #[arg(long, value_parser = super::parse_size, default_value = "1280x800")]
    pub viewport: (f32, f32),

    /// Viewer config (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let size = probe_image_size(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let mut engine = ViewportEngine::new(&config);
    engine.set_viewport_rect(ViewportRect::new(args.viewport.0, args.viewport.1));
    engine.on_image_ready(size);

    print_fit_summary(&args.file, &engine);
    Ok(())
}
