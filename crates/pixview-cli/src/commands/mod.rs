pub mod config;
pub mod info;
pub mod list;
pub mod replay;

use std::path::Path;

use anyhow::{Context, Result};
use pixview_core::config::ViewerConfig;

/// Parse a `WIDTHxHEIGHT` size argument, e.g. `1280x720`.
pub fn parse_size(s: &str) -> std::result::Result<(f32, f32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let width: f32 = w.trim().parse().map_err(|_| format!("invalid width '{w}'"))?;
    let height: f32 = h.trim().parse().map_err(|_| format!("invalid height '{h}'"))?;
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(format!("size must be positive, got '{s}'"));
    }
    Ok((width, height))
}

/// Load the config at `path`, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<ViewerConfig> {
    match path {
        Some(path) => ViewerConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(ViewerConfig::default()),
    }
}
