use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::Vec2;

/// Semantic commands the engine accepts from keyboard shortcuts, menus or
/// scripts. Which physical key produces which command is up to the host.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ViewerCommand {
    Pan(Vec2),
    ZoomBy(f32),
    ZoomTo(f32),
    ZoomIn,
    ZoomOut,
    Fit,
    /// Show the image at its natural size (scale 1).
    ActualSize,
}

impl fmt::Display for ViewerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerCommand::Pan(d) => write!(f, "Pan ({}, {})", d.x, d.y),
            ViewerCommand::ZoomBy(d) => write!(f, "Zoom By {d}"),
            ViewerCommand::ZoomTo(s) => write!(f, "Zoom To {s}"),
            ViewerCommand::ZoomIn => write!(f, "Zoom In"),
            ViewerCommand::ZoomOut => write!(f, "Zoom Out"),
            ViewerCommand::Fit => write!(f, "Fit to Window"),
            ViewerCommand::ActualSize => write!(f, "Actual Size"),
        }
    }
}
