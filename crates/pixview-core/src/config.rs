use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{
    EDGE_MARGIN_PX, IMAGE_EXTENSIONS, KEYBOARD_ZOOM_STEP, MIN_IMAGE_PX, WHEEL_ZOOM_MULTIPLIER,
};
use crate::error::{PixviewError, Result};

/// Tunables for the viewport engine and its input adapters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Pixels of the scaled image that must stay reachable inside the viewport after a pan.
    pub edge_margin_px: f32,
    /// Minimum size of the shorter scaled image side.
    pub min_image_px: f32,
    /// Wheel pixels to scale delta.
    pub wheel_multiplier: f32,
    /// Scale delta for a single zoom-in / zoom-out command.
    pub keyboard_zoom_step: f32,
    /// Extensions listed for next/previous navigation (case-insensitive).
    pub image_extensions: Vec<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            edge_margin_px: EDGE_MARGIN_PX,
            min_image_px: MIN_IMAGE_PX,
            wheel_multiplier: WHEEL_ZOOM_MULTIPLIER,
            keyboard_zoom_step: KEYBOARD_ZOOM_STEP,
            image_extensions: IMAGE_EXTENSIONS.iter().map(|e| (*e).to_string()).collect(),
        }
    }
}

impl ViewerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("edge_margin_px", self.edge_margin_px),
            ("min_image_px", self.min_image_px),
            ("wheel_multiplier", self.wheel_multiplier),
            ("keyboard_zoom_step", self.keyboard_zoom_step),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(PixviewError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if self.image_extensions.iter().any(|e| e.is_empty() || e.starts_with('.')) {
            return Err(PixviewError::InvalidConfig(
                "image_extensions entries must be non-empty and given without a leading dot".into(),
            ));
        }
        Ok(())
    }
}
