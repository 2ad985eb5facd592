use std::path::Path;

use tracing::debug;

use crate::error::{PixviewError, Result};
use crate::geometry::ImageSize;

/// A decoded image ready for upload to the renderer.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// Tightly packed 8-bit RGBA, row-major.
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    pub fn size(&self) -> Option<ImageSize> {
        ImageSize::from_pixels(self.width, self.height)
    }
}

/// Read only the header to get the natural size of an image.
pub fn probe_image_size(path: &Path) -> Result<ImageSize> {
    let (width, height) = image::image_dimensions(path)?;
    ImageSize::from_pixels(width, height).ok_or(PixviewError::InvalidDimensions { width, height })
}

/// Decode an image file to RGBA8.
pub fn load_image(path: &Path) -> Result<DecodedImage> {
    let img = image::open(path)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(PixviewError::InvalidDimensions { width, height });
    }
    debug!(path = %path.display(), width, height, "decoded image");
    Ok(DecodedImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}
