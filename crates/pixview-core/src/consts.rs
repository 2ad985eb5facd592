/// Minimum number of scaled-image pixels that must stay inside the viewport
/// on every side after a pan.
pub const EDGE_MARGIN_PX: f32 = 10.0;

/// Floor for the shorter scaled image dimension, in viewport pixels.
pub const MIN_IMAGE_PX: f32 = 10.0;

/// Wheel delta (in pixels) to zoom delta. 100 px of wheel travel changes the
/// scale by one full unit.
pub const WHEEL_ZOOM_MULTIPLIER: f32 = 0.01;

/// Scale change applied by a single zoom-in / zoom-out command.
pub const KEYBOARD_ZOOM_STEP: f32 = 0.1;

/// Pixel equivalent of one wheel "line" for line-mode wheel events.
pub const WHEEL_LINE_PX: f32 = 40.0;

/// Pixel equivalent of one wheel "page" for page-mode wheel events.
pub const WHEEL_PAGE_PX: f32 = 800.0;

/// File extensions (lowercase, without the dot) treated as displayable images
/// when listing a directory for next/previous navigation.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "apng", "png", "avif", "jpg", "jpeg", "jfif", "pjpeg", "pjp", "svg", "webp", "bmp", "ico",
    "cur", "tif", "tiff",
];
