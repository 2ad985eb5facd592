pub mod image;
pub mod rect;

pub use image::{ImageMetrics, SourceId};
pub use rect::RectObserver;
