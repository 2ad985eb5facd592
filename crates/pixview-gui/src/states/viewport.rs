use pixview_core::input::{DragTracker, WheelNormalizer};
use pixview_core::observe::{ImageMetrics, RectObserver};

/// Viewport display state: the uploaded texture plus the geometry and input
/// adapters that feed the engine.
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    pub rect_observer: RectObserver,
    pub metrics: ImageMetrics,
    pub drag: DragTracker,
    pub wheel: WheelNormalizer,
}

impl ViewportState {
    pub fn new(wheel_multiplier: f32) -> Self {
        Self {
            texture: None,
            rect_observer: RectObserver::new(),
            metrics: ImageMetrics::new(),
            drag: DragTracker::new(),
            wheel: WheelNormalizer::new(wheel_multiplier),
        }
    }
}
