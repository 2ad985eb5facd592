//! Viewport transform engine.
//!
//! Owns the image position and scale, derives the on-screen [`Placement`]
//! from them, and is the only place either value is mutated. Every command
//! is total: when the geometry it needs is not known yet, or its input is not
//! a finite number, it does nothing.

use tracing::{debug, info};

use crate::command::ViewerCommand;
use crate::config::ViewerConfig;
use crate::geometry::{ImageSize, Placement, Vec2, ViewportRect};
use crate::signal::{Signal, SubscriptionId};

pub struct ViewportEngine {
    position: Vec2,
    scale: f32,
    image_size: Option<ImageSize>,
    viewport_rect: Option<ViewportRect>,
    /// Image arrived before the viewport size was known; fit once it is.
    pending_fit: bool,
    placement: Placement,
    placement_changed: Signal<Placement>,
    edge_margin: f32,
    min_image_px: f32,
    zoom_step: f32,
}

impl Default for ViewportEngine {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}

impl ViewportEngine {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            position: Vec2::ZERO,
            scale: 1.0,
            image_size: None,
            viewport_rect: None,
            pending_fit: false,
            placement: Placement::Auto,
            placement_changed: Signal::new(),
            edge_margin: config.edge_margin_px,
            min_image_px: config.min_image_px,
            zoom_step: config.keyboard_zoom_step,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn image_size(&self) -> Option<ImageSize> {
        self.image_size
    }

    pub fn viewport_rect(&self) -> Option<ViewportRect> {
        self.viewport_rect
    }

    /// Current placement for the renderer.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Smallest scale allowed for the current image, or `0.0` with no image.
    pub fn min_scale(&self) -> f32 {
        self.image_size
            .map_or(0.0, |size| self.min_image_px / size.shorter_side())
    }

    /// Notify `callback` every time the placement changes.
    pub fn subscribe_placement(
        &mut self,
        callback: impl FnMut(&Placement) + 'static,
    ) -> SubscriptionId {
        self.placement_changed.subscribe(callback)
    }

    pub fn unsubscribe_placement(&mut self, id: SubscriptionId) -> bool {
        self.placement_changed.unsubscribe(id)
    }

    /// Move the image by `delta`, keeping at least the edge margin of it
    /// reachable inside the viewport on every side.
    pub fn pan(&mut self, delta: Vec2) {
        if !delta.is_finite() {
            debug!(?delta, "discarding non-finite pan delta");
            return;
        }
        let (Some(image), Some(viewport)) = (self.image_size, self.viewport_rect) else {
            return;
        };

        let scaled = image.scaled(self.scale);
        let moved = self.position + delta;
        self.position = Vec2::new(
            clamp_axis(moved.x, -scaled.x + self.edge_margin, viewport.width - self.edge_margin),
            clamp_axis(moved.y, -scaled.y + self.edge_margin, viewport.height - self.edge_margin),
        );
        self.publish();
    }

    pub fn zoom_by(&mut self, delta: f32) {
        if !delta.is_finite() {
            debug!(delta, "discarding non-finite zoom delta");
            return;
        }
        self.zoom_to(self.scale + delta);
    }

    /// Set the scale, keeping the visual center of the image fixed.
    ///
    /// The position is left unclamped; the next pan brings it
    /// back within bounds.
    pub fn zoom_to(&mut self, requested: f32) {
        if !requested.is_finite() {
            debug!(requested, "discarding non-finite zoom target");
            return;
        }
        let new_scale = requested.max(self.min_scale());
        if new_scale <= 0.0 {
            debug!(requested, "discarding non-positive zoom target");
            return;
        }

        if let Some(image) = self.image_size {
            let scaled = image.scaled(new_scale);
            let center = self.position + image.scaled(self.scale) * 0.5;
            let position = center - scaled * 0.5;
            if !(scaled.is_finite() && position.is_finite()) {
                debug!(requested, "discarding zoom that overflows the image extent");
                return;
            }
            self.position = position;
        }
        self.scale = new_scale;
        self.publish();
    }

    /// Letterbox-fit the image into the viewport and center it on the
    /// axis it does not fill.
    pub fn fit_to_viewport(&mut self) {
        let (Some(image), Some(viewport)) = (self.image_size, self.viewport_rect) else {
            return;
        };

        if image.aspect() > viewport.aspect() {
            self.scale = viewport.width / image.width;
            self.position = Vec2::new(0.0, (viewport.height - image.height * self.scale) / 2.0);
        } else {
            self.scale = viewport.height / image.height;
            self.position = Vec2::new((viewport.width - image.width * self.scale) / 2.0, 0.0);
        }
        self.pending_fit = false;
        self.publish();
    }

    /// A new image finished loading: replace its size and fit it.
    pub fn on_image_ready(&mut self, size: ImageSize) {
        if ImageSize::new(size.width, size.height).is_none() {
            debug!(?size, "discarding degenerate image size");
            return;
        }
        info!(width = size.width, height = size.height, "image ready");
        self.image_size = Some(size);
        if self.viewport_rect.is_some() {
            self.fit_to_viewport();
        } else {
            self.pending_fit = true;
            self.publish();
        }
    }

    /// The image was unloaded or its size is no longer known.
    pub fn clear_image(&mut self) {
        self.image_size = None;
        self.pending_fit = false;
        self.publish();
    }

    /// Feed the latest metrics report; `None` clears the image.
    pub fn set_image_size(&mut self, size: Option<ImageSize>) {
        match size {
            Some(size) => self.on_image_ready(size),
            None => self.clear_image(),
        }
    }

    /// Record a new viewport size. Position and scale are not re-clamped
    /// here; only the next pan or zoom validates them.
    pub fn set_viewport_rect(&mut self, rect: Option<ViewportRect>) {
        let rect = rect.and_then(|r| ViewportRect::new(r.width, r.height));
        self.viewport_rect = rect;
        if self.pending_fit && rect.is_some() {
            self.fit_to_viewport();
        } else {
            self.publish();
        }
    }

    pub fn apply(&mut self, command: ViewerCommand) {
        match command {
            ViewerCommand::Pan(delta) => self.pan(delta),
            ViewerCommand::ZoomBy(delta) => self.zoom_by(delta),
            ViewerCommand::ZoomTo(scale) => self.zoom_to(scale),
            ViewerCommand::ZoomIn => self.zoom_by(self.zoom_step),
            ViewerCommand::ZoomOut => self.zoom_by(-self.zoom_step),
            ViewerCommand::Fit => self.fit_to_viewport(),
            ViewerCommand::ActualSize => self.zoom_to(1.0),
        }
    }

    fn compute_placement(&self) -> Placement {
        match (self.image_size, self.viewport_rect) {
            (Some(image), Some(_)) => Placement::Fixed {
                left: self.position.x,
                top: self.position.y,
                width: image.width * self.scale,
                height: image.height * self.scale,
            },
            _ => Placement::Auto,
        }
    }

    fn publish(&mut self) {
        let placement = self.compute_placement();
        if placement != self.placement {
            self.placement = placement;
            self.placement_changed.emit(&self.placement);
        }
    }
}

impl std::fmt::Debug for ViewportEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportEngine")
            .field("position", &self.position)
            .field("scale", &self.scale)
            .field("image_size", &self.image_size)
            .field("viewport_rect", &self.viewport_rect)
            .field("placement", &self.placement)
            .finish_non_exhaustive()
    }
}

/// Clamp into `[lo, hi]`; `hi` wins when the viewport is too small for the
/// range to be non-empty.
fn clamp_axis(value: f32, lo: f32, hi: f32) -> f32 {
    value.max(lo).min(hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_axis_empty_range_prefers_upper_bound() {
        assert_eq!(clamp_axis(0.0, 5.0, -5.0), -5.0);
        assert_eq!(clamp_axis(3.0, -5.0, 5.0), 3.0);
        assert_eq!(clamp_axis(-9.0, -5.0, 5.0), -5.0);
    }

    #[test]
    fn test_pending_fit_runs_when_viewport_arrives() {
        let mut engine = ViewportEngine::default();
        engine.on_image_ready(ImageSize::new(400.0, 100.0).unwrap());
        assert!(engine.placement().is_auto());
        assert!(engine.pending_fit);

        engine.set_viewport_rect(ViewportRect::new(200.0, 200.0));
        assert!(!engine.pending_fit);
        assert_eq!(engine.scale(), 0.5);
        assert_eq!(engine.position(), Vec2::new(0.0, 75.0));
    }
}
