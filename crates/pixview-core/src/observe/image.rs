use tracing::debug;

use crate::geometry::ImageSize;
use crate::signal::{Signal, SubscriptionId};

/// Identifies one assignment of an image source. Reassigning the same file
/// (a reload) yields a fresh id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceId(u64);

/// Reports the natural size of the currently assigned image.
///
/// The size is `None` from [`assign`](Self::assign) until the matching
/// [`decoded`](Self::decoded) call. Decode results for a source that has
/// since been replaced are dropped.
#[derive(Debug, Default)]
pub struct ImageMetrics {
    next_id: u64,
    current: Option<SourceId>,
    size: Option<ImageSize>,
    changed: Signal<Option<ImageSize>>,
}

impl ImageMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&Option<ImageSize>) + 'static,
    ) -> SubscriptionId {
        self.changed.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.changed.unsubscribe(id)
    }

    /// A new source was assigned; its size is unknown until decoded.
    pub fn assign(&mut self) -> SourceId {
        let id = SourceId(self.next_id);
        self.next_id += 1;
        self.current = Some(id);
        self.size = None;
        self.changed.emit(&None);
        id
    }

    /// Decoding of `id` finished. Returns `false` if `id` is stale or the
    /// dimensions are degenerate.
    pub fn decoded(&mut self, id: SourceId, width: u32, height: u32) -> bool {
        if self.current != Some(id) {
            debug!(?id, "ignoring decode result for replaced source");
            return false;
        }
        let Some(size) = ImageSize::from_pixels(width, height) else {
            debug!(width, height, "ignoring degenerate decoded size");
            return false;
        };
        self.size = Some(size);
        self.changed.emit(&self.size);
        true
    }

    /// No image is attached anymore.
    pub fn clear(&mut self) {
        let had_source = self.current.take().is_some();
        self.size = None;
        if had_source {
            self.changed.emit(&None);
        }
    }

    pub fn size(&self) -> Option<ImageSize> {
        self.size
    }

    pub fn current_source(&self) -> Option<SourceId> {
        self.current
    }
}
