use tracing::debug;

use crate::geometry::ViewportRect;
use crate::signal::{Signal, SubscriptionId};

/// Tracks the content-box size of the viewport container.
///
/// The host calls [`attach`](Self::attach) once the container exists,
/// [`report`](Self::report) on every layout pass or resize notification, and
/// [`detach`](Self::detach) when the container goes away. Zero-sized or
/// otherwise degenerate rects are reported as `None`.
#[derive(Debug, Default)]
pub struct RectObserver {
    attached: bool,
    current: Option<ViewportRect>,
    changed: Signal<Option<ViewportRect>>,
}

impl RectObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&Option<ViewportRect>) + 'static,
    ) -> SubscriptionId {
        self.changed.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.changed.unsubscribe(id)
    }

    /// Start observing and report the initial size immediately.
    pub fn attach(&mut self, width: f32, height: f32) {
        debug!(width, height, "rect observer attached");
        self.attached = true;
        self.current = ViewportRect::new(width, height);
        self.changed.emit(&self.current);
    }

    /// Report the latest size. Returns `true` if it differs from the last
    /// reported one and subscribers were notified. Ignored while detached.
    pub fn report(&mut self, width: f32, height: f32) -> bool {
        if !self.attached {
            return false;
        }
        let rect = ViewportRect::new(width, height);
        if rect == self.current {
            return false;
        }
        self.current = rect;
        self.changed.emit(&self.current);
        true
    }

    /// Stop observing: report `None` one last time and drop every subscription.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        debug!("rect observer detached");
        self.attached = false;
        self.current = None;
        self.changed.emit(&None);
        self.changed.clear();
    }

    pub fn current(&self) -> Option<ViewportRect> {
        self.current
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn subscriber_count(&self) -> usize {
        self.changed.subscriber_count()
    }
}
