use crate::consts::{WHEEL_LINE_PX, WHEEL_PAGE_PX, WHEEL_ZOOM_MULTIPLIER};

/// Unit of a wheel event's delta.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

/// A wheel event. Positive `delta_y` scrolls down / towards the user.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelEvent {
    pub delta_y: f32,
    pub mode: DeltaMode,
}

impl WheelEvent {
    pub fn pixels(delta_y: f32) -> Self {
        Self {
            delta_y,
            mode: DeltaMode::Pixel,
        }
    }

    fn delta_px(&self) -> f32 {
        match self.mode {
            DeltaMode::Pixel => self.delta_y,
            DeltaMode::Line => self.delta_y * WHEEL_LINE_PX,
            DeltaMode::Page => self.delta_y * WHEEL_PAGE_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelOutcome {
    pub zoom_delta: f32,
    /// Always set: the page must never scroll underneath the viewer.
    pub suppress_default: bool,
}

/// Converts wheel travel into a scale delta. Scrolling up zooms in.
#[derive(Clone, Copy, Debug)]
pub struct WheelNormalizer {
    multiplier: f32,
}

impl Default for WheelNormalizer {
    fn default() -> Self {
        Self::new(WHEEL_ZOOM_MULTIPLIER)
    }
}

impl WheelNormalizer {
    pub fn new(multiplier: f32) -> Self {
        Self { multiplier }
    }

    pub fn normalize(&self, event: WheelEvent) -> WheelOutcome {
        let delta = event.delta_px();
        let zoom_delta = if delta.is_finite() {
            -delta * self.multiplier
        } else {
            0.0
        };
        WheelOutcome {
            zoom_delta,
            suppress_default: true,
        }
    }
}
