pub mod drag;
pub mod wheel;

pub use drag::{DragOutcome, DragTracker, PointerButton, PointerEvent};
pub use wheel::{DeltaMode, WheelEvent, WheelNormalizer, WheelOutcome};
