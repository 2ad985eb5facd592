//! Pointer drag tracking.
//!
//! Turns press / move / release sequences into per-event motion vectors.
//! Leaving the tracked surface ends the drag exactly like a release, so a
//! button released outside the viewport never leaves a drag stuck on.

use crate::geometry::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other,
}

/// Pointer input as seen on the tracked surface, in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Press { button: PointerButton, pos: Vec2 },
    Move { pos: Vec2 },
    Release,
    Leave,
}

/// Result of feeding one event to the tracker.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragOutcome {
    /// Movement since the previous pointer sample, while a drag is active.
    pub motion: Option<Vec2>,
    /// The host should suppress its default handling (e.g. native drag-and-drop).
    pub suppress_default: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum DragState {
    #[default]
    Idle,
    Pressing {
        last: Vec2,
    },
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DragTracker {
    state: DragState,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressing(&self) -> bool {
        matches!(self.state, DragState::Pressing { .. })
    }

    pub fn handle(&mut self, event: PointerEvent) -> DragOutcome {
        match (self.state, event) {
            (_, PointerEvent::Press { button: PointerButton::Primary, pos }) => {
                self.state = DragState::Pressing { last: pos };
                DragOutcome {
                    motion: None,
                    suppress_default: true,
                }
            }
            (DragState::Pressing { last }, PointerEvent::Move { pos }) => {
                if !pos.is_finite() {
                    return DragOutcome {
                        motion: None,
                        suppress_default: true,
                    };
                }
                self.state = DragState::Pressing { last: pos };
                DragOutcome {
                    motion: Some(pos - last),
                    suppress_default: true,
                }
            }
            (DragState::Pressing { .. }, PointerEvent::Release | PointerEvent::Leave) => {
                self.state = DragState::Idle;
                DragOutcome {
                    motion: None,
                    suppress_default: true,
                }
            }
            _ => DragOutcome::default(),
        }
    }
}
