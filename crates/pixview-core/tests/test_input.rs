use pixview_core::engine::ViewportEngine;
use pixview_core::geometry::{ImageSize, Vec2, ViewportRect};
use pixview_core::input::{
    DeltaMode, DragTracker, PointerButton, PointerEvent, WheelEvent, WheelNormalizer,
};

fn press_at(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Press {
        button: PointerButton::Primary,
        pos: Vec2::new(x, y),
    }
}

fn move_to(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Move { pos: Vec2::new(x, y) }
}

fn motions(tracker: &mut DragTracker, events: &[PointerEvent]) -> Vec<Vec2> {
    events
        .iter()
        .filter_map(|e| tracker.handle(*e).motion)
        .collect()
}

#[test]
fn test_press_three_moves_release_emits_three_vectors() {
    let mut tracker = DragTracker::new();
    let events = [
        press_at(0.0, 0.0),
        move_to(5.0, 0.0),
        move_to(5.0, 5.0),
        move_to(0.0, 5.0),
        PointerEvent::Release,
    ];
    assert_eq!(motions(&mut tracker, &events).len(), 3);
}

#[test]
fn test_press_move_leave_emits_one_vector_then_nothing() {
    let mut tracker = DragTracker::new();
    let events = [
        press_at(0.0, 0.0),
        move_to(3.0, 4.0),
        PointerEvent::Leave,
        move_to(10.0, 10.0),
        move_to(20.0, 20.0),
    ];
    assert_eq!(motions(&mut tracker, &events), vec![Vec2::new(3.0, 4.0)]);

    let resumed = motions(&mut tracker, &[press_at(20.0, 20.0), move_to(21.0, 20.0)]);
    assert_eq!(resumed, vec![Vec2::new(1.0, 0.0)]);
}

#[test]
fn test_drag_motion_pans_engine() {
    let mut engine = ViewportEngine::default();
    engine.set_viewport_rect(ViewportRect::new(200.0, 200.0));
    engine.on_image_ready(ImageSize::new(400.0, 100.0).unwrap());

    let mut tracker = DragTracker::new();
    for event in [press_at(50.0, 50.0), move_to(40.0, 60.0), move_to(30.0, 70.0), PointerEvent::Release] {
        if let Some(delta) = tracker.handle(event).motion {
            engine.pan(delta);
        }
    }
    assert_eq!(engine.position(), Vec2::new(-20.0, 95.0));
}

#[test]
fn test_wheel_zooms_engine() {
    let mut engine = ViewportEngine::default();
    engine.set_viewport_rect(ViewportRect::new(200.0, 100.0));
    engine.on_image_ready(ImageSize::new(200.0, 100.0).unwrap());

    let wheel = WheelNormalizer::default();
    let outcome = wheel.normalize(WheelEvent {
        delta_y: -50.0,
        mode: DeltaMode::Pixel,
    });
    assert!(outcome.suppress_default);
    engine.zoom_by(outcome.zoom_delta);
    approx::assert_relative_eq!(engine.scale(), 1.5);
}
