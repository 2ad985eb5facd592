use std::cell::RefCell;
use std::rc::Rc;

use pixview_core::engine::ViewportEngine;
use pixview_core::geometry::{ImageSize, ViewportRect};
use pixview_core::observe::{ImageMetrics, RectObserver};

fn recorder<T: Clone + 'static>() -> (Rc<RefCell<Vec<T>>>, impl FnMut(&T) + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    (seen, move |v: &T| sink.borrow_mut().push(v.clone()))
}

// ---------------------------------------------------------------------------
// RectObserver
// ---------------------------------------------------------------------------

#[test]
fn test_attach_reports_immediately() {
    let mut observer = RectObserver::new();
    let (seen, callback) = recorder::<Option<ViewportRect>>();
    observer.subscribe(callback);

    observer.attach(800.0, 600.0);
    assert_eq!(*seen.borrow(), vec![ViewportRect::new(800.0, 600.0)]);
    assert_eq!(observer.current(), ViewportRect::new(800.0, 600.0));
}

#[test]
fn test_report_only_on_change() {
    let mut observer = RectObserver::new();
    let (seen, callback) = recorder::<Option<ViewportRect>>();
    observer.subscribe(callback);
    observer.attach(800.0, 600.0);

    assert!(!observer.report(800.0, 600.0));
    assert!(observer.report(1024.0, 600.0));
    assert!(!observer.report(1024.0, 600.0));
    assert_eq!(seen.borrow().len(), 2);
}

#[test]
fn test_report_ignored_before_attach() {
    let mut observer = RectObserver::new();
    assert!(!observer.report(800.0, 600.0));
    assert_eq!(observer.current(), None);
}

#[test]
fn test_zero_sized_rect_reported_as_none() {
    let mut observer = RectObserver::new();
    observer.attach(800.0, 600.0);
    assert!(observer.report(0.0, 600.0));
    assert_eq!(observer.current(), None);
}

#[test]
fn test_detach_clears_subscriptions_across_cycles() {
    let mut observer = RectObserver::new();
    let (seen, callback) = recorder::<Option<ViewportRect>>();
    observer.subscribe(callback);
    observer.attach(800.0, 600.0);

    observer.detach();
    assert_eq!(seen.borrow().last(), Some(&None));
    assert_eq!(observer.subscriber_count(), 0);
    assert!(!observer.is_attached());

    let reported = seen.borrow().len();
    observer.attach(640.0, 480.0);
    observer.report(320.0, 240.0);
    assert_eq!(seen.borrow().len(), reported);

    for _ in 0..3 {
        observer.subscribe(|_| {});
        observer.attach(100.0, 100.0);
        observer.detach();
    }
    assert_eq!(observer.subscriber_count(), 0);
}

// ---------------------------------------------------------------------------
// ImageMetrics
// ---------------------------------------------------------------------------

#[test]
fn test_size_unknown_until_decoded() {
    let mut metrics = ImageMetrics::new();
    assert_eq!(metrics.size(), None);

    let id = metrics.assign();
    assert_eq!(metrics.size(), None);

    assert!(metrics.decoded(id, 400, 100));
    assert_eq!(metrics.size(), ImageSize::new(400.0, 100.0));
}

#[test]
fn test_stale_decode_ignored() {
    let mut metrics = ImageMetrics::new();
    let first = metrics.assign();
    let second = metrics.assign();

    assert!(!metrics.decoded(first, 400, 100));
    assert_eq!(metrics.size(), None);
    assert!(metrics.decoded(second, 100, 400));
    assert_eq!(metrics.size(), ImageSize::new(100.0, 400.0));
}

#[test]
fn test_reassignment_reports_again() {
    let mut metrics = ImageMetrics::new();
    let (seen, callback) = recorder::<Option<ImageSize>>();
    metrics.subscribe(callback);

    let id = metrics.assign();
    metrics.decoded(id, 64, 64);
    let id = metrics.assign();
    metrics.decoded(id, 64, 64);

    let size = ImageSize::new(64.0, 64.0);
    assert_eq!(*seen.borrow(), vec![None, size, None, size]);
}

#[test]
fn test_degenerate_decoded_size_rejected() {
    let mut metrics = ImageMetrics::new();
    let id = metrics.assign();
    assert!(!metrics.decoded(id, 0, 100));
    assert_eq!(metrics.size(), None);
}

#[test]
fn test_clear_reports_none_once() {
    let mut metrics = ImageMetrics::new();
    let (seen, callback) = recorder::<Option<ImageSize>>();
    metrics.subscribe(callback);

    let id = metrics.assign();
    metrics.decoded(id, 10, 10);
    metrics.clear();
    metrics.clear();
    assert_eq!(seen.borrow().len(), 3);
    assert_eq!(metrics.current_source(), None);
}

// ---------------------------------------------------------------------------
// Observers driving the engine
// ---------------------------------------------------------------------------

#[test]
fn test_observers_feed_engine_through_subscriptions() {
    let engine = Rc::new(RefCell::new(ViewportEngine::default()));
    let mut rects = RectObserver::new();
    let mut metrics = ImageMetrics::new();

    let e = Rc::clone(&engine);
    rects.subscribe(move |rect| e.borrow_mut().set_viewport_rect(*rect));
    let e = Rc::clone(&engine);
    metrics.subscribe(move |size| e.borrow_mut().set_image_size(*size));

    let id = metrics.assign();
    metrics.decoded(id, 400, 100);
    assert!(engine.borrow().placement().is_auto());

    rects.attach(200.0, 200.0);
    assert_eq!(engine.borrow().scale(), 0.5);
    assert!(!engine.borrow().placement().is_auto());

    metrics.assign();
    assert!(engine.borrow().placement().is_auto());
}
