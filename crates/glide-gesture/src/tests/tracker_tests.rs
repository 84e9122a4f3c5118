use super::*;

#[test]
fn move_without_start_is_not_handled() {
    let mut tracker = GestureTracker::new();
    assert_eq!(tracker.on_move(PointerSample::new(10.0, 10.0)), None);
    assert!(!tracker.is_moving());
}

#[test]
fn move_reports_delta_from_start() {
    let mut tracker = GestureTracker::new();
    tracker.on_start(PointerSample::new(100.0, 40.0));

    let delta = tracker
        .on_move(PointerSample::new(70.0, 65.0))
        .expect("tracked gesture reports a delta");

    assert_eq!(delta, GestureDelta::new(-30.0, 25.0));
    assert!(tracker.is_tracking());
    assert!(tracker.is_moving());
}

#[test]
fn end_without_move_is_a_tap() {
    let mut tracker = GestureTracker::new();
    tracker.on_start(PointerSample::new(5.0, 5.0));

    assert_eq!(tracker.on_end(PointerSample::new(5.0, 5.0)), GestureEnd::Tap);
    assert!(!tracker.is_tracking());
}

#[test]
fn end_without_start_is_untracked() {
    let mut tracker = GestureTracker::new();
    assert_eq!(
        tracker.on_end(PointerSample::new(0.0, 0.0)),
        GestureEnd::Untracked
    );
}

#[test]
fn release_uses_the_end_sample_not_the_last_move() {
    let mut tracker = GestureTracker::new();
    tracker.on_start(PointerSample::new(0.0, 0.0));
    tracker.on_move(PointerSample::new(0.0, 20.0));

    let end = tracker.on_end(PointerSample::new(3.0, 50.0));

    assert_eq!(end, GestureEnd::Release(GestureDelta::new(3.0, 50.0)));
    assert!(!tracker.is_tracking());
    assert!(!tracker.is_moving());
}

#[test]
fn moving_never_outlives_tracking() {
    let mut tracker = GestureTracker::new();
    tracker.on_start(PointerSample::ZERO);
    tracker.on_move(PointerSample::new(1.0, 1.0));
    tracker.on_cancel();

    assert!(!tracker.is_tracking());
    assert!(!tracker.is_moving());
    assert_eq!(tracker.on_move(PointerSample::new(2.0, 2.0)), None);
}

#[test]
fn restart_clears_previous_movement() {
    let mut tracker = GestureTracker::new();
    tracker.on_start(PointerSample::ZERO);
    tracker.on_move(PointerSample::new(40.0, 0.0));

    tracker.on_start(PointerSample::new(10.0, 10.0));

    assert!(!tracker.is_moving());
    assert_eq!(tracker.on_end(PointerSample::new(10.0, 10.0)), GestureEnd::Tap);

    tracker.on_start(PointerSample::new(10.0, 10.0));
    assert_eq!(
        tracker.on_move(PointerSample::new(13.0, 4.0)),
        Some(GestureDelta::new(3.0, -6.0))
    );
}
