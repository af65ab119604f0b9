// Host-side tests for the tracking session lifecycle and AR view wiring.

mod common;

use common::*;
use glam::Vec2;
use paint_ar::GesturePhase::{Began, Changed};
use paint_ar::*;
use std::time::SystemTime;

#[test]
fn session_starts_paused() {
    let s = TrackingSession::new(RecordingTracker::default());
    assert_eq!(s.phase(), TrackingPhase::Paused);
    assert_eq!(s.status(), TrackingStatus::Paused);
    assert!(!s.is_running());
}

#[test]
fn start_and_pause_drive_the_service() {
    let mut s = TrackingSession::new(RecordingTracker::default());
    s.start();
    assert!(s.is_running());
    assert_eq!(s.service().starts, 1);
    s.pause();
    assert_eq!(s.phase(), TrackingPhase::Paused);
    assert_eq!(s.service().pauses, 1);
}

#[test]
fn second_start_while_running_is_a_no_op() {
    let mut s = TrackingSession::new(RecordingTracker::default());
    s.start();
    s.start();
    assert_eq!(s.service().starts, 1);
    assert!(s.is_running());
}

#[test]
fn pause_while_paused_does_not_reach_the_service() {
    let mut s = TrackingSession::new(RecordingTracker::default());
    s.pause();
    assert_eq!(s.service().pauses, 0);
}

#[test]
fn status_waits_for_the_first_tracked_frame() {
    let mut s = TrackingSession::new(RecordingTracker::default());
    s.on_tracked_frame();
    assert!(s.time_to_first_frame().is_none());
    s.start();
    assert_eq!(s.status(), TrackingStatus::Initializing);
    s.on_tracked_frame();
    assert_eq!(s.status(), TrackingStatus::Tracking);
    assert!(s.time_to_first_frame().is_some());
}

#[test]
fn restart_waits_for_a_new_first_frame() {
    let mut s = TrackingSession::new(RecordingTracker::default());
    s.start();
    s.on_tracked_frame();
    s.pause();
    s.start();
    assert_eq!(s.status(), TrackingStatus::Initializing);
    assert_eq!(s.service().starts, 2);
}

#[test]
fn failed_start_reports_unavailable_and_stays_paused() {
    let mut s = TrackingSession::new(RecordingTracker::failing(TrackingError::Unsupported));
    s.start();
    assert_eq!(s.phase(), TrackingPhase::Paused);
    assert_eq!(
        s.status(),
        TrackingStatus::Unavailable(TrackingError::Unsupported)
    );
}

#[test]
fn successful_retry_clears_unavailable() {
    let mut s = TrackingSession::new(RecordingTracker::failing(TrackingError::Denied(
        "camera".into(),
    )));
    s.start();
    assert!(matches!(s.status(), TrackingStatus::Unavailable(_)));
    s.service_mut().fail_with = None;
    s.start();
    assert_eq!(s.status(), TrackingStatus::Initializing);
}

#[test]
fn view_builds_exactly_one_node_at_default_pose() {
    let view = ArView::new(
        &snapshot(300.0, 600.0),
        RecordingTracker::default(),
        ArConfig::default(),
    )
    .unwrap();
    let node = view.node().unwrap();
    assert_eq!(node.position(), DEFAULT_NODE_POSITION);
    assert_eq!(node.scale(), 1.0);
    assert!(approx(node.geometry().height(), 0.6));
    assert_eq!(view.phase(), TrackingPhase::Paused);
}

#[test]
fn scene_rejects_a_second_node() {
    let node = PlaneBuilder::new(ArConfig::default()).build(&snapshot(10.0, 10.0));
    let mut scene = Scene::new();
    scene.insert(node.clone()).unwrap();
    assert_eq!(scene.insert(node.clone()), Err(SceneError::AlreadyPopulated));
    scene.teardown();
    assert_eq!(scene.insert(node.clone()), Err(SceneError::AlreadyPopulated));

    let mut prebuilt = Scene::with_node(node.clone());
    assert!(prebuilt.node().is_some());
    assert_eq!(prebuilt.insert(node), Err(SceneError::AlreadyPopulated));
}

#[test]
fn pause_and_resume_keep_the_manipulated_node() {
    let mut view = ArView::new(
        &snapshot(400.0, 200.0),
        RecordingTracker::default(),
        ArConfig::default(),
    )
    .unwrap();
    view.appear();
    view.pinch(PinchEvent::new(Began, 2.0));
    view.pan(PanEvent::new(Began, Vec2::new(100.0, 0.0)));
    let moved = *view.node().unwrap().transform();

    view.disappear();
    view.appear();
    assert_eq!(view.node().unwrap().transform(), &moved);
    view.pan(PanEvent::new(Changed, Vec2::new(100.0, 0.0)));
    assert!(approx(view.node().unwrap().position().x, 0.4));
}

#[test]
fn fresh_view_starts_from_default_pose_again() {
    let snap = snapshot(400.0, 200.0);
    let mut first = ArView::new(&snap, RecordingTracker::default(), ArConfig::default()).unwrap();
    first.appear();
    first.pinch(PinchEvent::new(Began, 2.5));
    first.teardown();

    let second = ArView::new(&snap, RecordingTracker::default(), ArConfig::default()).unwrap();
    let node = second.node().unwrap();
    assert_eq!(node.scale(), 1.0);
    assert_eq!(node.position(), DEFAULT_NODE_POSITION);
}

#[test]
fn view_rejects_invalid_config() {
    let bad = ArConfig::default().with_gesture(GestureConfig::default().with_scale_bounds(3.0, 0.5));
    let result = ArView::new(&snapshot(10.0, 10.0), RecordingTracker::default(), bad);
    assert!(matches!(result, Err(ConfigError::ScaleBounds { .. })));
}

#[test]
fn view_gestures_respect_configured_bounds() {
    let cfg = ArConfig::default().with_gesture(GestureConfig::default().with_scale_bounds(0.5, 3.0));
    let mut view = ArView::new(&snapshot(400.0, 200.0), RecordingTracker::default(), cfg).unwrap();
    view.appear();
    view.pinch(PinchEvent::new(Began, 1.5));
    assert!(approx(view.node().unwrap().scale(), 1.5));
    view.pinch(PinchEvent::new(Changed, 3.0));
    assert_eq!(view.node().unwrap().scale(), 3.0);
}

#[test]
fn view_node_starts_inside_bounds_that_exclude_unit_scale() {
    let cfg = ArConfig::default().with_gesture(GestureConfig::default().with_scale_bounds(1.5, 3.0));
    let mut view = ArView::new(&snapshot(400.0, 200.0), RecordingTracker::default(), cfg).unwrap();
    assert_eq!(view.node().unwrap().scale(), 1.5);
    view.appear();
    view.pinch(PinchEvent::new(Began, 0.5));
    assert_eq!(view.node().unwrap().scale(), 1.5);
}

#[test]
fn paint_record_requires_a_name() {
    let snap = snapshot(10.0, 10.0);
    assert_eq!(
        PaintRecord::new("  ", SystemTime::now(), snap.clone()),
        Err(RecordError::EmptyName)
    );
    let rec = PaintRecord::new("Sunset", SystemTime::UNIX_EPOCH, snap.clone()).unwrap();
    assert_eq!(rec.name(), "Sunset");
    assert_eq!(rec.drawing(), &snap);
}

#[test]
fn paint_record_feeds_an_ar_view() {
    let rec = PaintRecord::new("Wide", SystemTime::now(), snapshot(800.0, 200.0)).unwrap();
    let view = ArView::new(&rec, RecordingTracker::default(), ArConfig::default()).unwrap();
    assert!(approx(view.node().unwrap().geometry().height(), 0.075));
}
