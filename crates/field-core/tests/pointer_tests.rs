// Host-side tests for pointer normalization, the scroll gate and move coalescing.

use field_core::*;
use glam::Vec2;

fn viewport() -> Viewport {
    Viewport {
        left: 100.0,
        top: 50.0,
        width: 800.0,
        height: 400.0,
    }
}

#[test]
fn corners_and_center_map_to_range() {
    let vp = viewport();
    assert_eq!(
        normalize_pointer(Vec2::new(100.0, 50.0), &vp),
        Some(Vec2::new(-4.0, 4.0))
    );
    assert_eq!(
        normalize_pointer(Vec2::new(900.0, 450.0), &vp),
        Some(Vec2::new(4.0, -4.0))
    );
    assert_eq!(
        normalize_pointer(Vec2::new(500.0, 250.0), &vp),
        Some(Vec2::ZERO)
    );
}

#[test]
fn degenerate_viewport_is_rejected() {
    let vp = Viewport::sized(0.0, 300.0);
    assert_eq!(normalize_pointer(Vec2::new(10.0, 10.0), &vp), None);
    let mut tracker = PointerTracker::default();
    assert!(!tracker.on_pointer_move(Vec2::new(10.0, 10.0), &vp, 0.0));
    assert!(!tracker.has_pending());
}

#[test]
fn scroll_gate_clears_after_quiet_period() {
    let mut gate = ScrollGate::default();
    assert!(!gate.is_scrolling(0.0));
    gate.note_scroll(1000.0);
    assert!(gate.is_scrolling(1000.0));
    assert!(gate.is_scrolling(1149.0));
    assert!(!gate.is_scrolling(1150.0));
    // every scroll restarts the quiet period
    gate.note_scroll(1140.0);
    assert!(gate.is_scrolling(1200.0));
}

#[test]
fn moves_during_scroll_are_dropped() {
    let vp = Viewport::sized(800.0, 400.0);
    let mut tracker = PointerTracker::default();
    tracker.on_scroll(500.0);
    assert!(!tracker.on_pointer_move(Vec2::new(0.0, 0.0), &vp, 600.0));
    assert_eq!(tracker.frame_target(), Vec2::ZERO);

    assert!(tracker.on_pointer_move(Vec2::new(0.0, 0.0), &vp, 700.0));
    assert_eq!(tracker.frame_target(), Vec2::new(-4.0, 4.0));
}

#[test]
fn latest_move_wins_within_a_frame() {
    let vp = Viewport::sized(800.0, 400.0);
    let mut tracker = PointerTracker::default();
    tracker.on_pointer_move(Vec2::new(0.0, 0.0), &vp, 0.0);
    tracker.on_pointer_move(Vec2::new(800.0, 400.0), &vp, 1.0);
    assert!(tracker.has_pending());
    assert_eq!(tracker.frame_target(), Vec2::new(4.0, -4.0));
    assert!(!tracker.has_pending());
    // no new move: target is kept
    assert_eq!(tracker.frame_target(), Vec2::new(4.0, -4.0));
    assert_eq!(tracker.target(), Vec2::new(4.0, -4.0));
}

#[test]
fn pending_move_is_not_visible_before_frame() {
    let vp = Viewport::sized(800.0, 400.0);
    let mut tracker = PointerTracker::default();
    tracker.on_pointer_move(Vec2::new(800.0, 0.0), &vp, 0.0);
    assert_eq!(tracker.target(), Vec2::ZERO);
}
