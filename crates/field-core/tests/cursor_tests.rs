// Host-side tests for the decorative cursor trail.

use field_core::*;
use glam::Vec2;

#[test]
fn trail_count_is_capped() {
    assert_eq!(CursorTrail::new(0).active_trails(), 0);
    assert_eq!(CursorTrail::new(2).active_trails(), 2);
    assert_eq!(CursorTrail::new(8).active_trails(), MAX_CURSOR_TRAILS);
}

#[test]
fn lerp_factor_decreases_along_chain() {
    assert!((CursorTrail::lerp_factor(0) - 0.2).abs() < 1e-6);
    assert!((CursorTrail::lerp_factor(1) - 0.17).abs() < 1e-6);
    assert!((CursorTrail::lerp_factor(2) - 0.14).abs() < 1e-6);
}

#[test]
fn each_trail_follows_the_one_ahead() {
    let mut trail = CursorTrail::new(3);
    trail.set_pointer(Vec2::new(100.0, 50.0));
    trail.step();
    let t = trail.trails();
    // first trail moves 20% toward the pointer, the next 17% toward it
    assert!((t[0] - Vec2::new(20.0, 10.0)).length() < 1e-4);
    assert!((t[1] - Vec2::new(3.4, 1.7)).length() < 1e-4);
    assert!((t[2] - Vec2::new(3.4 * 0.14, 1.7 * 0.14)).length() < 1e-4);
}

#[test]
fn trails_settle_on_pointer() {
    let mut trail = CursorTrail::new(3);
    trail.set_pointer(Vec2::new(-40.0, 300.0));
    for _ in 0..500 {
        trail.step();
    }
    for t in trail.trails() {
        assert!((*t - trail.pointer()).length() < 1e-2);
    }
}

#[test]
fn translations_center_elements_on_points() {
    let mut trail = CursorTrail::new(1);
    trail.set_pointer(Vec2::new(30.0, 40.0));
    assert_eq!(trail.dot_translation(), Vec2::new(20.0, 30.0));
    let first: Vec<Vec2> = trail.trail_translations().collect();
    assert_eq!(first, vec![Vec2::new(-4.0, -4.0)]);
}
