// Host-side tests for node motion and the per-frame field update.

use field_core::*;
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn low_field(points: &[Vec3]) -> ParticleField {
    let nodes = points.iter().copied().map(Node::at_rest).collect();
    ParticleField::from_nodes(FieldConfig::for_tier(PerformanceTier::Low), nodes)
}

#[test]
fn random_field_matches_tier_and_volume() {
    let mut rng = StdRng::seed_from_u64(42);
    for tier in PerformanceTier::ALL {
        let field = ParticleField::new(FieldConfig::for_tier(tier), &mut rng);
        assert_eq!(field.nodes().len(), tier.settings().node_count);
        let half = FIELD_EXTENT * 0.5;
        for n in field.nodes() {
            assert_eq!(n.position, n.rest);
            assert!(n.rest.abs().cmple(half).all(), "{:?} outside field", n.rest);
            assert!(n.pulse_speed >= 0.02 && n.pulse_speed <= 0.04);
            assert!(n.pulse_phase >= 0.0 && n.pulse_phase < std::f32::consts::TAU);
        }
        assert_eq!(field.pool().capacity(), CONNECTION_POOL_SIZE);
        assert!(field.visible_connections().len() <= CONNECTION_POOL_SIZE);
    }
}

#[test]
fn approach_moves_three_percent_of_remaining_distance() {
    let mut node = Node::at_rest(Vec3::new(1.0, 2.0, 3.0));
    let pointer = Vec2::new(4.0, -4.0);
    let target = node.target(pointer);
    assert!((target - Vec3::new(1.06, 1.94, 3.0)).length() < 1e-6);

    let before = target - node.position;
    node.approach(pointer);
    let after = target - node.position;
    assert!((after - before * 0.97).length() < 1e-6);
}

#[test]
fn position_converges_to_biased_rest() {
    let mut node = Node::at_rest(Vec3::ZERO);
    let pointer = Vec2::new(-2.0, 3.0);
    for _ in 0..2000 {
        node.approach(pointer);
    }
    let expected = Vec3::new(-2.0 * 0.015, 3.0 * 0.015, 0.0);
    assert!((node.position - expected).length() < 1e-5);
}

#[test]
fn pointer_at_origin_keeps_nodes_at_rest() {
    let mut field = low_field(&[Vec3::new(1.0, 1.0, 1.0), Vec3::new(-3.0, 2.0, 0.5)]);
    for frame in 0..30 {
        field.tick(frame as f64 / 60.0, Vec2::ZERO);
    }
    for n in field.nodes() {
        assert_eq!(n.position, n.rest);
    }
}

#[test]
fn pulse_stays_within_amplitude() {
    let node = Node {
        pulse_phase: 1.3,
        pulse_speed: 0.035,
        ..Node::at_rest(Vec3::ZERO)
    };
    for t in 0..500 {
        let s = node.pulse_scale(t as f64 * 7.3);
        assert!((0.8..=1.2).contains(&s), "scale {s}");
    }
    assert_eq!(Node::at_rest(Vec3::ZERO).pulse_scale(0.0), 1.0);
}

#[test]
fn pulse_is_staggered_by_frame() {
    let points = [Vec3::ZERO, Vec3::X * 10.0, Vec3::Y * 10.0];
    let mut field = low_field(&points);
    let t = 40.0;
    // frame 1 pulses only the node with index % 3 == 1
    field.tick(t, Vec2::ZERO);
    let scales: Vec<f32> = field.nodes().iter().map(|n| n.scale).collect();
    let expected = field.nodes()[1].pulse_scale(t);
    assert_eq!(scales[0], 1.0);
    assert_eq!(scales[1], expected);
    assert_eq!(scales[2], 1.0);
}

#[test]
fn nodes_spin_every_updated_frame() {
    let mut field = low_field(&[Vec3::ZERO]);
    for frame in 0..10 {
        field.tick(frame as f64 * 0.016, Vec2::ZERO);
    }
    let r = field.nodes()[0].rotation;
    assert!((r.x - 0.05).abs() < 1e-5);
    assert!((r.y - 0.08).abs() < 1e-5);
}

#[test]
fn connections_recompute_on_tier_interval() {
    let mut field = low_field(&[Vec3::ZERO, Vec3::X]);
    // first frame always recomputes
    assert!(field.tick(10.0, Vec2::ZERO).connections_recomputed);
    assert!(!field.tick(10.2, Vec2::ZERO).connections_recomputed);
    assert!(!field.tick(10.39, Vec2::ZERO).connections_recomputed);
    assert!(field.tick(10.41, Vec2::ZERO).connections_recomputed);
    assert!(!field.tick(10.5, Vec2::ZERO).connections_recomputed);
}

#[test]
fn connections_follow_moved_nodes_after_interval() {
    // the pointer shifts both nodes along x equally, so the pair stays
    // connected while its endpoints move
    let mut field = low_field(&[Vec3::ZERO, Vec3::new(0.0, 3.5, 0.0)]);
    // connected at construction, before any frame
    assert_eq!(field.visible_connections().len(), 1);
    assert_eq!(field.visible_connections()[0].from, Vec3::ZERO);
    field.tick(0.0, Vec2::new(4.0, 0.0));
    for i in 1..=30 {
        field.tick(i as f64 * 0.05, Vec2::new(4.0, 0.0));
    }
    let c = &field.visible_connections()[0];
    assert!(c.from.x > 0.0);
    assert!(c.from.x <= field.nodes()[0].position.x);
    assert!(((c.to - c.from).length() - 3.5).abs() < 1e-5);
}

#[test]
fn forced_low_updates_nodes_on_odd_frames_only() {
    let config = FieldConfig {
        skip_alternate_frames: true,
        ..FieldConfig::for_tier(PerformanceTier::Low)
    };
    let mut field = ParticleField::from_nodes(config, vec![Node::at_rest(Vec3::ZERO)]);
    let r1 = field.tick(0.0, Vec2::ONE);
    let r2 = field.tick(0.016, Vec2::ONE);
    let r3 = field.tick(0.032, Vec2::ONE);
    assert!(r1.nodes_updated);
    assert!(!r2.nodes_updated);
    assert!(r3.nodes_updated);
    let r = field.nodes()[0].rotation;
    assert!((r.x - 2.0 * 0.005).abs() < 1e-6);
}

#[test]
fn scene_rotation_advances_every_frame() {
    let mut field = low_field(&[]);
    for i in 0..100 {
        field.tick(i as f64, Vec2::ZERO);
    }
    assert!((field.scene_rotation() - 0.08).abs() < 1e-4);
    assert_eq!(field.frame(), 100);
}
