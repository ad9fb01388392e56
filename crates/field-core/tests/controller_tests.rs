// Host-side tests for the field lifecycle and event handling, using a
// recording render sink in place of the GPU.

use field_core::*;
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct Log {
    resizes: Vec<(u32, u32)>,
    draws: usize,
    releases: usize,
    last_connections: usize,
    last_aspect: f32,
    fail_next: Option<RenderError>,
}

#[derive(Clone, Default)]
struct RecordingSink(Rc<RefCell<Log>>);

impl RenderSink for RecordingSink {
    fn resize(&mut self, width: u32, height: u32) {
        self.0.borrow_mut().resizes.push((width, height));
    }

    fn draw(&mut self, scene: &Scene<'_>) -> Result<(), RenderError> {
        let mut log = self.0.borrow_mut();
        if let Some(e) = log.fail_next.take() {
            return Err(e);
        }
        log.draws += 1;
        log.last_connections = scene.connections.len();
        log.last_aspect = scene.camera.aspect;
        Ok(())
    }

    fn release(&mut self) {
        self.0.borrow_mut().releases += 1;
    }
}

fn pair_field() -> ParticleField {
    let nodes = vec![
        Node::at_rest(Vec3::ZERO),
        Node::at_rest(Vec3::new(3.9, 0.0, 0.0)),
    ];
    ParticleField::from_nodes(FieldConfig::for_tier(PerformanceTier::Low), nodes)
}

fn active_controller() -> (FieldController<RecordingSink>, Rc<RefCell<Log>>) {
    let sink = RecordingSink::default();
    let log = sink.0.clone();
    let mut c = FieldController::new(800, 400);
    c.activate_field(pair_field(), sink)
        .expect("fresh controller activates");
    (c, log)
}

#[test]
fn starts_uninitialized_and_ignores_events() {
    let mut c: FieldController<RecordingSink> = FieldController::new(800, 400);
    assert_eq!(c.state(), LifecycleState::Uninitialized);
    assert_eq!(c.handle(FieldEvent::Frame, 0.0), None);
    assert!(!c.on_pointer_move(Vec2::ZERO, &Viewport::sized(800.0, 400.0), 0.0));
    assert!(!c.dispose());
    assert_eq!(c.state(), LifecycleState::Uninitialized);
}

#[test]
fn activate_sizes_sink_and_draws_frames() {
    let (mut c, log) = active_controller();
    assert_eq!(c.state(), LifecycleState::Active);
    assert_eq!(log.borrow().resizes, vec![(800, 400)]);

    let report = c.on_frame(16.0).expect("active field ticks");
    assert_eq!(report.frame, 1);
    assert_eq!(log.borrow().draws, 1);
    assert_eq!(log.borrow().last_connections, 1);
    assert!((log.borrow().last_aspect - 2.0).abs() < 1e-6);
}

#[test]
fn random_activation_builds_tier_sized_field() {
    let mut c = FieldController::new(640, 480);
    let mut rng = StdRng::seed_from_u64(7);
    c.activate(
        FieldConfig::for_tier(PerformanceTier::Medium),
        RecordingSink::default(),
        &mut rng,
    )
    .expect("activates");
    assert_eq!(c.field().map(|f| f.nodes().len()), Some(35));
}

#[test]
fn activating_twice_is_rejected_and_keeps_running_field() {
    let (mut c, log) = active_controller();
    c.on_frame(16.0);
    let other = RecordingSink::default();
    let err = c.activate_field(pair_field(), other.clone()).unwrap_err();
    assert_eq!(err, LifecycleError::AlreadyActive);
    assert_eq!(c.field().map(|f| f.frame()), Some(1));
    assert_eq!(other.0.borrow().resizes.len(), 0);
    assert_eq!(log.borrow().releases, 0);
}

#[test]
fn teardown_releases_exactly_once_and_stops_frames() {
    let (mut c, log) = active_controller();
    c.on_frame(16.0);
    assert_eq!(c.handle(FieldEvent::Teardown, 20.0), None);
    assert_eq!(c.state(), LifecycleState::Disposed);
    assert_eq!(log.borrow().releases, 1);

    assert!(!c.dispose());
    assert_eq!(c.on_frame(32.0), None);
    c.handle(FieldEvent::Teardown, 40.0);
    c.on_resize(1024, 768, 50.0);
    assert!(!c.has_pending_resize());
    assert_eq!(log.borrow().releases, 1);
    assert_eq!(log.borrow().draws, 1);
    assert!(c.field().is_none());
}

#[test]
fn disposed_controller_can_be_activated_again() {
    let (mut c, _) = active_controller();
    c.dispose();
    let sink = RecordingSink::default();
    c.activate_field(pair_field(), sink.clone())
        .expect("reactivates after dispose");
    assert!(c.is_active());
    assert_eq!(c.on_frame(0.0).map(|r| r.frame), Some(1));
}

#[test]
fn pointer_moves_bias_nodes_on_next_frame() {
    let (mut c, _) = active_controller();
    let vp = Viewport::sized(800.0, 400.0);
    c.handle(
        FieldEvent::PointerMoved {
            client: Vec2::new(800.0, 0.0),
            viewport: vp,
        },
        0.0,
    );
    assert!(c.pointer().has_pending());
    c.on_frame(16.0);
    assert_eq!(c.pointer().target(), Vec2::new(4.0, 4.0));
    let n = &c.field().expect("active").nodes()[0];
    assert!(n.position.x > 0.0 && n.position.y > 0.0);
    assert_eq!(n.position.z, 0.0);
}

#[test]
fn scroll_suppresses_pointer_moves() {
    let (mut c, _) = active_controller();
    let vp = Viewport::sized(800.0, 400.0);
    c.handle(FieldEvent::Scrolled, 100.0);
    assert!(!c.on_pointer_move(Vec2::new(10.0, 10.0), &vp, 200.0));
    assert!(c.on_pointer_move(Vec2::new(10.0, 10.0), &vp, 260.0));
}

#[test]
fn resize_is_debounced() {
    let (mut c, log) = active_controller();
    c.handle(
        FieldEvent::Resized {
            width: 1000,
            height: 500,
        },
        0.0,
    );
    c.on_resize(1200, 400, 100.0);
    c.on_frame(200.0);
    assert_eq!(c.size(), (800, 400));
    c.on_frame(349.0);
    assert_eq!(c.size(), (800, 400));
    c.on_frame(350.0);
    assert_eq!(c.size(), (1200, 400));
    assert!((c.camera().aspect - 3.0).abs() < 1e-6);
    assert_eq!(log.borrow().resizes, vec![(800, 400), (1200, 400)]);
}

#[test]
fn zero_debounce_applies_resize_on_next_frame() {
    let sink = RecordingSink::default();
    let log = sink.0.clone();
    let mut c = FieldController::new(800, 400).with_resize_debounce_ms(0.0);
    c.activate_field(pair_field(), sink).expect("activates");
    c.on_resize(300, 300, 10.0);
    c.on_frame(10.0);
    assert_eq!(log.borrow().resizes.last(), Some(&(300, 300)));
}

#[test]
fn zero_sized_resize_is_ignored() {
    let (mut c, _) = active_controller();
    c.on_resize(0, 600, 0.0);
    assert!(!c.has_pending_resize());
}

#[test]
fn resize_before_activation_is_applied_on_activate() {
    let mut c = FieldController::new(800, 400);
    c.on_resize(1600, 400, 0.0);
    let sink = RecordingSink::default();
    let log = sink.0.clone();
    c.activate_field(pair_field(), sink).expect("activates");
    assert_eq!(log.borrow().resizes, vec![(1600, 400)]);
    assert!((c.camera().aspect - 4.0).abs() < 1e-6);
}

#[test]
fn lost_surface_is_reconfigured_at_current_size() {
    let (mut c, log) = active_controller();
    log.borrow_mut().fail_next = Some(RenderError::SurfaceLost);
    assert!(c.on_frame(16.0).is_some());
    assert!(c.is_active());
    assert_eq!(log.borrow().resizes, vec![(800, 400), (800, 400)]);
}

#[test]
fn out_of_memory_disposes_field() {
    let (mut c, log) = active_controller();
    log.borrow_mut().fail_next = Some(RenderError::OutOfMemory);
    c.on_frame(16.0);
    assert_eq!(c.state(), LifecycleState::Disposed);
    assert_eq!(log.borrow().releases, 1);
    assert_eq!(c.on_frame(32.0), None);
}

#[test]
fn other_render_errors_keep_running() {
    let (mut c, log) = active_controller();
    log.borrow_mut().fail_next = Some(RenderError::Other("timeout".into()));
    c.on_frame(16.0);
    assert!(c.is_active());
    c.on_frame(32.0);
    assert_eq!(log.borrow().draws, 1);
}
