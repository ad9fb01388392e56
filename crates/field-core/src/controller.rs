//! Lifecycle and event handling for one particle field.
//!
//! A host owns exactly one [`FieldController`] and forwards its inbound
//! events to it (pointer, scroll, frame, resize, teardown). The controller
//! owns all mutable field state and the render sink, so there are no ambient
//! globals and no re-entrancy: every event is handled to completion by a
//! single method.
//!
//! Lifecycle: `Uninitialized -> Active -> Disposed`. Activating while
//! already active is rejected; a disposed controller may be activated again.

use glam::Vec2;
use rand::Rng;
use thiserror::Error;

use crate::camera::Camera;
use crate::connections::Connection;
use crate::constants::RESIZE_DEBOUNCE_MS;
use crate::field::{ParticleField, TickReport};
use crate::node::Node;
use crate::pointer::{PointerTracker, Viewport};
use crate::tier::FieldConfig;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("render surface lost")]
    SurfaceLost,
    #[error("out of GPU memory")]
    OutOfMemory,
    #[error("render failed: {0}")]
    Other(String),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("particle field is already active; dispose it first")]
    AlreadyActive,
}

/// Read-only view of everything a renderer needs for one frame.
pub struct Scene<'a> {
    pub nodes: &'a [Node],
    pub connections: &'a [Connection],
    pub camera: &'a Camera,
    pub scene_rotation: f32,
}

/// Output side of the field: a surface that can be resized, drawn and released.
pub trait RenderSink {
    fn resize(&mut self, width: u32, height: u32);
    fn draw(&mut self, scene: &Scene<'_>) -> Result<(), RenderError>;
    /// Free every rendering resource. Called at most once per activation.
    fn release(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    Active,
    Disposed,
}

enum Lifecycle<S> {
    Uninitialized,
    Active { field: ParticleField, sink: S },
    Disposed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldEvent {
    PointerMoved { client: Vec2, viewport: Viewport },
    Scrolled,
    Frame,
    Resized { width: u32, height: u32 },
    Teardown,
}

#[derive(Clone, Copy, Debug)]
struct PendingResize {
    width: u32,
    height: u32,
    at_ms: f64,
}

pub struct FieldController<S: RenderSink> {
    state: Lifecycle<S>,
    pointer: PointerTracker,
    camera: Camera,
    size: (u32, u32),
    pending_resize: Option<PendingResize>,
    resize_debounce_ms: f64,
}

impl<S: RenderSink> FieldController<S> {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            state: Lifecycle::Uninitialized,
            pointer: PointerTracker::default(),
            camera: Camera::for_viewport(width, height),
            size: (width, height),
            pending_resize: None,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
        }
    }

    /// Hosts whose surface must track the window immediately can pass 0.
    pub fn with_resize_debounce_ms(mut self, ms: f64) -> Self {
        self.resize_debounce_ms = ms.max(0.0);
        self
    }

    pub fn state(&self) -> LifecycleState {
        match self.state {
            Lifecycle::Uninitialized => LifecycleState::Uninitialized,
            Lifecycle::Active { .. } => LifecycleState::Active,
            Lifecycle::Disposed => LifecycleState::Disposed,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self.state, Lifecycle::Active { .. })
    }

    pub fn field(&self) -> Option<&ParticleField> {
        match &self.state {
            Lifecycle::Active { field, .. } => Some(field),
            _ => None,
        }
    }

    pub fn sink(&self) -> Option<&S> {
        match &self.state {
            Lifecycle::Active { sink, .. } => Some(sink),
            _ => None,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    /// Current surface size in physical pixels.
    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    /// Build a field for `config` and start driving `sink` with it.
    pub fn activate(
        &mut self,
        config: FieldConfig,
        sink: S,
        rng: &mut impl Rng,
    ) -> Result<(), LifecycleError> {
        if self.is_active() {
            log::warn!("[field] activate ignored: already active");
            return Err(LifecycleError::AlreadyActive);
        }
        self.activate_field(ParticleField::new(config, rng), sink)
    }

    pub fn activate_field(
        &mut self,
        field: ParticleField,
        mut sink: S,
    ) -> Result<(), LifecycleError> {
        if self.is_active() {
            log::warn!("[field] activate ignored: already active");
            return Err(LifecycleError::AlreadyActive);
        }
        if let Some(p) = self.pending_resize.take() {
            self.size = (p.width, p.height);
            self.camera.set_viewport(p.width, p.height);
        }
        sink.resize(self.size.0, self.size.1);
        log::info!(
            "[field] active: tier={} nodes={} pool={}",
            field.config().tier,
            field.nodes().len(),
            field.pool().capacity()
        );
        self.pointer = PointerTracker::default();
        self.state = Lifecycle::Active { field, sink };
        Ok(())
    }

    /// Release the sink and stop reacting to events. Returns `false` if there
    /// was nothing to dispose.
    pub fn dispose(&mut self) -> bool {
        match std::mem::replace(&mut self.state, Lifecycle::Disposed) {
            Lifecycle::Active { mut sink, field } => {
                sink.release();
                log::info!("[field] disposed after {} frames", field.frame());
                self.pending_resize = None;
                true
            }
            Lifecycle::Uninitialized => {
                self.state = Lifecycle::Uninitialized;
                false
            }
            Lifecycle::Disposed => false,
        }
    }

    pub fn handle(&mut self, event: FieldEvent, now_ms: f64) -> Option<TickReport> {
        match event {
            FieldEvent::PointerMoved { client, viewport } => {
                self.on_pointer_move(client, &viewport, now_ms);
                None
            }
            FieldEvent::Scrolled => {
                self.on_scroll(now_ms);
                None
            }
            FieldEvent::Frame => self.on_frame(now_ms),
            FieldEvent::Resized { width, height } => {
                self.on_resize(width, height, now_ms);
                None
            }
            FieldEvent::Teardown => {
                self.dispose();
                None
            }
        }
    }

    pub fn on_pointer_move(&mut self, client: Vec2, viewport: &Viewport, now_ms: f64) -> bool {
        if !self.is_active() {
            return false;
        }
        self.pointer.on_pointer_move(client, viewport, now_ms)
    }

    pub fn on_scroll(&mut self, now_ms: f64) {
        if self.is_active() {
            self.pointer.on_scroll(now_ms);
        }
    }

    /// Queue a resize; it is applied once no further resize arrives for the debounce window.
    pub fn on_resize(&mut self, width: u32, height: u32, now_ms: f64) {
        if width == 0 || height == 0 || matches!(self.state, Lifecycle::Disposed) {
            return;
        }
        self.pending_resize = Some(PendingResize {
            width,
            height,
            at_ms: now_ms,
        });
    }

    pub fn has_pending_resize(&self) -> bool {
        self.pending_resize.is_some()
    }

    fn apply_due_resize(&mut self, now_ms: f64) {
        let Some(p) = self.pending_resize else {
            return;
        };
        if now_ms - p.at_ms < self.resize_debounce_ms {
            return;
        }
        self.pending_resize = None;
        self.size = (p.width, p.height);
        self.camera.set_viewport(p.width, p.height);
        if let Lifecycle::Active { sink, .. } = &mut self.state {
            sink.resize(p.width, p.height);
        }
        log::info!("[field] resized to {}x{}", p.width, p.height);
    }

    /// One display frame: pointer, resize, node transforms, connections, draw.
    pub fn on_frame(&mut self, now_ms: f64) -> Option<TickReport> {
        if !self.is_active() {
            return None;
        }
        self.apply_due_resize(now_ms);
        let pointer = self.pointer.frame_target();

        let Lifecycle::Active { field, sink } = &mut self.state else {
            return None;
        };
        let report = field.tick(now_ms / 1000.0, pointer);
        let scene = Scene {
            nodes: field.nodes(),
            connections: field.visible_connections(),
            camera: &self.camera,
            scene_rotation: field.scene_rotation(),
        };
        match sink.draw(&scene) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => {
                log::warn!("[field] surface lost; reconfiguring");
                sink.resize(self.size.0, self.size.1);
            }
            Err(RenderError::OutOfMemory) => {
                log::error!("[field] out of GPU memory; disposing field");
                self.dispose();
            }
            Err(e) => log::warn!("[field] {e}"),
        }
        Some(report)
    }
}
