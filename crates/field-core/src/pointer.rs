use glam::Vec2;

use crate::constants::{POINTER_RANGE, SCROLL_QUIET_MS};

/// Viewport rectangle in the same coordinate space as incoming pointer events.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn sized(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }
}

/// Map a client-space point to the field's `[-4, 4]` pointer range (y up).
#[inline]
pub fn normalize_pointer(client: Vec2, viewport: &Viewport) -> Option<Vec2> {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return None;
    }
    let u = (client.x - viewport.left) / viewport.width;
    let v = (client.y - viewport.top) / viewport.height;
    let span = POINTER_RANGE * 2.0;
    Some(Vec2::new(u * span - POINTER_RANGE, -(v * span) + POINTER_RANGE))
}

/// Tracks whether the page is mid-scroll: set by any scroll, cleared after a quiet period.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollGate {
    last_scroll_ms: Option<f64>,
}

impl ScrollGate {
    pub fn note_scroll(&mut self, now_ms: f64) {
        self.last_scroll_ms = Some(now_ms);
    }

    pub fn is_scrolling(&self, now_ms: f64) -> bool {
        self.last_scroll_ms.is_some_and(|t| now_ms - t < SCROLL_QUIET_MS)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    target: Vec2,
    pending: Option<Vec2>,
    gate: ScrollGate,
}

impl PointerTracker {
    /// Record a pointer move. Returns `false` when the move was dropped
    /// (mid-scroll or degenerate viewport).
    pub fn on_pointer_move(&mut self, client: Vec2, viewport: &Viewport, now_ms: f64) -> bool {
        if self.gate.is_scrolling(now_ms) {
            return false;
        }
        match normalize_pointer(client, viewport) {
            Some(t) => {
                // latest wins; applied once on the next frame
                self.pending = Some(t);
                true
            }
            None => false,
        }
    }

    pub fn on_scroll(&mut self, now_ms: f64) {
        self.gate.note_scroll(now_ms);
    }

    pub fn is_scrolling(&self, now_ms: f64) -> bool {
        self.gate.is_scrolling(now_ms)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply the pending move (if any) and return the target for this frame.
    pub fn frame_target(&mut self) -> Vec2 {
        if let Some(t) = self.pending.take() {
            self.target = t;
        }
        self.target
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }
}
