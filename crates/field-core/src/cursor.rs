use glam::Vec2;
use smallvec::SmallVec;

use crate::constants::{
    CURSOR_DOT_OFFSET, CURSOR_TRAIL_OFFSET, MAX_CURSOR_TRAILS, TRAIL_LERP_BASE, TRAIL_LERP_STEP,
};

/// Decorative cursor: a dot pinned to the pointer and a short chain of
/// trails, each easing toward the one ahead of it.
#[derive(Clone, Debug, Default)]
pub struct CursorTrail {
    pointer: Vec2,
    trails: SmallVec<[Vec2; MAX_CURSOR_TRAILS]>,
}

impl CursorTrail {
    /// `available` is how many trail elements the page provides; at most
    /// [`MAX_CURSOR_TRAILS`] are animated.
    pub fn new(available: usize) -> Self {
        let n = available.min(MAX_CURSOR_TRAILS);
        Self {
            pointer: Vec2::ZERO,
            trails: std::iter::repeat(Vec2::ZERO).take(n).collect(),
        }
    }

    #[inline]
    pub fn active_trails(&self) -> usize {
        self.trails.len()
    }

    #[inline]
    pub fn lerp_factor(index: usize) -> f32 {
        TRAIL_LERP_BASE - index as f32 * TRAIL_LERP_STEP
    }

    pub fn set_pointer(&mut self, client: Vec2) {
        self.pointer = client;
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Advance every trail one animation frame.
    pub fn step(&mut self) {
        let mut lead = self.pointer;
        for (i, trail) in self.trails.iter_mut().enumerate() {
            *trail += (lead - *trail) * Self::lerp_factor(i);
            lead = *trail;
        }
    }

    pub fn trails(&self) -> &[Vec2] {
        &self.trails
    }

    /// Top-left translation for the dot element.
    pub fn dot_translation(&self) -> Vec2 {
        self.pointer - Vec2::splat(CURSOR_DOT_OFFSET)
    }

    pub fn trail_translations(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.trails
            .iter()
            .map(|t| *t - Vec2::splat(CURSOR_TRAIL_OFFSET))
    }
}
