use glam::{Vec2, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

use crate::constants::{
    FIELD_EXTENT, POINTER_INFLUENCE, POSITION_BLEND, PULSE_AMPLITUDE, PULSE_SPEED_MIN,
    PULSE_SPEED_SPAN, ROTATION_STEP_X, ROTATION_STEP_Y,
};

/// A point in the field: where it is, where it rests, and how it pulses.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub position: Vec3,
    pub rest: Vec3,
    pub scale: f32,
    /// Rotation around x and y, in radians.
    pub rotation: Vec2,
    pub pulse_phase: f32,
    pub pulse_speed: f32,
}

impl Node {
    /// A motionless node sitting at `rest`, with no pulse offset.
    pub fn at_rest(rest: Vec3) -> Self {
        Self {
            position: rest,
            rest,
            scale: 1.0,
            rotation: Vec2::ZERO,
            pulse_phase: 0.0,
            pulse_speed: PULSE_SPEED_MIN,
        }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        let half = FIELD_EXTENT * 0.5;
        let rest = Vec3::new(
            rng.gen_range(-half.x..half.x),
            rng.gen_range(-half.y..half.y),
            rng.gen_range(-half.z..half.z),
        );
        Self {
            pulse_phase: rng.gen_range(0.0..TAU),
            pulse_speed: PULSE_SPEED_MIN + rng.gen::<f32>() * PULSE_SPEED_SPAN,
            ..Self::at_rest(rest)
        }
    }

    /// Rest position biased by the pointer; z is never biased.
    #[inline]
    pub fn target(&self, pointer: Vec2) -> Vec3 {
        self.rest + Vec3::new(pointer.x, pointer.y, 0.0) * POINTER_INFLUENCE
    }

    /// One smoothing step toward the pointer-biased target.
    #[inline]
    pub fn approach(&mut self, pointer: Vec2) {
        let target = self.target(pointer);
        self.position = self.position.lerp(target, POSITION_BLEND);
    }

    #[inline]
    pub fn pulse_scale(&self, time_sec: f64) -> f32 {
        let arg = time_sec * self.pulse_speed as f64 + self.pulse_phase as f64;
        1.0 + PULSE_AMPLITUDE * arg.sin() as f32
    }

    #[inline]
    pub fn spin(&mut self) {
        self.rotation.x += ROTATION_STEP_X;
        self.rotation.y += ROTATION_STEP_Y;
    }
}
