//! Spring smoothing for the custom cursor.
//!
//! The cursor ring trails the raw pointer position through an overdamped
//! spring (mass 0.1, tension 120, friction 14 — heavy friction relative to
//! tension, so it settles without oscillating). Integrated with fixed
//! substeps because the friction term is too stiff for a single 60 fps
//! semi-implicit Euler step.

use glam::Vec2;

use crate::constants::{CURSOR_SPRING_FRICTION, CURSOR_SPRING_MASS, CURSOR_SPRING_TENSION};

const SUBSTEP_SEC: f32 = 1.0 / 240.0;
const MAX_SUBSTEPS: u32 = 16;

#[derive(Clone, Copy, Debug, Default)]
pub struct CursorSpring {
    pub position: Vec2,
    velocity: Vec2,
    initialized: bool,
}

impl CursorSpring {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance toward `target` by `dt` seconds and return the new position.
    /// The first observed target snaps, so the ring does not glide in from
    /// the origin on page load.
    pub fn step(&mut self, target: Vec2, dt: f32) -> Vec2 {
        if !self.initialized {
            self.initialized = true;
            self.position = target;
            self.velocity = Vec2::ZERO;
            return self.position;
        }
        let stiffness = CURSOR_SPRING_TENSION / CURSOR_SPRING_MASS;
        let damping = CURSOR_SPRING_FRICTION / CURSOR_SPRING_MASS;

        let mut remaining = dt.clamp(0.0, SUBSTEP_SEC * MAX_SUBSTEPS as f32);
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP_SEC);
            remaining -= h;
            let accel = (target - self.position) * stiffness - self.velocity * damping;
            self.velocity += accel * h;
            self.position += self.velocity * h;
        }
        self.position
    }
}
