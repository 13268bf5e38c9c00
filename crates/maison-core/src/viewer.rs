//! Viewer-side state shared with the web frontend.
//!
//! These types avoid platform-specific APIs; the frontend uses them to build
//! camera matrices and to drive the self-animated product spin. The viewer
//! receives nothing from the page state controller.

use glam::{Mat4, Vec3};

use crate::constants::{
    camera_eye_vec3, CAMERA_FOVY_RADIANS, CAMERA_ZFAR, CAMERA_ZNEAR, DETAIL_RING_Z,
    SPIN_RADIANS_PER_SEC,
};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Fixed product-viewer camera looking at the origin.
    pub fn product_viewer(aspect: f32) -> Self {
        Self {
            eye: camera_eye_vec3(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: CAMERA_FOVY_RADIANS,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Continuous y-axis rotation of the primary ring.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProductSpin {
    pub angle: f32,
}

impl ProductSpin {
    pub fn advance(&mut self, dt_sec: f32) {
        self.angle = (self.angle + SPIN_RADIANS_PER_SEC * dt_sec) % std::f32::consts::TAU;
    }

    pub fn primary_model(&self) -> Mat4 {
        Mat4::from_rotation_y(self.angle)
    }

    /// The detail ring does not spin; it sits just in front of the primary.
    pub fn detail_model(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, DETAIL_RING_Z))
    }
}
