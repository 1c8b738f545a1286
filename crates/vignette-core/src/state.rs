//! Camera state shared with the front-end.
//!
//! Platform-independent: the web frontend consumes this to build view and
//! projection matrices and to turn pointer positions into world-space rays.

use glam::{Mat4, Vec3, Vec4};

use crate::constants::{CAMERA_EYE, CAMERA_FOV_DEG, CAMERA_TARGET, CAMERA_ZFAR, CAMERA_ZNEAR};
use crate::pick::Ray;

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

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::from(CAMERA_EYE),
            target: Vec3::from(CAMERA_TARGET),
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// World-space pointer ray for normalized device coordinates in [-1, 1].
    pub fn ndc_ray(&self, ndc_x: f32, ndc_y: f32) -> Ray {
        let inv = (self.projection_matrix() * self.view_matrix()).inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let far: Vec3 = p_far.truncate() / p_far.w;
        Ray {
            origin: self.eye,
            dir: (far - self.eye).normalize(),
        }
    }
}
