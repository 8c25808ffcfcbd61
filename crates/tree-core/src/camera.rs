//! Camera description and pointer unprojection.
//!
//! These types avoid platform-specific APIs so both frontends can build the
//! same view matrices and turn pointer positions into scene points.

use crate::constants::*;
use glam::{Mat4, Vec2, Vec3, Vec4};

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
            eye: camera_eye_vec3(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOVY_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    pub fn with_viewport(width: u32, height: u32) -> Self {
        let mut cam = Self::default();
        cam.set_viewport(width, height);
        cam
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through a point given in normalized device
    /// coordinates (x right, y up, both in \[-1, 1\]).
    ///
    /// Returns `(ray_origin, ray_direction)`; the origin is the eye.
    pub fn ndc_ray(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = self.view_projection().inverse();
        let far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p_far = far.truncate() / far.w;
        let dir = (p_far - self.eye).normalize_or_zero();
        (self.eye, dir)
    }

    /// Scene point the gold dust is drawn toward.
    ///
    /// The pointer ray is intersected with the `z = 0` plane and the hit is
    /// then pinned to [`DUST_ATTRACTOR_Z`]. A ray parallel to the plane falls
    /// back to the point at the camera's focus distance.
    pub fn pointer_attractor(&self, ndc: Vec2) -> Vec3 {
        let (ro, rd) = self.ndc_ray(ndc);
        let mut hit = if rd.z.abs() > 1e-6 {
            let t = -ro.z / rd.z;
            ro + rd * t.max(0.0)
        } else {
            ro + rd * (self.target - self.eye).length()
        };
        hit.z = DUST_ATTRACTOR_Z;
        hit
    }
}

/// Canvas pixel coordinates (origin top-left) to NDC.
#[inline]
pub fn pixel_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (2.0 * x / width - 1.0).clamp(-1.0, 1.0),
        (1.0 - 2.0 * y / height).clamp(-1.0, 1.0),
    )
}
