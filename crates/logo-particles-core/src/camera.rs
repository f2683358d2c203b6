use glam::{Mat4, Vec2, Vec3};

use crate::forces::pointer::PointerSample;

/// Depth at which pointer rays are unprojected.
const POINTER_DEPTH: f32 = 0.5;

/// Perspective camera the host renders with. Used only to map pointer
/// coordinates into world space.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            fov_y: 75.0,
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y.to_radians(), self.aspect, self.near, self.far)
    }

    /// Normalized device coordinates (with `depth` in `[-1, 1]`) to world.
    pub fn unproject(&self, ndc: Vec2, depth: f32) -> Vec3 {
        let inverse = (self.projection() * self.view()).inverse();
        inverse.project_point3(ndc.extend(depth))
    }

    /// World-space pointer sample for a pointer at `ndc` that moved by
    /// `ndc_velocity` since the last frame.
    ///
    /// `None` when the pointer ray runs parallel to the z = 0 plane.
    pub fn pointer_sample(&self, ndc: Vec2, ndc_velocity: Vec2) -> Option<PointerSample> {
        let near_point = self.unproject(ndc, POINTER_DEPTH);
        let ray = (near_point - self.position).normalize_or_zero();
        if ray.z.abs() < 1e-6 {
            return None;
        }
        let distance = -self.position.z / ray.z;
        let position = self.position + ray * distance;

        let moved = self.unproject(ndc + ndc_velocity, POINTER_DEPTH);
        let direction = (moved - near_point).normalize_or_zero();

        Some(PointerSample {
            position,
            direction,
        })
    }
}
