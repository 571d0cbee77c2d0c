//! Perspective camera

use glam::{Mat4, Vec3};

use crate::config::CameraConfig;
use crate::orbit::CameraPose;

/// Perspective camera.
///
/// Position and up vector are written by the orbit calculator; the camera
/// always looks at `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl Camera {
    /// Create a camera at (0, 0, 1.5) looking at the origin
    pub fn new(aspect: f32) -> Self {
        let config = CameraConfig::default();
        Self {
            position: Vec3::new(0.0, 0.0, config.initial_distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: config.fov_degrees.to_radians(),
            aspect,
            near: config.near_plane,
            far: config.far_plane,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Projection mapping depth to 0 (near) ..= 1 (far)
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Place the camera from an orbit pose, looking at the origin
    pub fn apply_pose(&mut self, pose: &CameraPose) {
        self.position = pose.position;
        self.up = pose.up;
        self.target = Vec3::ZERO;
    }

    pub fn update_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn fov_degrees(&self) -> f32 {
        self.fov_y.to_degrees()
    }

    pub fn set_fov_degrees(&mut self, fov: f32) {
        self.fov_y = fov.to_radians();
    }

    pub fn set_near(&mut self, near: f32) {
        self.near = near;
    }

    pub fn set_far(&mut self, far: f32) {
        self.far = far;
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    /// Apply camera configuration
    pub fn apply_config(&mut self, config: &CameraConfig) {
        self.set_fov_degrees(config.fov_degrees);
        self.set_near(config.near_plane);
        self.set_far(config.far_plane);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(1920.0 / 1080.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_origin_projects_to_center() {
        let camera = Camera::default();
        let clip = camera.view_projection() * Vec3::ZERO.extend(1.0);
        assert_abs_diff_eq!(clip.x / clip.w, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(clip.y / clip.w, 0.0, epsilon = 1e-6);
        let depth = clip.z / clip.w;
        assert!((0.0..=1.0).contains(&depth));
    }

    #[test]
    fn test_apply_config() {
        let mut camera = Camera::default();
        camera.apply_config(&CameraConfig {
            fov_degrees: 45.0,
            near_plane: 0.05,
            far_plane: 20.0,
            initial_distance: 2.0,
        });
        assert_abs_diff_eq!(camera.fov_degrees(), 45.0, epsilon = 1e-4);
        assert_eq!(camera.near(), 0.05);
    }

    #[test]
    fn test_update_aspect_ignores_degenerate() {
        let mut camera = Camera::new(1.0);
        camera.update_aspect(0.0);
        assert_eq!(camera.aspect(), 1.0);
        camera.update_aspect(2.0);
        assert_eq!(camera.aspect(), 2.0);
    }
}
