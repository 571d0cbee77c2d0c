//! Camera orbit calculation.
//!
//! The camera sits on a sphere around the origin described by two angles in
//! degrees: `orbit_x` (about world X) and `orbit_y` (about world Y). Both are
//! wrapped into `[0, 360)`. While the camera is upside down (`orbit_x` between
//! 90 and 270) horizontal drags are inverted so the scene keeps turning the
//! way the pointer moves.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Camera placement produced by the orbit calculator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub up: Vec3,
}

/// Accumulated orbit angles (degrees) and distance from the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitState {
    pub orbit_x: f32,
    pub orbit_y: f32,
    /// Not clamped; zero or negative values give an undefined view
    pub distance: f32,
}

impl OrbitState {
    pub fn new(distance: f32) -> Self {
        Self {
            orbit_x: 0.0,
            orbit_y: 0.0,
            distance,
        }
    }

    /// Whether `orbit_x` is in the upright half of the circle
    pub fn is_upright(&self) -> bool {
        self.orbit_x < 90.0 || self.orbit_x > 270.0
    }

    /// Apply a pointer drag in pixels.
    ///
    /// Vertical movement always adds to `orbit_x`. Horizontal movement adds
    /// to `orbit_y` when upright and subtracts otherwise, judged on the
    /// updated `orbit_x` before wrapping.
    pub fn drag(&mut self, movement_x: f32, movement_y: f32) {
        self.orbit_x += movement_y;

        if self.is_upright() {
            self.orbit_y += movement_x;
        } else {
            self.orbit_y -= movement_x;
        }

        self.orbit_x = wrap_degrees(self.orbit_x);
        self.orbit_y = wrap_degrees(self.orbit_y);
    }

    /// Apply a wheel event (browser `deltaY` convention: positive zooms out)
    pub fn wheel(&mut self, delta_y: f32) {
        self.distance += delta_y / 1000.0;
    }

    pub fn pose(&self) -> CameraPose {
        orbit_pose(self)
    }
}

impl Default for OrbitState {
    fn default() -> Self {
        Self::new(1.5)
    }
}

/// Wrap an angle in degrees into `[0, 360)`
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Camera position and up vector for the given orbit state.
///
/// The position is `(0, 0, distance)` rotated by `RotY(-orbit_y) * RotX(-orbit_x)`.
pub fn orbit_pose(state: &OrbitState) -> CameraPose {
    let rotation = Mat4::from_rotation_y(-state.orbit_y.to_radians())
        * Mat4::from_rotation_x(-state.orbit_x.to_radians());

    CameraPose {
        position: rotation.transform_point3(Vec3::new(0.0, 0.0, state.distance)),
        up: up_vector(state.orbit_x, state.orbit_y),
    }
}

/// Up vector for the orbit quadrant.
///
/// At exactly 90 or 270 degrees the view direction is parallel to world Y,
/// so the up vector is taken in the XZ plane from `orbit_y` instead.
pub fn up_vector(orbit_x: f32, orbit_y: f32) -> Vec3 {
    let yaw = -orbit_y.to_radians();

    if orbit_x < 90.0 || orbit_x > 270.0 {
        Vec3::Y
    } else if orbit_x > 90.0 && orbit_x < 270.0 {
        Vec3::NEG_Y
    } else if orbit_x == 270.0 {
        Vec3::new(yaw.sin(), 0.0, yaw.cos())
    } else {
        Vec3::new(-yaw.sin(), 0.0, -yaw.cos())
    }
}

/// Pointer and wheel handling around an [`OrbitState`].
///
/// A drag only orbits when the press started over the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbitController {
    state: OrbitState,
    dragging: bool,
}

impl OrbitController {
    pub fn new(distance: f32) -> Self {
        Self {
            state: OrbitState::new(distance),
            dragging: false,
        }
    }

    pub fn state(&self) -> &OrbitState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Pointer pressed; starts a drag only over the viewport
    pub fn pointer_down(&mut self, over_viewport: bool) {
        if over_viewport {
            self.dragging = true;
        }
    }

    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Pointer moved; returns the new pose while dragging
    pub fn pointer_moved(&mut self, movement_x: f32, movement_y: f32) -> Option<CameraPose> {
        if !self.dragging {
            return None;
        }
        self.state.drag(movement_x, movement_y);
        Some(self.state.pose())
    }

    /// Wheel turned; always returns the new pose
    pub fn wheel(&mut self, delta_y: f32) -> CameraPose {
        self.state.wheel(delta_y);
        self.state.pose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(370.0), 10.0);
        assert_eq!(wrap_degrees(-5.0), 355.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(-1e-9), 0.0);
        assert_eq!(wrap_degrees(725.0), 5.0);
    }

    #[test]
    fn test_default_pose_looks_down_z() {
        let pose = OrbitState::default().pose();
        assert_abs_diff_eq!(pose.position.z, 1.5, epsilon = 1e-6);
        assert_eq!(pose.up, Vec3::Y);
    }

    #[test]
    fn test_yaw_moves_camera_around_y() {
        let state = OrbitState {
            orbit_x: 0.0,
            orbit_y: 90.0,
            distance: 1.0,
        };
        let pose = state.pose();
        // RotY(-90) takes +Z to -X
        assert_abs_diff_eq!(pose.position.x, -1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(pose.position.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_pitch_moves_camera_over_top() {
        let state = OrbitState {
            orbit_x: 90.0,
            orbit_y: 0.0,
            distance: 1.0,
        };
        let pose = state.pose();
        assert_abs_diff_eq!(pose.position.y, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(pose.position.z, 0.0, epsilon = 1e-6);
        assert_eq!(pose.up, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_controller_ignores_moves_without_drag() {
        let mut controller = OrbitController::new(1.5);
        assert!(controller.pointer_moved(10.0, 10.0).is_none());

        controller.pointer_down(false);
        assert!(controller.pointer_moved(10.0, 10.0).is_none());

        controller.pointer_down(true);
        assert!(controller.pointer_moved(10.0, 0.0).is_some());
        assert_eq!(controller.state().orbit_y, 10.0);

        controller.pointer_up();
        assert!(!controller.is_dragging());
        assert!(controller.pointer_moved(10.0, 0.0).is_none());
        assert_eq!(controller.state().orbit_y, 10.0);
    }

    #[test]
    fn test_controller_wheel_applies_without_drag() {
        let mut controller = OrbitController::new(1.5);
        let pose = controller.wheel(500.0);
        assert_eq!(controller.state().distance, 2.0);
        assert_abs_diff_eq!(pose.position.z, 2.0, epsilon = 1e-6);
    }
}
