//! Local transform type definition

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Transform of a node relative to its parent.
///
/// Rotation is stored as XYZ Euler angles in radians so that a value written
/// by a joint control reads back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalTransform {
    pub translation: Vec3,
    /// Euler angles (x, y, z) in radians, applied in XYZ order
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl LocalTransform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// Rotation as a quaternion
    pub fn to_quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Compose into `T * R * S`
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.to_quat(), self.translation)
    }

    /// Move along the node's own Y axis
    pub fn translate_y(&mut self, distance: f32) {
        self.translation += self.to_quat() * (Vec3::Y * distance);
    }

    /// Rotate about the node's own Z axis.
    ///
    /// Z is the innermost factor of an XYZ Euler rotation, so a local Z turn
    /// only accumulates into the z angle.
    pub fn rotate_z(&mut self, angle: f32) {
        self.rotation.z += angle;
    }

    /// Overwrite the rotation with absolute Euler angles
    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }
}
