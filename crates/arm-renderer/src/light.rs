//! Directional light for flat shading

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Directional light plus an ambient term.
///
/// All rays are parallel; `direction` points from the scene toward the light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    /// Light direction (normalized, pointing toward light source)
    pub direction: Vec3,
    /// Light intensity multiplier
    pub intensity: f32,
    /// Ambient light strength (0.0-1.0)
    pub ambient_strength: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectionalLight {
    /// White light from (0, 2, 1) at 0.6 with 0.3 ambient
    pub fn new() -> Self {
        Self {
            direction: Vec3::new(0.0, 2.0, 1.0).normalize(),
            intensity: 0.6,
            ambient_strength: 0.3,
        }
    }

    /// Brightness factor for a surface with world-space `normal`
    pub fn brightness(&self, normal: Vec3) -> f32 {
        let diffuse = normal.normalize_or_zero().dot(self.direction).max(0.0);
        (self.ambient_strength + self.intensity * diffuse).min(1.0)
    }

    /// Shade an RGBA color, keeping alpha
    pub fn shade(&self, color: [f32; 4], normal: Vec3) -> [f32; 4] {
        let k = self.brightness(normal);
        [color[0] * k, color[1] * k, color[2] * k, color[3]]
    }
}
