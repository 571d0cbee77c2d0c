//! Assembly tuning constants

use serde::{Deserialize, Serialize};

use crate::types::DebugGizmo;

/// Tuning constants for building the arm.
///
/// Earlier layouts used a 0.5 drop and a 0.1 dome; both are plain settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmConfig {
    /// Distance the whole assembly is lowered after building
    pub vertical_offset: f32,
    /// Radius of the dome on top of the base plate
    pub dome_radius: f32,
    /// Size of each part's debug axes
    pub gizmo_size: f32,
    /// Size of the always-visible axes on the base
    pub root_axes_size: f32,
    /// Surface color (RGBA) given to every part's material
    pub color: [f32; 4],
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            vertical_offset: 0.6,
            dome_radius: 0.15,
            gizmo_size: DebugGizmo::DEFAULT_SIZE,
            root_axes_size: 0.05,
            color: [0.7, 0.7, 0.7, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_ron_uses_defaults() {
        let config: ArmConfig = ron::from_str("(vertical_offset: 0.5, dome_radius: 0.1)").unwrap();
        assert_eq!(config.vertical_offset, 0.5);
        assert_eq!(config.dome_radius, 0.1);
        assert_eq!(config.gizmo_size, 0.07);
        assert_eq!(config.root_axes_size, 0.05);
    }
}
