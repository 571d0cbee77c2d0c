//! Renderer configuration

use serde::{Deserialize, Serialize};

use crate::renderer::DisplayOptions;

/// Camera settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near_plane: f32,
    pub far_plane: f32,
    /// Orbit distance at startup
    pub initial_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 60.0,
            near_plane: 0.1,
            far_plane: 10.0,
            initial_distance: 1.5,
        }
    }
}

/// Complete renderer configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    pub camera: CameraConfig,
    pub display: DisplayOptions,
}
