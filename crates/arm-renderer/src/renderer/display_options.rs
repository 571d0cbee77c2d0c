//! Display options for controlling visibility of rendering elements.

use serde::{Deserialize, Serialize};

/// Display options for controlling visibility of rendering elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Whether the floor grid is visible.
    pub show_grid: bool,
    /// Whether axis helpers and debug gizmos are drawn at all.
    pub show_axes: bool,
    /// Half extent of the grid along X and Z.
    pub grid_size: f32,
    /// Distance between grid lines.
    pub grid_spacing: f32,
    /// Height of the grid plane; the base plate rests at -0.6.
    pub grid_height: f32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_grid: false,
            show_axes: true,
            grid_size: 1.0,
            grid_spacing: 0.1,
            grid_height: -0.6,
        }
    }
}

impl DisplayOptions {
    /// Create new display options with the default visibility.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get whether the grid is visible.
    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    /// Set whether the grid is visible.
    pub fn set_show_grid(&mut self, show: bool) {
        self.show_grid = show;
    }

    /// Get whether axes are visible.
    pub fn show_axes(&self) -> bool {
        self.show_axes
    }

    /// Set whether axes are visible.
    pub fn set_show_axes(&mut self, show: bool) {
        self.show_axes = show;
    }
}
