//! Application configuration module
//!
//! Holds the arm tuning constants, renderer settings and UI preferences that
//! are persisted between runs.

mod manager;

pub use manager::{ConfigError, ConfigManager, SharedConfig, create_shared_config};

use arm_core::ArmConfig;
use arm_renderer::RendererConfig;
use serde::{Deserialize, Serialize};

/// UI theme
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum UiTheme {
    #[default]
    Dark,
    Light,
}

impl UiTheme {
    pub fn visuals(&self) -> egui::Visuals {
        match self {
            UiTheme::Dark => egui::Visuals::dark(),
            UiTheme::Light => egui::Visuals::light(),
        }
    }
}

/// UI preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// UI theme
    pub theme: UiTheme,
    /// Zoom applied to the whole UI
    pub zoom_factor: f32,
    /// Scale from egui scroll points to wheel `delta_y` units
    pub wheel_scale: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: UiTheme::Dark,
            zoom_factor: 1.0,
            wheel_scale: 2.0,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AppConfig {
    /// Configuration format version
    #[serde(default)]
    pub version: u32,
    /// Arm assembly settings
    #[serde(default)]
    pub arm: ArmConfig,
    /// Renderer settings
    #[serde(default)]
    pub renderer: RendererConfig,
    /// UI settings
    #[serde(default)]
    pub ui: UiConfig,
}

impl AppConfig {
    /// Current configuration version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            ..Default::default()
        }
    }
}
