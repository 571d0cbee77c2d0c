//! Robot Arm Viewer Frontend
//!
//! egui application showing the arm with joint sliders, a hierarchy view and
//! an orbiting camera.

mod app;
pub mod config;
pub mod panels;
pub mod state;

pub use app::ArmViewerApp;
pub use config::{AppConfig, ConfigError, ConfigManager};
pub use state::{AppState, SharedAppState};
