//! UI panels

mod controls;
mod hierarchy;
mod viewport;

pub use controls::ControlsPanel;
pub use hierarchy::HierarchyPanel;
pub use viewport::{ViewportPanel, wheel_delta_y};

use crate::state::SharedAppState;

/// A region of the window drawn from the shared state
pub trait Panel {
    /// Draw the panel and apply any edits to the state
    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState);
}
