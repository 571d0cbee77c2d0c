//! Hierarchy panel - tree view of the arm

use arm_core::RobotPart;

use crate::panels::Panel;
use crate::state::SharedAppState;

/// Hierarchy panel showing the part tree
pub struct HierarchyPanel;

impl HierarchyPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HierarchyPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for HierarchyPanel {
    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let state = app_state.lock();
        let root = state.arm.root();

        ui.heading("Arm Tree");
        ui.separator();

        egui::ScrollArea::vertical().show(ui, |ui| {
            self.render_part_tree(ui, root, 0);
        });
    }
}

impl HierarchyPanel {
    fn render_part_tree(&self, ui: &mut egui::Ui, part: &RobotPart, depth: usize) {
        let indent = depth as f32 * 16.0;

        ui.horizontal(|ui| {
            ui.add_space(indent);

            let icon = if part.children.is_empty() { "•" } else { "▼" };
            ui.label(format!("{} {}", icon, part.name()))
                .on_hover_text(part.segment.display_name());
        });

        let rotation = part.rotation();
        if rotation != glam::Vec3::ZERO {
            ui.horizontal(|ui| {
                ui.add_space(indent + 8.0);
                ui.weak(format!(
                    "↳ ({:.0}°, {:.0}°, {:.0}°)",
                    rotation.x.to_degrees(),
                    rotation.y.to_degrees(),
                    rotation.z.to_degrees()
                ));
            });
        }

        for child in &part.children {
            self.render_part_tree(ui, child, depth + 1);
        }
    }
}
