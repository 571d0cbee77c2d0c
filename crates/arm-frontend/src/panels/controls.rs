//! Controls panel - joint sliders and display toggles

use arm_core::{JointControl, Segment};

use crate::panels::Panel;
use crate::state::SharedAppState;

/// Side panel with one folder of sliders per jointed segment
pub struct ControlsPanel;

impl ControlsPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ControlsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for ControlsPanel {
    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let mut state = app_state.lock();

        ui.heading("Joints");
        ui.separator();

        for segment in Segment::ALL {
            let controls: Vec<JointControl> = JointControl::ALL
                .into_iter()
                .filter(|control| control.segment() == segment)
                .collect();
            if controls.is_empty() {
                continue;
            }

            egui::CollapsingHeader::new(segment.display_name())
                .default_open(true)
                .show(ui, |ui| {
                    for control in controls {
                        let mut degrees = state.arm.angle(control);
                        let slider = egui::Slider::new(&mut degrees, control.range().as_range())
                            .text(control.label())
                            .suffix("°");
                        if ui.add(slider).changed() {
                            state.set_control(control, degrees);
                        }
                    }
                });
        }

        ui.separator();

        let mut debug = state.arm.debug_mode();
        if ui.checkbox(&mut debug, "Debug").changed() {
            state.set_debug_mode(debug);
        }

        if ui.button("Reset pose").clicked() {
            state.reset_pose();
        }

        ui.separator();
        ui.heading("Display");

        let options = state.renderer.options_mut();
        ui.checkbox(&mut options.show_grid, "Grid");
        ui.checkbox(&mut options.show_axes, "Axes");

        ui.separator();
        let orbit = *state.orbit.state();
        ui.weak(format!(
            "Orbit {:.0}° / {:.0}°  distance {:.2}",
            orbit.orbit_x, orbit.orbit_y, orbit.distance
        ));
    }
}
