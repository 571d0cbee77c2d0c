//! Main application

use crate::config::{SharedConfig, create_shared_config};
use crate::panels::{ControlsPanel, HierarchyPanel, Panel, ViewportPanel};
use crate::state::{SharedAppState, create_shared_state};

/// Robot arm viewer application
pub struct ArmViewerApp {
    app_state: SharedAppState,
    config: SharedConfig,
    controls: ControlsPanel,
    hierarchy: HierarchyPanel,
    viewport: ViewportPanel,
}

impl ArmViewerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = create_shared_config();

        let (app_state, wheel_scale) = {
            let manager = config.read();
            let app_config = manager.config();

            cc.egui_ctx.set_visuals(app_config.ui.theme.visuals());
            cc.egui_ctx.set_zoom_factor(app_config.ui.zoom_factor);

            (create_shared_state(app_config), app_config.ui.wheel_scale)
        };

        tracing::info!("Viewer ready");

        Self {
            app_state,
            config,
            controls: ControlsPanel::new(),
            hierarchy: HierarchyPanel::new(),
            viewport: ViewportPanel::new(wheel_scale),
        }
    }

    /// Write display toggles back to the config and persist them
    fn persist_display_options(&mut self) {
        let options = self.app_state.lock().renderer.options().clone();

        let mut manager = self.config.write();
        if manager.config().renderer.display == options {
            return;
        }
        manager.config_mut().renderer.display = options;

        if let Err(e) = manager.save() {
            tracing::warn!("Failed to save config: {}", e);
        }
    }
}

impl eframe::App for ArmViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls_panel")
            .default_width(260.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.controls.ui(ui, &self.app_state);
                });
            });

        egui::SidePanel::right("hierarchy_panel")
            .default_width(200.0)
            .show(ctx, |ui| {
                self.hierarchy.ui(ui, &self.app_state);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.viewport.ui(ui, &self.app_state);
            });

        self.persist_display_options();
    }
}
