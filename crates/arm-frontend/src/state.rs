//! Application state shared between panels

use std::sync::Arc;

use parking_lot::Mutex;

use arm_core::{JointControl, RobotArm};
use arm_renderer::{
    Camera, CameraPose, DrawList, MeshManager, OrbitController, Renderer, Scene, Viewport,
};

use crate::config::AppConfig;

/// Shared application state type
pub type SharedAppState = Arc<Mutex<AppState>>;

/// Everything the viewer mutates in response to input
pub struct AppState {
    pub arm: RobotArm,
    pub orbit: OrbitController,
    pub camera: Camera,
    pub renderer: Renderer,
    scene: Scene,
    meshes: MeshManager,
    /// Scene needs to pick up hierarchy changes before the next render
    needs_sync: bool,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let camera_config = &config.renderer.camera;
        let orbit = OrbitController::new(camera_config.initial_distance);

        let mut camera = Camera::default();
        camera.apply_config(camera_config);
        camera.apply_pose(&orbit.state().pose());

        Self {
            arm: RobotArm::new(config.arm),
            orbit,
            camera,
            renderer: Renderer::new().with_options(config.renderer.display.clone()),
            scene: Scene::new(),
            meshes: MeshManager::new(),
            needs_sync: true,
        }
    }

    /// Move a joint slider
    pub fn set_control(&mut self, control: JointControl, degrees: f32) {
        if self.arm.set_control(control, degrees) {
            self.needs_sync = true;
        }
    }

    pub fn reset_pose(&mut self) {
        self.arm.reset_pose();
        self.needs_sync = true;
    }

    pub fn set_debug_mode(&mut self, enabled: bool) {
        if self.arm.set_debug_mode(enabled) {
            self.needs_sync = true;
        }
    }

    /// Primary button pressed; `over_viewport` decides whether a drag starts
    pub fn pointer_down(&mut self, over_viewport: bool) {
        self.orbit.pointer_down(over_viewport);
    }

    pub fn pointer_up(&mut self) {
        self.orbit.pointer_up();
    }

    pub fn pointer_moved(&mut self, movement_x: f32, movement_y: f32) {
        if let Some(pose) = self.orbit.pointer_moved(movement_x, movement_y) {
            self.apply_pose(pose);
        }
    }

    pub fn wheel(&mut self, delta_y: f32) {
        let pose = self.orbit.wheel(delta_y);
        self.apply_pose(pose);
    }

    fn apply_pose(&mut self, pose: CameraPose) {
        self.camera.apply_pose(&pose);
        tracing::trace!("Camera at {:?}, up {:?}", pose.position, pose.up);
    }

    /// Bring the scene up to date with the hierarchy
    pub fn sync_scene(&mut self) {
        if self.needs_sync {
            self.scene.sync_arm(self.arm.root(), &mut self.meshes);
            self.needs_sync = false;
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Render the current frame for a viewport of the given size
    pub fn render(&mut self, viewport: Viewport) -> DrawList {
        self.arm.update(0.0);
        self.sync_scene();
        self.camera.update_aspect(viewport.aspect());

        self.renderer.render(&self.scene, &self.meshes, &self.camera, viewport)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&AppConfig::new())
    }
}

/// Create shared state from the loaded configuration
pub fn create_shared_state(config: &AppConfig) -> SharedAppState {
    Arc::new(Mutex::new(AppState::new(config)))
}
