//! Scene management for renderable objects.
//!
//! The scene is a flat view of the part hierarchy. Objects are created on the
//! first sync; later syncs only refresh transforms and material flags.

mod render_object;

pub use render_object::*;

use arm_core::{Primitive, RobotPart};
use glam::Mat4;

use crate::mesh::{MeshData, MeshManager};

/// Scene containing all renderable objects.
pub struct Scene {
    objects: Vec<RenderObject>,
    axes: Vec<AxisInstance>,
}

impl Scene {
    /// Creates a new empty scene.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            axes: Vec::new(),
        }
    }

    /// Mirror the hierarchy under `root` into render objects.
    ///
    /// Tessellates on the first call, or again if the number of visuals changed.
    pub fn sync_arm(&mut self, root: &RobotPart, meshes: &mut MeshManager) {
        let surface_count: usize = root
            .iter()
            .map(|part| part.visuals.iter().filter(|v| v.primitive.is_surface()).count())
            .sum();

        if surface_count != self.objects.len() {
            self.rebuild(root, meshes);
        } else {
            self.refresh(root);
        }
    }

    fn rebuild(&mut self, root: &RobotPart, meshes: &mut MeshManager) {
        for object in self.objects.drain(..) {
            meshes.remove(object.mesh);
        }
        self.axes.clear();

        for (part, world) in root.iter().zip(root.world_transforms()) {
            let world = world.world_transform;
            for visual in &part.visuals {
                let transform = world * Mat4::from_translation(visual.offset);
                match visual.primitive {
                    Primitive::Axes { size } => self.axes.push(AxisInstance {
                        part_id: part.id,
                        kind: AxisKind::Helper,
                        transform,
                        size,
                        visible: true,
                    }),
                    ref primitive => {
                        if let Some(data) = MeshData::from_primitive(primitive) {
                            let mut object = RenderObject::new(part.id, meshes.create(data))
                                .with_transform(transform)
                                .with_color(part.material.color);
                            object.wireframe = part.material.wireframe;
                            self.objects.push(object);
                        }
                    }
                }
            }

            self.axes.push(AxisInstance {
                part_id: part.id,
                kind: AxisKind::Gizmo,
                transform: world,
                size: part.gizmo.size,
                visible: part.gizmo.visible,
            });
        }

        tracing::debug!(
            "Scene rebuilt: {} objects, {} axes, {} meshes",
            self.objects.len(),
            self.axes.len(),
            meshes.len()
        );
    }

    fn refresh(&mut self, root: &RobotPart) {
        let mut objects = self.objects.iter_mut();
        let mut axes = self.axes.iter_mut();

        for (part, world) in root.iter().zip(root.world_transforms()) {
            let world = world.world_transform;
            for visual in &part.visuals {
                let transform = world * Mat4::from_translation(visual.offset);
                if visual.primitive.is_surface() {
                    if let Some(object) = objects.next() {
                        object.transform = transform;
                        object.color = part.material.color;
                        object.wireframe = part.material.wireframe;
                    }
                } else if let Some(axis) = axes.next() {
                    axis.transform = transform;
                }
            }

            if let Some(gizmo) = axes.next() {
                gizmo.transform = world;
                gizmo.visible = part.gizmo.visible;
            }
        }
    }

    /// Returns the number of objects in the scene.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Returns an iterator over all objects.
    pub fn objects(&self) -> impl Iterator<Item = &RenderObject> {
        self.objects.iter()
    }

    /// Returns an iterator over all axis indicators.
    pub fn axes(&self) -> impl Iterator<Item = &AxisInstance> {
        self.axes.iter()
    }

    /// Objects flattened from the given part
    pub fn objects_for_part(&self, part_id: uuid::Uuid) -> impl Iterator<Item = &RenderObject> {
        self.objects.iter().filter(move |o| o.part_id == part_id)
    }

    /// Clears all objects from the scene.
    pub fn clear(&mut self, meshes: &mut MeshManager) {
        for object in self.objects.drain(..) {
            meshes.remove(object.mesh);
        }
        self.axes.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arm_core::{JointControl, RobotArm};

    #[test]
    fn test_sync_creates_objects_once() {
        let arm = RobotArm::default();
        let mut meshes = MeshManager::new();
        let mut scene = Scene::new();

        scene.sync_arm(arm.root(), &mut meshes);
        // base plate + dome, 2 links x3 (box + knuckle), cone
        assert_eq!(scene.len(), 2 + 2 * 3 + 1);
        assert_eq!(meshes.len(), scene.len());
        // root axes helper + one gizmo per part
        assert_eq!(scene.axes().count(), 1 + 5);

        let handles: Vec<_> = scene.objects().map(|o| o.mesh).collect();
        scene.sync_arm(arm.root(), &mut meshes);
        let again: Vec<_> = scene.objects().map(|o| o.mesh).collect();
        assert_eq!(handles, again);
        assert_eq!(meshes.len(), scene.len());
    }

    #[test]
    fn test_sync_tracks_rotation_and_debug() {
        let mut arm = RobotArm::default();
        let mut meshes = MeshManager::new();
        let mut scene = Scene::new();
        scene.sync_arm(arm.root(), &mut meshes);

        let tip_id = arm.root().find("endEffector").unwrap().id;
        let before = scene.objects_for_part(tip_id).next().unwrap().transform;

        arm.set_control(JointControl::UpperSwivel, 90.0);
        arm.set_debug_mode(true);
        scene.sync_arm(arm.root(), &mut meshes);

        let tip = scene.objects_for_part(tip_id).next().unwrap();
        assert_ne!(tip.transform, before);
        assert!(scene.objects().all(|o| o.wireframe));
        assert!(
            scene
                .axes()
                .filter(|a| a.kind == AxisKind::Gizmo)
                .all(|a| a.visible)
        );
    }

    #[test]
    fn test_helper_axes_always_visible() {
        let mut arm = RobotArm::default();
        let mut meshes = MeshManager::new();
        let mut scene = Scene::new();
        arm.set_debug_mode(true);
        arm.set_debug_mode(false);
        scene.sync_arm(arm.root(), &mut meshes);

        let helper = scene.axes().find(|a| a.kind == AxisKind::Helper).unwrap();
        assert!(helper.visible);
        assert_eq!(helper.size, 0.05);
        assert!(
            scene
                .axes()
                .filter(|a| a.kind == AxisKind::Gizmo)
                .all(|a| !a.visible && a.size == 0.07)
        );
    }

    #[test]
    fn test_clear_releases_meshes() {
        let arm = RobotArm::default();
        let mut meshes = MeshManager::new();
        let mut scene = Scene::new();
        scene.sync_arm(arm.root(), &mut meshes);
        scene.clear(&mut meshes);
        assert!(scene.is_empty());
        assert!(meshes.is_empty());
    }
}
