//! Render object definition.

use glam::Mat4;
use uuid::Uuid;

use crate::mesh::MeshHandle;

/// A renderable surface in the scene.
///
/// One object is created per surface visual of a robot part.
#[derive(Debug, Clone)]
pub struct RenderObject {
    /// Unique identifier for this object.
    pub id: Uuid,

    /// The robot part this object was flattened from.
    pub part_id: Uuid,

    /// Handle to the mesh data stored in MeshManager.
    pub mesh: MeshHandle,

    /// World transform matrix.
    pub transform: Mat4,

    /// Base color (RGBA).
    pub color: [f32; 4],

    /// Draw triangle edges instead of shaded faces.
    pub wireframe: bool,

    /// Whether this object is visible.
    pub visible: bool,
}

impl RenderObject {
    /// Creates a new render object with default settings.
    pub fn new(part_id: Uuid, mesh: MeshHandle) -> Self {
        Self {
            id: Uuid::new_v4(),
            part_id,
            mesh,
            transform: Mat4::IDENTITY,
            color: [0.8, 0.8, 0.8, 1.0],
            wireframe: false,
            visible: true,
        }
    }

    /// Sets the transform matrix.
    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    /// Sets the color.
    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }
}

/// Where an axis indicator comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisKind {
    /// Axes helper that is part of a segment's geometry
    Helper,
    /// Per-part debug gizmo
    Gizmo,
}

/// Coordinate axes drawn as three colored lines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisInstance {
    pub part_id: Uuid,
    pub kind: AxisKind,
    pub transform: Mat4,
    /// Length of each axis line
    pub size: f32,
    pub visible: bool,
}
