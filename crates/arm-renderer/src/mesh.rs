//! Mesh tessellation and storage.

use std::collections::{BTreeSet, HashMap};
use std::f32::consts::{PI, TAU};
use std::sync::atomic::{AtomicU64, Ordering};

use arm_core::Primitive;
use glam::Vec3;

/// Radial segments used for spheres and cones
pub const RADIAL_SEGMENTS: u32 = 16;
/// Latitude segments used for spheres
pub const HEIGHT_SEGMENTS: u32 = 12;

/// Handle to a mesh stored in the MeshManager.
///
/// Handles are lightweight and can be copied freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MeshHandle(u64);

impl MeshHandle {
    /// Returns the raw handle value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Mesh vertex with position and normal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshVertex {
    pub position: Vec3,
    pub normal: Vec3,
}

impl MeshVertex {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self { position, normal }
    }
}

/// Indexed triangle mesh in a primitive's local frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    /// Triangle list indices
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Tessellate a surface primitive; axes helpers have no surface
    pub fn from_primitive(primitive: &Primitive) -> Option<Self> {
        match *primitive {
            Primitive::Box {
                width,
                height,
                depth,
            } => Some(Self::cuboid(Vec3::new(width, height, depth))),
            Primitive::Sphere { radius } => Some(Self::sphere(radius, PI)),
            Primitive::Hemisphere { radius } => Some(Self::sphere(radius, PI / 2.0)),
            Primitive::Cone { radius, height } => Some(Self::cone(radius, height)),
            Primitive::Axes { .. } => None,
        }
    }

    /// Box centered on the origin with full extents `size`
    pub fn cuboid(size: Vec3) -> Self {
        let h = size / 2.0;
        let mut mesh = Self::default();

        // (normal, u axis, v axis) per face; u x v == normal keeps CCW winding
        let faces = [
            (Vec3::X, Vec3::NEG_Z, Vec3::Y),
            (Vec3::NEG_X, Vec3::Z, Vec3::Y),
            (Vec3::Y, Vec3::X, Vec3::NEG_Z),
            (Vec3::NEG_Y, Vec3::X, Vec3::Z),
            (Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
        ];

        for (normal, u, v) in faces {
            let base = mesh.vertices.len() as u32;
            let center = normal * h;
            let du = u * h;
            let dv = v * h;
            for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                mesh.vertices
                    .push(MeshVertex::new(center + du * su + dv * sv, normal));
            }
            mesh.indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        mesh
    }

    /// UV sphere swept from the north pole down to `theta_length`.
    ///
    /// `PI` gives a full sphere, `PI / 2` the upper hemisphere (open at the bottom).
    pub fn sphere(radius: f32, theta_length: f32) -> Self {
        let columns = RADIAL_SEGMENTS;
        let rows = HEIGHT_SEGMENTS;
        let mut mesh = Self::default();

        for iy in 0..=rows {
            let theta = iy as f32 / rows as f32 * theta_length;
            for ix in 0..=columns {
                let phi = ix as f32 / columns as f32 * TAU;
                let normal = Vec3::new(
                    -phi.cos() * theta.sin(),
                    theta.cos(),
                    phi.sin() * theta.sin(),
                );
                mesh.vertices.push(MeshVertex::new(normal * radius, normal));
            }
        }

        let closes_at_bottom = theta_length >= PI;
        let stride = columns + 1;
        for iy in 0..rows {
            for ix in 0..columns {
                let a = iy * stride + ix + 1;
                let b = iy * stride + ix;
                let c = (iy + 1) * stride + ix;
                let d = (iy + 1) * stride + ix + 1;

                // Skip the degenerate triangles at the poles
                if iy != 0 {
                    mesh.indices.extend_from_slice(&[a, b, d]);
                }
                if iy != rows - 1 || !closes_at_bottom {
                    mesh.indices.extend_from_slice(&[b, c, d]);
                }
            }
        }

        mesh
    }

    /// Cone along +Y centered on its mid-height, with a closed base
    pub fn cone(radius: f32, height: f32) -> Self {
        let segments = RADIAL_SEGMENTS;
        let half = height / 2.0;
        let slope = radius / height;
        let mut mesh = Self::default();

        // Side: one apex vertex per segment so each face gets its own normal
        for i in 0..segments {
            let a0 = i as f32 / segments as f32 * TAU;
            let a1 = (i + 1) as f32 / segments as f32 * TAU;
            let mid = (a0 + a1) / 2.0;

            let rim = |angle: f32| Vec3::new(radius * angle.sin(), -half, radius * angle.cos());
            let side_normal = |angle: f32| Vec3::new(angle.sin(), slope, angle.cos()).normalize();

            let base = mesh.vertices.len() as u32;
            mesh.vertices.push(MeshVertex::new(Vec3::new(0.0, half, 0.0), side_normal(mid)));
            mesh.vertices.push(MeshVertex::new(rim(a0), side_normal(a0)));
            mesh.vertices.push(MeshVertex::new(rim(a1), side_normal(a1)));
            mesh.indices.extend_from_slice(&[base, base + 1, base + 2]);
        }

        // Base cap
        let center = mesh.vertices.len() as u32;
        mesh.vertices
            .push(MeshVertex::new(Vec3::new(0.0, -half, 0.0), Vec3::NEG_Y));
        for i in 0..=segments {
            let angle = i as f32 / segments as f32 * TAU;
            mesh.vertices.push(MeshVertex::new(
                Vec3::new(radius * angle.sin(), -half, radius * angle.cos()),
                Vec3::NEG_Y,
            ));
        }
        for i in 0..segments {
            let a = center + 1 + i;
            mesh.indices.extend_from_slice(&[center, a + 1, a]);
        }

        mesh
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Unique triangle edges as index pairs, lower index first
    pub fn edges(&self) -> Vec<[u32; 2]> {
        let mut edges = BTreeSet::new();
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                edges.insert([a.min(b), a.max(b)]);
            }
        }
        edges.into_iter().collect()
    }
}

/// Manager for tessellated meshes.
///
/// Meshes are created once per visual and looked up by handle each frame.
pub struct MeshManager {
    meshes: HashMap<MeshHandle, MeshData>,
    next_handle: AtomicU64,
}

impl MeshManager {
    /// Creates a new mesh manager.
    pub fn new() -> Self {
        Self {
            meshes: HashMap::new(),
            next_handle: AtomicU64::new(1),
        }
    }

    /// Stores mesh data and returns a handle.
    pub fn create(&mut self, data: MeshData) -> MeshHandle {
        let handle = MeshHandle(self.next_handle.fetch_add(1, Ordering::Relaxed));
        self.meshes.insert(handle, data);
        handle
    }

    /// Gets a mesh by handle.
    pub fn get(&self, handle: MeshHandle) -> Option<&MeshData> {
        self.meshes.get(&handle)
    }

    /// Removes a mesh from the manager.
    pub fn remove(&mut self, handle: MeshHandle) -> Option<MeshData> {
        self.meshes.remove(&handle)
    }

    /// Returns the number of meshes in the manager.
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Returns true if the manager is empty.
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Clears all meshes from the manager.
    pub fn clear(&mut self) {
        self.meshes.clear();
    }
}

impl Default for MeshManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cuboid_extents() {
        let mesh = MeshData::cuboid(Vec3::new(0.5, 0.05, 0.5));
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.triangle_count(), 12);

        let max_y = mesh
            .vertices
            .iter()
            .map(|v| v.position.y)
            .fold(f32::MIN, f32::max);
        assert_abs_diff_eq!(max_y, 0.025, epsilon = 1e-6);
    }

    #[test]
    fn test_cuboid_winding_matches_normals() {
        let mesh = MeshData::cuboid(Vec3::ONE);
        for tri in mesh.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.vertices[i as usize]);
            let face = (b.position - a.position).cross(c.position - a.position);
            assert!(face.dot(a.normal) > 0.0);
        }
    }

    #[test]
    fn test_hemisphere_stays_above_equator() {
        let mesh = MeshData::from_primitive(&Primitive::Hemisphere { radius: 0.15 }).unwrap();
        assert!(mesh.vertices.iter().all(|v| v.position.y >= -1e-6));
        assert!(mesh.vertices.iter().all(|v| {
            (v.position.length() - 0.15).abs() < 1e-5
        }));
    }

    #[test]
    fn test_sphere_triangle_count() {
        let mesh = MeshData::sphere(1.0, PI);
        // Pole rows contribute one triangle per column, the rest two
        let expected = RADIAL_SEGMENTS * (2 * HEIGHT_SEGMENTS - 2);
        assert_eq!(mesh.triangle_count(), expected as usize);
    }

    #[test]
    fn test_cone_spans_height() {
        let mesh = MeshData::cone(0.025, 0.2);
        let ys: Vec<f32> = mesh.vertices.iter().map(|v| v.position.y).collect();
        let max = ys.iter().copied().fold(f32::MIN, f32::max);
        let min = ys.iter().copied().fold(f32::MAX, f32::min);
        assert_abs_diff_eq!(max, 0.1, epsilon = 1e-6);
        assert_abs_diff_eq!(min, -0.1, epsilon = 1e-6);
        assert_eq!(mesh.triangle_count(), 2 * RADIAL_SEGMENTS as usize);
    }

    #[test]
    fn test_axes_have_no_surface() {
        assert!(MeshData::from_primitive(&Primitive::Axes { size: 0.05 }).is_none());
    }

    #[test]
    fn test_edges_are_unique() {
        let mesh = MeshData::cuboid(Vec3::ONE);
        // 4 outline edges + 1 diagonal per face
        assert_eq!(mesh.edges().len(), 6 * 5);
    }

    #[test]
    fn test_manager_handles() {
        let mut manager = MeshManager::new();
        let a = manager.create(MeshData::cuboid(Vec3::ONE));
        let b = manager.create(MeshData::cone(1.0, 1.0));
        assert_ne!(a, b);
        assert_eq!(manager.len(), 2);
        assert!(manager.remove(a).is_some());
        assert!(manager.get(a).is_none());
        assert!(manager.get(b).is_some());
    }
}
