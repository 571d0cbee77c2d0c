//! CPU renderer producing screen-space draw lists.
//!
//! Triangles are projected with the camera's view-projection matrix, back
//! faces are dropped using the transformed vertex normals, and the survivors
//! are sorted far to near so a painter can draw them in order. Wireframe
//! objects and axis indicators become line segments.

mod display_options;

pub use display_options::DisplayOptions;

use glam::{Mat3, Mat4, Vec2, Vec3};

use crate::camera::Camera;
use crate::light::DirectionalLight;
use crate::mesh::{MeshData, MeshManager};
use crate::scene::{AxisInstance, RenderObject, Scene};

const GRID_COLOR: [f32; 4] = [0.3, 0.3, 0.3, 1.0];
const GRID_X_COLOR: [f32; 4] = [0.8, 0.2, 0.2, 1.0];
const GRID_Z_COLOR: [f32; 4] = [0.2, 0.2, 0.8, 1.0];

/// Line colors for the X, Y and Z axes
pub const AXIS_COLORS: [[f32; 4]; 3] = [
    [1.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 0.0, 1.0],
    [0.0, 0.0, 1.0, 1.0],
];

/// Output surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// A shaded triangle in viewport pixels (origin top-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTriangle {
    pub points: [Vec2; 3],
    /// Mean normalized depth, 0 at the near plane
    pub depth: f32,
    pub color: [f32; 4],
}

/// A line segment in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenLine {
    pub from: Vec2,
    pub to: Vec2,
    pub depth: f32,
    pub color: [f32; 4],
}

/// Everything needed to paint one frame, in paint order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    /// Floor grid, painted first
    pub grid: Vec<ScreenLine>,
    /// Solid triangles sorted back to front
    pub triangles: Vec<ScreenTriangle>,
    /// Wireframe edges and axes, painted last
    pub lines: Vec<ScreenLine>,
}

impl DrawList {
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty() && self.triangles.is_empty() && self.lines.is_empty()
    }
}

/// Project a world-space point to viewport pixels and normalized depth.
///
/// Returns `None` for points behind the camera or outside the depth range.
pub fn project_point(view_proj: Mat4, point: Vec3, viewport: Viewport) -> Option<(Vec2, f32)> {
    let clip = view_proj * point.extend(1.0);
    if clip.w <= f32::EPSILON {
        return None;
    }

    let ndc = clip.truncate() / clip.w;
    if !(0.0..=1.0).contains(&ndc.z) {
        return None;
    }

    let screen = Vec2::new(
        (ndc.x + 1.0) * 0.5 * viewport.width,
        (1.0 - ndc.y) * 0.5 * viewport.height,
    );
    Some((screen, ndc.z))
}

/// Scene renderer.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    light: DirectionalLight,
    options: DisplayOptions,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: DisplayOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &DisplayOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut DisplayOptions {
        &mut self.options
    }

    /// Render the scene into a draw list for the given viewport
    pub fn render(
        &self,
        scene: &Scene,
        meshes: &MeshManager,
        camera: &Camera,
        viewport: Viewport,
    ) -> DrawList {
        let view_proj = camera.view_projection();
        let mut draw_list = DrawList::default();

        if self.options.show_grid {
            self.push_grid(&mut draw_list.grid, view_proj, viewport);
        }

        for object in scene.objects().filter(|o| o.visible) {
            let Some(mesh) = meshes.get(object.mesh) else {
                tracing::trace!("Skipping object {} with missing mesh", object.id);
                continue;
            };

            if object.wireframe {
                push_wireframe(&mut draw_list.lines, object, mesh, view_proj, viewport);
            } else {
                self.push_solid(
                    &mut draw_list.triangles,
                    object,
                    mesh,
                    camera.position,
                    view_proj,
                    viewport,
                );
            }
        }

        sort_back_to_front(&mut draw_list.triangles);

        if self.options.show_axes {
            for axis in scene.axes().filter(|a| a.visible) {
                push_axes(&mut draw_list.lines, axis, view_proj, viewport);
            }
        }

        draw_list
    }

    fn push_solid(
        &self,
        out: &mut Vec<ScreenTriangle>,
        object: &RenderObject,
        mesh: &MeshData,
        eye: Vec3,
        view_proj: Mat4,
        viewport: Viewport,
    ) {
        let normal_matrix = Mat3::from_mat4(object.transform).inverse().transpose();

        for tri in mesh.indices.chunks_exact(3) {
            let vertices = [tri[0], tri[1], tri[2]].map(|i| mesh.vertices[i as usize]);
            let world = vertices.map(|v| object.transform.transform_point3(v.position));

            let normal = (normal_matrix * (vertices[0].normal + vertices[1].normal + vertices[2].normal))
                .normalize_or_zero();
            let centroid = (world[0] + world[1] + world[2]) / 3.0;
            if normal.dot(eye - centroid) <= 0.0 {
                continue;
            }

            let (Some(a), Some(b), Some(c)) = (
                project_point(view_proj, world[0], viewport),
                project_point(view_proj, world[1], viewport),
                project_point(view_proj, world[2], viewport),
            ) else {
                continue;
            };

            out.push(ScreenTriangle {
                points: [a.0, b.0, c.0],
                depth: (a.1 + b.1 + c.1) / 3.0,
                color: self.light.shade(object.color, normal),
            });
        }
    }

    fn push_grid(&self, out: &mut Vec<ScreenLine>, view_proj: Mat4, viewport: Viewport) {
        let size = self.options.grid_size;
        let spacing = self.options.grid_spacing;
        if spacing <= 0.0 || size <= 0.0 {
            return;
        }

        let y = self.options.grid_height;
        let count = (size / spacing).round() as i32;

        for i in -count..=count {
            let offset = i as f32 * spacing;

            // Lines parallel to X, the center one tinted as the X axis
            let color = if i == 0 { GRID_X_COLOR } else { GRID_COLOR };
            push_line(
                out,
                Vec3::new(-size, y, offset),
                Vec3::new(size, y, offset),
                color,
                view_proj,
                viewport,
            );

            let color = if i == 0 { GRID_Z_COLOR } else { GRID_COLOR };
            push_line(
                out,
                Vec3::new(offset, y, -size),
                Vec3::new(offset, y, size),
                color,
                view_proj,
                viewport,
            );
        }
    }
}

fn push_wireframe(
    out: &mut Vec<ScreenLine>,
    object: &RenderObject,
    mesh: &MeshData,
    view_proj: Mat4,
    viewport: Viewport,
) {
    for [a, b] in mesh.edges() {
        let from = object.transform.transform_point3(mesh.vertices[a as usize].position);
        let to = object.transform.transform_point3(mesh.vertices[b as usize].position);
        push_line(out, from, to, object.color, view_proj, viewport);
    }
}

fn push_axes(out: &mut Vec<ScreenLine>, axis: &AxisInstance, view_proj: Mat4, viewport: Viewport) {
    let origin = axis.transform.transform_point3(Vec3::ZERO);
    for (direction, color) in [Vec3::X, Vec3::Y, Vec3::Z].into_iter().zip(AXIS_COLORS) {
        let end = axis.transform.transform_point3(direction * axis.size);
        push_line(out, origin, end, color, view_proj, viewport);
    }
}

/// Lines with an endpoint outside the view volume are dropped, not clipped
fn push_line(
    out: &mut Vec<ScreenLine>,
    from: Vec3,
    to: Vec3,
    color: [f32; 4],
    view_proj: Mat4,
    viewport: Viewport,
) {
    if let (Some(a), Some(b)) = (
        project_point(view_proj, from, viewport),
        project_point(view_proj, to, viewport),
    ) {
        out.push(ScreenLine {
            from: a.0,
            to: b.0,
            depth: (a.1 + b.1) / 2.0,
            color,
        });
    }
}

fn sort_back_to_front(triangles: &mut [ScreenTriangle]) {
    triangles.sort_by(|a, b| b.depth.total_cmp(&a.depth));
}
