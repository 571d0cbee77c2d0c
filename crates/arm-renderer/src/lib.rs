//! Robot Arm Renderer
//!
//! Turns the arm hierarchy into screen-space draw lists.
//!
//! # Architecture
//!
//! - [`orbit::OrbitState`] - Camera orbit angles driven by pointer and wheel input
//! - [`camera::Camera`] - Perspective camera looking at the origin
//! - [`mesh::MeshManager`] - Tessellated primitives addressed by handle
//! - [`scene::Scene`] - Render objects flattened from the part hierarchy
//! - [`renderer::Renderer`] - Projects the scene into a [`renderer::DrawList`]
//!
//! # Example
//!
//! ```ignore
//! let mut meshes = MeshManager::new();
//! let mut scene = Scene::new();
//! scene.sync_arm(arm.root(), &mut meshes);
//!
//! let draw_list = renderer.render(&scene, &meshes, &camera, Viewport::new(800.0, 600.0));
//! ```

pub mod camera;
pub mod config;
pub mod light;
pub mod mesh;
pub mod orbit;
pub mod renderer;
pub mod scene;

pub use camera::*;
pub use config::{CameraConfig, RendererConfig};
pub use light::DirectionalLight;
pub use mesh::{MeshData, MeshHandle, MeshManager, MeshVertex};
pub use orbit::*;
pub use renderer::*;
pub use scene::{AxisInstance, AxisKind, RenderObject, Scene};
