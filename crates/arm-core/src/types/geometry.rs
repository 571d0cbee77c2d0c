//! Geometry-related type definitions

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Renderable shape attached to a robot part
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// Axis-aligned box with full extents
    Box { width: f32, height: f32, depth: f32 },
    Sphere { radius: f32 },
    /// Upper half of a sphere, flat side down
    Hemisphere { radius: f32 },
    /// Cone along +Y, centered on its mid-height
    Cone { radius: f32, height: f32 },
    /// Line axes helper (X red, Y green, Z blue)
    Axes { size: f32 },
}

impl Primitive {
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        Self::Box {
            width,
            height,
            depth,
        }
    }

    /// Whether this primitive is drawn with the part's surface material
    pub fn is_surface(&self) -> bool {
        !matches!(self, Primitive::Axes { .. })
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Primitive::Box { .. } => "Box",
            Primitive::Sphere { .. } => "Sphere",
            Primitive::Hemisphere { .. } => "Hemisphere",
            Primitive::Cone { .. } => "Cone",
            Primitive::Axes { .. } => "Axes",
        }
    }
}

/// A primitive placed at a fixed offset in its part's local frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Visual {
    pub primitive: Primitive,
    pub offset: Vec3,
}

impl Visual {
    pub fn new(primitive: Primitive, offset: Vec3) -> Self {
        Self { primitive, offset }
    }

    /// Visual lifted along local +Y
    pub fn at_height(primitive: Primitive, y: f32) -> Self {
        Self::new(primitive, Vec3::new(0.0, y, 0.0))
    }
}

/// Surface material shared by every visual of one part
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Base color (RGBA)
    pub color: [f32; 4],
    pub wireframe: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: [0.7, 0.7, 0.7, 1.0],
            wireframe: false,
        }
    }
}

/// Per-part axis indicator, shown only in debug mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebugGizmo {
    pub size: f32,
    pub visible: bool,
}

impl DebugGizmo {
    pub const DEFAULT_SIZE: f32 = 0.07;

    pub fn new(size: f32) -> Self {
        Self {
            size,
            visible: false,
        }
    }
}

impl Default for DebugGizmo {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}
