//! RobotPart: the transform hierarchy node

mod transforms;

pub use transforms::*;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ArmConfig;
use crate::segment::{Segment, SegmentError};
use crate::types::{DebugGizmo, LocalTransform, Material, Visual};

/// A node of the arm hierarchy.
///
/// Each part owns its local transform, the geometry drawn in its frame and
/// its children. The gizmo is a rendering attachment, not a child.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobotPart {
    pub id: Uuid,
    pub segment: Segment,
    /// Transform relative to the parent part
    pub transform: LocalTransform,
    pub visuals: Vec<Visual>,
    /// Material shared by every surface visual of this part
    pub material: Material,
    pub gizmo: DebugGizmo,
    pub children: Vec<RobotPart>,
}

impl RobotPart {
    /// Create an unbuilt part with identity transform and hidden gizmo
    pub fn new(segment: Segment) -> Self {
        Self::with_config(segment, &ArmConfig::default())
    }

    /// Create an unbuilt part using the given tuning constants
    pub fn with_config(segment: Segment, config: &ArmConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            segment,
            transform: LocalTransform::IDENTITY,
            visuals: Vec::new(),
            material: Material {
                color: config.color,
                wireframe: false,
            },
            gizmo: DebugGizmo::new(config.gizmo_size),
            children: Vec::new(),
        }
    }

    /// Create a part from its node name
    pub fn from_name(name: &str) -> Result<Self, SegmentError> {
        Ok(Self::new(name.parse()?))
    }

    pub fn name(&self) -> &'static str {
        self.segment.name()
    }

    /// Current local rotation (Euler XYZ, radians)
    pub fn rotation(&self) -> Vec3 {
        self.transform.rotation
    }

    /// Build this part's geometry and the rest of the chain below it.
    ///
    /// Call once after construction; a second call duplicates geometry.
    pub fn build_geometry(&mut self) {
        self.build_geometry_with(&ArmConfig::default());
    }

    /// Build geometry using the given tuning constants
    pub fn build_geometry_with(&mut self, config: &ArmConfig) {
        if let Some(mount) = self.segment.mount() {
            self.transform.translate_y(mount.lift);
            self.transform.rotate_z(mount.tilt);
        }

        self.visuals.extend(self.segment.visuals(config));
        tracing::debug!(
            "Built {} with {} visuals",
            self.segment.name(),
            self.visuals.len()
        );

        if let Some(next) = self.segment.next() {
            self.children.push(RobotPart::with_config(next, config));
        }

        for child in &mut self.children {
            child.build_geometry_with(config);
        }
    }

    /// Overwrite the rotation of the part named `name`.
    ///
    /// Searches depth-first in child order and stops at the first match.
    /// Returns `false` without touching anything when no part has that name.
    pub fn set_rotation(&mut self, name: &str, rotation: Vec3) -> bool {
        if self.segment.name() == name {
            self.transform.set_rotation(rotation);
            tracing::trace!("Set {} rotation to {:?}", name, rotation);
            return true;
        }

        let found = self
            .children
            .iter_mut()
            .any(|child| child.set_rotation(name, rotation));

        if !found && self.segment == Segment::Root {
            tracing::trace!("No part named {}, rotation ignored", name);
        }
        found
    }

    /// Overwrite the rotation of the part built for `segment`
    pub fn set_segment_rotation(&mut self, segment: Segment, rotation: Vec3) -> bool {
        match self.find_segment_mut(segment) {
            Some(part) => {
                part.transform.set_rotation(rotation);
                true
            }
            None => false,
        }
    }

    /// Switch wireframe and gizmo visibility on this part and every descendant
    pub fn set_debug_mode(&mut self, enabled: bool) {
        self.material.wireframe = enabled;
        self.gizmo.visible = enabled;

        for child in &mut self.children {
            child.set_debug_mode(enabled);
        }
    }

    /// Whether this part is drawn in debug mode
    pub fn debug_mode(&self) -> bool {
        self.material.wireframe && self.gizmo.visible
    }

    /// Find a part by node name
    pub fn find(&self, name: &str) -> Option<&RobotPart> {
        self.iter().find(|part| part.segment.name() == name)
    }

    pub fn find_segment(&self, segment: Segment) -> Option<&RobotPart> {
        self.iter().find(|part| part.segment == segment)
    }

    pub fn find_segment_mut(&mut self, segment: Segment) -> Option<&mut RobotPart> {
        if self.segment == segment {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_segment_mut(segment))
    }

    /// Depth-first, pre-order iterator over this part and its descendants
    pub fn iter(&self) -> PartIter<'_> {
        PartIter { stack: vec![self] }
    }

    /// Number of parts in this subtree, including this one
    pub fn part_count(&self) -> usize {
        self.iter().count()
    }

    /// Length of the longest path from this part to a leaf, counted in parts
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(RobotPart::depth)
            .max()
            .unwrap_or(0)
    }
}

/// Depth-first iterator over a part subtree
pub struct PartIter<'a> {
    stack: Vec<&'a RobotPart>,
}

impl<'a> Iterator for PartIter<'a> {
    type Item = &'a RobotPart;

    fn next(&mut self) -> Option<Self::Item> {
        let part = self.stack.pop()?;
        // Reversed so the first child is visited first
        self.stack.extend(part.children.iter().rev());
        Some(part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Primitive;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_4;

    fn built_root() -> RobotPart {
        let mut root = RobotPart::new(Segment::Root);
        root.build_geometry();
        root
    }

    #[test]
    fn test_new_part_defaults() {
        let part = RobotPart::new(Segment::UpperArm);
        assert_eq!(part.transform, LocalTransform::IDENTITY);
        assert!(!part.material.wireframe);
        assert!(!part.gizmo.visible);
        assert_eq!(part.gizmo.size, 0.07);
        assert!(part.children.is_empty());
        assert!(part.visuals.is_empty());
    }

    #[test]
    fn test_from_name() {
        let part = RobotPart::from_name("lowerArm").unwrap();
        assert_eq!(part.segment, Segment::LowerArm);
        assert!(RobotPart::from_name("elbow").is_err());
    }

    #[test]
    fn test_build_applies_mounts() {
        let root = built_root();

        let middle = root.find("middleArm").unwrap();
        assert_abs_diff_eq!(middle.transform.translation.y, 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(middle.rotation().z, FRAC_PI_4, epsilon = 1e-6);

        let upper = root.find("upperArm").unwrap();
        assert_eq!(upper.transform, LocalTransform::IDENTITY);

        let tip = root.find("endEffector").unwrap();
        assert_abs_diff_eq!(tip.transform.translation.y, 0.4, epsilon = 1e-6);
        assert_eq!(
            tip.visuals[0].primitive,
            Primitive::Cone {
                radius: 0.025,
                height: 0.2
            }
        );
    }

    #[test]
    fn test_iter_is_preorder() {
        let root = built_root();
        let names: Vec<&str> = root.iter().map(|p| p.name()).collect();
        assert_eq!(
            names,
            vec!["root", "upperArm", "middleArm", "lowerArm", "endEffector"]
        );
        assert_eq!(root.part_count(), 5);
        assert_eq!(root.depth(), 5);
    }

    #[test]
    fn test_set_rotation_stops_at_match() {
        let mut root = built_root();
        let rotation = Vec3::new(0.0, 0.3, -0.2);

        assert!(root.set_rotation("upperArm", rotation));
        assert_eq!(root.find("upperArm").unwrap().rotation(), rotation);
        assert_abs_diff_eq!(
            root.find("middleArm").unwrap().rotation().z,
            FRAC_PI_4,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_set_segment_rotation() {
        let mut root = built_root();
        let rotation = Vec3::new(0.0, 0.0, 1.0);
        assert!(root.set_segment_rotation(Segment::EndEffector, rotation));
        assert_eq!(root.find_segment(Segment::EndEffector).unwrap().rotation(), rotation);

        let mut lone = RobotPart::new(Segment::UpperArm);
        assert!(!lone.set_segment_rotation(Segment::Root, rotation));
    }

    #[test]
    fn test_debug_mode_on_unbuilt_part() {
        let mut part = RobotPart::new(Segment::EndEffector);
        part.set_debug_mode(true);
        assert!(part.debug_mode());
        part.set_debug_mode(false);
        assert!(!part.material.wireframe);
        assert!(!part.gizmo.visible);
    }
}
