//! World transform calculations for the part hierarchy

use glam::{Mat4, Vec3};
use uuid::Uuid;

use super::RobotPart;

/// World-space placement of one part
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartPose {
    pub id: Uuid,
    pub world_transform: Mat4,
}

impl RobotPart {
    /// Local transform as a matrix
    pub fn local_matrix(&self) -> Mat4 {
        self.transform.to_mat4()
    }

    /// World transforms of this subtree, in depth-first pre-order
    pub fn world_transforms(&self) -> Vec<PartPose> {
        let mut poses = Vec::with_capacity(self.part_count());
        self.collect_world_transforms(Mat4::IDENTITY, &mut poses);
        poses
    }

    fn collect_world_transforms(&self, parent_transform: Mat4, poses: &mut Vec<PartPose>) {
        let transform = parent_transform * self.local_matrix();
        poses.push(PartPose {
            id: self.id,
            world_transform: transform,
        });

        for child in &self.children {
            child.collect_world_transforms(transform, poses);
        }
    }

    /// World transform of the part named `name`
    pub fn world_transform_of(&self, name: &str) -> Option<Mat4> {
        let id = self.find(name)?.id;
        self.world_transforms()
            .into_iter()
            .find(|pose| pose.id == id)
            .map(|pose| pose.world_transform)
    }

    /// World position of the part named `name`
    pub fn world_position_of(&self, name: &str) -> Option<Vec3> {
        self.world_transform_of(name)
            .map(|transform| transform.transform_point3(Vec3::ZERO))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Segment;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_straight_arm_stacks_vertically() {
        let mut root = RobotPart::new(Segment::Root);
        root.build_geometry();
        for name in ["middleArm", "lowerArm", "endEffector"] {
            root.set_rotation(name, Vec3::ZERO);
        }

        // 0.5 + 0.4 + 0.4 above the base
        let tip = root.world_position_of("endEffector").unwrap();
        assert_abs_diff_eq!(tip.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(tip.y, 1.3, epsilon = 1e-5);
    }

    #[test]
    fn test_rotation_propagates_to_descendants() {
        let mut root = RobotPart::new(Segment::Root);
        root.build_geometry();
        for name in ["middleArm", "lowerArm", "endEffector"] {
            root.set_rotation(name, Vec3::ZERO);
        }
        root.set_rotation("upperArm", Vec3::new(0.0, 0.0, std::f32::consts::FRAC_PI_2));

        // Quarter turn about Z lays the arm along -X
        let tip = root.world_position_of("endEffector").unwrap();
        assert_abs_diff_eq!(tip.x, -1.3, epsilon = 1e-5);
        assert_abs_diff_eq!(tip.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_world_transforms_cover_every_part() {
        let mut root = RobotPart::new(Segment::Root);
        root.build_geometry();
        let poses = root.world_transforms();
        assert_eq!(poses.len(), 5);
        assert_eq!(poses[0].id, root.id);
        assert_eq!(poses[0].world_transform, Mat4::IDENTITY);
        assert!(root.world_transform_of("shoulder").is_none());
    }
}
