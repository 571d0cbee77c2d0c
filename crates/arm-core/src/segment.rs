//! The fixed set of arm segments and their build data

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ArmConfig;
use crate::types::{AxisMask, Primitive, Visual};

/// Radius of the spherical knuckle at the top of each arm link
const KNUCKLE_RADIUS: f32 = 0.05;
/// Cross-section of the arm links
const LINK_THICKNESS: f32 = 0.05;
/// Initial bend applied where a link mounts on its parent
const MOUNT_TILT: f32 = std::f32::consts::FRAC_PI_4;

/// One rigid segment of the arm, ordered from base to tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    Root,
    UpperArm,
    MiddleArm,
    LowerArm,
    EndEffector,
}

/// Where a segment sits on its parent before any joint rotation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mount {
    /// Distance along the parent's +Y
    pub lift: f32,
    /// Rotation about the segment's own Z in radians
    pub tilt: f32,
}

impl Segment {
    /// All segments from base to tip
    pub const ALL: [Segment; 5] = [
        Segment::Root,
        Segment::UpperArm,
        Segment::MiddleArm,
        Segment::LowerArm,
        Segment::EndEffector,
    ];

    /// Node name used for name-addressed lookups
    pub fn name(&self) -> &'static str {
        match self {
            Segment::Root => "root",
            Segment::UpperArm => "upperArm",
            Segment::MiddleArm => "middleArm",
            Segment::LowerArm => "lowerArm",
            Segment::EndEffector => "endEffector",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Segment::Root => "Base",
            Segment::UpperArm => "Upper Arm",
            Segment::MiddleArm => "Middle Arm",
            Segment::LowerArm => "Lower Arm",
            Segment::EndEffector => "End Effector",
        }
    }

    /// The segment built as this one's only child
    pub fn next(&self) -> Option<Segment> {
        match self {
            Segment::Root => Some(Segment::UpperArm),
            Segment::UpperArm => Some(Segment::MiddleArm),
            Segment::MiddleArm => Some(Segment::LowerArm),
            Segment::LowerArm => Some(Segment::EndEffector),
            Segment::EndEffector => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }

    /// Mount pose applied when the segment is built
    pub fn mount(&self) -> Option<Mount> {
        match self {
            Segment::Root | Segment::UpperArm => None,
            Segment::MiddleArm => Some(Mount {
                lift: 0.5,
                tilt: MOUNT_TILT,
            }),
            Segment::LowerArm | Segment::EndEffector => Some(Mount {
                lift: 0.4,
                tilt: MOUNT_TILT,
            }),
        }
    }

    /// Euler components the user may drive on this segment
    pub fn joint_axes(&self) -> AxisMask {
        match self {
            Segment::Root => AxisMask::NONE,
            Segment::UpperArm => AxisMask::YZ,
            Segment::MiddleArm | Segment::LowerArm | Segment::EndEffector => AxisMask::Z,
        }
    }

    /// Geometry attached to the segment, in its local frame
    pub fn visuals(&self, config: &ArmConfig) -> Vec<Visual> {
        match self {
            Segment::Root => vec![
                Visual::at_height(Primitive::cuboid(0.5, 0.05, 0.5), 0.025),
                Visual::at_height(
                    Primitive::Hemisphere {
                        radius: config.dome_radius,
                    },
                    0.05,
                ),
                Visual::at_height(
                    Primitive::Axes {
                        size: config.root_axes_size,
                    },
                    0.0,
                ),
            ],
            Segment::UpperArm => link_visuals(0.5),
            Segment::MiddleArm | Segment::LowerArm => link_visuals(0.4),
            Segment::EndEffector => vec![Visual::at_height(
                Primitive::Cone {
                    radius: 0.025,
                    height: 0.2,
                },
                0.125,
            )],
        }
    }
}

/// A straight link of the given length capped with a knuckle sphere
fn link_visuals(length: f32) -> Vec<Visual> {
    vec![
        Visual::at_height(
            Primitive::cuboid(LINK_THICKNESS, length, LINK_THICKNESS),
            length / 2.0,
        ),
        Visual::at_height(
            Primitive::Sphere {
                radius: KNUCKLE_RADIUS,
            },
            length,
        ),
    ]
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Segment parsing errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SegmentError {
    #[error("Unknown segment name: {0}")]
    UnknownName(String),
}

impl FromStr for Segment {
    type Err = SegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Segment::ALL
            .into_iter()
            .find(|segment| segment.name() == s)
            .ok_or_else(|| SegmentError::UnknownName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_order() {
        let mut chain = vec![Segment::Root];
        while let Some(next) = chain.last().and_then(|s| s.next()) {
            chain.push(next);
        }
        assert_eq!(chain, Segment::ALL.to_vec());
        assert!(Segment::EndEffector.is_terminal());
    }

    #[test]
    fn test_name_parse() {
        for segment in Segment::ALL {
            assert_eq!(segment.name().parse::<Segment>(), Ok(segment));
        }
        assert_eq!(
            "gripper".parse::<Segment>(),
            Err(SegmentError::UnknownName("gripper".to_string()))
        );
    }

    #[test]
    fn test_root_visuals_follow_config() {
        let config = ArmConfig {
            dome_radius: 0.1,
            ..ArmConfig::default()
        };
        let visuals = Segment::Root.visuals(&config);
        assert_eq!(visuals.len(), 3);
        assert_eq!(visuals[1].primitive, Primitive::Hemisphere { radius: 0.1 });
        assert_eq!(visuals[0].offset.y, 0.025);
    }

    #[test]
    fn test_link_visuals() {
        let visuals = Segment::MiddleArm.visuals(&ArmConfig::default());
        assert_eq!(visuals[0].primitive, Primitive::cuboid(0.05, 0.4, 0.05));
        assert_eq!(visuals[0].offset.y, 0.2);
        assert_eq!(visuals[1].primitive, Primitive::Sphere { radius: 0.05 });
        assert_eq!(visuals[1].offset.y, 0.4);
    }
}
