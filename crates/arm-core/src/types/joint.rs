//! Joint-related type definitions

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Rotation axis of a single joint control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JointAxis {
    X,
    Y,
    Z,
}

impl JointAxis {
    /// Euler vector with `angle` on this axis and zero elsewhere
    pub fn euler(&self, angle: f32) -> Vec3 {
        match self {
            JointAxis::X => Vec3::new(angle, 0.0, 0.0),
            JointAxis::Y => Vec3::new(0.0, angle, 0.0),
            JointAxis::Z => Vec3::new(0.0, 0.0, angle),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            JointAxis::X => "X",
            JointAxis::Y => "Y",
            JointAxis::Z => "Z",
        }
    }
}

/// Which Euler components a joint is allowed to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisMask {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl AxisMask {
    pub const NONE: Self = Self {
        x: false,
        y: false,
        z: false,
    };
    pub const Z: Self = Self {
        x: false,
        y: false,
        z: true,
    };
    pub const YZ: Self = Self {
        x: false,
        y: true,
        z: true,
    };

    pub fn contains(&self, axis: JointAxis) -> bool {
        match axis {
            JointAxis::X => self.x,
            JointAxis::Y => self.y,
            JointAxis::Z => self.z,
        }
    }

    /// Zero every component outside the mask
    pub fn apply(&self, euler: Vec3) -> Vec3 {
        Vec3::new(
            if self.x { euler.x } else { 0.0 },
            if self.y { euler.y } else { 0.0 },
            if self.z { euler.z } else { 0.0 },
        )
    }

    pub fn is_empty(&self) -> bool {
        !(self.x || self.y || self.z)
    }
}

/// Declared slider range in degrees.
///
/// This bounds the control only; parts accept any rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleRange {
    pub min_degrees: f32,
    pub max_degrees: f32,
}

impl AngleRange {
    pub const fn symmetric(limit_degrees: f32) -> Self {
        Self {
            min_degrees: -limit_degrees,
            max_degrees: limit_degrees,
        }
    }

    pub fn contains(&self, degrees: f32) -> bool {
        (self.min_degrees..=self.max_degrees).contains(&degrees)
    }

    pub fn clamp(&self, degrees: f32) -> f32 {
        degrees.clamp(self.min_degrees, self.max_degrees)
    }

    pub fn as_range(&self) -> std::ops::RangeInclusive<f32> {
        self.min_degrees..=self.max_degrees
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_apply() {
        let euler = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(AxisMask::Z.apply(euler), Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(AxisMask::YZ.apply(euler), Vec3::new(0.0, 2.0, 3.0));
        assert!(AxisMask::NONE.is_empty());
        assert!(AxisMask::YZ.contains(JointAxis::Y));
        assert!(!AxisMask::Z.contains(JointAxis::X));
    }

    #[test]
    fn test_range() {
        let range = AngleRange::symmetric(45.0);
        assert!(range.contains(-45.0));
        assert!(!range.contains(45.5));
        assert_eq!(range.clamp(90.0), 45.0);
    }
}
