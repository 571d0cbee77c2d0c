//! Joint controls and their bindings onto the part hierarchy

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::part::RobotPart;
use crate::segment::Segment;
use crate::types::{AngleRange, AxisMask, JointAxis};

/// A user-facing joint slider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JointControl {
    UpperSwivel,
    UpperBend,
    MiddleBend,
    LowerBend,
    EndEffectorBend,
}

impl JointControl {
    /// All controls in panel order
    pub const ALL: [JointControl; 5] = [
        JointControl::UpperSwivel,
        JointControl::UpperBend,
        JointControl::MiddleBend,
        JointControl::LowerBend,
        JointControl::EndEffectorBend,
    ];

    /// The segment this control rotates
    pub fn segment(&self) -> Segment {
        match self {
            JointControl::UpperSwivel | JointControl::UpperBend => Segment::UpperArm,
            JointControl::MiddleBend => Segment::MiddleArm,
            JointControl::LowerBend => Segment::LowerArm,
            JointControl::EndEffectorBend => Segment::EndEffector,
        }
    }

    pub fn axis(&self) -> JointAxis {
        match self {
            JointControl::UpperSwivel => JointAxis::Y,
            _ => JointAxis::Z,
        }
    }

    /// Declared slider range in degrees
    pub fn range(&self) -> AngleRange {
        match self {
            JointControl::UpperSwivel => AngleRange::symmetric(180.0),
            JointControl::UpperBend => AngleRange::symmetric(45.0),
            JointControl::MiddleBend | JointControl::LowerBend => AngleRange::symmetric(135.0),
            JointControl::EndEffectorBend => AngleRange::symmetric(90.0),
        }
    }

    /// Slider label
    pub fn label(&self) -> &'static str {
        match self.axis() {
            JointAxis::Y => "swivel",
            JointAxis::X | JointAxis::Z => "bend",
        }
    }
}

/// Slider state in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct JointAngles {
    pub upper_swivel: f32,
    pub upper_bend: f32,
    pub middle_bend: f32,
    pub lower_bend: f32,
    pub end_effector_bend: f32,
}

impl JointAngles {
    pub fn get(&self, control: JointControl) -> f32 {
        match control {
            JointControl::UpperSwivel => self.upper_swivel,
            JointControl::UpperBend => self.upper_bend,
            JointControl::MiddleBend => self.middle_bend,
            JointControl::LowerBend => self.lower_bend,
            JointControl::EndEffectorBend => self.end_effector_bend,
        }
    }

    pub fn set(&mut self, control: JointControl, degrees: f32) {
        let slot = match control {
            JointControl::UpperSwivel => &mut self.upper_swivel,
            JointControl::UpperBend => &mut self.upper_bend,
            JointControl::MiddleBend => &mut self.middle_bend,
            JointControl::LowerBend => &mut self.lower_bend,
            JointControl::EndEffectorBend => &mut self.end_effector_bend,
        };
        *slot = degrees;
    }

    /// Euler angles in radians for every control acting on `segment`
    pub fn euler_for(&self, segment: Segment) -> Vec3 {
        JointControl::ALL
            .into_iter()
            .filter(|control| control.segment() == segment)
            .map(|control| control.axis().euler(self.get(control).to_radians()))
            .sum()
    }
}

/// Callback run when a control changes
pub type JointCallback = Box<dyn Fn(&mut RobotPart, &JointAngles) -> bool + Send + Sync>;

/// Maps each control to the callback that drives its joint
pub struct ControlBindings {
    bindings: Vec<(JointControl, JointCallback)>,
}

impl ControlBindings {
    /// Bindings for the standard arm: every control rotates its own segment
    pub fn standard() -> Self {
        let mut bindings = Self {
            bindings: Vec::with_capacity(JointControl::ALL.len()),
        };
        for control in JointControl::ALL {
            bindings.bind(control, joint_callback(control.segment()));
        }
        bindings
    }

    /// Replace the callback for `control`
    pub fn bind(&mut self, control: JointControl, callback: JointCallback) {
        self.bindings.retain(|(bound, _)| *bound != control);
        self.bindings.push((control, callback));
    }

    /// Run the callback for `control`; false when unbound or nothing matched
    pub fn dispatch(&self, control: JointControl, root: &mut RobotPart, angles: &JointAngles) -> bool {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == control)
            .is_some_and(|(_, callback)| callback(root, angles))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for ControlBindings {
    fn default() -> Self {
        Self::standard()
    }
}

/// Callback capturing the joint name and axis mask of `segment`
fn joint_callback(segment: Segment) -> JointCallback {
    let joint_name = segment.name();
    let mask: AxisMask = segment.joint_axes();
    Box::new(move |root, angles| root.set_rotation(joint_name, mask.apply(angles.euler_for(segment))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_control_table() {
        assert_eq!(JointControl::UpperSwivel.segment(), Segment::UpperArm);
        assert_eq!(JointControl::UpperSwivel.axis(), JointAxis::Y);
        assert_eq!(JointControl::UpperSwivel.label(), "swivel");
        assert_eq!(JointControl::MiddleBend.range(), AngleRange::symmetric(135.0));
        assert_eq!(JointControl::EndEffectorBend.range().min_degrees, -90.0);
        assert_eq!(JointControl::UpperBend.range().max_degrees, 45.0);
    }

    #[test]
    fn test_upper_arm_combines_two_controls() {
        let mut angles = JointAngles::default();
        angles.set(JointControl::UpperSwivel, 90.0);
        angles.set(JointControl::UpperBend, -30.0);

        let euler = angles.euler_for(Segment::UpperArm);
        assert_eq!(euler.x, 0.0);
        assert_abs_diff_eq!(euler.y, 90f32.to_radians(), epsilon = 1e-6);
        assert_abs_diff_eq!(euler.z, (-30f32).to_radians(), epsilon = 1e-6);
        assert_eq!(angles.euler_for(Segment::Root), Vec3::ZERO);
    }

    #[test]
    fn test_custom_binding_replaces_standard() {
        let mut bindings = ControlBindings::standard();
        assert_eq!(bindings.len(), 5);

        bindings.bind(JointControl::LowerBend, Box::new(|_, _| false));
        assert_eq!(bindings.len(), 5);

        let mut root = RobotPart::new(Segment::Root);
        root.build_geometry();
        let before = root.find("lowerArm").unwrap().rotation();
        let mut angles = JointAngles::default();
        angles.set(JointControl::LowerBend, 10.0);

        assert!(!bindings.dispatch(JointControl::LowerBend, &mut root, &angles));
        assert_eq!(root.find("lowerArm").unwrap().rotation(), before);
    }
}
