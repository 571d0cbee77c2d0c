//! The assembled robot arm and its controller

mod controls;

pub use controls::*;

use glam::Vec3;

use crate::config::ArmConfig;
use crate::part::RobotPart;
use crate::segment::Segment;

/// Owns the built hierarchy and the slider state driving it
pub struct RobotArm {
    root: RobotPart,
    angles: JointAngles,
    bindings: ControlBindings,
    debug_mode: bool,
    config: ArmConfig,
}

impl RobotArm {
    /// Build the full arm and lower it by the configured offset
    pub fn new(config: ArmConfig) -> Self {
        let mut root = RobotPart::with_config(Segment::Root, &config);
        root.build_geometry_with(&config);
        root.transform.translate_y(-config.vertical_offset);

        tracing::debug!(
            "Assembled arm with {} parts, lowered by {}",
            root.part_count(),
            config.vertical_offset
        );

        Self {
            root,
            angles: JointAngles::default(),
            bindings: ControlBindings::standard(),
            debug_mode: false,
            config,
        }
    }

    pub fn root(&self) -> &RobotPart {
        &self.root
    }

    pub fn config(&self) -> &ArmConfig {
        &self.config
    }

    pub fn angles(&self) -> &JointAngles {
        &self.angles
    }

    /// Current slider value in degrees
    pub fn angle(&self, control: JointControl) -> f32 {
        self.angles.get(control)
    }

    /// Replace the callback driving `control`
    pub fn bind(&mut self, control: JointControl, callback: JointCallback) {
        self.bindings.bind(control, callback);
    }

    /// Apply a slider change in degrees.
    ///
    /// The value is not clamped to the control's range; that is the slider's job.
    pub fn set_control(&mut self, control: JointControl, degrees: f32) -> bool {
        self.angles.set(control, degrees);
        tracing::trace!("{:?} -> {} deg", control, degrees);
        self.bindings.dispatch(control, &mut self.root, &self.angles)
    }

    /// Return the arm to the pose it was built in.
    ///
    /// Sliders go back to zero and every mounted segment gets its 45° tilt back,
    /// so the result matches a freshly assembled arm rather than a straight one.
    pub fn reset_pose(&mut self) {
        self.angles = JointAngles::default();
        for segment in Segment::ALL {
            let rotation = segment
                .mount()
                .map_or(Vec3::ZERO, |mount| Vec3::new(0.0, 0.0, mount.tilt));
            self.root.set_segment_rotation(segment, rotation);
        }
        tracing::debug!("Pose reset");
    }

    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Broadcast a debug toggle; returns false when the value did not change
    pub fn set_debug_mode(&mut self, enabled: bool) -> bool {
        if self.debug_mode == enabled {
            return false;
        }
        self.debug_mode = enabled;
        self.root.set_debug_mode(enabled);
        tracing::debug!("Debug mode {}", if enabled { "on" } else { "off" });
        true
    }

    /// Per-frame hook; the arm is not animated
    pub fn update(&mut self, _delta_time: f32) {}
}

impl Default for RobotArm {
    fn default() -> Self {
        Self::new(ArmConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_new_lowers_root() {
        let arm = RobotArm::default();
        assert_abs_diff_eq!(arm.root().transform.translation.y, -0.6, epsilon = 1e-6);

        let arm = RobotArm::new(ArmConfig {
            vertical_offset: 0.5,
            ..ArmConfig::default()
        });
        assert_abs_diff_eq!(arm.root().transform.translation.y, -0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_set_control_writes_radians() {
        let mut arm = RobotArm::default();
        assert!(arm.set_control(JointControl::MiddleBend, 90.0));

        let rotation = arm.root().find("middleArm").unwrap().rotation();
        assert_eq!(rotation.x, 0.0);
        assert_eq!(rotation.y, 0.0);
        assert_abs_diff_eq!(rotation.z, std::f32::consts::FRAC_PI_2, epsilon = 1e-6);
        assert_eq!(arm.angle(JointControl::MiddleBend), 90.0);
    }

    #[test]
    fn test_out_of_range_value_is_passed_through() {
        let mut arm = RobotArm::default();
        arm.set_control(JointControl::UpperBend, 120.0);
        let rotation = arm.root().find("upperArm").unwrap().rotation();
        assert_abs_diff_eq!(rotation.z, 120f32.to_radians(), epsilon = 1e-6);
    }

    #[test]
    fn test_reset_pose_restores_startup_pose() {
        let fresh = RobotArm::default();
        let mut arm = RobotArm::default();
        arm.set_control(JointControl::UpperSwivel, 45.0);
        arm.set_control(JointControl::MiddleBend, 0.0);
        arm.set_control(JointControl::LowerBend, -60.0);
        arm.reset_pose();

        assert_eq!(*arm.angles(), JointAngles::default());
        for (part, startup) in arm.root().iter().zip(fresh.root().iter()) {
            assert_eq!(part.rotation(), startup.rotation(), "{}", part.name());
        }
        let tilt = arm.root().find("middleArm").unwrap().rotation();
        assert_eq!(tilt, Vec3::new(0.0, 0.0, std::f32::consts::FRAC_PI_4));
        assert_eq!(arm.root().find("upperArm").unwrap().rotation(), Vec3::ZERO);
    }

    #[test]
    fn test_debug_toggle_reports_changes() {
        let mut arm = RobotArm::default();
        assert!(!arm.set_debug_mode(false));
        assert!(arm.set_debug_mode(true));
        assert!(!arm.set_debug_mode(true));
        assert!(arm.root().iter().all(RobotPart::debug_mode));
    }

    #[test]
    fn test_update_has_no_effect() {
        let mut arm = RobotArm::default();
        arm.set_control(JointControl::UpperSwivel, 30.0);
        let before = arm.root().world_transforms();
        arm.update(0.016);
        assert_eq!(arm.root().world_transforms(), before);
    }
}
