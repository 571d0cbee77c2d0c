//! Robot Arm Core Data Structures
//!
//! This crate contains the domain model of the articulated arm:
//! - RobotPart: transform hierarchy node with geometry and debug gizmo
//! - Segment: the closed set of arm segments and their build data
//! - RobotArm: the assembled arm and its joint controls
//! - ArmConfig: tuning constants for the assembly

pub mod assembly;
pub mod config;
pub mod part;
pub mod segment;
pub mod types;

pub use assembly::*;
pub use config::*;
pub use part::*;
pub use segment::*;
pub use types::*;
