//! Joint identifiers and per-side joint angle sets.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A joint assessed by the method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Joint {
    /// Shoulder flexion of the upper arm.
    UpperArm,
    /// Elbow flexion of the forearm.
    LowerArm,
    /// Wrist flexion relative to the forearm.
    Wrist,
    /// Neck flexion relative to the trunk.
    Neck,
    /// Trunk flexion from vertical.
    Trunk,
}

impl Joint {
    /// Every joint in table order.
    pub const ALL: [Self; 5] = [
        Self::UpperArm,
        Self::LowerArm,
        Self::Wrist,
        Self::Neck,
        Self::Trunk,
    ];

    /// Returns the `snake_case` name of the joint.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UpperArm => "upper_arm",
            Self::LowerArm => "lower_arm",
            Self::Wrist => "wrist",
            Self::Neck => "neck",
            Self::Trunk => "trunk",
        }
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a joint angle was obtained this cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum JointStatus {
    /// Measured from confident, well-defined landmarks.
    Measured,
    /// A defining landmark was below the confidence threshold.
    #[default]
    LowConfidence,
    /// A defining vector was zero-length or not finite.
    DegenerateGeometry,
}

/// One joint angle paired with its reliability.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JointAngle {
    /// Angle in degrees, always in `[0, 180]`.
    pub degrees: f64,
    /// Whether and why the angle can be trusted.
    pub status: JointStatus,
}

impl JointAngle {
    /// Creates a measured angle, clamped into `[0, 180]`.
    #[must_use]
    pub fn measured(degrees: f64) -> Self {
        Self {
            degrees: degrees.clamp(0.0, 180.0),
            status: JointStatus::Measured,
        }
    }

    /// Creates an unreliable angle carrying a stand-in value.
    #[must_use]
    pub fn unreliable(degrees: f64, status: JointStatus) -> Self {
        Self {
            degrees: degrees.clamp(0.0, 180.0),
            status,
        }
    }

    /// Returns true if the angle was measured this cycle.
    #[must_use]
    pub fn reliable(&self) -> bool {
        self.status == JointStatus::Measured
    }
}

/// The five joint angles of one body side.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AngleSet {
    /// Upper arm flexion from the trunk line.
    pub upper_arm: JointAngle,
    /// Elbow flexion.
    pub lower_arm: JointAngle,
    /// Wrist deviation from the forearm axis.
    pub wrist: JointAngle,
    /// Neck flexion from the trunk axis (unsigned).
    pub neck: JointAngle,
    /// Trunk flexion from vertical.
    pub trunk: JointAngle,
    /// True when the head is tilted back rather than forward.
    pub neck_extended: bool,
}

impl AngleSet {
    /// Returns the angle for one joint.
    #[must_use]
    pub const fn get(&self, joint: Joint) -> &JointAngle {
        match joint {
            Joint::UpperArm => &self.upper_arm,
            Joint::LowerArm => &self.lower_arm,
            Joint::Wrist => &self.wrist,
            Joint::Neck => &self.neck,
            Joint::Trunk => &self.trunk,
        }
    }

    /// Returns true if every joint was measured this cycle.
    #[must_use]
    pub fn all_reliable(&self) -> bool {
        Joint::ALL.iter().all(|&j| self.get(j).reliable())
    }

    /// Returns the joints that fell back this cycle.
    #[must_use]
    pub fn unreliable_joints(&self) -> Vec<Joint> {
        Joint::ALL
            .into_iter()
            .filter(|&j| !self.get(j).reliable())
            .collect()
    }
}
