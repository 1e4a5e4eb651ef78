//! Depth-sensor body tracker provider.
//!
//! Body trackers report their own 32-joint skeleton in millimetres with a
//! coarse confidence level (0 = none, 1 = low, 2 = medium, 3 = high).
//! Only the joints the assessment needs are remapped into the common
//! schema; every other slot is left as a zero-confidence placeholder.

use pose_types::{LANDMARK_COUNT, Landmark, Pose, PoseLandmark};
use tracing::warn;

use crate::error::{Result, SourceError};
use crate::source::PoseSource;

/// Number of joints in a tracker skeleton.
pub const DEPTH_JOINT_COUNT: usize = 32;

/// Highest confidence level a tracker reports.
const MAX_CONFIDENCE_LEVEL: f64 = 3.0;

/// Millimetres per meter.
const MM_PER_M: f64 = 1000.0;

/// Joint of the depth tracker's native skeleton.
///
/// Discriminants are the tracker's joint indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
#[repr(u8)]
pub enum DepthJoint {
    Pelvis = 0,
    SpineNavel = 1,
    SpineChest = 2,
    Neck = 3,
    ClavicleLeft = 4,
    ShoulderLeft = 5,
    ElbowLeft = 6,
    WristLeft = 7,
    HandLeft = 8,
    HandTipLeft = 9,
    ThumbLeft = 10,
    ClavicleRight = 11,
    ShoulderRight = 12,
    ElbowRight = 13,
    WristRight = 14,
    HandRight = 15,
    HandTipRight = 16,
    ThumbRight = 17,
    HipLeft = 18,
    KneeLeft = 19,
    AnkleLeft = 20,
    FootLeft = 21,
    HipRight = 22,
    KneeRight = 23,
    AnkleRight = 24,
    FootRight = 25,
    Head = 26,
    Nose = 27,
    EyeLeft = 28,
    EarLeft = 29,
    EyeRight = 30,
    EarRight = 31,
}

impl DepthJoint {
    /// Returns the tracker index of this joint.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Common-schema slots fed by the depth tracker, and their source joints.
///
/// The tracker has no finger keypoints, so each side's index and pinky
/// slots are both fed by the HAND joint; their midpoint then lands on the
/// hand itself.
pub const DEPTH_JOINT_MAP: [(PoseLandmark, DepthJoint); 15] = [
    (PoseLandmark::Nose, DepthJoint::Nose),
    (PoseLandmark::LeftEar, DepthJoint::EarLeft),
    (PoseLandmark::RightEar, DepthJoint::EarRight),
    (PoseLandmark::LeftShoulder, DepthJoint::ShoulderLeft),
    (PoseLandmark::RightShoulder, DepthJoint::ShoulderRight),
    (PoseLandmark::LeftElbow, DepthJoint::ElbowLeft),
    (PoseLandmark::RightElbow, DepthJoint::ElbowRight),
    (PoseLandmark::LeftWrist, DepthJoint::WristLeft),
    (PoseLandmark::RightWrist, DepthJoint::WristRight),
    (PoseLandmark::LeftPinky, DepthJoint::HandLeft),
    (PoseLandmark::RightPinky, DepthJoint::HandRight),
    (PoseLandmark::LeftIndex, DepthJoint::HandLeft),
    (PoseLandmark::RightIndex, DepthJoint::HandRight),
    (PoseLandmark::LeftHip, DepthJoint::HipLeft),
    (PoseLandmark::RightHip, DepthJoint::HipRight),
];

/// A single joint as reported by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackedJoint {
    /// Position `[x, y, z]` in millimetres, camera frame.
    pub position_mm: [f64; 3],
    /// Confidence level, 0 (none) to 3 (high).
    pub confidence_level: u8,
}

impl TrackedJoint {
    /// Creates a tracked joint.
    #[must_use]
    pub const fn new(position_mm: [f64; 3], confidence_level: u8) -> Self {
        Self {
            position_mm,
            confidence_level,
        }
    }

    /// Converts to a landmark in meters with confidence in `[0, 1]`.
    #[must_use]
    pub fn to_landmark(&self) -> Landmark {
        let [x, y, z] = self.position_mm;
        let confidence = (f64::from(self.confidence_level) / MAX_CONFIDENCE_LEVEL).clamp(0.0, 1.0);
        Landmark::new(x / MM_PER_M, y / MM_PER_M, z / MM_PER_M, confidence)
    }
}

/// One tracked body in the tracker's native joint layout.
#[derive(Debug, Clone, PartialEq)]
pub struct BodySkeleton {
    /// Joints indexed by [`DepthJoint::index`].
    pub joints: [TrackedJoint; DEPTH_JOINT_COUNT],
}

impl BodySkeleton {
    /// Creates a skeleton from a full joint array.
    #[must_use]
    pub const fn new(joints: [TrackedJoint; DEPTH_JOINT_COUNT]) -> Self {
        Self { joints }
    }

    /// Returns the joint for a tracker joint name.
    #[must_use]
    pub const fn joint(&self, which: DepthJoint) -> &TrackedJoint {
        &self.joints[which.index()]
    }

    /// Sets one joint, returning the updated skeleton.
    #[must_use]
    pub fn with_joint(mut self, which: DepthJoint, joint: TrackedJoint) -> Self {
        self.joints[which.index()] = joint;
        self
    }
}

impl Default for BodySkeleton {
    fn default() -> Self {
        Self {
            joints: [TrackedJoint::default(); DEPTH_JOINT_COUNT],
        }
    }
}

/// Remaps a tracker skeleton into the common 33-point schema.
///
/// Positions are converted from millimetres to meters and confidence
/// levels to `level / 3`. Slots without a tracker counterpart keep zero
/// confidence.
///
/// # Errors
///
/// Returns [`SourceError::MalformedFrame`] if a mapped joint has a
/// non-finite coordinate.
///
/// # Example
///
/// ```
/// use pose_source::{BodySkeleton, DepthJoint, TrackedJoint, pose_from_skeleton};
/// use pose_types::PoseLandmark;
///
/// let skeleton = BodySkeleton::default()
///     .with_joint(DepthJoint::ShoulderLeft, TrackedJoint::new([200.0, -500.0, 2000.0], 2));
/// let pose = pose_from_skeleton(&skeleton).unwrap();
///
/// let shoulder = pose.landmark(PoseLandmark::LeftShoulder);
/// assert!((shoulder.x() - 0.2).abs() < 1e-12);
/// assert!((shoulder.confidence - 2.0 / 3.0).abs() < 1e-12);
/// ```
pub fn pose_from_skeleton(skeleton: &BodySkeleton) -> Result<Pose> {
    let mut landmarks = [Landmark::missing(); LANDMARK_COUNT];
    for (slot, joint) in DEPTH_JOINT_MAP {
        let landmark = skeleton.joint(joint).to_landmark();
        if !landmark.is_finite() {
            return Err(SourceError::malformed(format!(
                "non-finite coordinate at tracker joint {joint:?}"
            )));
        }
        landmarks[slot.index()] = landmark;
    }
    Ok(Pose::new(landmarks))
}

/// Provider wrapping a stream of depth tracker frames.
///
/// Each frame carries the first tracked body, or `None` when nobody is
/// in view.
#[derive(Debug)]
pub struct DepthPoseSource<I> {
    frames: I,
    produced: u64,
}

impl<I> DepthPoseSource<I>
where
    I: Iterator<Item = Option<BodySkeleton>>,
{
    /// Creates a provider over any sequence of tracker frames.
    pub fn new(frames: impl IntoIterator<Item = Option<BodySkeleton>, IntoIter = I>) -> Self {
        Self {
            frames: frames.into_iter(),
            produced: 0,
        }
    }

    /// Returns the number of frames consumed so far.
    #[must_use]
    pub const fn frames_consumed(&self) -> u64 {
        self.produced
    }
}

impl<I> PoseSource for DepthPoseSource<I>
where
    I: Iterator<Item = Option<BodySkeleton>>,
{
    fn next_pose(&mut self) -> Result<Option<Pose>> {
        let frame = self.frames.next().ok_or(SourceError::Closed)?;
        self.produced += 1;

        let Some(skeleton) = frame else {
            return Ok(None);
        };

        pose_from_skeleton(&skeleton).map(Some).inspect_err(|err| {
            warn!(frame = self.produced, error = %err, "Rejected depth tracker frame");
        })
    }
}
