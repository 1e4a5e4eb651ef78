//! Shared pose fixtures for integration tests.
//!
//! Coordinates are meters with `+y` pointing down, hips centred on the
//! origin. Right-side points mirror the left side in `x`.

#![allow(dead_code)]

use pose_source::{BodySkeleton, DEPTH_JOINT_MAP, EstimatorFrame, TrackedJoint};
use pose_types::{Landmark, Pose, PoseLandmark, Side};
use rula_engine::EvaluationConfig;

/// Builder for synthetic poses.
#[derive(Debug, Clone)]
pub struct PoseBuilder {
    landmarks: [Landmark; 33],
}

impl PoseBuilder {
    pub fn new() -> Self {
        Self {
            landmarks: [Landmark::missing(); 33],
        }
    }

    /// Sets a central (unsided) point.
    pub fn point(mut self, which: PoseLandmark, [x, y, z]: [f64; 3]) -> Self {
        self.landmarks[which.index()] = Landmark::new(x, y, z, 1.0);
        self
    }

    /// Sets a left-side point and its mirror on the right.
    pub fn mirrored(mut self, left: PoseLandmark, right: PoseLandmark, [x, y, z]: [f64; 3]) -> Self {
        self.landmarks[left.index()] = Landmark::new(x, y, z, 1.0);
        self.landmarks[right.index()] = Landmark::new(-x, y, z, 1.0);
        self
    }

    /// Overrides one landmark's confidence.
    pub fn confidence(mut self, which: PoseLandmark, confidence: f64) -> Self {
        self.landmarks[which.index()].confidence = confidence;
        self
    }

    /// Overrides the confidence of a landmark on both sides.
    pub fn both_confidence(self, pick: fn(Side) -> PoseLandmark, confidence: f64) -> Self {
        self.confidence(pick(Side::Left), confidence)
            .confidence(pick(Side::Right), confidence)
    }

    pub fn build(self) -> Pose {
        Pose::new(self.landmarks)
    }
}

/// Upright, arms hanging, elbows bent 90 degrees, wrists straight.
///
/// Every joint scores 1 and the final grade is 1.
pub fn neutral() -> PoseBuilder {
    PoseBuilder::new()
        .mirrored(PoseLandmark::LeftHip, PoseLandmark::RightHip, [0.1, 0.0, 0.0])
        .mirrored(PoseLandmark::LeftShoulder, PoseLandmark::RightShoulder, [0.2, -0.5, 0.0])
        .mirrored(PoseLandmark::LeftEar, PoseLandmark::RightEar, [0.07, -0.7, 0.0])
        .point(PoseLandmark::Nose, [0.0, -0.68, -0.1])
        .mirrored(PoseLandmark::LeftElbow, PoseLandmark::RightElbow, [0.2, -0.2, 0.0])
        .mirrored(PoseLandmark::LeftWrist, PoseLandmark::RightWrist, [0.2, -0.2, -0.3])
        .mirrored(PoseLandmark::LeftIndex, PoseLandmark::RightIndex, [0.22, -0.2, -0.4])
        .mirrored(PoseLandmark::LeftPinky, PoseLandmark::RightPinky, [0.18, -0.2, -0.4])
}

pub fn neutral_pose() -> Pose {
    neutral().build()
}

/// Trunk and neck flexed 30 degrees, arms raised forward past horizontal
/// and straight, wrists flexed 90 degrees.
///
/// Sub-scores: upper arm 4, lower arm 2, wrist 3, neck 3, trunk 3.
pub fn flexed() -> PoseBuilder {
    PoseBuilder::new()
        .mirrored(PoseLandmark::LeftHip, PoseLandmark::RightHip, [0.1, 0.0, 0.0])
        .mirrored(PoseLandmark::LeftShoulder, PoseLandmark::RightShoulder, [0.2, -0.433, -0.25])
        .mirrored(PoseLandmark::LeftEar, PoseLandmark::RightEar, [0.07, -0.533, -0.4232])
        .point(PoseLandmark::Nose, [0.0, -0.50, -0.50])
        .mirrored(PoseLandmark::LeftElbow, PoseLandmark::RightElbow, [0.2, -0.433, -0.55])
        .mirrored(PoseLandmark::LeftWrist, PoseLandmark::RightWrist, [0.2, -0.433, -0.80])
        .mirrored(PoseLandmark::LeftIndex, PoseLandmark::RightIndex, [0.22, -0.333, -0.80])
        .mirrored(PoseLandmark::LeftPinky, PoseLandmark::RightPinky, [0.18, -0.333, -0.80])
}

pub fn flexed_pose() -> Pose {
    flexed().build()
}

/// Unsupported legs with static, loaded arm work.
pub fn loaded_config() -> EvaluationConfig {
    EvaluationConfig::default()
        .legs(2)
        .muscle_use_a(1)
        .force_load_a(2)
}

/// Camera estimator rows for a pose.
pub fn estimator_frame(pose: &Pose) -> EstimatorFrame {
    Some(
        pose.landmarks()
            .iter()
            .map(|lm| {
                let [x, y, z] = lm.position;
                [x, y, z, lm.confidence]
            })
            .collect(),
    )
}

/// Depth-tracker skeleton for a pose.
///
/// Each hand joint sits at the index/pinky midpoint, where the tracker
/// would report it.
pub fn skeleton(pose: &Pose) -> BodySkeleton {
    let mut skeleton = BodySkeleton::default();
    for (slot, joint) in DEPTH_JOINT_MAP {
        let position = Side::BOTH
            .into_iter()
            .find(|side| slot == side.index_finger() || slot == side.pinky())
            .map_or(pose.landmark(slot).position, |side| {
                pose.midpoint(side.index_finger(), side.pinky())
            });
        let [x, y, z] = position;
        skeleton = skeleton.with_joint(joint, TrackedJoint::new([x * 1000.0, y * 1000.0, z * 1000.0], 3));
    }
    skeleton
}
