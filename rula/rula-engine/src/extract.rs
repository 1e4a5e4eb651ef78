//! Per-side joint measurement with confidence fallback.
//!
//! Coordinates are image-style (`+y` down). Reference points are the
//! shoulder centre (SC), hip centre (HC), ear midpoint (EC) and the hand
//! centre between index and pinky knuckles.

use nalgebra::Vector3;
use pose_types::{Pose, PoseLandmark, Side};
use tracing::debug;

use crate::angles::{AngleSet, Joint, JointAngle, JointStatus};
use crate::config::EngineParams;
use crate::geometry::{checked_angle_between, group_confidence, midpoint, position};
use crate::posture::{
    FALLBACK_SCORE, PostureScores, lower_arm_score, neck_score, trunk_score, upper_arm_score,
    wrist_score,
};
use crate::result::SideScoreResult;

/// Confidence the nose and both ears need before head direction is read
/// from the nose.
const HEAD_DIRECTION_CONFIDENCE: f64 = 0.5;

/// Nose above the ear line by more than this means the head is tilted back.
const NOSE_EAR_MARGIN: f64 = 0.01;

/// Neck vector pointing down by more than this means the head is tilted back.
const NECK_VECTOR_MARGIN: f64 = 0.1;

const TRUNK_GATE: [PoseLandmark; 4] = [
    PoseLandmark::LeftShoulder,
    PoseLandmark::RightShoulder,
    PoseLandmark::LeftHip,
    PoseLandmark::RightHip,
];

const NECK_GATE: [PoseLandmark; 6] = [
    PoseLandmark::LeftEar,
    PoseLandmark::RightEar,
    PoseLandmark::LeftShoulder,
    PoseLandmark::RightShoulder,
    PoseLandmark::LeftHip,
    PoseLandmark::RightHip,
];

fn vertical_up() -> Vector3<f64> {
    Vector3::new(0.0, -1.0, 0.0)
}

/// Reference points of one side.
struct SidePoints {
    shoulder: Vector3<f64>,
    elbow: Vector3<f64>,
    wrist: Vector3<f64>,
    hand: Vector3<f64>,
    shoulder_centre: Vector3<f64>,
    hip_centre: Vector3<f64>,
    ear_centre: Vector3<f64>,
}

impl SidePoints {
    fn new(pose: &Pose, side: Side) -> Self {
        Self {
            shoulder: position(pose, side.shoulder()),
            elbow: position(pose, side.elbow()),
            wrist: position(pose, side.wrist()),
            hand: midpoint(pose, side.index_finger(), side.pinky()),
            shoulder_centre: midpoint(pose, PoseLandmark::LeftShoulder, PoseLandmark::RightShoulder),
            hip_centre: midpoint(pose, PoseLandmark::LeftHip, PoseLandmark::RightHip),
            ear_centre: midpoint(pose, PoseLandmark::LeftEar, PoseLandmark::RightEar),
        }
    }

    fn upper_arm(&self) -> Vector3<f64> {
        self.elbow - self.shoulder
    }

    fn forearm(&self) -> Vector3<f64> {
        self.wrist - self.elbow
    }

    fn trunk(&self) -> Vector3<f64> {
        self.shoulder_centre - self.hip_centre
    }

    fn neck(&self) -> Vector3<f64> {
        self.ear_centre - self.shoulder_centre
    }
}

/// Gates on confidence, then measures the angle between `u` and `v`.
fn gated_angle(
    pose: &Pose,
    gate: &[PoseLandmark],
    threshold: f64,
    u: &Vector3<f64>,
    v: &Vector3<f64>,
) -> JointAngle {
    if !group_confidence(pose, gate, threshold) {
        return JointAngle::unreliable(0.0, JointStatus::LowConfidence);
    }
    checked_angle_between(u, v).map_or(
        JointAngle::unreliable(0.0, JointStatus::DegenerateGeometry),
        JointAngle::measured,
    )
}

/// True when the head is tilted back.
///
/// Reads the nose against the ear line when all three are confidently
/// tracked, and the vertical component of the neck vector otherwise.
fn head_extended(pose: &Pose, points: &SidePoints) -> bool {
    let nose = pose.landmark(PoseLandmark::Nose);
    let left_ear = pose.landmark(PoseLandmark::LeftEar);
    let right_ear = pose.landmark(PoseLandmark::RightEar);

    let head_visible = [nose, left_ear, right_ear]
        .iter()
        .all(|lm| lm.confidence > HEAD_DIRECTION_CONFIDENCE);

    if head_visible {
        nose.y() - points.ear_centre.y < -NOSE_EAR_MARGIN
    } else {
        -points.neck().y < -NECK_VECTOR_MARGIN
    }
}

/// Measures the five joint angles of one side.
///
/// Joints whose landmarks are not confident, or whose vectors are
/// degenerate, are returned unreliable with a `0.0` placeholder angle.
/// No history is consulted.
#[must_use]
pub fn measure_side(pose: &Pose, side: Side, params: &EngineParams) -> AngleSet {
    let threshold = params.min_confidence;
    let points = SidePoints::new(pose, side);

    let upper_arm = gated_angle(
        pose,
        &[side.shoulder(), side.elbow()],
        threshold,
        &points.upper_arm(),
        &(points.hip_centre - points.shoulder_centre),
    );
    let lower_arm = gated_angle(
        pose,
        &[side.shoulder(), side.elbow(), side.wrist()],
        threshold,
        &points.upper_arm(),
        &points.forearm(),
    );
    let wrist = gated_angle(
        pose,
        &[
            side.shoulder(),
            side.elbow(),
            side.wrist(),
            side.index_finger(),
            side.pinky(),
        ],
        threshold,
        &points.forearm(),
        &(points.hand - points.wrist),
    );
    let neck = gated_angle(pose, &NECK_GATE, threshold, &points.trunk(), &points.neck());
    let trunk = gated_angle(pose, &TRUNK_GATE, threshold, &points.trunk(), &vertical_up());

    let neck_extended = neck.reliable() && head_extended(pose, &points);

    AngleSet {
        upper_arm,
        lower_arm,
        wrist,
        neck,
        trunk,
        neck_extended,
    }
}

fn band_score(joint: Joint, degrees: f64, neck_extended: bool, tolerance: f64) -> u8 {
    match joint {
        Joint::UpperArm => upper_arm_score(degrees),
        Joint::LowerArm => lower_arm_score(degrees),
        Joint::Wrist => wrist_score(degrees, tolerance),
        Joint::Neck => neck_score(degrees, neck_extended, tolerance),
        Joint::Trunk => trunk_score(degrees, tolerance),
    }
}

/// Measures one side and maps it to posture sub-scores.
///
/// A joint that could not be measured keeps the angle and sub-score of
/// `previous`, tagged with why it was not measured. With no history it
/// gets [`FALLBACK_SCORE`] and a `0.0` angle.
///
/// # Example
///
/// ```
/// use pose_types::{Pose, Side};
/// use rula_engine::{EngineParams, FALLBACK_SCORE, Joint, extract_side};
///
/// // Nothing is tracked: every joint falls back.
/// let (angles, scores) = extract_side(&Pose::empty(), Side::Left, None, &EngineParams::default());
/// assert!(!angles.all_reliable());
/// assert_eq!(scores.get(Joint::Wrist), FALLBACK_SCORE);
/// ```
#[must_use]
pub fn extract_side(
    pose: &Pose,
    side: Side,
    previous: Option<&SideScoreResult>,
    params: &EngineParams,
) -> (AngleSet, PostureScores) {
    let mut angles = measure_side(pose, side, params);
    let mut scores = [FALLBACK_SCORE; 5];

    for (slot, joint) in scores.iter_mut().zip(Joint::ALL) {
        let angle = *angles.get(joint);
        if angle.reliable() {
            *slot = band_score(joint, angle.degrees, angles.neck_extended, params.tolerance_angle);
            continue;
        }

        let (held_degrees, held_score) =
            previous.map_or((0.0, FALLBACK_SCORE), |prev| prev.joint(joint));
        *slot = held_score;
        set_angle(&mut angles, joint, JointAngle::unreliable(held_degrees, angle.status));
        if joint == Joint::Neck {
            angles.neck_extended = previous.is_some_and(|prev| prev.angles.neck_extended);
        }

        debug!(
            side = %side,
            joint = %joint,
            status = ?angle.status,
            held_score,
            has_history = previous.is_some(),
            "Joint not measured, holding previous score"
        );
    }

    let [upper_arm, lower_arm, wrist, neck, trunk] = scores;
    (
        angles,
        PostureScores::from_bands(upper_arm, lower_arm, wrist, neck, trunk),
    )
}

fn set_angle(angles: &mut AngleSet, joint: Joint, angle: JointAngle) {
    match joint {
        Joint::UpperArm => angles.upper_arm = angle,
        Joint::LowerArm => angles.lower_arm = angle,
        Joint::Wrist => angles.wrist = angle,
        Joint::Neck => angles.neck = angle,
        Joint::Trunk => angles.trunk = angle,
    }
}
