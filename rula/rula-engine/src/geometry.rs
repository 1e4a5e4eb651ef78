//! Numerically safe vector and angle primitives.

use nalgebra::Vector3;
use pose_types::{Pose, PoseLandmark};

/// Norm below which a vector is treated as degenerate.
pub const DEGENERATE_EPSILON: f64 = 1e-6;

/// Normalizes `v` to unit length.
///
/// A vector shorter than [`DEGENERATE_EPSILON`] yields the zero vector
/// instead of failing; any angle built on it is unreliable.
///
/// # Example
///
/// ```
/// use nalgebra::Vector3;
/// use rula_engine::geometry::unit_vector;
///
/// let u = unit_vector(&Vector3::new(3.0, 0.0, 4.0));
/// assert!((u.norm() - 1.0).abs() < 1e-12);
///
/// let zero = unit_vector(&Vector3::new(1e-9, 0.0, 0.0));
/// assert_eq!(zero, Vector3::zeros());
/// ```
#[must_use]
pub fn unit_vector(v: &Vector3<f64>) -> Vector3<f64> {
    let norm = v.norm();
    if norm < DEGENERATE_EPSILON || !norm.is_finite() {
        return Vector3::zeros();
    }
    v / norm
}

/// Returns true if `v` is too short (or not finite) to define a direction.
#[must_use]
pub fn is_degenerate(v: &Vector3<f64>) -> bool {
    let norm = v.norm();
    norm < DEGENERATE_EPSILON || !norm.is_finite()
}

/// Angle between two vectors in degrees, in `[0, 180]`.
///
/// The dot product of the unit vectors is clamped to `[-1, 1]` before
/// `acos`, so exactly parallel and antiparallel inputs cannot leave its
/// domain. Returns `0.0` when either vector is degenerate; use
/// [`checked_angle_between`] to tell that case apart.
///
/// # Example
///
/// ```
/// use nalgebra::Vector3;
/// use rula_engine::geometry::angle_between;
///
/// let x = Vector3::new(1.0, 0.0, 0.0);
/// let y = Vector3::new(0.0, 2.0, 0.0);
/// assert!((angle_between(&x, &y) - 90.0).abs() < 1e-10);
/// assert!((angle_between(&x, &-x) - 180.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn angle_between(u: &Vector3<f64>, v: &Vector3<f64>) -> f64 {
    checked_angle_between(u, v).unwrap_or(0.0)
}

/// Angle between two vectors in degrees, or `None` if either is degenerate.
#[must_use]
pub fn checked_angle_between(u: &Vector3<f64>, v: &Vector3<f64>) -> Option<f64> {
    if is_degenerate(u) || is_degenerate(v) {
        return None;
    }
    let cos = unit_vector(u).dot(&unit_vector(v)).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

/// Returns true only if every listed landmark has confidence `>= threshold`.
///
/// One disqualifying point disqualifies the whole group; there is no
/// averaging.
///
/// # Example
///
/// ```
/// use pose_types::{Landmark, Pose, PoseLandmark};
/// use rula_engine::geometry::group_confidence;
///
/// let mut landmarks = [Landmark::new(0.0, 0.0, 0.0, 0.9); 33];
/// landmarks[PoseLandmark::LeftElbow.index()].confidence = 0.3;
/// let pose = Pose::new(landmarks);
///
/// assert!(group_confidence(&pose, &[PoseLandmark::LeftShoulder], 0.5));
/// assert!(!group_confidence(&pose, &[PoseLandmark::LeftShoulder, PoseLandmark::LeftElbow], 0.5));
/// ```
#[must_use]
pub fn group_confidence(pose: &Pose, landmarks: &[PoseLandmark], threshold: f64) -> bool {
    pose.all_confident(landmarks, threshold)
}

/// Position of a named landmark as a vector.
#[must_use]
pub fn position(pose: &Pose, which: PoseLandmark) -> Vector3<f64> {
    Vector3::from(pose.landmark(which).position)
}

/// Midpoint of two named landmarks as a vector.
#[must_use]
pub fn midpoint(pose: &Pose, a: PoseLandmark, b: PoseLandmark) -> Vector3<f64> {
    Vector3::from(pose.midpoint(a, b))
}
