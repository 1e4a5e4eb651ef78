//! Single tracked keypoint.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single tracked body keypoint.
///
/// Produced once per frame by a skeleton source and never mutated
/// afterwards.
///
/// # Example
///
/// ```
/// use pose_types::Landmark;
///
/// let elbow = Landmark::new(0.2, -0.2, 0.0, 0.8);
/// assert!(elbow.is_confident(0.5));
/// assert!(!elbow.is_confident(0.9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Landmark {
    /// Position `[x, y, z]` in the source's normalized or metric frame.
    pub position: [f64; 3],
    /// Tracking confidence in `[0, 1]`.
    pub confidence: f64,
}

impl Landmark {
    /// Creates a landmark from coordinates and confidence.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, confidence: f64) -> Self {
        Self {
            position: [x, y, z],
            confidence,
        }
    }

    /// Creates a placeholder for a keypoint the source did not report.
    ///
    /// Sits at the origin with zero confidence, so it never passes a
    /// confidence gate.
    #[must_use]
    pub const fn missing() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            confidence: 0.0,
        }
    }

    /// Returns true if the confidence reaches `threshold`.
    #[must_use]
    pub fn is_confident(&self, threshold: f64) -> bool {
        self.confidence >= threshold
    }

    /// Returns true if every coordinate is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|c| c.is_finite())
    }

    /// Returns the `x` coordinate.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.position[0]
    }

    /// Returns the `y` coordinate.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.position[1]
    }

    /// Returns the `z` coordinate.
    #[must_use]
    pub const fn z(&self) -> f64 {
        self.position[2]
    }

    /// Returns the midpoint between two landmark positions.
    #[must_use]
    pub fn midpoint(&self, other: &Self) -> [f64; 3] {
        [
            f64::midpoint(self.position[0], other.position[0]),
            f64::midpoint(self.position[1], other.position[1]),
            f64::midpoint(self.position[2], other.position[2]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landmark_missing_is_never_confident() {
        let lm = Landmark::missing();
        assert!(!lm.is_confident(0.01));
        assert!(lm.is_confident(0.0));
    }

    #[test]
    fn landmark_threshold_is_inclusive() {
        let lm = Landmark::new(0.0, 0.0, 0.0, 0.5);
        assert!(lm.is_confident(0.5));
    }

    #[test]
    fn landmark_finite() {
        assert!(Landmark::new(1.0, 2.0, 3.0, 1.0).is_finite());
        assert!(!Landmark::new(f64::NAN, 0.0, 0.0, 1.0).is_finite());
        assert!(!Landmark::new(0.0, f64::INFINITY, 0.0, 1.0).is_finite());
    }

    #[test]
    fn landmark_midpoint() {
        let a = Landmark::new(0.0, -1.0, 2.0, 1.0);
        let b = Landmark::new(1.0, 1.0, 4.0, 0.0);
        let mid = a.midpoint(&b);
        assert!((mid[0] - 0.5).abs() < 1e-12);
        assert!(mid[1].abs() < 1e-12);
        assert!((mid[2] - 3.0).abs() < 1e-12);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn landmark_serialization() {
        let lm = Landmark::new(0.1, 0.2, 0.3, 0.9);
        let json = serde_json::to_string(&lm).ok();
        assert!(json.is_some());
    }
}
