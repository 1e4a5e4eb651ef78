//! Camera pose-estimator provider.
//!
//! A camera estimator reports the 33-point schema directly, as world
//! coordinates in meters with a per-point visibility score. Normalization
//! only has to check the shape and bring visibility into `[0, 1]`.

use pose_types::{LANDMARK_COUNT, Landmark, Pose};
use tracing::warn;

use crate::error::{Result, SourceError};
use crate::source::PoseSource;

/// One raw estimator frame: `None` when no body was detected, otherwise
/// one `[x, y, z, visibility]` row per schema landmark.
pub type EstimatorFrame = Option<Vec<[f64; 4]>>;

/// Normalizes raw estimator rows into a [`Pose`].
///
/// Visibility is clamped into `[0, 1]`; estimators occasionally report
/// values slightly outside it.
///
/// # Errors
///
/// Returns [`SourceError::MalformedFrame`] if there are not exactly 33
/// rows or a coordinate is not finite.
///
/// # Example
///
/// ```
/// use pose_source::pose_from_estimator;
///
/// let rows = vec![[0.1, 0.2, 0.3, 1.02]; 33];
/// let pose = pose_from_estimator(&rows).unwrap();
/// assert!((pose.landmarks()[0].confidence - 1.0).abs() < 1e-12);
///
/// assert!(pose_from_estimator(&rows[..20]).is_err());
/// ```
pub fn pose_from_estimator(rows: &[[f64; 4]]) -> Result<Pose> {
    if rows.len() != LANDMARK_COUNT {
        return Err(SourceError::malformed(format!(
            "estimator frame has {} rows, expected {LANDMARK_COUNT}",
            rows.len()
        )));
    }

    let mut landmarks = [Landmark::missing(); LANDMARK_COUNT];
    for (index, (slot, &[x, y, z, visibility])) in landmarks.iter_mut().zip(rows).enumerate() {
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return Err(SourceError::malformed(format!(
                "non-finite coordinate at landmark {index}"
            )));
        }
        let confidence = if visibility.is_finite() {
            visibility.clamp(0.0, 1.0)
        } else {
            0.0
        };
        *slot = Landmark::new(x, y, z, confidence);
    }

    Ok(Pose::new(landmarks))
}

/// Provider wrapping a stream of camera estimator frames.
///
/// # Example
///
/// ```
/// use pose_source::{CameraPoseSource, PoseSource};
///
/// let mut source = CameraPoseSource::new(vec![Some(vec![[0.0, 0.0, 0.0, 1.0]; 33])]);
/// let pose = source.next_pose().unwrap().unwrap();
/// assert_eq!(pose.len(), 33);
/// ```
#[derive(Debug)]
pub struct CameraPoseSource<I> {
    frames: I,
    produced: u64,
}

impl<I> CameraPoseSource<I>
where
    I: Iterator<Item = EstimatorFrame>,
{
    /// Creates a provider over any sequence of estimator frames.
    pub fn new(frames: impl IntoIterator<Item = EstimatorFrame, IntoIter = I>) -> Self {
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

impl<I> PoseSource for CameraPoseSource<I>
where
    I: Iterator<Item = EstimatorFrame>,
{
    fn next_pose(&mut self) -> Result<Option<Pose>> {
        let frame = self.frames.next().ok_or(SourceError::Closed)?;
        self.produced += 1;

        let Some(rows) = frame else {
            return Ok(None);
        };

        pose_from_estimator(&rows).map(Some).inspect_err(|err| {
            warn!(frame = self.produced, error = %err, "Rejected camera estimator frame");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pose_types::PoseLandmark;

    #[test]
    fn estimator_clamps_visibility() {
        let mut rows = vec![[0.0, 0.0, 0.0, 0.5]; 33];
        rows[0][3] = -0.2;
        rows[1][3] = 1.3;
        rows[2][3] = f64::NAN;
        let pose = pose_from_estimator(&rows).unwrap();

        assert_relative_eq!(pose.landmark(PoseLandmark::Nose).confidence, 0.0);
        assert_relative_eq!(pose.landmark(PoseLandmark::LeftEyeInner).confidence, 1.0);
        assert_relative_eq!(pose.landmark(PoseLandmark::LeftEye).confidence, 0.0);
        assert_relative_eq!(pose.landmark(PoseLandmark::LeftEyeOuter).confidence, 0.5);
    }

    #[test]
    fn estimator_keeps_coordinates() {
        let mut rows = vec![[0.0, 0.0, 0.0, 1.0]; 33];
        rows[13] = [0.25, -0.2, 0.05, 0.9];
        let pose = pose_from_estimator(&rows).unwrap();
        let elbow = pose.landmark(PoseLandmark::LeftElbow);

        assert_relative_eq!(elbow.x(), 0.25);
        assert_relative_eq!(elbow.y(), -0.2);
        assert_relative_eq!(elbow.z(), 0.05);
    }

    #[test]
    fn estimator_rejects_wrong_row_count() {
        let rows = vec![[0.0, 0.0, 0.0, 1.0]; 32];
        let err = pose_from_estimator(&rows).unwrap_err();
        assert!(matches!(err, SourceError::MalformedFrame(_)));
    }

    #[test]
    fn estimator_rejects_non_finite_coordinate() {
        let mut rows = vec![[0.0, 0.0, 0.0, 1.0]; 33];
        rows[20][2] = f64::INFINITY;
        assert!(pose_from_estimator(&rows).is_err());
    }

    #[test]
    fn source_sequence() {
        let frames = vec![
            Some(vec![[0.0, 0.0, 0.0, 1.0]; 33]),
            None,
            Some(vec![[0.0, 0.0, 0.0, 1.0]; 3]),
            Some(vec![[0.0, 0.0, 0.0, 1.0]; 33]),
        ];
        let mut source = CameraPoseSource::new(frames);

        assert!(source.next_pose().unwrap().is_some());
        assert!(source.next_pose().unwrap().is_none());
        assert!(matches!(
            source.next_pose(),
            Err(SourceError::MalformedFrame(_))
        ));
        assert!(source.next_pose().unwrap().is_some());
        assert!(source.next_pose().unwrap_err().is_closed());
        assert_eq!(source.frames_consumed(), 4);
    }
}
