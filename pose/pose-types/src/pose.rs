//! One frame's full skeleton.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PoseError, Result};
use crate::landmark::Landmark;
use crate::schema::{LANDMARK_COUNT, PoseLandmark};

/// Exactly 33 landmarks in the common schema for one processed frame.
///
/// A pose is produced once per frame, scored, and discarded. It is never
/// mutated after construction.
///
/// # Example
///
/// ```
/// use pose_types::{Pose, PoseLandmark};
///
/// let rows = vec![[0.0, 0.0, 0.0, 1.0]; 33];
/// let pose = Pose::from_rows(&rows).unwrap();
/// assert_eq!(pose.len(), 33);
/// assert!(pose.all_confident(&[PoseLandmark::Nose, PoseLandmark::LeftHip], 0.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose {
    #[cfg_attr(feature = "serde", serde(with = "landmark_array"))]
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl Pose {
    /// Creates a pose from a full landmark array.
    #[must_use]
    pub const fn new(landmarks: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { landmarks }
    }

    /// Creates a pose where every landmark is missing.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            landmarks: [Landmark::missing(); LANDMARK_COUNT],
        }
    }

    /// Creates a validated pose from a landmark slice.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice does not hold exactly 33 landmarks,
    /// or if any landmark has a non-finite coordinate or a confidence
    /// outside `[0, 1]`.
    pub fn from_slice(landmarks: &[Landmark]) -> Result<Self> {
        let landmarks: [Landmark; LANDMARK_COUNT] = landmarks
            .try_into()
            .map_err(|_| PoseError::landmark_count(LANDMARK_COUNT, landmarks.len()))?;
        let pose = Self { landmarks };
        pose.validate()?;
        Ok(pose)
    }

    /// Creates a validated pose from `[x, y, z, confidence]` rows.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Pose::from_slice`].
    pub fn from_rows(rows: &[[f64; 4]]) -> Result<Self> {
        let landmarks: Vec<Landmark> = rows
            .iter()
            .map(|&[x, y, z, c]| Landmark::new(x, y, z, c))
            .collect();
        Self::from_slice(&landmarks)
    }

    /// Checks that every coordinate is finite and every confidence is in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns the first offending landmark.
    pub fn validate(&self) -> Result<()> {
        for (index, lm) in self.landmarks.iter().enumerate() {
            if let Some(&value) = lm.position.iter().find(|c| !c.is_finite()) {
                return Err(PoseError::invalid_coordinate(index, value));
            }
            if !(0.0..=1.0).contains(&lm.confidence) {
                return Err(PoseError::invalid_confidence(index, lm.confidence));
            }
        }
        Ok(())
    }

    /// Returns the landmark for a schema name.
    #[must_use]
    pub const fn landmark(&self, which: PoseLandmark) -> &Landmark {
        &self.landmarks[which.index()]
    }

    /// Returns the landmark at a raw schema index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }

    /// Returns the number of landmarks (always 33).
    #[must_use]
    pub const fn len(&self) -> usize {
        LANDMARK_COUNT
    }

    /// Always false; a pose always holds the full schema.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the landmarks in schema order.
    #[must_use]
    pub const fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.landmarks
    }

    /// Returns an iterator over `(name, landmark)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PoseLandmark, &Landmark)> {
        PoseLandmark::ALL.into_iter().zip(self.landmarks.iter())
    }

    /// Returns true if every listed landmark reaches `threshold`.
    #[must_use]
    pub fn all_confident(&self, which: &[PoseLandmark], threshold: f64) -> bool {
        which
            .iter()
            .all(|&lm| self.landmark(lm).is_confident(threshold))
    }

    /// Returns the midpoint between two named landmarks.
    #[must_use]
    pub fn midpoint(&self, a: PoseLandmark, b: PoseLandmark) -> [f64; 3] {
        self.landmark(a).midpoint(self.landmark(b))
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(feature = "serde")]
mod landmark_array {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::landmark::Landmark;
    use crate::schema::LANDMARK_COUNT;

    pub fn serialize<S: Serializer>(
        landmarks: &[Landmark; LANDMARK_COUNT],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        landmarks.as_slice().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<[Landmark; LANDMARK_COUNT], D::Error> {
        let landmarks = Vec::<Landmark>::deserialize(deserializer)?;
        let count = landmarks.len();
        landmarks.try_into().map_err(|_| {
            D::Error::custom(format!(
                "expected {LANDMARK_COUNT} landmarks, got {count}"
            ))
        })
    }
}
