//! The 33-point landmark schema shared by every skeleton source.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of landmarks in the common schema.
pub const LANDMARK_COUNT: usize = 33;

/// Named landmark of the common 33-point schema.
///
/// Discriminants are the fixed schema indices.
///
/// # Example
///
/// ```
/// use pose_types::PoseLandmark;
///
/// assert_eq!(PoseLandmark::LeftShoulder.index(), 11);
/// assert_eq!(PoseLandmark::from_index(24), Some(PoseLandmark::RightHip));
/// assert_eq!(PoseLandmark::from_index(33), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(missing_docs)]
#[repr(u8)]
pub enum PoseLandmark {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl PoseLandmark {
    /// Every landmark in schema order.
    pub const ALL: [Self; LANDMARK_COUNT] = [
        Self::Nose,
        Self::LeftEyeInner,
        Self::LeftEye,
        Self::LeftEyeOuter,
        Self::RightEyeInner,
        Self::RightEye,
        Self::RightEyeOuter,
        Self::LeftEar,
        Self::RightEar,
        Self::MouthLeft,
        Self::MouthRight,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftPinky,
        Self::RightPinky,
        Self::LeftIndex,
        Self::RightIndex,
        Self::LeftThumb,
        Self::RightThumb,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
        Self::LeftHeel,
        Self::RightHeel,
        Self::LeftFootIndex,
        Self::RightFootIndex,
    ];

    /// Returns the schema index of this landmark.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks up a landmark by schema index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the `snake_case` name of this landmark.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEyeInner => "left_eye_inner",
            Self::LeftEye => "left_eye",
            Self::LeftEyeOuter => "left_eye_outer",
            Self::RightEyeInner => "right_eye_inner",
            Self::RightEye => "right_eye",
            Self::RightEyeOuter => "right_eye_outer",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::MouthLeft => "mouth_left",
            Self::MouthRight => "mouth_right",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftPinky => "left_pinky",
            Self::RightPinky => "right_pinky",
            Self::LeftIndex => "left_index",
            Self::RightIndex => "right_index",
            Self::LeftThumb => "left_thumb",
            Self::RightThumb => "right_thumb",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
            Self::LeftHeel => "left_heel",
            Self::RightHeel => "right_heel",
            Self::LeftFootIndex => "left_foot_index",
            Self::RightFootIndex => "right_foot_index",
        }
    }
}

impl fmt::Display for PoseLandmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Half of the body being assessed.
///
/// Each side is scored independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    /// The subject's left side.
    Left,
    /// The subject's right side.
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const BOTH: [Self; 2] = [Self::Left, Self::Right];

    /// Returns the lowercase name of the side.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Returns the opposite side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Shoulder landmark on this side.
    #[must_use]
    pub const fn shoulder(self) -> PoseLandmark {
        match self {
            Self::Left => PoseLandmark::LeftShoulder,
            Self::Right => PoseLandmark::RightShoulder,
        }
    }

    /// Elbow landmark on this side.
    #[must_use]
    pub const fn elbow(self) -> PoseLandmark {
        match self {
            Self::Left => PoseLandmark::LeftElbow,
            Self::Right => PoseLandmark::RightElbow,
        }
    }

    /// Wrist landmark on this side.
    #[must_use]
    pub const fn wrist(self) -> PoseLandmark {
        match self {
            Self::Left => PoseLandmark::LeftWrist,
            Self::Right => PoseLandmark::RightWrist,
        }
    }

    /// Index finger landmark on this side.
    #[must_use]
    pub const fn index_finger(self) -> PoseLandmark {
        match self {
            Self::Left => PoseLandmark::LeftIndex,
            Self::Right => PoseLandmark::RightIndex,
        }
    }

    /// Pinky landmark on this side.
    #[must_use]
    pub const fn pinky(self) -> PoseLandmark {
        match self {
            Self::Left => PoseLandmark::LeftPinky,
            Self::Right => PoseLandmark::RightPinky,
        }
    }

    /// Hip landmark on this side.
    #[must_use]
    pub const fn hip(self) -> PoseLandmark {
        match self {
            Self::Left => PoseLandmark::LeftHip,
            Self::Right => PoseLandmark::RightHip,
        }
    }

    /// Ear landmark on this side.
    #[must_use]
    pub const fn ear(self) -> PoseLandmark {
        match self {
            Self::Left => PoseLandmark::LeftEar,
            Self::Right => PoseLandmark::RightEar,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
