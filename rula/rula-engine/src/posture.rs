//! Posture bands: joint angle to sub-score.
//!
//! Band edges follow the published RULA worksheet. Sub-scores produced by
//! measurement stay inside the lower part of each table's domain; the
//! full domain (which includes worksheet adjustments such as a raised
//! shoulder) is accepted by [`PostureScores::new`].

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angles::Joint;
use crate::error::{RulaError, RulaResult};

/// Default neutral tolerance in degrees.
pub const DEFAULT_TOLERANCE_DEG: f64 = 5.0;

/// Sub-score used for a joint that has never been measured.
pub const FALLBACK_SCORE: u8 = 2;

/// Inclusive sub-score domain of each joint in the lookup tables.
#[must_use]
pub const fn score_domain(joint: Joint) -> (u8, u8) {
    match joint {
        Joint::UpperArm | Joint::Neck | Joint::Trunk => (1, 6),
        Joint::LowerArm => (1, 3),
        Joint::Wrist => (1, 4),
    }
}

/// Upper arm: `<20` → 1, `<45` → 2, `<90` → 3, otherwise 4.
#[must_use]
pub fn upper_arm_score(degrees: f64) -> u8 {
    if degrees < 20.0 {
        1
    } else if degrees < 45.0 {
        2
    } else if degrees < 90.0 {
        3
    } else {
        4
    }
}

/// Lower arm: elbow flexion within `60..=100` → 1, otherwise 2.
///
/// `flexion` is measured from a straight arm (0°), not as the interior
/// elbow angle. Banding the interior angle on `60..=100` would instead
/// accept flexion `80..=120`, so flexion in `60..80` scores 1 here where
/// that reading gives 2, and `(100, 120]` scores 2 where it gives 1.
#[must_use]
pub fn lower_arm_score(flexion: f64) -> u8 {
    if (60.0..=100.0).contains(&flexion) { 1 } else { 2 }
}

/// Wrist: within tolerance → 1, `<=15` → 2, otherwise 3.
#[must_use]
pub fn wrist_score(degrees: f64, tolerance: f64) -> u8 {
    if degrees <= tolerance {
        1
    } else if degrees <= 15.0 {
        2
    } else {
        3
    }
}

/// Neck: extended past tolerance → 4, `<10` → 1, `<20` → 2, otherwise 3.
#[must_use]
pub fn neck_score(degrees: f64, extended: bool, tolerance: f64) -> u8 {
    if extended && degrees > tolerance {
        4
    } else if degrees < 10.0 {
        1
    } else if degrees < 20.0 {
        2
    } else {
        3
    }
}

/// Trunk: within tolerance → 1, `<20` → 2, `<60` → 3, otherwise 4.
#[must_use]
pub fn trunk_score(degrees: f64, tolerance: f64) -> u8 {
    if degrees <= tolerance {
        1
    } else if degrees < 20.0 {
        2
    } else if degrees < 60.0 {
        3
    } else {
        4
    }
}

/// The five posture sub-scores of one side.
///
/// Every score is inside its table domain; the lookups in
/// [`crate::tables`] rely on it.
///
/// # Example
///
/// ```
/// use rula_engine::PostureScores;
///
/// let scores = PostureScores::new(1, 2, 1, 1, 1).unwrap();
/// assert_eq!(scores.lower_arm(), 2);
///
/// assert!(PostureScores::new(1, 4, 1, 1, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PostureScores {
    upper_arm: u8,
    lower_arm: u8,
    wrist: u8,
    neck: u8,
    trunk: u8,
}

impl PostureScores {
    /// Creates validated sub-scores.
    ///
    /// # Errors
    ///
    /// Returns [`RulaError::ScoreOutOfRange`] for the first score outside
    /// its joint's table domain.
    pub fn new(upper_arm: u8, lower_arm: u8, wrist: u8, neck: u8, trunk: u8) -> RulaResult<Self> {
        let scores = Self {
            upper_arm,
            lower_arm,
            wrist,
            neck,
            trunk,
        };
        for joint in Joint::ALL {
            let score = scores.get(joint);
            let (min, max) = score_domain(joint);
            if !(min..=max).contains(&score) {
                return Err(RulaError::score_out_of_range(joint.name(), score, min, max));
            }
        }
        Ok(scores)
    }

    /// Scores used before any joint has been measured.
    #[must_use]
    pub const fn fallback() -> Self {
        Self {
            upper_arm: FALLBACK_SCORE,
            lower_arm: FALLBACK_SCORE,
            wrist: FALLBACK_SCORE,
            neck: FALLBACK_SCORE,
            trunk: FALLBACK_SCORE,
        }
    }

    /// Builds scores from band outputs, which are always in domain.
    pub(crate) fn from_bands(upper_arm: u8, lower_arm: u8, wrist: u8, neck: u8, trunk: u8) -> Self {
        let scores = Self {
            upper_arm,
            lower_arm,
            wrist,
            neck,
            trunk,
        };
        debug_assert!(
            Self::new(upper_arm, lower_arm, wrist, neck, trunk).is_ok(),
            "band score outside table domain: {scores:?}"
        );
        scores
    }

    /// Returns the sub-score for one joint.
    #[must_use]
    pub const fn get(&self, joint: Joint) -> u8 {
        match joint {
            Joint::UpperArm => self.upper_arm,
            Joint::LowerArm => self.lower_arm,
            Joint::Wrist => self.wrist,
            Joint::Neck => self.neck,
            Joint::Trunk => self.trunk,
        }
    }

    /// Upper arm sub-score.
    #[must_use]
    pub const fn upper_arm(&self) -> u8 {
        self.upper_arm
    }

    /// Lower arm sub-score.
    #[must_use]
    pub const fn lower_arm(&self) -> u8 {
        self.lower_arm
    }

    /// Wrist sub-score.
    #[must_use]
    pub const fn wrist(&self) -> u8 {
        self.wrist
    }

    /// Neck sub-score.
    #[must_use]
    pub const fn neck(&self) -> u8 {
        self.neck
    }

    /// Trunk sub-score.
    #[must_use]
    pub const fn trunk(&self) -> u8 {
        self.trunk
    }
}

impl Default for PostureScores {
    fn default() -> Self {
        Self::fallback()
    }
}

impl fmt::Display for PostureScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "upper_arm={} lower_arm={} wrist={} neck={} trunk={}",
            self.upper_arm, self.lower_arm, self.wrist, self.neck, self.trunk
        )
    }
}
