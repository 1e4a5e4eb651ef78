//! Result types for one assessment cycle.

use std::fmt;

use pose_types::Side;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angles::{AngleSet, Joint};
use crate::combine::TableScores;
use crate::posture::PostureScores;

/// RULA action level derived from the final score.
///
/// The grand score never exceeds 7, so the four published action levels
/// cover the whole range.
///
/// # Example
///
/// ```
/// use rula_engine::RiskCategory;
///
/// assert_eq!(RiskCategory::from_score(2), RiskCategory::Negligible);
/// assert_eq!(RiskCategory::from_score(7), RiskCategory::High);
/// assert_eq!(RiskCategory::High.label(), "high");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum RiskCategory {
    /// Scores 1-2: posture acceptable.
    Negligible,
    /// Scores 3-4: investigate further.
    Low,
    /// Scores 5-6: investigate and change soon.
    Medium,
    /// Score 7: investigate and change immediately.
    High,
}

impl RiskCategory {
    /// Maps a final score onto its action level.
    ///
    /// Scores below 1 are treated as 1 and scores above 7 as 7.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Self::Negligible,
            3..=4 => Self::Low,
            5..=6 => Self::Medium,
            _ => Self::High,
        }
    }

    /// Lowercase label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Negligible => "negligible",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Recommended action for this level.
    #[must_use]
    pub const fn action(self) -> &'static str {
        match self {
            Self::Negligible => "acceptable posture",
            Self::Low => "investigate further",
            Self::Medium => "investigate and change soon",
            Self::High => "investigate and change immediately",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One side's RULA outcome for one computed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SideScoreResult {
    /// Body side this result describes.
    pub side: Side,
    /// Joint angles, with per-joint reliability.
    pub angles: AngleSet,
    /// Posture sub-scores.
    pub scores: PostureScores,
    /// Table A posture score before adjustment.
    pub posture_a: u8,
    /// Adjusted wrist-and-arm score, `1..=8`.
    pub table_a_score: u8,
    /// Table B posture score before adjustment.
    pub posture_b: u8,
    /// Adjusted neck-trunk-leg score, `1..=7`.
    pub table_b_score: u8,
    /// Table C grand score, `1..=7`.
    pub final_score: u8,
    /// Action level of `final_score`.
    pub risk_category: RiskCategory,
}

impl SideScoreResult {
    /// Assembles a result from measured angles, sub-scores and table output.
    #[must_use]
    pub const fn new(
        side: Side,
        angles: AngleSet,
        scores: PostureScores,
        tables: TableScores,
    ) -> Self {
        Self {
            side,
            angles,
            scores,
            posture_a: tables.posture_a,
            table_a_score: tables.table_a,
            posture_b: tables.posture_b,
            table_b_score: tables.table_b,
            final_score: tables.final_score,
            risk_category: RiskCategory::from_score(tables.final_score),
        }
    }

    /// Angle and sub-score pair for one joint.
    #[must_use]
    pub const fn joint(&self, joint: Joint) -> (f64, u8) {
        (self.angles.get(joint).degrees, self.scores.get(joint))
    }

    /// Table output this result was built from.
    #[must_use]
    pub const fn tables(&self) -> TableScores {
        TableScores {
            posture_a: self.posture_a,
            table_a: self.table_a_score,
            posture_b: self.posture_b,
            table_b: self.table_b_score,
            final_score: self.final_score,
        }
    }
}

impl fmt::Display for SideScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RULA {} side:", self.side)?;
        for joint in Joint::ALL {
            let angle = self.angles.get(joint);
            let (degrees, score) = self.joint(joint);
            write!(f, "  {:<10} {degrees:6.1} deg  score {score}", joint.name())?;
            if !angle.reliable() {
                write!(f, "  (held)")?;
            }
            writeln!(f)?;
        }
        if self.angles.neck_extended {
            writeln!(f, "  neck extended")?;
        }
        writeln!(
            f,
            "  Table A: {} -> {}  Table B: {} -> {}",
            self.posture_a, self.table_a_score, self.posture_b, self.table_b_score
        )?;
        writeln!(
            f,
            "  Final score: {} ({}, {})",
            self.final_score,
            self.risk_category,
            self.risk_category.action()
        )
    }
}

/// What the engine did with one incoming frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EvaluationStatus {
    /// Both sides were measured and scored.
    Computed,
    /// Not a cadence frame; previous results returned unchanged.
    Skipped,
    /// A cadence frame with no pose; previous results returned unchanged.
    MissingPose,
}

/// Output of one engine call.
///
/// A side is `None` until it has been computed at least once.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Assessment {
    /// Zero-based index of the frame this call consumed.
    pub frame_index: u64,
    /// Left side result.
    pub left: Option<SideScoreResult>,
    /// Right side result.
    pub right: Option<SideScoreResult>,
    /// Whether results were computed or carried over.
    pub status: EvaluationStatus,
}

impl Assessment {
    /// Result for one side.
    #[must_use]
    pub const fn side(&self, side: Side) -> Option<&SideScoreResult> {
        match side {
            Side::Left => self.left.as_ref(),
            Side::Right => self.right.as_ref(),
        }
    }

    /// True if fresh results were computed for this frame.
    #[must_use]
    pub fn is_fresh(&self) -> bool {
        self.status == EvaluationStatus::Computed
    }

    /// Higher of the two sides' final scores.
    #[must_use]
    pub fn overall_score(&self) -> Option<u8> {
        self.left
            .iter()
            .chain(self.right.iter())
            .map(|r| r.final_score)
            .max()
    }

    /// Action level of [`overall_score`](Self::overall_score).
    #[must_use]
    pub fn overall_category(&self) -> Option<RiskCategory> {
        self.overall_score().map(RiskCategory::from_score)
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frame {} ({:?})", self.frame_index, self.status)?;
        for side in Side::BOTH {
            match self.side(side) {
                Some(result) => write!(f, "{result}")?,
                None => writeln!(f, "RULA {side} side: no data")?,
            }
        }
        match self.overall_score() {
            Some(score) => writeln!(
                f,
                "Overall: {score} ({})",
                RiskCategory::from_score(score)
            ),
            None => writeln!(f, "Overall: no data"),
        }
    }
}
