//! Rolling per-side memory owned by one engine.

use pose_types::Side;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::result::SideScoreResult;

/// History of one body side.
///
/// Moves from `Uninitialized` to `Warm` on the first computation and never
/// goes back while the engine lives.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SideState {
    /// Never computed.
    #[default]
    Uninitialized,
    /// Holds the last computed result.
    Warm(SideScoreResult),
}

impl SideState {
    /// The last computed result, if any.
    #[must_use]
    pub const fn last(&self) -> Option<&SideScoreResult> {
        match self {
            Self::Uninitialized => None,
            Self::Warm(result) => Some(result),
        }
    }

    /// True once a result has been computed.
    #[must_use]
    pub const fn is_warm(&self) -> bool {
        matches!(self, Self::Warm(_))
    }
}

/// Engine memory: one slot per side plus the frame counter.
///
/// # Example
///
/// ```
/// use pose_types::Side;
/// use rula_engine::EngineState;
///
/// let state = EngineState::default();
/// assert_eq!(state.frame_counter(), 0);
/// assert!(!state.side(Side::Left).is_warm());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineState {
    left: SideState,
    right: SideState,
    frame_counter: u64,
}

impl EngineState {
    /// Number of frames seen, computed or not.
    #[must_use]
    pub const fn frame_counter(&self) -> u64 {
        self.frame_counter
    }

    /// History of one side.
    #[must_use]
    pub const fn side(&self, side: Side) -> &SideState {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Last computed result of one side.
    #[must_use]
    pub const fn last(&self, side: Side) -> Option<&SideScoreResult> {
        self.side(side).last()
    }

    /// Stores a fresh result. Returns true if this warmed the side up.
    pub(crate) fn store(&mut self, result: SideScoreResult) -> bool {
        let slot = match result.side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        let warmed = !slot.is_warm();
        *slot = SideState::Warm(result);
        warmed
    }

    /// Claims the next frame index.
    pub(crate) const fn advance(&mut self) -> u64 {
        let index = self.frame_counter;
        self.frame_counter = self.frame_counter.wrapping_add(1);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angles::AngleSet;
    use crate::combine::combine;
    use crate::config::EvaluationConfig;
    use crate::posture::PostureScores;

    fn result(side: Side) -> SideScoreResult {
        let scores = PostureScores::fallback();
        let tables = combine(&scores, &EvaluationConfig::default());
        SideScoreResult::new(side, AngleSet::default(), scores, tables)
    }

    #[test]
    fn test_store_warms_once() {
        let mut state = EngineState::default();
        assert!(state.store(result(Side::Right)));
        assert!(!state.store(result(Side::Right)));
        assert!(state.side(Side::Right).is_warm());
        assert!(!state.side(Side::Left).is_warm());
        assert_eq!(state.last(Side::Right).map(|r| r.side), Some(Side::Right));
    }

    #[test]
    fn test_advance_counts_every_frame() {
        let mut state = EngineState::default();
        assert_eq!(state.advance(), 0);
        assert_eq!(state.advance(), 1);
        assert_eq!(state.frame_counter(), 2);
    }
}
