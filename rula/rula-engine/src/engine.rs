//! The cadence-gated assessment engine.

use pose_types::{Pose, Side};
use tracing::{debug, info, trace};

use crate::combine::combine;
use crate::config::{EngineParams, EvaluationConfig};
use crate::error::RulaResult;
use crate::extract::extract_side;
use crate::result::{Assessment, EvaluationStatus, SideScoreResult};
use crate::state::EngineState;

/// Scores a stream of poses, one call per frame.
///
/// Each engine owns its [`EngineState`]; two engines never share history.
/// Every call advances the frame counter. Only every `stride`-th frame
/// (starting with the first) is measured; the others return the previous
/// results unchanged.
///
/// # Example
///
/// ```
/// use pose_types::Pose;
/// use rula_engine::{EngineParams, EvaluationConfig, EvaluationStatus, RulaEngine};
///
/// let mut engine = RulaEngine::new(EvaluationConfig::default(), EngineParams::default()).unwrap();
///
/// let first = engine.evaluate(Some(&Pose::empty()));
/// assert_eq!(first.status, EvaluationStatus::Computed);
///
/// let second = engine.evaluate(Some(&Pose::empty()));
/// assert_eq!(second.status, EvaluationStatus::Skipped);
/// assert_eq!(second.left, first.left);
/// ```
#[derive(Debug, Clone)]
pub struct RulaEngine {
    config: EvaluationConfig,
    params: EngineParams,
    state: EngineState,
}

impl Default for RulaEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl RulaEngine {
    /// Creates an engine after validating both inputs.
    ///
    /// # Errors
    ///
    /// Returns [`RulaError::InvalidConfig`] for a config field outside its
    /// domain and [`RulaError::InvalidParams`] for a zero stride or an
    /// out-of-range threshold.
    ///
    /// [`RulaError::InvalidConfig`]: crate::RulaError::InvalidConfig
    /// [`RulaError::InvalidParams`]: crate::RulaError::InvalidParams
    pub fn new(config: EvaluationConfig, params: EngineParams) -> RulaResult<Self> {
        config.validate()?;
        params.validate()?;
        debug!(
            ?config,
            stride = params.stride,
            min_confidence = params.min_confidence,
            "Created RULA engine"
        );
        Ok(Self {
            config,
            params,
            state: EngineState::default(),
        })
    }

    /// Creates an engine with the neutral config and default parameters.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            config: EvaluationConfig::NEUTRAL,
            params: EngineParams::default(),
            state: EngineState::default(),
        }
    }

    /// Current evaluation config.
    #[must_use]
    pub const fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Engine parameters.
    #[must_use]
    pub const fn params(&self) -> &EngineParams {
        &self.params
    }

    /// Per-side history and frame counter.
    #[must_use]
    pub const fn state(&self) -> &EngineState {
        &self.state
    }

    /// Replaces the evaluation config between frames.
    ///
    /// History is kept; the new config applies from the next computed
    /// frame. On error the old config stays in place.
    ///
    /// # Errors
    ///
    /// Returns [`RulaError::InvalidConfig`](crate::RulaError::InvalidConfig)
    /// if `config` is invalid.
    pub fn reconfigure(&mut self, config: EvaluationConfig) -> RulaResult<()> {
        config.validate()?;
        info!(old = ?self.config, new = ?config, "Reconfigured RULA engine");
        self.config = config;
        Ok(())
    }

    /// True if the next call to [`evaluate`](Self::evaluate) will measure.
    #[must_use]
    pub fn is_due(&self) -> bool {
        self.state.frame_counter() % u64::from(self.params.stride) == 0
    }

    /// Consumes one frame.
    ///
    /// `None` means no body was detected. On a skipped or empty frame the
    /// returned sides are the previous results, unchanged.
    pub fn evaluate(&mut self, pose: Option<&Pose>) -> Assessment {
        let due = self.is_due();
        let frame_index = self.state.advance();

        if !due {
            trace!(frame_index, "Cadence skip");
            return self.snapshot(frame_index, EvaluationStatus::Skipped);
        }

        let Some(pose) = pose else {
            trace!(frame_index, "No pose on cadence frame");
            return self.snapshot(frame_index, EvaluationStatus::MissingPose);
        };

        for side in Side::BOTH {
            let result = self.evaluate_side(pose, side);
            if self.state.store(result) {
                info!(
                    side = %side,
                    final_score = result.final_score,
                    category = %result.risk_category,
                    "Side warmed up"
                );
            }
        }

        let assessment = self.snapshot(frame_index, EvaluationStatus::Computed);
        debug!(
            frame_index,
            left = assessment.left.map(|r| r.final_score),
            right = assessment.right.map(|r| r.final_score),
            "Computed RULA scores"
        );
        assessment
    }

    /// Scores one side of `pose` against this engine's history without
    /// touching the state.
    #[must_use]
    pub fn evaluate_side(&self, pose: &Pose, side: Side) -> SideScoreResult {
        let previous = self.state.last(side);
        let (angles, scores) = extract_side(pose, side, previous, &self.params);
        let tables = combine(&scores, &self.config);
        SideScoreResult::new(side, angles, scores, tables)
    }

    /// The last results without consuming a frame.
    #[must_use]
    pub fn latest(&self) -> (Option<SideScoreResult>, Option<SideScoreResult>) {
        (
            self.state.last(Side::Left).copied(),
            self.state.last(Side::Right).copied(),
        )
    }

    fn snapshot(&self, frame_index: u64, status: EvaluationStatus) -> Assessment {
        let (left, right) = self.latest();
        Assessment {
            frame_index,
            left,
            right,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RulaError;

    #[test]
    fn test_new_rejects_invalid_inputs() {
        let bad_config = EvaluationConfig::default().force_load_a(3);
        assert!(matches!(
            RulaEngine::new(bad_config, EngineParams::default()),
            Err(RulaError::InvalidConfig { field: "force_load_a", .. })
        ));
        assert!(matches!(
            RulaEngine::new(EvaluationConfig::default(), EngineParams::default().stride(0)),
            Err(RulaError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_first_frame_computes() {
        let mut engine = RulaEngine::with_defaults();
        assert!(engine.is_due());
        let a = engine.evaluate(Some(&Pose::empty()));
        assert_eq!(a.status, EvaluationStatus::Computed);
        assert_eq!(a.frame_index, 0);
        assert!(engine.state().side(Side::Left).is_warm());
        assert!(engine.state().side(Side::Right).is_warm());
    }

    #[test]
    fn test_counter_advances_on_every_call() {
        let mut engine = RulaEngine::new(
            EvaluationConfig::default(),
            EngineParams::default().stride(3),
        )
        .unwrap();
        let statuses: Vec<_> = (0..7).map(|_| engine.evaluate(None).status).collect();
        assert_eq!(engine.state().frame_counter(), 7);
        assert_eq!(statuses, [
            EvaluationStatus::MissingPose,
            EvaluationStatus::Skipped,
            EvaluationStatus::Skipped,
            EvaluationStatus::MissingPose,
            EvaluationStatus::Skipped,
            EvaluationStatus::Skipped,
            EvaluationStatus::MissingPose,
        ]);
    }

    #[test]
    fn test_missing_pose_before_warmup_has_no_sides() {
        let mut engine = RulaEngine::with_defaults();
        let a = engine.evaluate(None);
        assert_eq!(a.status, EvaluationStatus::MissingPose);
        assert!(a.left.is_none());
        assert!(a.right.is_none());
        assert!(!engine.state().side(Side::Left).is_warm());
    }

    #[test]
    fn test_reconfigure_keeps_history() {
        let mut engine = RulaEngine::new(EvaluationConfig::default(), EngineParams::every_frame())
            .unwrap();
        let before = engine.evaluate(Some(&Pose::empty()));

        assert!(engine.reconfigure(EvaluationConfig::default().legs(5)).is_err());
        assert_eq!(engine.config(), &EvaluationConfig::default());

        engine
            .reconfigure(EvaluationConfig::default().muscle_use_a(1).force_load_a(2))
            .unwrap();
        assert!(engine.state().side(Side::Left).is_warm());

        let after = engine.evaluate(Some(&Pose::empty()));
        let (before_l, after_l) = (before.left.unwrap(), after.left.unwrap());
        assert_eq!(before_l.scores, after_l.scores);
        assert_eq!(after_l.table_a_score, before_l.table_a_score + 3);
    }
}
