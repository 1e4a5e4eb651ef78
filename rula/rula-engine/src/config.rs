//! Evaluation config and engine parameters.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{RulaError, RulaResult};
use crate::posture::DEFAULT_TOLERANCE_DEG;

/// Worksheet inputs that cannot be measured from keypoints.
///
/// These six fields are the whole tunable surface of the table outcome.
/// Values are checked by [`validate`](Self::validate); the engine refuses
/// to start with an invalid config.
///
/// # Example
///
/// ```
/// use rula_engine::EvaluationConfig;
///
/// let config = EvaluationConfig::default()
///     .muscle_use_a(1)
///     .force_load_a(2);
/// assert!(config.validate().is_ok());
///
/// let bad = EvaluationConfig::default().legs(3);
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvaluationConfig {
    /// Wrist twist: 1 in mid-range, 2 at or near end of range.
    pub wrist_twist: u8,
    /// Legs: 1 supported and balanced, 2 not.
    pub legs: u8,
    /// +1 to the arm score for static or repetitive arm use.
    pub muscle_use_a: u8,
    /// +1 to the neck/trunk score for static or repetitive posture.
    pub muscle_use_b: u8,
    /// Arm load band: 0 (<2 kg), 1 (2-10 kg intermittent), 2 (heavier or repeated).
    pub force_load_a: u8,
    /// Neck/trunk load band, same scale as `force_load_a`.
    pub force_load_b: u8,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl EvaluationConfig {
    /// No twist, supported legs, no muscle use or load.
    pub const NEUTRAL: Self = Self {
        wrist_twist: 1,
        legs: 1,
        muscle_use_a: 0,
        muscle_use_b: 0,
        force_load_a: 0,
        force_load_b: 0,
    };

    /// Creates a config from all six worksheet inputs.
    ///
    /// # Errors
    ///
    /// Returns [`RulaError::InvalidConfig`] for the first field outside
    /// its domain.
    pub fn new(
        wrist_twist: u8,
        legs: u8,
        muscle_use_a: u8,
        muscle_use_b: u8,
        force_load_a: u8,
        force_load_b: u8,
    ) -> RulaResult<Self> {
        let config = Self {
            wrist_twist,
            legs,
            muscle_use_a,
            muscle_use_b,
            force_load_a,
            force_load_b,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks every field against its enumerated domain.
    ///
    /// # Errors
    ///
    /// Returns [`RulaError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> RulaResult<()> {
        let checks: [(&'static str, u8, u8, u8, &'static str); 6] = [
            ("wrist_twist", self.wrist_twist, 1, 2, "1 or 2"),
            ("legs", self.legs, 1, 2, "1 or 2"),
            ("muscle_use_a", self.muscle_use_a, 0, 1, "0 or 1"),
            ("muscle_use_b", self.muscle_use_b, 0, 1, "0 or 1"),
            ("force_load_a", self.force_load_a, 0, 2, "0, 1 or 2"),
            ("force_load_b", self.force_load_b, 0, 2, "0, 1 or 2"),
        ];
        for (field, value, min, max, expected) in checks {
            if !(min..=max).contains(&value) {
                return Err(RulaError::invalid_config(field, value, expected));
            }
        }
        Ok(())
    }

    /// Combined adjustment added to the Table A score.
    ///
    /// Saturates on unvalidated fields.
    #[must_use]
    pub const fn adjustment_a(&self) -> u8 {
        self.muscle_use_a.saturating_add(self.force_load_a)
    }

    /// Combined adjustment added to the Table B score.
    #[must_use]
    pub const fn adjustment_b(&self) -> u8 {
        self.muscle_use_b.saturating_add(self.force_load_b)
    }

    /// Set the wrist twist score.
    #[must_use]
    pub const fn wrist_twist(mut self, value: u8) -> Self {
        self.wrist_twist = value;
        self
    }

    /// Set the legs score.
    #[must_use]
    pub const fn legs(mut self, value: u8) -> Self {
        self.legs = value;
        self
    }

    /// Set the arm muscle use adjustment.
    #[must_use]
    pub const fn muscle_use_a(mut self, value: u8) -> Self {
        self.muscle_use_a = value;
        self
    }

    /// Set the neck/trunk muscle use adjustment.
    #[must_use]
    pub const fn muscle_use_b(mut self, value: u8) -> Self {
        self.muscle_use_b = value;
        self
    }

    /// Set the arm force/load band.
    #[must_use]
    pub const fn force_load_a(mut self, value: u8) -> Self {
        self.force_load_a = value;
        self
    }

    /// Set the neck/trunk force/load band.
    #[must_use]
    pub const fn force_load_b(mut self, value: u8) -> Self {
        self.force_load_b = value;
        self
    }
}

/// Runtime parameters of the engine.
///
/// None of these change the table outcome for a given set of angles;
/// they control how often and from what evidence angles are measured.
///
/// # Example
///
/// ```
/// use rula_engine::EngineParams;
///
/// let params = EngineParams::default();
/// assert_eq!(params.stride, 5);
///
/// let every_frame = EngineParams::every_frame();
/// assert_eq!(every_frame.stride, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineParams {
    /// Recompute on every `stride`-th frame; other frames reuse the
    /// last result.
    pub stride: u32,

    /// Minimum landmark confidence for a joint to be measured.
    pub min_confidence: f64,

    /// Neutral tolerance in degrees for the wrist, neck and trunk bands.
    pub tolerance_angle: f64,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            stride: 5,
            min_confidence: 0.5,
            tolerance_angle: DEFAULT_TOLERANCE_DEG,
        }
    }
}

impl EngineParams {
    /// Recompute on every frame.
    #[must_use]
    pub const fn every_frame() -> Self {
        Self {
            stride: 1,
            min_confidence: 0.5,
            tolerance_angle: DEFAULT_TOLERANCE_DEG,
        }
    }

    /// Set the recompute stride.
    #[must_use]
    pub const fn stride(mut self, stride: u32) -> Self {
        self.stride = stride;
        self
    }

    /// Set the confidence threshold.
    #[must_use]
    pub const fn min_confidence(mut self, threshold: f64) -> Self {
        self.min_confidence = threshold;
        self
    }

    /// Set the neutral tolerance.
    #[must_use]
    pub const fn tolerance_angle(mut self, degrees: f64) -> Self {
        self.tolerance_angle = degrees;
        self
    }

    /// Checks parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns [`RulaError::InvalidParams`] if the stride is zero, the
    /// confidence threshold is outside `[0, 1]`, or the tolerance is
    /// negative or not finite.
    pub fn validate(&self) -> RulaResult<()> {
        if self.stride == 0 {
            return Err(RulaError::invalid_params("stride must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(RulaError::invalid_params(format!(
                "min_confidence {} outside [0, 1]",
                self.min_confidence
            )));
        }
        if !self.tolerance_angle.is_finite() || self.tolerance_angle < 0.0 {
            return Err(RulaError::invalid_params(format!(
                "tolerance_angle {} must be finite and non-negative",
                self.tolerance_angle
            )));
        }
        Ok(())
    }
}
