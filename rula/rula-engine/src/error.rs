//! Error types for the assessment engine.
//!
//! Only construction-time problems are errors. Unreliable geometry, low
//! confidence, and missing poses are routing decisions recorded on the
//! results, never failures.

use pose_source::SourceError;
use thiserror::Error;

/// Errors that can occur in the assessment engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RulaError {
    /// An evaluation config field is outside its enumerated domain.
    #[error("invalid config: {field} = {value}, expected {expected}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: u8,
        /// Human-readable allowed domain.
        expected: &'static str,
    },

    /// Invalid engine parameters.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// A posture sub-score is outside its table's domain.
    #[error("{joint} score {score} outside table domain [{min}, {max}]")]
    ScoreOutOfRange {
        /// Joint the score belongs to.
        joint: &'static str,
        /// The rejected score.
        score: u8,
        /// Smallest valid score.
        min: u8,
        /// Largest valid score.
        max: u8,
    },

    /// The pose source failed.
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl RulaError {
    /// Creates an invalid config error.
    #[must_use]
    pub const fn invalid_config(field: &'static str, value: u8, expected: &'static str) -> Self {
        Self::InvalidConfig {
            field,
            value,
            expected,
        }
    }

    /// Creates an invalid params error.
    #[must_use]
    pub fn invalid_params(details: impl Into<String>) -> Self {
        Self::InvalidParams(details.into())
    }

    /// Creates a score out of range error.
    #[must_use]
    pub const fn score_out_of_range(joint: &'static str, score: u8, min: u8, max: u8) -> Self {
        Self::ScoreOutOfRange {
            joint,
            score,
            min,
            max,
        }
    }
}

/// Result type alias for engine operations.
pub type RulaResult<T> = Result<T, RulaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RulaError::invalid_config("legs", 3, "1 or 2");
        let msg = format!("{err}");
        assert!(msg.contains("legs = 3"));
        assert!(msg.contains("1 or 2"));

        let err = RulaError::invalid_params("stride must be at least 1");
        assert!(format!("{err}").contains("stride"));

        let err = RulaError::score_out_of_range("wrist", 5, 1, 4);
        assert!(format!("{err}").contains("wrist score 5"));
    }

    #[test]
    fn test_source_error_is_transparent() {
        let err: RulaError = SourceError::Closed.into();
        assert_eq!(err.to_string(), SourceError::Closed.to_string());
    }
}
