//! Error types for pose data.

use thiserror::Error;

/// Errors that can occur when building pose data.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PoseError {
    /// Wrong number of landmarks for the 33-point schema.
    #[error("landmark count mismatch: expected {expected}, got {actual}")]
    LandmarkCount {
        /// Expected landmark count.
        expected: usize,
        /// Actual landmark count.
        actual: usize,
    },

    /// A landmark coordinate is `NaN` or infinite.
    #[error("invalid coordinate at landmark {index}: {value}")]
    InvalidCoordinate {
        /// Schema index of the offending landmark.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// A landmark confidence lies outside `[0, 1]`.
    #[error("invalid confidence at landmark {index}: {value} not in [0, 1]")]
    InvalidConfidence {
        /// Schema index of the offending landmark.
        index: usize,
        /// The offending value.
        value: f64,
    },
}

impl PoseError {
    /// Creates a landmark count mismatch error.
    #[must_use]
    pub const fn landmark_count(expected: usize, actual: usize) -> Self {
        Self::LandmarkCount { expected, actual }
    }

    /// Creates an invalid coordinate error.
    #[must_use]
    pub const fn invalid_coordinate(index: usize, value: f64) -> Self {
        Self::InvalidCoordinate { index, value }
    }

    /// Creates an invalid confidence error.
    #[must_use]
    pub const fn invalid_confidence(index: usize, value: f64) -> Self {
        Self::InvalidConfidence { index, value }
    }
}

/// Result type for pose operations.
pub type Result<T> = std::result::Result<T, PoseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_landmark_count() {
        let err = PoseError::landmark_count(33, 32);
        let msg = format!("{err}");
        assert!(msg.contains("33"));
        assert!(msg.contains("32"));
    }

    #[test]
    fn error_invalid_coordinate() {
        let err = PoseError::invalid_coordinate(11, f64::NAN);
        let msg = format!("{err}");
        assert!(msg.contains("invalid coordinate"));
        assert!(msg.contains("11"));
    }

    #[test]
    fn error_invalid_confidence() {
        let err = PoseError::invalid_confidence(0, 1.5);
        let msg = format!("{err}");
        assert!(msg.contains("1.5"));
        assert!(msg.contains("[0, 1]"));
    }
}
