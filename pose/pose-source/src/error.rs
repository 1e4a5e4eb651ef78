//! Error types for skeleton providers.

use pose_types::PoseError;
use thiserror::Error;

/// Errors that can occur while acquiring a pose.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SourceError {
    /// The underlying frame stream has ended.
    #[error("pose source closed")]
    Closed,

    /// A raw frame could not be normalized into the common schema.
    #[error("malformed frame: {0}")]
    MalformedFrame(String),

    /// The normalized pose failed validation.
    #[error(transparent)]
    Pose(#[from] PoseError),
}

impl SourceError {
    /// Creates a malformed frame error.
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedFrame(reason.into())
    }

    /// Returns true if the stream has ended.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

/// Result type for skeleton providers.
pub type Result<T> = std::result::Result<T, SourceError>;
