//! Driving an engine from a pose source.

use pose_source::{PoseSource, SourceError};
use tracing::{info, warn};

use crate::engine::RulaEngine;
use crate::error::{RulaError, RulaResult};
use crate::result::{Assessment, EvaluationStatus};

/// Pulls poses from a source and feeds them to one engine.
///
/// A frame the source cannot normalize is logged and scored as a frame
/// with no body, so cadence stays aligned with the source's frame count.
///
/// # Example
///
/// ```
/// use pose_source::CameraPoseSource;
/// use rula_engine::{AssessmentSession, RulaEngine};
///
/// let frames = vec![Some(vec![[0.0, 0.0, 0.0, 1.0]; 33]); 3];
/// let mut session = AssessmentSession::new(CameraPoseSource::new(frames), RulaEngine::with_defaults());
///
/// let last = session.run(10).unwrap();
/// assert_eq!(last.frame_index, 2);
/// assert_eq!(session.frames_processed(), 3);
/// ```
#[derive(Debug)]
pub struct AssessmentSession<S> {
    source: S,
    engine: RulaEngine,
    last: Option<Assessment>,
    frames_processed: u64,
}

impl<S: PoseSource> AssessmentSession<S> {
    /// Creates a session over `source`.
    pub const fn new(source: S, engine: RulaEngine) -> Self {
        Self {
            source,
            engine,
            last: None,
            frames_processed: 0,
        }
    }

    /// Consumes one frame from the source.
    ///
    /// # Errors
    ///
    /// Returns [`RulaError::Source`] wrapping [`SourceError::Closed`] once
    /// the source has ended. Per-frame source errors are not returned.
    pub fn step(&mut self) -> RulaResult<Assessment> {
        let pose = match self.source.next_pose() {
            Ok(pose) => pose,
            Err(SourceError::Closed) => return Err(RulaError::Source(SourceError::Closed)),
            Err(err) => {
                warn!(frame = self.frames_processed, error = %err, "Skipping unusable frame");
                None
            }
        };

        let assessment = self.engine.evaluate(pose.as_ref());
        if assessment.status == EvaluationStatus::MissingPose {
            info!(frame = assessment.frame_index, "No body detected, keeping last results");
        }

        self.frames_processed += 1;
        self.last = Some(assessment);
        Ok(assessment)
    }

    /// Steps up to `max_frames` times or until the source closes.
    ///
    /// Returns the last assessment, or `None` if no frame was consumed.
    pub fn run(&mut self, max_frames: usize) -> Option<Assessment> {
        for _ in 0..max_frames {
            if let Err(err) = self.step() {
                info!(frames = self.frames_processed, %err, "Pose source finished");
                break;
            }
        }
        self.last
    }

    /// Last assessment produced.
    #[must_use]
    pub const fn last(&self) -> Option<&Assessment> {
        self.last.as_ref()
    }

    /// Frames consumed so far.
    #[must_use]
    pub const fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    /// The engine driven by this session.
    #[must_use]
    pub const fn engine(&self) -> &RulaEngine {
        &self.engine
    }

    /// Splits the session back into its source and engine.
    pub fn into_parts(self) -> (S, RulaEngine) {
        (self.source, self.engine)
    }
}
