//! Real-time RULA (Rapid Upper Limb Assessment) scoring from body keypoints.
//!
//! This crate turns a stream of [`Pose`] values into per-side ergonomic
//! risk grades:
//!
//! 1. **Measure** five joint angles per side (upper arm, lower arm, wrist,
//!    neck, trunk), gated on landmark confidence
//! 2. **Band** each angle into a posture sub-score
//! 3. **Combine** sub-scores through RULA tables A, B and C, adding the
//!    muscle-use and force-load adjustments of an [`EvaluationConfig`]
//! 4. **Grade** the final 1-7 score into a [`RiskCategory`]
//!
//! A joint that cannot be measured this frame (low confidence or
//! degenerate geometry) keeps its previous angle and sub-score instead of
//! failing, so a noisy frame cannot make the grade flicker.
//!
//! # Cadence
//!
//! [`RulaEngine`] measures every `stride`-th frame (default 5) and returns
//! the previous results on the frames in between. Frames with no body keep
//! the previous results too. The first frame is always measured.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **no I/O**. Every call is synchronous and
//! bounded. It can be used in:
//! - Live capture loops (via [`AssessmentSession`])
//! - Batch scoring of recorded poses
//! - Services that score poses produced elsewhere
//!
//! # Example
//!
//! ```
//! use pose_types::Pose;
//! use rula_engine::{EngineParams, EvaluationConfig, RiskCategory, RulaEngine};
//!
//! let config = EvaluationConfig::default().muscle_use_a(1);
//! let mut engine = RulaEngine::new(config, EngineParams::every_frame()).unwrap();
//!
//! // Untracked pose: every joint falls back to the conservative default.
//! let assessment = engine.evaluate(Some(&Pose::empty()));
//! let left = assessment.left.unwrap();
//! assert_eq!(left.final_score, 3);
//! assert_eq!(left.risk_category, RiskCategory::Low);
//! ```
//!
//! # Quality Standards
//!
//! - Zero clippy/doc warnings
//! - Zero `unwrap`/`expect` in library code

// Safety: Deny unwrap/expect in library code. Tests may use them (workspace warns).
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod angles;
mod combine;
mod config;
mod engine;
mod error;
mod extract;
pub mod geometry;
mod posture;
mod result;
mod session;
mod state;
pub mod tables;

pub use angles::{AngleSet, Joint, JointAngle, JointStatus};
pub use combine::{TableScores, combine};
pub use config::{EngineParams, EvaluationConfig};
pub use engine::RulaEngine;
pub use error::{RulaError, RulaResult};
pub use extract::{extract_side, measure_side};
pub use posture::{
    DEFAULT_TOLERANCE_DEG, FALLBACK_SCORE, PostureScores, lower_arm_score, neck_score,
    score_domain, trunk_score, upper_arm_score, wrist_score,
};
pub use result::{Assessment, EvaluationStatus, RiskCategory, SideScoreResult};
pub use session::AssessmentSession;
pub use state::{EngineState, SideState};

pub use pose_types::{Pose, Side};
