//! Skeleton providers for Ergoscope.
//!
//! Every keypoint source is reduced to a single capability: produce the
//! normalized [`Pose`] for this cycle. Consumers only ever see that
//! abstraction and never branch on the hardware behind it.
//!
//! # Providers
//!
//! - [`CameraPoseSource`] - 33-point camera pose estimator output
//! - [`DepthPoseSource`] - depth-sensor body tracker skeletons, remapped
//!   into the common schema via [`DEPTH_JOINT_MAP`]
//!
//! Device acquisition (opening cameras, running trackers) happens outside
//! this crate; providers wrap any iterator of raw frames that acquisition
//! produces.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **no device dependencies**. It can be used in:
//! - Live capture loops (fed by a device thread)
//! - Replay of recorded frames
//! - Tests with synthetic skeletons
//!
//! # Example
//!
//! ```
//! use pose_source::{CameraPoseSource, PoseSource};
//!
//! let frames = vec![Some(vec![[0.0, 0.0, 0.0, 0.9]; 33]), None];
//! let mut source = CameraPoseSource::new(frames);
//!
//! assert!(source.next_pose().unwrap().is_some()); // body detected
//! assert!(source.next_pose().unwrap().is_none()); // nobody in frame
//! assert!(source.next_pose().is_err()); // stream closed
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

mod camera;
mod depth;
mod error;
mod source;

pub use camera::{CameraPoseSource, EstimatorFrame, pose_from_estimator};
pub use depth::{
    BodySkeleton, DEPTH_JOINT_COUNT, DEPTH_JOINT_MAP, DepthJoint, DepthPoseSource, TrackedJoint,
    pose_from_skeleton,
};
pub use error::{Result, SourceError};
pub use source::PoseSource;

pub use pose_types::Pose;
