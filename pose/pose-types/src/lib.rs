//! Hardware-agnostic body keypoint types for Ergoscope.
//!
//! This crate provides the common skeleton representation that every
//! keypoint source is normalized into before assessment:
//! - Camera pose estimators (33 keypoints with visibility)
//! - Depth-sensor body trackers (remapped joints with confidence levels)
//! - Recorded sessions replayed from disk
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **no math or runtime dependencies**. It can be
//! used in:
//! - Real-time assessment engines
//! - Offline analysis tools
//! - Recording and replay utilities
//!
//! # Types
//!
//! - [`Landmark`] - A single tracked point with confidence
//! - [`Pose`] - Exactly 33 landmarks in the common schema
//! - [`PoseLandmark`] - Name-to-index mapping of the schema
//! - [`Side`] - Left or right half of the body
//!
//! # Coordinates
//!
//! Landmark positions use image-style axes: `+x` to the subject's left in
//! the camera image, `+y` pointing **down**, `+z` away from the camera.
//! Units are meters for world-coordinate sources.
//!
//! # Example
//!
//! ```
//! use pose_types::{Landmark, Pose, PoseLandmark};
//!
//! let mut landmarks = [Landmark::missing(); 33];
//! landmarks[PoseLandmark::LeftShoulder.index()] = Landmark::new(0.2, -0.5, 0.0, 0.9);
//!
//! let pose = Pose::new(landmarks);
//! assert!(pose.landmark(PoseLandmark::LeftShoulder).is_confident(0.5));
//! assert!(!pose.landmark(PoseLandmark::Nose).is_confident(0.5));
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

mod error;
mod landmark;
mod pose;
mod schema;

pub use error::{PoseError, Result};
pub use landmark::Landmark;
pub use pose::Pose;
pub use schema::{LANDMARK_COUNT, PoseLandmark, Side};
