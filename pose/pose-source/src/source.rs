//! The skeleton-source capability.

use pose_types::Pose;

use crate::error::Result;

/// Anything that can produce one normalized pose per cycle.
///
/// Implementations own their hardware-specific conversion; callers only
/// see [`Pose`] values in the common 33-point schema.
///
/// # Contract
///
/// - `Ok(Some(pose))` - a body was tracked this cycle
/// - `Ok(None)` - the frame arrived but no body was detected
/// - `Err(SourceError::Closed)` - the stream has ended
/// - any other `Err` - this frame could not be normalized; the next call
///   may still succeed
///
/// [`SourceError::Closed`]: crate::SourceError::Closed
pub trait PoseSource {
    /// Produces the normalized pose for this cycle.
    ///
    /// # Errors
    ///
    /// See the trait-level contract.
    fn next_pose(&mut self) -> Result<Option<Pose>>;
}

impl<S: PoseSource + ?Sized> PoseSource for Box<S> {
    fn next_pose(&mut self) -> Result<Option<Pose>> {
        (**self).next_pose()
    }
}

impl<S: PoseSource + ?Sized> PoseSource for &mut S {
    fn next_pose(&mut self) -> Result<Option<Pose>> {
        (**self).next_pose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;

    struct Fixed(usize);

    impl PoseSource for Fixed {
        fn next_pose(&mut self) -> Result<Option<Pose>> {
            if self.0 == 0 {
                return Err(SourceError::Closed);
            }
            self.0 -= 1;
            Ok(Some(Pose::empty()))
        }
    }

    #[test]
    fn boxed_source_delegates() {
        let mut source: Box<dyn PoseSource> = Box::new(Fixed(1));
        assert!(source.next_pose().unwrap().is_some());
        assert!(source.next_pose().unwrap_err().is_closed());
    }

    #[test]
    fn borrowed_source_delegates() {
        let mut inner = Fixed(2);
        {
            let mut borrowed = &mut inner;
            assert!(borrowed.next_pose().unwrap().is_some());
        }
        assert!(inner.next_pose().unwrap().is_some());
        assert!(inner.next_pose().is_err());
    }
}
