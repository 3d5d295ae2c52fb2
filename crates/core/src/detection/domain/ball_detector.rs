use crate::shared::frame::Frame;
use crate::shared::mask::Mask;
use crate::shared::region::Region;

/// Result of classifying one frame.
#[derive(Clone, Debug)]
pub struct Detection {
    /// Grass mask the candidates were extracted from.
    pub mask: Mask,
    /// Regions that passed every ball-likeness test, in extraction order.
    pub accepted: Vec<Region>,
    /// Centroids of every candidate that passed the area test.
    pub centroids: Vec<(i32, i32)>,
}

impl Detection {
    pub fn found(&self) -> bool {
        !self.accepted.is_empty()
    }
}

/// Domain interface for per-frame released-ball detection.
///
/// Implementations must be stateless across frames: a frame's result
/// depends on that frame alone.
pub trait BallDetector: Send {
    fn detect(&self, frame: &Frame) -> Detection;
}
