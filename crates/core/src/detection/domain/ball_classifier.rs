use crate::shared::detection_config::DetectionConfig;
use crate::shared::mask::{is_grass_at, Mask};
use crate::shared::region::Region;

/// Outcome of the ball-likeness tests for one candidate region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Verdict {
    Accepted { centroid: (i32, i32) },
    /// Area outside `[min_area, max_area]`.
    AreaOutOfRange { area: f64 },
    /// Zero-mass border; no centroid exists.
    Degenerate,
    /// Centroid lands on grass (or outside the mask).
    CentroidOnGrass { centroid: (i32, i32) },
    AspectOutOfRange { centroid: (i32, i32), ratio: f64 },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted { .. })
    }

    /// Centroid of a candidate that got past the area test.
    pub fn centroid(&self) -> Option<(i32, i32)> {
        match *self {
            Verdict::Accepted { centroid }
            | Verdict::CentroidOnGrass { centroid }
            | Verdict::AspectOutOfRange { centroid, .. } => Some(centroid),
            Verdict::AreaOutOfRange { .. } | Verdict::Degenerate => None,
        }
    }
}

/// Area, background-location, and aspect-ratio tests, applied in that order
/// with short-circuit rejection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BallClassifier {
    min_area: f64,
    max_area: f64,
    aspect_ratio_tolerance: f64,
}

impl BallClassifier {
    pub fn new(min_area: f64, max_area: f64, aspect_ratio_tolerance: f64) -> Self {
        Self {
            min_area,
            max_area,
            aspect_ratio_tolerance,
        }
    }

    pub fn from_config(config: &DetectionConfig) -> Self {
        Self::new(
            config.min_area,
            config.max_area,
            config.aspect_ratio_tolerance,
        )
    }

    pub fn classify(&self, region: &Region, mask: &Mask) -> Verdict {
        let moments = region.moments();
        let area = moments.m00;
        if area < self.min_area || area > self.max_area {
            return Verdict::AreaOutOfRange { area };
        }

        let Some(centroid) = moments.centroid() else {
            return Verdict::Degenerate;
        };
        if is_grass_at(mask, centroid.0, centroid.1).unwrap_or(true) {
            return Verdict::CentroidOnGrass { centroid };
        }

        let Some(bbox) = region.bounding_box() else {
            return Verdict::Degenerate;
        };
        let ratio = bbox.aspect_ratio();
        if (ratio - 1.0).abs() > self.aspect_ratio_tolerance {
            return Verdict::AspectOutOfRange { centroid, ratio };
        }

        Verdict::Accepted { centroid }
    }
}

impl Default for BallClassifier {
    fn default() -> Self {
        Self::from_config(&DetectionConfig::default())
    }
}
