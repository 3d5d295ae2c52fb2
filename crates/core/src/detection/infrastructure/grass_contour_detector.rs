use crate::detection::domain::ball_classifier::BallClassifier;
use crate::detection::domain::ball_detector::{BallDetector, Detection};
use crate::detection::infrastructure::contour_extractor::extract_regions;
use crate::detection::infrastructure::grass_mask::GrassMaskBuilder;
use crate::shared::detection_config::DetectionConfig;
use crate::shared::frame::Frame;

/// Detects a released ball as a small, roughly square non-grass blob.
///
/// Pure per-frame pipeline: grass mask → borders → ball-likeness tests.
/// Every border is evaluated, so one frame may report several balls.
#[derive(Clone, Debug, Default)]
pub struct GrassContourDetector {
    mask_builder: GrassMaskBuilder,
    classifier: BallClassifier,
}

impl GrassContourDetector {
    pub fn new(mask_builder: GrassMaskBuilder, classifier: BallClassifier) -> Self {
        Self {
            mask_builder,
            classifier,
        }
    }

    pub fn from_config(config: &DetectionConfig) -> Self {
        Self::new(
            GrassMaskBuilder::from_config(config),
            BallClassifier::from_config(config),
        )
    }
}

impl BallDetector for GrassContourDetector {
    fn detect(&self, frame: &Frame) -> Detection {
        let mask = self.mask_builder.build(frame);
        let mut accepted = Vec::new();
        let mut centroids = Vec::new();

        for region in extract_regions(&mask) {
            let verdict = self.classifier.classify(&region, &mask);
            if let Some(centroid) = verdict.centroid() {
                centroids.push(centroid);
            }
            if verdict.is_accepted() {
                log::debug!(
                    "Frame {}: ball candidate at {:?} (area {:.1})",
                    frame.index(),
                    verdict.centroid(),
                    region.area()
                );
                accepted.push(region);
            }
        }

        Detection {
            mask,
            accepted,
            centroids,
        }
    }
}
