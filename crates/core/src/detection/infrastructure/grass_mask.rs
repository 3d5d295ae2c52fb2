use image::Luma;
use imageproc::distance_transform::Norm;
use imageproc::morphology::{dilate, erode};

use crate::detection::infrastructure::gaussian::separable_gaussian_blur;
use crate::detection::infrastructure::hsv::{in_range, rgb_to_hsv};
use crate::shared::constants::{GRASS, NON_GRASS};
use crate::shared::detection_config::DetectionConfig;
use crate::shared::frame::Frame;
use crate::shared::mask::Mask;

/// Builds the binary grass mask of a frame.
///
/// blur → HSV → green band threshold → erode → dilate. Erosion and dilation
/// by `iterations` passes of a 3x3 square are a single L∞ morphology step of
/// radius `iterations`.
#[derive(Clone, Debug)]
pub struct GrassMaskBuilder {
    blur_kernel: usize,
    lower: [u8; 3],
    upper: [u8; 3],
    iterations: u8,
}

impl GrassMaskBuilder {
    pub fn new(blur_kernel: usize, lower: [u8; 3], upper: [u8; 3], iterations: u8) -> Self {
        Self {
            blur_kernel,
            lower,
            upper,
            iterations,
        }
    }

    pub fn from_config(config: &DetectionConfig) -> Self {
        Self::new(
            config.blur_kernel,
            config.green_lower,
            config.green_upper,
            config.morph_iterations,
        )
    }

    pub fn build(&self, frame: &Frame) -> Mask {
        let width = frame.width() as usize;
        let height = frame.height() as usize;
        let blurred = separable_gaussian_blur(
            frame.data(),
            width,
            height,
            Frame::CHANNELS,
            self.blur_kernel,
        );

        let mut mask = Mask::new(frame.width(), frame.height());
        for (pixel, rgb) in mask
            .pixels_mut()
            .zip(blurred.chunks_exact(Frame::CHANNELS))
        {
            let hsv = rgb_to_hsv(rgb[0], rgb[1], rgb[2]);
            let value = if in_range(hsv, self.lower, self.upper) {
                GRASS
            } else {
                NON_GRASS
            };
            *pixel = Luma([value]);
        }

        if self.iterations == 0 {
            return mask;
        }
        let eroded = erode(&mask, Norm::LInf, self.iterations);
        dilate(&eroded, Norm::LInf, self.iterations)
    }
}

impl Default for GrassMaskBuilder {
    fn default() -> Self {
        Self::from_config(&DetectionConfig::default())
    }
}
