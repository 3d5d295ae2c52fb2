use std::path::Path;

use image::RgbImage;

use crate::shared::mask::Mask;

/// Persists visualization artifacts of a detection.
pub trait ImageWriter: Send {
    /// Writes a color image (e.g. an annotated frame).
    fn write_rgb(&self, path: &Path, image: &RgbImage) -> Result<(), Box<dyn std::error::Error>>;

    /// Writes a single-channel grass mask.
    fn write_mask(&self, path: &Path, mask: &Mask) -> Result<(), Box<dyn std::error::Error>>;
}
