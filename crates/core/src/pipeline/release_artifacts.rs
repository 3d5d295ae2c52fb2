use std::path::PathBuf;

use crate::detection::domain::ball_detector::Detection;
use crate::detection::infrastructure::annotator::annotate;
use crate::shared::frame::Frame;
use crate::video::domain::image_writer::ImageWriter;

/// Saves the mask and the annotated frame of a positive detection.
///
/// Missing output directories are created by the [`ImageWriter`].
pub struct ReleaseArtifacts {
    out_dir: PathBuf,
    writer: Box<dyn ImageWriter>,
}

impl ReleaseArtifacts {
    pub fn new(out_dir: impl Into<PathBuf>, writer: Box<dyn ImageWriter>) -> Self {
        Self {
            out_dir: out_dir.into(),
            writer,
        }
    }

    pub fn mask_path(&self, video_name: &str, frame_number: usize) -> PathBuf {
        self.out_dir
            .join(format!("{video_name}_{frame_number}_mask.jpg"))
    }

    pub fn contour_path(&self, video_name: &str, frame_number: usize) -> PathBuf {
        self.out_dir
            .join(format!("{video_name}_{frame_number}_mask_contour.jpg"))
    }

    pub fn save(
        &self,
        video_name: &str,
        frame_number: usize,
        frame: &Frame,
        detection: &Detection,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.writer
            .write_mask(&self.mask_path(video_name, frame_number), &detection.mask)?;
        let annotated = annotate(frame, detection);
        self.writer
            .write_rgb(&self.contour_path(video_name, frame_number), &annotated)?;
        Ok(())
    }
}
