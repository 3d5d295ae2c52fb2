use std::path::Path;

use image::RgbImage;

use crate::shared::mask::Mask;
use crate::video::domain::image_writer::ImageWriter;

/// Writes artifacts with the `image` crate; format follows the file extension.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

impl ImageWriter for ImageFileWriter {
    fn write_rgb(&self, path: &Path, image: &RgbImage) -> Result<(), Box<dyn std::error::Error>> {
        ensure_parent(path)?;
        image.save(path)?;
        Ok(())
    }

    fn write_mask(&self, path: &Path, mask: &Mask) -> Result<(), Box<dyn std::error::Error>> {
        ensure_parent(path)?;
        mask.save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb};

    #[test]
    fn test_write_rgb_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frames/nested/out.jpg");
        let img = RgbImage::from_pixel(40, 30, Rgb([50, 100, 200]));
        ImageFileWriter::new().write_rgb(&path, &img).unwrap();
        assert!(path.exists());

        let back = image::open(&path).unwrap();
        assert_eq!((back.width(), back.height()), (40, 30));
    }

    #[test]
    fn test_write_mask_roundtrip_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mask.png");
        let mut mask = Mask::from_pixel(20, 10, Luma([0]));
        mask.put_pixel(3, 4, Luma([255]));
        ImageFileWriter::new().write_mask(&path, &mask).unwrap();

        let back = image::open(&path).unwrap().to_luma8();
        assert_eq!(back.get_pixel(3, 4).0, [255]);
        assert_eq!(back.get_pixel(0, 0).0, [0]);
    }

    #[test]
    fn test_write_mask_as_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mask.jpg");
        ImageFileWriter::new()
            .write_mask(&path, &Mask::new(16, 16))
            .unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_write_unwritable_path_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();
        let img = RgbImage::new(4, 4);
        assert!(ImageFileWriter::new()
            .write_rgb(&blocker.join("out.jpg"), &img)
            .is_err());
    }
}
