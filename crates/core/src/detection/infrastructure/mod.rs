pub mod annotator;
pub mod contour_extractor;
mod gaussian;
pub mod grass_contour_detector;
pub mod grass_mask;
mod hsv;
