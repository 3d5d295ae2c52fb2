/// Mask value for pixels inside the green (grass) band.
pub const GRASS: u8 = 255;

/// Mask value for every pixel outside the green band.
pub const NON_GRASS: u8 = 0;

/// Extension of the videos picked up by a batch scan.
pub const VIDEO_EXTENSION: &str = "mp4";

pub const DEFAULT_BLUR_KERNEL: usize = 11;

/// Lower/upper HSV bounds of grass on the 8-bit scale (H in 0..180, S and V in 0..=255).
pub const DEFAULT_GREEN_LOWER: [u8; 3] = [29, 86, 6];
pub const DEFAULT_GREEN_UPPER: [u8; 3] = [64, 255, 255];

pub const DEFAULT_MORPH_ITERATIONS: u8 = 2;

/// Ball area bounds in pixels, calibrated for the broadcast camera setup.
pub const DEFAULT_MIN_AREA: f64 = 500.0;
pub const DEFAULT_MAX_AREA: f64 = 1000.0;

/// Maximum distance of the bounding-box aspect ratio from 1.0.
pub const DEFAULT_ASPECT_RATIO_TOLERANCE: f64 = 0.5;
