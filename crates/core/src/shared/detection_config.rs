use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::constants::{
    DEFAULT_ASPECT_RATIO_TOLERANCE, DEFAULT_BLUR_KERNEL, DEFAULT_GREEN_LOWER, DEFAULT_GREEN_UPPER,
    DEFAULT_MAX_AREA, DEFAULT_MIN_AREA, DEFAULT_MORPH_ITERATIONS,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunable thresholds of the grass mask and the ball-likeness tests.
///
/// The defaults are calibrated for one broadcast camera setup. Any field
/// missing from a config file keeps its default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Gaussian kernel size (odd).
    pub blur_kernel: usize,
    /// Inclusive HSV lower bound of grass.
    pub green_lower: [u8; 3],
    /// Inclusive HSV upper bound of grass.
    pub green_upper: [u8; 3],
    /// Erode/dilate passes with a 3x3 element.
    pub morph_iterations: u8,
    pub min_area: f64,
    pub max_area: f64,
    pub aspect_ratio_tolerance: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            blur_kernel: DEFAULT_BLUR_KERNEL,
            green_lower: DEFAULT_GREEN_LOWER,
            green_upper: DEFAULT_GREEN_UPPER,
            morph_iterations: DEFAULT_MORPH_ITERATIONS,
            min_area: DEFAULT_MIN_AREA,
            max_area: DEFAULT_MAX_AREA,
            aspect_ratio_tolerance: DEFAULT_ASPECT_RATIO_TOLERANCE,
        }
    }
}

impl DetectionConfig {
    /// Reads a JSON config file and validates it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.blur_kernel == 0 || self.blur_kernel % 2 == 0 {
            return Err(ConfigError::Invalid(format!(
                "blur kernel must be a positive odd integer, got {}",
                self.blur_kernel
            )));
        }
        if let Some(channel) = (0..3).find(|&c| self.green_lower[c] > self.green_upper[c]) {
            return Err(ConfigError::Invalid(format!(
                "green band lower bound exceeds upper bound in channel {channel}"
            )));
        }
        if !(self.min_area >= 0.0 && self.min_area <= self.max_area) {
            return Err(ConfigError::Invalid(format!(
                "area bounds must satisfy 0 <= min <= max, got [{}, {}]",
                self.min_area, self.max_area
            )));
        }
        if !(self.aspect_ratio_tolerance >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "aspect ratio tolerance must be non-negative, got {}",
                self.aspect_ratio_tolerance
            )));
        }
        Ok(())
    }
}
