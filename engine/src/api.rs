use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::raster::RasterBuffer;

#[derive(Debug, Error)]
pub enum NoiseError {
    #[error("invalid {field}: must be a positive integer")]
    InvalidParameter { field: &'static str },
    #[error("no destination path set")]
    MissingDestination,
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode image: {0}")]
    Image(image::ImageError),
}

// Writing a PNG can fail on the encoder or on the file itself; split the
// two so callers can tell a bad destination from a bad buffer.
impl From<image::ImageError> for NoiseError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(io) => NoiseError::Io(io),
            other => NoiseError::Image(other),
        }
    }
}

/// Inputs of one generation run. Frozen once handed to a [`Generator`].
///
/// `seed: None` leaves the permutation shuffle on ambient entropy, which
/// makes the run intentionally non-reproducible.
///
/// [`Generator`]: crate::generator::Generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapParams {
    pub width: u32,
    pub height: u32,
    pub octaves: u32,
    pub seed: Option<u64>,
}

impl Default for MapParams {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            octaves: 1,
            seed: None,
        }
    }
}

impl MapParams {
    /// Rejects dimensions or octave counts of zero.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.width == 0 {
            return Err(NoiseError::InvalidParameter { field: "width" });
        }
        if self.height == 0 {
            return Err(NoiseError::InvalidParameter { field: "height" });
        }
        if self.octaves == 0 {
            return Err(NoiseError::InvalidParameter { field: "octaves" });
        }
        Ok(())
    }
}

/// A finished raster plus the wall-clock time the fill took.
#[derive(Debug)]
pub struct Generation {
    pub raster: RasterBuffer,
    pub elapsed: Duration,
}
