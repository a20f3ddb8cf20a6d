use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use tracing::debug;

use crate::api::{Generation, MapParams, NoiseError};
use crate::permutation::PermutationTable;
use crate::raster::RasterBuffer;
use crate::sampling;

/// Drives one generation run: builds the permutation table once, fills
/// every pixel, and reports how long the fill took.
#[derive(Debug, Clone)]
pub struct Generator {
    params: MapParams,
    output_path: Option<PathBuf>,
}

impl Generator {
    pub fn new(params: MapParams) -> Result<Self, NoiseError> {
        params.validate()?;
        Ok(Self {
            params,
            output_path: None,
        })
    }

    pub fn params(&self) -> &MapParams {
        &self.params
    }

    pub fn set_output_path(&mut self, path: impl Into<PathBuf>) {
        self.output_path = Some(path.into());
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    /// Evaluates the fractal field over the whole canvas.
    pub fn generate(&self) -> Generation {
        let MapParams {
            width,
            height,
            octaves,
            seed,
        } = self.params.clone();
        let start = Instant::now();

        // The gradient field is keyed off the height alone; wider images
        // reuse the same columns past `height` pixels.
        let border = height as usize;
        let table = PermutationTable::build(border, seed);
        debug!(border, ?seed, "permutation table built");

        let mut raster = RasterBuffer::blank(width, height);
        let stride = raster.row_stride();

        // Each pixel depends only on its own coordinates and the read-only
        // table, so rows can be filled on worker threads with disjoint
        // writes.
        raster
            .data_mut()
            .par_chunks_mut(stride)
            .enumerate()
            .for_each(|(y, row)| {
                for x in 0..width as usize {
                    let sum = sampling::fractal(x as f64, y as f64, octaves, &table, border);
                    row[x * 3..x * 3 + 3].copy_from_slice(&sampling::shade(sum));
                }
            });

        let elapsed = start.elapsed();
        debug!(width, height, octaves, ?elapsed, "raster filled");
        Generation { raster, elapsed }
    }

    /// Writes `raster` as a PNG to the configured destination.
    ///
    /// Fails with [`NoiseError::MissingDestination`] when no path has been
    /// set; the raster is untouched either way and the save can be retried
    /// after configuring one.
    pub fn save(&self, raster: &RasterBuffer) -> Result<PathBuf, NoiseError> {
        let path = self
            .output_path
            .as_ref()
            .ok_or(NoiseError::MissingDestination)?;
        raster.save_png(path)?;
        Ok(path.clone())
    }
}
