//! Deterministic 2-D gradient noise rasterizer.
//!
//! A seeded permutation table drives a periodic gradient field; fractal
//! accumulation layers octaves of it per pixel and the result is shaded
//! into an RGB raster ready to be written out as a PNG.

pub mod api;
pub mod generator;
pub mod permutation;
pub mod raster;
pub mod sampling;

pub use api::{Generation, MapParams, NoiseError};
pub use generator::Generator;
pub use permutation::PermutationTable;
pub use raster::RasterBuffer;
