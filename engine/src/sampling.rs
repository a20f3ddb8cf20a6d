//! Scalar noise evaluation: single-octave gradient noise, fractal
//! accumulation, and the value-to-color mapping.

use crate::permutation::PermutationTable;

/// The four directions a gradient selector can map to, indexed by
/// `selector % 4`.
const GRADIENTS: [(f64, f64); 4] = [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];

/// Frequency of the first octave; each further octave doubles it.
pub const BASE_FREQUENCY: f64 = 0.025;

/// Quintic ease curve. Flat at 0 and 1 so cell borders stay seamless.
#[inline]
pub fn fade(t: f64) -> f64 {
    ((6.0 * t - 15.0) * t + 10.0) * t * t * t
}

#[inline]
pub fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

#[inline]
fn gradient(selector: usize) -> (f64, f64) {
    GRADIENTS[selector % GRADIENTS.len()]
}

#[inline]
fn dot(a: (f64, f64), b: (f64, f64)) -> f64 {
    a.0 * b.0 + a.1 * b.1
}

/// Single-octave gradient noise at `(x, y)`, periodic across `border`
/// grid cells. Nominally in `[-1, 1]`; extreme gradient alignments can
/// overshoot slightly and are passed through unclamped.
pub fn noise_2d(x: f64, y: f64, table: &PermutationTable, border: usize) -> f64 {
    debug_assert_eq!(border, table.border());
    let grid_x = (x.floor() as usize) % border;
    let grid_y = (y.floor() as usize) % border;
    let frac_x = x - x.floor();
    let frac_y = y - y.floor();

    // Offsets from the sample point to the four corners of its unit cell.
    let top_left_offset = (frac_x, frac_y - 1.0);
    let top_right_offset = (frac_x - 1.0, frac_y - 1.0);
    let bottom_left_offset = (frac_x, frac_y);
    let bottom_right_offset = (frac_x - 1.0, frac_y);

    // Doubly-indexed selector lookup per corner.
    let top_left = table.get(table.get(grid_x) + grid_y + 1);
    let top_right = table.get(table.get(grid_x + 1) + grid_y + 1);
    let bottom_left = table.get(table.get(grid_x) + grid_y);
    let bottom_right = table.get(table.get(grid_x + 1) + grid_y);

    let dot_top_left = dot(gradient(top_left), top_left_offset);
    let dot_top_right = dot(gradient(top_right), top_right_offset);
    let dot_bottom_left = dot(gradient(bottom_left), bottom_left_offset);
    let dot_bottom_right = dot(gradient(bottom_right), bottom_right_offset);

    let u = fade(frac_x);
    let v = fade(frac_y);

    lerp(
        u,
        lerp(v, dot_bottom_left, dot_top_left),
        lerp(v, dot_bottom_right, dot_top_right),
    )
}

/// Multi-octave accumulation at pixel `(x, y)`: every octave halves the
/// amplitude and doubles the frequency of the previous one.
pub fn fractal(x: f64, y: f64, octaves: u32, table: &PermutationTable, border: usize) -> f64 {
    let mut sum = 0.0;
    let mut motion = 1.0;
    let mut frequency = BASE_FREQUENCY;

    for _ in 0..octaves {
        sum += motion * noise_2d(x * frequency, y * frequency, table, border);
        motion *= 0.5;
        frequency *= 2.0;
    }

    sum
}

/// Maps an accumulated noise value to its RGB color.
pub fn shade(sum: f64) -> [u8; 3] {
    shade_level(((sum + 1.0) * 0.5 * 255.0).round())
}

/// Band mapping over the 0-255 gray level.
///
/// The band thresholds compare against the already-scaled level, so only
/// level 0 lands in the water band and the mid band is out of reach. Kept
/// bit-for-bit: a given seed must keep producing the image it always has.
pub fn shade_level(level: f64) -> [u8; 3] {
    if level < 0.5 {
        [0, 0, (2.0 * level) as u8]
    } else if level < 0.9 {
        [0, level as u8, (level * 0.5).round() as u8]
    } else {
        [level as u8, level as u8, level as u8]
    }
}
