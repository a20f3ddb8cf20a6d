use std::path::Path;

use crate::api::NoiseError;

/// Owned `width x height` grid of RGB8 pixels, row-major and tightly
/// packed. Mutated pixel-by-pixel during evaluation, then handed to the
/// caller as a finished image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterBuffer {
    /// Fresh all-white canvas.
    pub fn blank(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize * 3;
        Self {
            width,
            height,
            data: vec![0xFF; size],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bytes per row.
    pub fn row_stride(&self) -> usize {
        self.width as usize * 3
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y as usize * self.width as usize + x as usize) * 3
    }

    pub fn put(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let i = self.index(x, y);
        self.data[i..i + 3].copy_from_slice(&rgb);
    }

    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        let i = self.index(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Raw pixel bytes, row-major RGB8.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Writes the buffer to `path` as a lossless RGB8 PNG.
    pub fn save_png(&self, path: &Path) -> Result<(), NoiseError> {
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_canvas_is_white() {
        let raster = RasterBuffer::blank(4, 3);
        assert_eq!(raster.data().len(), 4 * 3 * 3);
        assert!(raster.data().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn put_then_get_round_trips() {
        let mut raster = RasterBuffer::blank(5, 5);
        raster.put(2, 3, [10, 20, 30]);
        assert_eq!(raster.get(2, 3), [10, 20, 30]);
        assert_eq!(raster.get(3, 2), [255, 255, 255]);
    }

    #[test]
    fn stride_covers_a_full_row() {
        let raster = RasterBuffer::blank(7, 2);
        assert_eq!(raster.row_stride() * 2, raster.data().len());
    }

    #[test]
    fn save_rejects_a_bad_destination() {
        let raster = RasterBuffer::blank(2, 2);
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("no_such_dir").join("out.png");
        assert!(matches!(raster.save_png(&missing), Err(NoiseError::Io(_))));
    }

    #[test]
    fn save_writes_a_loadable_png() {
        let mut raster = RasterBuffer::blank(3, 2);
        raster.put(0, 0, [1, 2, 3]);
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.png");
        raster.save_png(&path).expect("save");

        let loaded = image::open(&path).expect("reload").to_rgb8();
        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(loaded.as_raw().as_slice(), raster.data());
    }
}
