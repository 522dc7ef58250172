use crate::DecodeError;

/// Owned interleaved 8-bit RGB raster, row-major, `width * height * 3` bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbRaster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl RgbRaster {
    /// Allocate a zeroed raster, surfacing allocation failure instead of
    /// aborting on oversized dimensions
    pub(crate) fn new(width: usize, height: usize) -> Result<Self, DecodeError> {
        let size = width.saturating_mul(height).saturating_mul(3);

        let mut data = Vec::new();
        data.try_reserve_exact(size)
            .map_err(|_| DecodeError::OutOfMemory { bytes: size })?;
        data.resize(size, 0);

        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The raw interleaved R,G,B bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// The RGB triple at `(x, y)`
    ///
    /// # Panics
    ///
    /// If `x` or `y` is outside the raster.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        assert!(x < self.width && y < self.height);

        let i = (y * self.width + x) * 3;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}
