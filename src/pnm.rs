//! Binary portable pixmap (P6) output
//!
//! The only persisted container the engine interoperates with: the header
//! `P6\n<width> <height> 255\n` followed by the raw interleaved RGB bytes.
//! Existing viewers depend on this exact layout.

use crate::RgbRaster;
use std::io::{self, Write};

/// Write `raster` as a binary PPM
pub fn write_ppm<W: Write>(w: &mut W, raster: &RgbRaster) -> io::Result<()> {
    write!(w, "P6\n{} {} 255\n", raster.width(), raster.height())?;
    w.write_all(raster.data())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RasterGeometry, decode, format};

    #[test]
    fn header_and_payload_are_byte_exact() {
        let decoded = decode(
            &[1, 2, 3, 4, 5, 6],
            RasterGeometry::new(3, 2),
            format::GREY,
        )
        .unwrap();

        let mut out = Vec::new();
        write_ppm(&mut out, &decoded.raster).unwrap();

        let mut expected = b"P6\n3 2 255\n".to_vec();
        for v in 1..=6u8 {
            expected.extend_from_slice(&[v, v, v]);
        }

        assert_eq!(out, expected);
    }
}
