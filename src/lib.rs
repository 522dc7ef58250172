//! Decode raw image sensor captures into interleaved 8-bit RGB rasters
//!
//! The engine takes a raw byte buffer in one of several V4L2 pixel encodings
//! (or a hex-text dump of one) and produces a `width * height * 3` RGB
//! buffer:
//!
//! - [`resolve_format`] turns a format selector token (symbolic name or
//!   numeric literal) into a [`FormatId`]
//! - [`decode`] converts a raw frame, zero-padding short captures and
//!   reporting the [`shortfall`](Decoded::shortfall)
//! - [`unpack_hex_rows`] and [`unpack_10bit`] recover binary sample rows from
//!   hex-text captures of packed 10-bit data
//! - [`write_ppm`] persists a raster in the binary portable pixmap container
//!
//! Supported decodes are NV12, 8-bit greyscale and the four 10-bit Bayer CFA
//! orderings. Compressed formats (MJPEG, JPEG, DV, MPEG, ...) are recognized
//! by the registry for diagnostics but rejected at decode time.
//!
//! The engine never logs and never exits; every failure is a typed error for
//! the caller to report.
//!
//! ```
//! use rawpnm::{FormatRegistry, RasterGeometry, decode, resolve_format};
//!
//! let format = resolve_format("GREY", FormatRegistry::v4l2())?;
//! let decoded = decode(&[0, 64, 128, 255], RasterGeometry::new(2, 2), format)?;
//!
//! assert_eq!(decoded.raster.pixel(1, 1), [255, 255, 255]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use condition::{Conditioned, condition};
pub use format::{FormatId, FormatRegistry, fourcc};
pub use formats::{CfaPhase, DecodeError, Decoded, decode};
pub use pnm::write_ppm;
pub use raster::RgbRaster;
pub use symbol::{ParseError, parse_symbol, resolve_format};
pub use unpack::{HexRows, UnpackError, Unpacked10, unpack_10bit, unpack_hex_rows};

pub mod color;
mod condition;
pub mod format;
mod formats;
mod pnm;
mod raster;
mod symbol;
mod unpack;

/// Nominal dimensions of a source raster
///
/// `stride` is the distance in bytes between the starts of consecutive
/// source rows. A non-positive stride means "derive from the width and the
/// format's bytes per pixel".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterGeometry {
    pub width: i32,
    pub height: i32,
    pub stride: i32,
}

impl RasterGeometry {
    /// Geometry with the stride derived from the format at decode time
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            stride: 0,
        }
    }

    /// Override the source row stride in bytes
    pub fn with_stride(mut self, stride: i32) -> Self {
        self.stride = stride;
        self
    }

    pub(crate) fn stride_or(&self, derived: usize) -> usize {
        if self.stride > 0 {
            self.stride as usize
        } else {
            derived
        }
    }
}
