use crate::format::{self, FormatId};
use crate::{RasterGeometry, RgbRaster, condition::condition};

mod bayer;
mod grey;
mod nv12;

pub use bayer::CfaPhase;

/// Everything that can go wrong when decoding a raw capture
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The format id is known but not decodable (compressed or proprietary),
    /// or not known at all
    #[error("unsupported pixel format {0}")]
    UnsupportedFormat(FormatId),

    #[error("invalid raster geometry {width}x{height}")]
    GeometryInvalid { width: i32, height: i32 },

    #[error("out of memory, can not allocate {bytes} bytes")]
    OutOfMemory { bytes: usize },
}

/// Outcome of a successful decode
#[derive(Debug, PartialEq, Eq)]
pub struct Decoded {
    pub raster: RgbRaster,

    /// Zero bytes the source had to be padded with, see
    /// [`Conditioned::shortfall`](crate::Conditioned::shortfall)
    pub shortfall: usize,
}

/// Scan pattern selected by the format id
enum Scanner {
    Nv12,
    Grey,
    Bayer10(CfaPhase),
}

/// Decode one raw frame into an interleaved RGB raster
///
/// `src` may be any length; it is padded or truncated to the size the format
/// and geometry require, with the padding reported in
/// [`Decoded::shortfall`]. A non-positive stride is derived from the width
/// and the format's bytes per pixel.
pub fn decode(
    src: &[u8],
    geometry: RasterGeometry,
    format: FormatId,
) -> Result<Decoded, DecodeError> {
    // Reject unknown formats before touching any buffer
    let scanner = match format {
        format::NV12 => Scanner::Nv12,
        format::GREY => Scanner::Grey,
        format::SBGGR10 => Scanner::Bayer10(CfaPhase::new(true, false)),
        format::SGBRG10 => Scanner::Bayer10(CfaPhase::new(true, true)),
        format::SRGGB10 => Scanner::Bayer10(CfaPhase::new(false, true)),
        format::SGRBG10 => Scanner::Bayer10(CfaPhase::new(false, false)),
        other => return Err(DecodeError::UnsupportedFormat(other)),
    };

    if geometry.width <= 0 || geometry.height <= 0 {
        return Err(DecodeError::GeometryInvalid {
            width: geometry.width,
            height: geometry.height,
        });
    }
    let width = geometry.width as usize;
    let height = geometry.height as usize;

    let stride = match &scanner {
        Scanner::Nv12 | Scanner::Grey => geometry.stride_or(width),
        Scanner::Bayer10(_) => geometry.stride_or(width * 2),
    };

    let required = match &scanner {
        Scanner::Nv12 => nv12::required_size(width, height, stride),
        Scanner::Grey => grey::required_size(width, height, stride),
        Scanner::Bayer10(_) => bayer::required_size(width, height, stride),
    };

    let conditioned = condition(src, required)?;
    let mut raster = RgbRaster::new(width, height)?;

    match scanner {
        Scanner::Nv12 => nv12::to_rgb(&conditioned.bytes, width, height, stride, raster.data_mut()),
        Scanner::Grey => grey::to_rgb(&conditioned.bytes, width, height, stride, raster.data_mut()),
        Scanner::Bayer10(phase) => bayer::to_rgb(
            &conditioned.bytes,
            width,
            height,
            stride,
            phase,
            raster.data_mut(),
        ),
    }

    Ok(Decoded {
        raster,
        shortfall: conditioned.shortfall,
    })
}
