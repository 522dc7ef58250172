//! 10-bit Bayer CFA sample-hold reconstruction
//!
//! Each sample is stored as a 16-bit little-endian word holding a 10-bit
//! value; the low 2 bits are discarded to get back to 8 bits per channel.
//!
//! Only one channel is observed per sample site. Instead of interpolating
//! neighbours, the two missing channels reuse the most recently observed
//! value of that channel, carried across pixels and rows in scan order.
//! Output parity with existing captures depends on this exact hold
//! behaviour, so it must not be "improved" into a bilinear demosaic.

/// Row/column parity pair selecting which channel a sample site encodes
///
/// Given `(odd_row, odd_pixel)`: `(false, false)` is G, `(false, true)` is R,
/// `(true, false)` is B and `(true, true)` is G. The four 10-bit Bayer
/// variants differ only in the parity the scan starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CfaPhase {
    odd_row: bool,
    odd_pixel: bool,
}

impl CfaPhase {
    pub fn new(odd_row: bool, odd_pixel: bool) -> Self {
        Self { odd_row, odd_pixel }
    }
}

pub(crate) fn required_size(width: usize, height: usize, stride: usize) -> usize {
    // When stride < width * 2 the last row still needs a full row of words
    (stride * height).max((height - 1) * stride + width * 2)
}

pub(crate) fn to_rgb(
    src: &[u8],
    width: usize,
    height: usize,
    stride: usize,
    phase: CfaPhase,
    out: &mut [u8],
) {
    let (mut r, mut g, mut b) = (0u8, 0u8, 0u8);
    let mut odd_row = phase.odd_row;

    for y in 0..height {
        let row = &src[y * stride..];
        let dst = &mut out[y * width * 3..][..width * 3];

        // Pixel parity restarts at the format's origin on every row
        let mut odd_pixel = phase.odd_pixel;

        for x in 0..width {
            let v = sample(row, x);

            match (odd_row, odd_pixel) {
                (false, false) => g = v,
                (false, true) => r = v,
                (true, false) => b = v,
                (true, true) => g = v,
            }

            dst[x * 3..x * 3 + 3].copy_from_slice(&[r, g, b]);
            odd_pixel = !odd_pixel;
        }

        odd_row = !odd_row;
    }
}

/// Combine the little-endian byte pair at sample `x` and drop the 2 padding
/// bits, truncating to 8 bits like the reference output does
fn sample(row: &[u8], x: usize) -> u8 {
    let lo = u16::from(row[2 * x]);
    let hi = u16::from(row[2 * x + 1]);

    ((hi << 8 | lo) >> 2) as u8
}
