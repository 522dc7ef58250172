//! Fixed point YCbCr to RGB conversion
//!
//! Integer BT.601-style transform as used by the NTSC Y'UV to RGB conversion.
//! The exact integer formula matters: a floating point variant rounds
//! differently and is not output-compatible.

/// Convert one YCbCr sample triple to an RGB pixel
///
/// Channels are clamped to `0..=255` independently.
pub fn ycbcr_to_rgb(y: i32, cb: i32, cr: i32) -> [u8; 3] {
    let c = y - 16;
    let d = cb - 128;
    let e = cr - 128;

    [
        clamp8((298 * c + 409 * e + 128) >> 8),
        clamp8((298 * c - 100 * d - 208 * e + 128) >> 8),
        clamp8((298 * c + 516 * d + 128) >> 8),
    ]
}

fn clamp8(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}
