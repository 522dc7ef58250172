//! NV12: full resolution luma plane followed by one interleaved Cb/Cr plane
//! at half resolution in both axes

use crate::color::ycbcr_to_rgb;

pub(crate) fn required_size(width: usize, height: usize, stride: usize) -> usize {
    // The nominal 3/2 size rounds down for odd heights, make sure the last
    // chroma pair the scan touches is fully readable
    let extent = height * stride + ((height - 1) / 2) * stride + 2 * ((width - 1) / 2) + 2;

    (stride * height * 3 / 2).max(extent)
}

pub(crate) fn to_rgb(src: &[u8], width: usize, height: usize, stride: usize, out: &mut [u8]) {
    let chroma_base = height * stride;

    for y in 0..height {
        let row = &src[y * stride..];
        let uv = &src[chroma_base + (y / 2) * stride..];
        let dst = &mut out[y * width * 3..][..width * 3];

        for x in 0..width {
            let l = i32::from(row[x]);
            let cb = i32::from(uv[2 * (x / 2)]);
            let cr = i32::from(uv[2 * (x / 2) + 1]);

            dst[x * 3..x * 3 + 3].copy_from_slice(&ycbcr_to_rgb(l, cb, cr));
        }
    }
}
