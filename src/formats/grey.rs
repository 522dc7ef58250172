//! 8-bit greyscale, single plane, one byte per pixel

pub(crate) fn required_size(width: usize, height: usize, stride: usize) -> usize {
    // When stride < width the last row still needs width readable bytes
    (stride * height).max((height - 1) * stride + width)
}

pub(crate) fn to_rgb(src: &[u8], width: usize, height: usize, stride: usize, out: &mut [u8]) {
    for y in 0..height {
        let row = &src[y * stride..];
        let dst = &mut out[y * width * 3..][..width * 3];

        for x in 0..width {
            let v = row[x];
            dst[x * 3..x * 3 + 3].copy_from_slice(&[v, v, v]);
        }
    }
}
