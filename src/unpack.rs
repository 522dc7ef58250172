//! Bit-level unpacking of hex-text captures and sub-byte-aligned samples
//!
//! Sensor traces are sometimes captured as hex text dumps rather than binary
//! raw files, with the 10-bit samples packed back to back inside the row's
//! bytes. [`unpack_hex_rows`] recovers the packed bytes from the text form,
//! [`unpack_10bit`] widens the packed samples to 16-bit little-endian, which
//! is the layout the Bayer decode paths consume.

/// Everything that can go wrong when unpacking a hex-text capture
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UnpackError {
    #[error("hex value in row {row} is {digits} digits wide, only 8-bit values are supported")]
    InvalidValueWidth { row: usize, digits: usize },

    #[error("row {row} is {got} bytes wide, expected {expected}")]
    InconsistentRowWidth {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// Byte rows recovered from a hex-text capture
#[derive(Debug, PartialEq, Eq)]
pub struct HexRows {
    /// `row_bytes * rows` bytes, densely packed
    pub bytes: Vec<u8>,
    pub row_bytes: usize,
    pub rows: usize,
}

/// Decode a hex-text stream into byte rows
///
/// Every maximal run of hex digits forms one byte and must be exactly two
/// digits long. Other characters separate values, a newline or the end of the
/// stream closes the row. The first non-empty row fixes the width; empty rows
/// are skipped.
pub fn unpack_hex_rows(text: &str) -> Result<HexRows, UnpackError> {
    let mut bytes = Vec::new();
    let mut row_bytes = 0;
    let mut rows = 0;
    let mut this_row = 0;
    let mut digits = 0;
    let mut value: u8 = 0;

    // A trailing newline closes the final row like EOF does
    for c in text.bytes().chain(std::iter::once(b'\n')) {
        if c.is_ascii_hexdigit() {
            digits += 1;
            value = value.wrapping_shl(4) | hex_val(c);
            continue;
        }

        if digits > 0 {
            if digits != 2 {
                return Err(UnpackError::InvalidValueWidth { row: rows, digits });
            }
            bytes.push(value);
            this_row += 1;
            digits = 0;
            value = 0;
        }

        if c == b'\n' {
            if row_bytes == 0 {
                row_bytes = this_row;
            }
            if this_row > 0 {
                if this_row != row_bytes {
                    return Err(UnpackError::InconsistentRowWidth {
                        row: rows,
                        expected: row_bytes,
                        got: this_row,
                    });
                }
                rows += 1;
                this_row = 0;
            }
        }
    }

    Ok(HexRows {
        bytes,
        row_bytes,
        rows,
    })
}

fn hex_val(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        _ => c - b'A' + 10,
    }
}

/// 16-bit little-endian samples widened from a packed 10-bit row buffer
#[derive(Debug, PartialEq, Eq)]
pub struct Unpacked10 {
    /// `samples_per_row * 2 * rows` bytes, each sample low byte first
    pub bytes: Vec<u8>,
    pub samples_per_row: usize,
    pub rows: usize,
}

/// Unpack contiguously packed 10-bit samples into 16-bit little-endian values
///
/// The packed buffer is read as a bitstream, MSB-first within each byte.
/// Every 10 consecutive bits form one sample; each row's bitstream restarts
/// at a byte boundary. Trailing bits that do not fill a whole sample are
/// dropped, so a row of `row_bytes` bytes yields `row_bytes * 8 / 10`
/// samples.
///
/// # Panics
///
/// If `packed` is smaller than `row_bytes * rows`.
pub fn unpack_10bit(packed: &[u8], row_bytes: usize, rows: usize) -> Unpacked10 {
    let samples_per_row = row_bytes * 8 / 10;
    let mut bytes = vec![0u8; samples_per_row * 2 * rows];

    for y in 0..rows {
        let src = &packed[y * row_bytes..][..row_bytes];
        let dst = &mut bytes[y * samples_per_row * 2..][..samples_per_row * 2];

        let mut acc: u32 = 0;
        let mut nbits = 0;
        let mut next = 0;

        for x in 0..samples_per_row {
            while nbits < 10 {
                acc = acc << 8 | u32::from(src[next]);
                next += 1;
                nbits += 8;
            }

            nbits -= 10;
            let sample = (acc >> nbits) & 0x3ff;

            dst[2 * x] = (sample & 0xff) as u8;
            dst[2 * x + 1] = (sample >> 8) as u8;
        }
    }

    Unpacked10 {
        bytes,
        samples_per_row,
        rows,
    }
}
