use crate::DecodeError;

/// A source buffer brought to exactly the size a decode pass needs
pub struct Conditioned {
    pub bytes: Vec<u8>,

    /// Number of zero bytes appended because the capture was short
    ///
    /// Non-zero shortfall is a soft condition: the decode still runs, the
    /// caller decides whether to warn about the truncated capture.
    pub shortfall: usize,
}

/// Copy `src` into an owned buffer of exactly `required` bytes
///
/// A short source is zero-padded, a long one silently truncated. Raw captures
/// are frequently short by a partial frame; padding keeps them renderable
/// instead of refusing them.
pub fn condition(src: &[u8], required: usize) -> Result<Conditioned, DecodeError> {
    let mut bytes = Vec::new();

    bytes
        .try_reserve_exact(required)
        .map_err(|_| DecodeError::OutOfMemory { bytes: required })?;

    let take = src.len().min(required);
    bytes.extend_from_slice(&src[..take]);
    bytes.resize(required, 0);

    Ok(Conditioned {
        bytes,
        shortfall: required - take,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_size_is_kept() {
        let out = condition(&[1, 2, 3, 4], 4).unwrap();

        assert_eq!(out.bytes, [1, 2, 3, 4]);
        assert_eq!(out.shortfall, 0);
    }

    #[test]
    fn short_source_is_zero_padded() {
        let out = condition(&[1, 2], 5).unwrap();

        assert_eq!(out.bytes, [1, 2, 0, 0, 0]);
        assert_eq!(out.shortfall, 3);
    }

    #[test]
    fn long_source_is_truncated() {
        let out = condition(&[1, 2, 3, 4], 2).unwrap();

        assert_eq!(out.bytes, [1, 2]);
        assert_eq!(out.shortfall, 0);
    }

    #[test]
    fn empty_cases() {
        assert_eq!(condition(&[], 0).unwrap().bytes, []);

        let out = condition(&[], 3).unwrap();
        assert_eq!(out.bytes, [0, 0, 0]);
        assert_eq!(out.shortfall, 3);

        assert_eq!(condition(&[9], 0).unwrap().bytes, []);
    }
}
