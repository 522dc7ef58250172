use std::fmt;

/// Pixel format identifier, the 32-bit fourcc tag V4L2 uses on the wire
///
/// Ids are usually resolved through the [`FormatRegistry`], but any raw
/// 32-bit value is a legal `FormatId`. Unknown ids only fail once they reach
/// [`decode`](crate::decode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatId(pub u32);

/// Build a [`FormatId`] from its four character code
pub const fn fourcc(tag: &[u8; 4]) -> FormatId {
    FormatId(u32::from_le_bytes(*tag))
}

pub const GREY: FormatId = fourcc(b"GREY");
pub const NV12: FormatId = fourcc(b"NV12");
pub const SBGGR10: FormatId = fourcc(b"BG10");
pub const SGBRG10: FormatId = fourcc(b"GB10");
pub const SGRBG10: FormatId = fourcc(b"BA10");
pub const SRGGB10: FormatId = fourcc(b"RG10");

/// Ordered, immutable table of known pixel format names
///
/// Holds every format the engine can name, which is a superset of what
/// [`decode`](crate::decode) can actually convert. Compressed and
/// vendor-proprietary tags resolve to an id here but are rejected at decode
/// time with [`DecodeError::UnsupportedFormat`](crate::DecodeError::UnsupportedFormat).
pub struct FormatRegistry {
    entries: &'static [(FormatId, &'static str)],
}

impl FormatRegistry {
    /// The V4L2 pixel format table
    pub fn v4l2() -> &'static FormatRegistry {
        static REGISTRY: FormatRegistry = FormatRegistry {
            entries: PIXEL_FORMATS,
        };

        &REGISTRY
    }

    /// Look up an id by its symbolic name, case-insensitive exact match
    pub fn by_name(&self, name: &str) -> Option<FormatId> {
        self.entries
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name))
            .map(|&(id, _)| id)
    }

    /// Look up the symbolic name of an id
    pub fn by_id(&self, id: FormatId) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|&&(i, _)| i == id)
            .map(|&(_, n)| n)
    }

    /// All `(id, name)` pairs in table order, for diagnostic listings
    pub fn entries(&self) -> impl Iterator<Item = (FormatId, &'static str)> {
        self.entries.iter().copied()
    }
}

impl fmt::Display for FormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match FormatRegistry::v4l2().by_id(*self) {
            Some(name) if self.0 < 1000 => write!(f, "{name} [{}]", self.0),
            Some(name) => write!(f, "{name} [0x{:08X}]", self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

static PIXEL_FORMATS: &[(FormatId, &str)] = &[
    (fourcc(b"RGB1"), "RGB332"),
    (fourcc(b"R444"), "RGB444"),
    (fourcc(b"RGBO"), "RGB555"),
    (fourcc(b"RGBP"), "RGB565"),
    (fourcc(b"RGBQ"), "RGB555X"),
    (fourcc(b"RGBR"), "RGB565X"),
    (fourcc(b"BGR3"), "BGR24"),
    (fourcc(b"RGB3"), "RGB24"),
    (fourcc(b"BGR4"), "BGR32"),
    (fourcc(b"RGB4"), "RGB32"),
    (GREY, "GREY"),
    (fourcc(b"Y04 "), "Y4"),
    (fourcc(b"Y06 "), "Y6"),
    (fourcc(b"Y10 "), "Y10"),
    (fourcc(b"Y16 "), "Y16"),
    (fourcc(b"PAL8"), "PAL8"),
    (fourcc(b"YVU9"), "YVU410"),
    (fourcc(b"YV12"), "YVU420"),
    (fourcc(b"YUYV"), "YUYV"),
    (fourcc(b"YYUV"), "YYUV"),
    (fourcc(b"YVYU"), "YVYU"),
    (fourcc(b"UYVY"), "UYVY"),
    (fourcc(b"VYUY"), "VYUY"),
    (fourcc(b"422P"), "YUV422P"),
    (fourcc(b"411P"), "YUV411P"),
    (fourcc(b"Y41P"), "Y41P"),
    (fourcc(b"Y444"), "YUV444"),
    (fourcc(b"YUVO"), "YUV555"),
    (fourcc(b"YUVP"), "YUV565"),
    (fourcc(b"YUV4"), "YUV32"),
    (fourcc(b"YUV9"), "YUV410"),
    (fourcc(b"YU12"), "YUV420"),
    (fourcc(b"HI24"), "HI240"),
    (fourcc(b"HM12"), "HM12"),
    (NV12, "NV12"),
    (fourcc(b"NV21"), "NV21"),
    (fourcc(b"NV16"), "NV16"),
    (fourcc(b"NV61"), "NV61"),
    (fourcc(b"BA81"), "SBGGR8"),
    (fourcc(b"GBRG"), "SGBRG8"),
    (fourcc(b"GRBG"), "SGRBG8"),
    (fourcc(b"RGGB"), "SRGGB8"),
    (SBGGR10, "SBGGR10"),
    (SGBRG10, "SGBRG10"),
    (SGRBG10, "SGRBG10"),
    (SRGGB10, "SRGGB10"),
    (fourcc(b"BG12"), "SBGGR12"),
    (fourcc(b"GB12"), "SGBRG12"),
    (fourcc(b"BA12"), "SGRBG12"),
    (fourcc(b"RG12"), "SRGGB12"),
    (fourcc(b"BD10"), "SGRBG10DPCM8"),
    (fourcc(b"BYR2"), "SBGGR16"),
    (fourcc(b"MJPG"), "MJPEG"),
    (fourcc(b"JPEG"), "JPEG"),
    (fourcc(b"dvsd"), "DV"),
    (fourcc(b"MPEG"), "MPEG"),
    (fourcc(b"CPIA"), "CPIA1"),
    (fourcc(b"WNVA"), "WNVA"),
    (fourcc(b"S910"), "SN9C10X"),
    (fourcc(b"S920"), "SN9C20X_I420"),
    (fourcc(b"PWC1"), "PWC1"),
    (fourcc(b"PWC2"), "PWC2"),
    (fourcc(b"E625"), "ET61X251"),
    (fourcc(b"S501"), "SPCA501"),
    (fourcc(b"S505"), "SPCA505"),
    (fourcc(b"S508"), "SPCA508"),
    (fourcc(b"S561"), "SPCA561"),
    (fourcc(b"P207"), "PAC207"),
    (fourcc(b"M310"), "MR97310A"),
    (fourcc(b"SONX"), "SN9C2028"),
    (fourcc(b"905C"), "SQ905C"),
    (fourcc(b"PJPG"), "PJPG"),
    (fourcc(b"O511"), "OV511"),
    (fourcc(b"O518"), "OV518"),
    (fourcc(b"S680"), "STV0680"),
    (fourcc(b"TM60"), "TM6000"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_id_round_trip() {
        let registry = FormatRegistry::v4l2();

        for (id, name) in registry.entries() {
            assert_eq!(registry.by_name(name), Some(id));
            assert_eq!(registry.by_id(id), Some(name));
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let registry = FormatRegistry::v4l2();

        assert_eq!(registry.by_name("nv12"), Some(NV12));
        assert_eq!(registry.by_name("Nv12"), Some(NV12));
        assert_eq!(registry.by_name("sgrbg10"), Some(SGRBG10));
    }

    #[test]
    fn lookup_requires_full_name() {
        let registry = FormatRegistry::v4l2();

        assert_eq!(registry.by_name("NV1"), None);
        assert_eq!(registry.by_name("NV122"), None);
        assert_eq!(registry.by_name(""), None);
    }

    #[test]
    fn display_known_and_unknown_ids() {
        assert_eq!(NV12.to_string(), "NV12 [0x3231564E]");
        assert_eq!(FormatId(1234).to_string(), "1234");
    }
}
