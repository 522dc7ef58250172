use rawpnm::{
    DecodeError, FormatId, FormatRegistry, RasterGeometry, decode, format, resolve_format,
    unpack_10bit, unpack_hex_rows,
};

#[test]
fn grey_2x2() {
    let decoded = decode(
        &[10, 20, 30, 40],
        RasterGeometry::new(2, 2).with_stride(2),
        format::GREY,
    )
    .unwrap();

    assert_eq!(decoded.shortfall, 0);
    assert_eq!(
        decoded.raster.data(),
        [10, 10, 10, 20, 20, 20, 30, 30, 30, 40, 40, 40]
    );
}

#[test]
fn grey_with_row_padding() {
    // Stride 4, the 2 padding bytes per row are skipped
    let src = [1, 2, 0xee, 0xee, 3, 4, 0xee, 0xee];
    let decoded = decode(&src, RasterGeometry::new(2, 2).with_stride(4), format::GREY).unwrap();

    assert_eq!(decoded.raster.data(), [1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4]);
}

#[test]
fn short_capture_is_padded_and_reported() {
    let decoded = decode(&[7, 8, 9], RasterGeometry::new(2, 2), format::GREY).unwrap();

    assert_eq!(decoded.shortfall, 1);
    assert_eq!(decoded.raster.pixel(1, 1), [0, 0, 0]);
    assert_eq!(decoded.raster.pixel(0, 0), [7, 7, 7]);
}

#[test]
fn nv12_2x2_single_chroma_pair() {
    // Luma alternates between the nominal black and white points, shared
    // neutral chroma
    let src = [16, 235, 16, 235, 128, 128];
    let decoded = decode(&src, RasterGeometry::new(2, 2), format::NV12).unwrap();

    assert_eq!(decoded.shortfall, 0);
    assert_eq!(decoded.raster.pixel(0, 0), [0, 0, 0]);
    assert_eq!(decoded.raster.pixel(1, 0), [255, 255, 255]);
    assert_eq!(decoded.raster.pixel(0, 1), [0, 0, 0]);
    assert_eq!(decoded.raster.pixel(1, 1), [255, 255, 255]);
}

#[test]
fn nv12_with_row_padding() {
    let src = [
        16, 235, 0xee, 0xee, // luma row 0
        16, 235, 0xee, 0xee, // luma row 1
        128, 128, 0xee, 0xee, // chroma row 0
    ];
    let decoded = decode(&src, RasterGeometry::new(2, 2).with_stride(4), format::NV12).unwrap();

    assert_eq!(decoded.raster.pixel(0, 0), [0, 0, 0]);
    assert_eq!(decoded.raster.pixel(1, 1), [255, 255, 255]);
}

/// Encode an 8-bit channel value as the 16-bit little-endian word a 10-bit
/// raw capture stores it as
fn word(v: u8) -> [u8; 2] {
    let w = u16::from(v) << 2;
    w.to_le_bytes()
}

#[test]
fn bayer_sgrbg10_hold_semantics() {
    // Site values, one channel observed per site. SGRBG10 starts at
    // (odd_row, odd_pixel) = (0, 0):
    //   row 0: G R G R
    //   row 1: B G B G
    let sites: [[u8; 4]; 4] = [
        [1, 2, 3, 4],
        [17, 18, 19, 20],
        [33, 34, 35, 36],
        [49, 50, 51, 52],
    ];

    let mut src = Vec::new();
    for row in sites {
        for v in row {
            src.extend_from_slice(&word(v));
        }
    }

    let decoded = decode(&src, RasterGeometry::new(4, 4), format::SGRBG10).unwrap();

    // Missing channels hold the last observed sample of that channel, with
    // r = g = b = 0 before the first sites and values carrying across rows
    let expected: [[[u8; 3]; 4]; 4] = [
        [[0, 1, 0], [2, 1, 0], [2, 3, 0], [4, 3, 0]],
        [[4, 3, 17], [4, 18, 17], [4, 18, 19], [4, 20, 19]],
        [[4, 33, 19], [34, 33, 19], [34, 35, 19], [36, 35, 19]],
        [[36, 35, 49], [36, 50, 49], [36, 50, 51], [36, 52, 51]],
    ];

    for (y, row) in expected.iter().enumerate() {
        for (x, px) in row.iter().enumerate() {
            assert_eq!(decoded.raster.pixel(x, y), *px, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn bayer_variants_differ_only_in_phase_origin() {
    // One uniform row of samples: whichever channel a variant assigns to the
    // first site decides which output channel is populated first
    let mut src = Vec::new();
    for _ in 0..4 {
        src.extend_from_slice(&word(100));
    }

    let first = |id: FormatId| {
        decode(&src, RasterGeometry::new(4, 1), id)
            .unwrap()
            .raster
            .pixel(0, 0)
    };

    assert_eq!(first(format::SGRBG10), [0, 100, 0]); // G first
    assert_eq!(first(format::SRGGB10), [100, 0, 0]); // R first
    assert_eq!(first(format::SBGGR10), [0, 0, 100]); // B first
    assert_eq!(first(format::SGBRG10), [0, 100, 0]); // G first (blue row)
}

#[test]
fn unsupported_formats_are_rejected() {
    let registry = FormatRegistry::v4l2();
    let mjpeg = resolve_format("MJPEG", registry).unwrap();

    assert_eq!(
        decode(&[0; 64], RasterGeometry::new(4, 4), mjpeg),
        Err(DecodeError::UnsupportedFormat(mjpeg))
    );

    // Ids that never were in the registry fail the same way
    let bogus = FormatId(0xdead_beef);
    assert_eq!(
        decode(&[], RasterGeometry::new(1, 1), bogus),
        Err(DecodeError::UnsupportedFormat(bogus))
    );
}

#[test]
fn non_positive_dimensions_are_rejected() {
    for (w, h) in [(0, 2), (2, 0), (-1, 2), (2, -3)] {
        assert_eq!(
            decode(&[0; 16], RasterGeometry::new(w, h), format::GREY),
            Err(DecodeError::GeometryInvalid {
                width: w,
                height: h
            })
        );
    }
}

#[test]
fn hex_capture_to_bayer_rgb_pipeline() {
    // Two rows of two 10-bit samples (40, 80 / 120, 160), packed MSB-first
    // into 3 bytes per row and dumped as hex text
    let rows: [[u16; 2]; 2] = [[40, 80], [120, 160]];

    let mut text = String::new();
    for row in rows {
        let bits = u32::from(row[0]) << 14 | u32::from(row[1]) << 4;
        for byte in &bits.to_be_bytes()[1..] {
            text.push_str(&format!("{byte:02x} "));
        }
        text.push('\n');
    }

    let hex = unpack_hex_rows(&text).unwrap();
    assert_eq!(hex.row_bytes, 3);
    assert_eq!(hex.rows, 2);

    let unpacked = unpack_10bit(&hex.bytes, hex.row_bytes, hex.rows);
    assert_eq!(unpacked.samples_per_row, 2);

    let decoded = decode(
        &unpacked.bytes,
        RasterGeometry::new(2, 2),
        format::SGRBG10,
    )
    .unwrap();

    // Channel values are the 10-bit samples with the low 2 bits dropped
    assert_eq!(decoded.raster.pixel(0, 0), [0, 10, 0]);
    assert_eq!(decoded.raster.pixel(1, 0), [20, 10, 0]);
    assert_eq!(decoded.raster.pixel(0, 1), [20, 10, 30]);
    assert_eq!(decoded.raster.pixel(1, 1), [20, 40, 30]);
}
