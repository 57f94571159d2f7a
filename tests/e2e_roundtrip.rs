//! End-to-end checks: decode → compress at every level → encode → valid Base64.
//!
//! Mirrors the coverage of `tests/test_services.py` /
//! `tests/test_btu.py` in the Python original, adapted to this crate's API.

#[path = "common/mod.rs"]
mod common;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use btu::{decode, encode, CompressionLevel, Converter};

const SAMPLE_CODE: &str =
    "JgBGAJKRFDQUNBQ0FDUUNBQ0EzUTEhQREhQRFBISEhQ0EzUUNBMSExITEhMSExITNRQ0EzUTEhMSFDQUNBMSExIUNBMSExITAAUQAA==";

#[test]
fn test_full_pipeline_at_every_compression_level() {
    let timings = decode(SAMPLE_CODE).expect("sample decodes");

    let mut sizes = Vec::new();
    for level in [
        CompressionLevel::None,
        CompressionLevel::Fast,
        CompressionLevel::Balanced,
        CompressionLevel::Optimal,
    ] {
        let encoded = encode(&timings, level).expect("encode succeeds at every level");
        let decoded_bytes = STANDARD.decode(&encoded).expect("valid base64 output");
        sizes.push(decoded_bytes.len());
    }

    // BALANCED and OPTIMAL should never produce a larger wire payload than NONE.
    assert!(sizes[2] <= sizes[0]);
    assert!(sizes[3] <= sizes[0]);
}

#[test]
fn test_compressed_levels_decompress_to_the_none_level_payload() {
    let timings = decode(SAMPLE_CODE).expect("sample decodes");

    let none_encoded = encode(&timings, CompressionLevel::None).unwrap();
    let none_bytes = STANDARD.decode(&none_encoded).unwrap();
    let payload = common::decompress(&none_bytes);

    for level in [
        CompressionLevel::Fast,
        CompressionLevel::Balanced,
        CompressionLevel::Optimal,
    ] {
        let encoded = encode(&timings, level).unwrap();
        let compressed = STANDARD.decode(&encoded).unwrap();
        assert_eq!(
            common::decompress(&compressed),
            payload,
            "level {level:?} diverged from the NONE-level payload"
        );
    }
}

#[test]
fn test_converter_facade_matches_manual_decode_encode_pipeline() {
    let converter = Converter::new(CompressionLevel::Balanced);
    let via_facade = converter.convert(SAMPLE_CODE).unwrap();

    let timings = decode(SAMPLE_CODE).unwrap();
    let via_manual = encode(&timings, CompressionLevel::Balanced).unwrap();

    assert_eq!(via_facade, via_manual);
}
