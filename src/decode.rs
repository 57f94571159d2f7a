//! Broadlink timing decoder.
//!
//! Converts a Base64-wrapped Broadlink capture into a normalized timing
//! sequence (Tuya ticks). Equivalent to `BroadlinkDecoder` in
//! `original_source/app/services/broadlink.py`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use crate::constants::{BRDLNK_UNIT_DEN, BRDLNK_UNIT_NUM};
use crate::error::IrCodeError;

/// Minimum decoded-byte count: a 2-byte prefix plus a 2-byte length field.
const HEADER_LEN: usize = 4;

/// Decode a Broadlink Base64 capture into a sequence of Tuya-tick timings.
///
/// Padding may be omitted from `code`; it is re-added to align the length to
/// a multiple of 4 before decoding.
///
/// Returned values are **not** yet filtered to the `u16` range — an extended
/// (`0x00`-escaped) timing can decode to a value well above 65535. Filtering
/// happens in [`crate::encode`].
pub fn decode(code: &str) -> Result<Vec<u32>, IrCodeError> {
    if code.is_empty() {
        return Err(IrCodeError::EmptyInput);
    }

    debug!(chars = code.len(), "decoding Broadlink command");

    let bytes = decode_base64(code)?;
    debug!(bytes = bytes.len(), "base64 decoded");

    if bytes.len() < HEADER_LEN {
        return Err(IrCodeError::HeaderTooShort { len: bytes.len() * 2 });
    }

    // bytes[0..2] is the prefix, read but never validated.
    // bytes[2..4] is the payload length, little-endian.
    let payload_len = u16::from_le_bytes([bytes[2], bytes[3]]) as usize;

    let timings = parse_timings(&bytes[HEADER_LEN..], payload_len)?;
    debug!(count = timings.len(), "parsed timings");
    Ok(timings)
}

fn decode_base64(code: &str) -> Result<Vec<u8>, IrCodeError> {
    let padded = match code.len() % 4 {
        0 => code.to_owned(),
        n => format!("{code}{}", "=".repeat(4 - n)),
    };
    STANDARD
        .decode(padded.as_bytes())
        .map_err(|e| IrCodeError::InvalidBase64(e.to_string()))
}

/// Walk `payload`, interpreting each byte as either a direct timing
/// (`0x01..=0xFF`) or, when zero, a 2-byte big-endian extended timing.
/// Stops at `payload_len` bytes or the end of `payload`, whichever is first.
fn parse_timings(payload: &[u8], payload_len: usize) -> Result<Vec<u32>, IrCodeError> {
    let limit = payload_len.min(payload.len());
    let mut timings = Vec::new();
    let mut i = 0;

    while i < limit {
        let b = payload[i];
        if b != 0 {
            timings.push(ceil_ticks(b as u64));
            i += 1;
        } else {
            if i + 3 > payload.len() {
                return Err(IrCodeError::TruncatedExtendedValue);
            }
            let raw = u16::from_be_bytes([payload[i + 1], payload[i + 2]]);
            timings.push(ceil_ticks(raw as u64));
            i += 3;
        }
    }

    Ok(timings)
}

/// `ceil(raw / U)` with `U = BRDLNK_UNIT_NUM / BRDLNK_UNIT_DEN`, computed as
/// `ceil(raw * BRDLNK_UNIT_DEN / BRDLNK_UNIT_NUM)` in integer arithmetic.
/// Load-bearing for byte-exact parity at boundary values — floating point
/// rounding diverges here.
fn ceil_ticks(raw: u64) -> u32 {
    let numerator = raw * BRDLNK_UNIT_DEN;
    ((numerator + BRDLNK_UNIT_NUM - 1) / BRDLNK_UNIT_NUM) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_input() {
        assert_eq!(decode(""), Err(IrCodeError::EmptyInput));
    }

    #[test]
    fn rejects_short_header() {
        // A single byte, base64-encoded, decodes to 1 byte < HEADER_LEN.
        let code = STANDARD.encode([0x26u8]);
        assert!(matches!(
            decode(&code),
            Err(IrCodeError::HeaderTooShort { .. })
        ));
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(matches!(
            decode("not valid base64!!"),
            Err(IrCodeError::InvalidBase64(_))
        ));
    }

    #[test]
    fn ceil_matches_known_boundary() {
        // raw=1 -> ceil(1 * 8192 / 269) = ceil(30.45..) = 31
        assert_eq!(ceil_ticks(1), 31);
        // raw=269/... exact multiple boundary: raw=8192 -> ceil(8192*8192/269)
        assert_eq!(ceil_ticks(0), 0);
    }

    #[test]
    fn decodes_sample_broadlink_code() {
        let code = "JgBGAJKRFDQUNBQ0FDUUNBQ0EzUTEhQREhQRFBISEhQ0EzUUNBMSExITEhMSExITNRQ0EzUTEhMSFDQUNBMSExIUNBMSExITAAUQAA==";
        let timings = decode(code).expect("sample code should decode");
        assert!(!timings.is_empty());
    }

    #[test]
    fn truncated_extended_value_errors() {
        // prefix (2) + len=0x0001 LE + payload byte 0x00 with nothing after.
        let bytes: Vec<u8> = vec![0x26, 0x00, 0x01, 0x00, 0x00];
        let code = STANDARD.encode(bytes);
        assert_eq!(decode(&code), Err(IrCodeError::TruncatedExtendedValue));
    }

    #[test]
    fn stops_at_declared_payload_length() {
        // len=1 but payload has 3 bytes worth of single timings; only first is read.
        let bytes: Vec<u8> = vec![0x26, 0x00, 0x01, 0x00, 0x0A, 0x0B, 0x0C];
        let code = STANDARD.encode(bytes);
        let timings = decode(&code).unwrap();
        assert_eq!(timings.len(), 1);
        assert_eq!(timings[0], ceil_ticks(0x0A));
    }
}
