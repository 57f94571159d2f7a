//! UFO-R11 (Tuya) encoder: packs a timing list into compressed, Base64 bytes.
//!
//! Equivalent to `TuyaEncoder` in `original_source/app/services/encoder.py`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use crate::compress::compress;
use crate::constants::MAX_SIGNAL_VALUE;
use crate::error::{IrCodeError, Result};
use crate::level::CompressionLevel;

/// Encode `timings` (Tuya ticks, as produced by [`crate::decode::decode`])
/// into a Base64 UFO-R11 payload.
///
/// Timings at or above [`MAX_SIGNAL_VALUE`] are silently dropped — they
/// don't fit the wire format's little-endian `u16` field. If every timing
/// is dropped this way, encoding fails.
pub fn encode(timings: &[u32], level: CompressionLevel) -> Result<String> {
    debug!(count = timings.len(), ?level, "encoding timings to UFO-R11");

    if timings.is_empty() {
        return Err(IrCodeError::EmptyTimingList.into());
    }

    let filtered: Vec<u16> = timings
        .iter()
        .filter(|&&t| t < MAX_SIGNAL_VALUE)
        .map(|&t| t as u16)
        .collect();

    let dropped = timings.len() - filtered.len();
    if dropped > 0 {
        debug!(dropped, max = MAX_SIGNAL_VALUE, "filtered out-of-range timings");
    }

    if filtered.is_empty() {
        return Err(IrCodeError::AllTimingsFiltered.into());
    }

    let mut payload = Vec::with_capacity(filtered.len() * 2);
    for t in &filtered {
        payload.extend_from_slice(&t.to_le_bytes());
    }
    debug!(bytes = payload.len(), "packed payload");

    let compressed = compress(level, &payload)?;
    let result = STANDARD.encode(compressed);
    debug!(chars = result.len(), "encoded result");
    Ok(result)
}
