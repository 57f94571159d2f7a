//! Tuya-Stream block emitter.
//!
//! Stateless helpers that append literal and distance blocks to a `Vec<u8>`
//! sink, enforcing the wire format's field-width invariants. Equivalent to
//! the `_emit_literal_block` / `_emit_literal_blocks` / `_emit_distance_block`
//! methods of `TuyaCompressor` in `original_source/app/services/tuya.py`.

use crate::constants::{MAX_LITERAL_LENGTH, MAX_MATCH_LENGTH, MIN_MATCH_LENGTH, WINDOW_SIZE};
use crate::error::CompressionError;

/// Write one literal block: a 1-byte header `len(data) - 1` followed by
/// `data`. `data` must be 1..=32 bytes.
pub fn emit_literal_block(out: &mut Vec<u8>, data: &[u8]) -> Result<(), CompressionError> {
    if data.is_empty() || data.len() > MAX_LITERAL_LENGTH {
        return Err(CompressionError::InvalidLiteralLength { len: data.len() });
    }
    out.push((data.len() - 1) as u8);
    out.extend_from_slice(data);
    Ok(())
}

/// Split `data` into contiguous chunks of at most 32 bytes and emit each as
/// a literal block. Emits nothing for empty input.
pub fn emit_literal_run(out: &mut Vec<u8>, data: &[u8]) -> Result<(), CompressionError> {
    for chunk in data.chunks(MAX_LITERAL_LENGTH) {
        emit_literal_block(out, chunk)?;
    }
    Ok(())
}

/// Write one distance block for a back-reference of `length` bytes at
/// `distance` bytes back. Uses the 2-byte form when `length <= 8`, the
/// 3-byte form otherwise.
pub fn emit_distance_block(
    out: &mut Vec<u8>,
    length: usize,
    distance: usize,
) -> Result<(), CompressionError> {
    if distance == 0 || distance > WINDOW_SIZE {
        return Err(CompressionError::InvalidDistance { distance });
    }
    if length < MIN_MATCH_LENGTH || length > MAX_MATCH_LENGTH {
        return Err(CompressionError::InvalidMatchLength { length });
    }

    let d = (distance - 1) as u32;
    let l = (length - 2) as u32;

    if l < 7 {
        out.push(((l << 5) | (d >> 8)) as u8);
        out.push((d & 0xFF) as u8);
    } else {
        out.push(((7u32 << 5) | (d >> 8)) as u8);
        out.push((d & 0xFF) as u8);
        out.push((l - 7) as u8);
    }
    Ok(())
}
