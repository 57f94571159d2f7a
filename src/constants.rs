//! Shared numeric constants.
//!
//! Mirrors `app/services/constants.py` in the Python original.

/// Broadlink time unit, in milliseconds per raw count (`269/8192`).
///
/// Kept as a rational (numerator, denominator) rather than a float: the
/// decoder needs `ceil(raw / UNIT)` to be exact at every boundary, and
/// `ceil(raw * 8192 / 269)` in integer arithmetic is the only form that
/// guarantees that.
pub const BRDLNK_UNIT_NUM: u64 = 269;
pub const BRDLNK_UNIT_DEN: u64 = 8192;

/// Timings at or above this value don't fit a little-endian `u16` and are
/// dropped by the encoder before compression.
pub const MAX_SIGNAL_VALUE: u32 = 65_535;

/// Sliding window size for back-references.
pub const WINDOW_SIZE: usize = 1 << 13; // 8192

/// Maximum back-reference match length: `255 + 9`.
pub const MAX_MATCH_LENGTH: usize = 255 + 9; // 264

/// Minimum back-reference match length worth emitting over literals.
pub const MIN_MATCH_LENGTH: usize = 3;

/// Maximum literal block payload (5-bit length field).
pub const MAX_LITERAL_LENGTH: usize = 32;
