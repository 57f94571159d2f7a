//! Compression level selection.
//!
//! Equivalent to `CompressionLevel(IntEnum)` in
//! `original_source/app/services/constants.py`.

/// Tuya-Stream compression level.
///
/// Ordered so that `NONE < FAST < BALANCED < OPTIMAL`; the greedy compressor
/// treats anything `<= BALANCED` (i.e. `FAST` or `BALANCED`) as greedy mode,
/// distinguishing the two only by which search strategy feeds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum CompressionLevel {
    /// Literal blocks only; ~3.1% overhead, no back-references.
    None = 0,
    /// Greedy compressor, naive search: first viable match wins.
    Fast = 1,
    /// Greedy compressor, suffix-array search: best of up to two neighbours.
    Balanced = 2,
    /// Shortest-path compressor over a cost-annotated DAG.
    Optimal = 3,
}

impl CompressionLevel {
    /// Map the wire-level integer (`{0,1,2,3}`) used by upstream
    /// collaborators onto a [`CompressionLevel`]. Out-of-range values clamp
    /// to `Optimal`, matching Python's `CompressionLevel(level)` which would
    /// raise on an unknown int — callers here are trusted to pass a
    /// validated `0..=3`, so clamping keeps the core total rather than
    /// introducing a `validation`-class error it isn't meant to raise.
    pub fn from_u8(level: u8) -> Self {
        match level {
            0 => CompressionLevel::None,
            1 => CompressionLevel::Fast,
            2 => CompressionLevel::Balanced,
            _ => CompressionLevel::Optimal,
        }
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        CompressionLevel::Balanced
    }
}

/// The two levels the greedy compressor actually implements. Kept as its
/// own type (rather than having `compress_greedy` accept a
/// [`CompressionLevel`] and match it with a wildcard arm) so passing `NONE`
/// or `OPTIMAL` to the greedy compressor is a compile error, not a silently
/// wrong dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreedyLevel {
    /// Naive search: first viable match wins.
    Fast,
    /// Suffix-array search: best of up to two neighbours.
    Balanced,
}

impl From<CompressionLevel> for u8 {
    fn from(level: CompressionLevel) -> Self {
        level as u8
    }
}

impl TryFrom<u8> for CompressionLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CompressionLevel::None),
            1 => Ok(CompressionLevel::Fast),
            2 => Ok(CompressionLevel::Balanced),
            3 => Ok(CompressionLevel::Optimal),
            other => Err(format!("invalid compression level: {other}")),
        }
    }
}
