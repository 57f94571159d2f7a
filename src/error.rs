//! Crate-wide error types.
//!
//! Mirrors the Python original's `BTUError` hierarchy
//! (`app/services/exceptions.py`): a family per failure domain, joined under
//! one top-level enum so callers can match broadly or narrowly. Follows the
//! teacher's manual `Display`/`Error` impl style (see `frame::types::Lz4FError`
//! in the reference LZ4 port) rather than pulling in a derive-macro crate.

use std::fmt;

/// Top-level error type for every fallible operation this crate exposes.
///
/// `validation` failures (oversized files, bad extensions, malformed JSON
/// text) belong to upstream collaborators — an HTTP façade or a SmartIR file
/// walker — and are never raised here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BtuError {
    /// Malformed Broadlink input or a timing list that can't be encoded.
    IrCode(IrCodeError),
    /// A block-emitter invariant was violated. Indicates a compressor bug;
    /// callers should treat this as fatal rather than retry.
    Compression(CompressionError),
}

/// Failure decoding a Broadlink capture or preparing timings for encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrCodeError {
    /// The Base64 payload was empty.
    EmptyInput,
    /// The string was not valid Base64.
    InvalidBase64(String),
    /// Fewer than 4 decoded bytes; no room for a length-prefixed header.
    HeaderTooShort { len: usize },
    /// A `0x00` escape byte appeared with fewer than two bytes remaining.
    TruncatedExtendedValue,
    /// `encode` was called with an empty timing list.
    EmptyTimingList,
    /// Every timing was `>= 65535` and got filtered out, leaving nothing to encode.
    AllTimingsFiltered,
}

/// A block-emitter invariant was violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompressionError {
    /// Literal block payload length outside `[1, 32]`.
    InvalidLiteralLength { len: usize },
    /// Back-reference distance outside `[1, 8192]`.
    InvalidDistance { distance: usize },
    /// Back-reference length outside `[3, 264]`.
    InvalidMatchLength { length: usize },
}

impl fmt::Display for BtuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BtuError::IrCode(e) => write!(f, "{e}"),
            BtuError::Compression(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for IrCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrCodeError::EmptyInput => write!(f, "empty Broadlink code"),
            IrCodeError::InvalidBase64(msg) => write!(f, "invalid base64: {msg}"),
            IrCodeError::HeaderTooShort { len } => {
                write!(f, "Broadlink header too short: {len} hex characters")
            }
            IrCodeError::TruncatedExtendedValue => {
                write!(f, "truncated extended timing value")
            }
            IrCodeError::EmptyTimingList => write!(f, "empty timing list"),
            IrCodeError::AllTimingsFiltered => {
                write!(f, "all timings exceeded 65535 and were filtered out")
            }
        }
    }
}

impl fmt::Display for CompressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressionError::InvalidLiteralLength { len } => {
                write!(f, "invalid literal block length: {len}")
            }
            CompressionError::InvalidDistance { distance } => {
                write!(f, "invalid back-reference distance: {distance}")
            }
            CompressionError::InvalidMatchLength { length } => {
                write!(f, "invalid back-reference length: {length}")
            }
        }
    }
}

impl std::error::Error for BtuError {}
impl std::error::Error for IrCodeError {}
impl std::error::Error for CompressionError {}

impl From<IrCodeError> for BtuError {
    fn from(e: IrCodeError) -> Self {
        BtuError::IrCode(e)
    }
}

impl From<CompressionError> for BtuError {
    fn from(e: CompressionError) -> Self {
        BtuError::Compression(e)
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BtuError>;
