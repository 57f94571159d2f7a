//! Tuya-Stream compression, with three distinct strategies behind one entry point.
//!
//! Grounded in `TuyaCompressor.compress` in
//! `original_source/app/services/tuya.py`, which dispatches on
//! `self._level` between literal-only, greedy, and optimal paths.

pub mod greedy;
pub mod optimal;

use tracing::debug;

use crate::error::CompressionError;
use crate::level::{CompressionLevel, GreedyLevel};

pub use greedy::compress_greedy;
pub use optimal::compress_optimal;

/// Compress `data` into Tuya-Stream bytes at the given level.
pub fn compress(level: CompressionLevel, data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    debug!(input_len = data.len(), ?level, "compression started");

    let out = match level {
        CompressionLevel::None => {
            let mut out = Vec::new();
            crate::block::emit_literal_run(&mut out, data)?;
            out
        }
        CompressionLevel::Fast => compress_greedy(GreedyLevel::Fast, data)?,
        CompressionLevel::Balanced => compress_greedy(GreedyLevel::Balanced, data)?,
        CompressionLevel::Optimal => compress_optimal(data)?,
    };

    let ratio = if data.is_empty() {
        0.0
    } else {
        out.len() as f64 / data.len() as f64
    };
    debug!(output_len = out.len(), ratio, "compression finished");
    Ok(out)
}
