//! Greedy compressor: levels `FAST` and `BALANCED`.
//!
//! Grounded in `TuyaCompressor._compress_greedy` in
//! `original_source/app/services/tuya.py`. The two levels differ only in
//! which match-search strategy feeds the loop: `FAST` takes the first
//! viable match ([`naive_first_match`]), `BALANCED` takes the best of the
//! suffix window's immediate neighbours ([`best_suffix_match`]).

use crate::block::{emit_distance_block, emit_literal_run};
use crate::constants::MIN_MATCH_LENGTH;
use crate::error::CompressionError;
use crate::level::GreedyLevel;
use crate::search::{best_suffix_match, naive_first_match, Match, SuffixWindow};

/// Run the greedy compressor over `data` at `level` (`FAST` or `BALANCED`).
pub fn compress_greedy(level: GreedyLevel, data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut out = Vec::new();
    let mut window = SuffixWindow::new();
    let mut block_start = 0;
    let mut pos = 0;

    while pos < data.len() {
        let candidate = match level {
            GreedyLevel::Fast => naive_first_match(data, pos),
            GreedyLevel::Balanced => best_suffix_match(&mut window, data, pos)
                .filter(|m: &Match| m.length >= MIN_MATCH_LENGTH),
        };

        match candidate {
            Some(m) => {
                emit_literal_run(&mut out, &data[block_start..pos])?;
                emit_distance_block(&mut out, m.length, m.distance)?;
                pos += m.length;
                block_start = pos;
            }
            None => pos += 1,
        }
    }

    emit_literal_run(&mut out, &data[block_start..pos])?;
    Ok(out)
}
