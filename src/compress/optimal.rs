//! Optimal compressor: level `OPTIMAL`.
//!
//! Grounded in `TuyaCompressor._compress_optimal` in
//! `original_source/app/services/tuya.py`. Builds a DAG where each position
//! has an edge for every literal run (cost `1 + length`, up to 32 bytes) and
//! every back-reference length up to the best suffix-window match (cost `2`
//! for `length < 9`, `3` otherwise — the two- and three-byte distance-block
//! forms), then takes the shortest path from `0` to `data.len()` and emits
//! the blocks on the winning path.

use crate::block::{emit_distance_block, emit_literal_block};
use crate::constants::{MAX_LITERAL_LENGTH, MIN_MATCH_LENGTH};
use crate::error::CompressionError;
use crate::search::{best_suffix_match, SuffixWindow};

/// One edge of the shortest path: `length` bytes consumed, ending at this
/// node with total `cost`. `distance == 0` marks a literal edge.
#[derive(Clone, Copy)]
struct Edge {
    cost: u64,
    length: usize,
    distance: usize,
}

/// Relax the edge from `pos` to `pos + length`, keeping the cheaper of the
/// existing and candidate paths.
fn put_edge(predecessors: &mut [Option<Edge>], pos: usize, edge_cost: u64, length: usize, distance: usize) {
    let npos = pos + length;
    let cost = edge_cost + predecessors[pos].expect("pos is always reachable").cost;
    let better = match predecessors[npos] {
        Some(current) => cost < current.cost,
        None => true,
    };
    if better {
        predecessors[npos] = Some(Edge {
            cost,
            length,
            distance,
        });
    }
}

/// Run the optimal compressor over `data`.
pub fn compress_optimal(data: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut predecessors: Vec<Option<Edge>> = vec![None; data.len() + 1];
    predecessors[0] = Some(Edge {
        cost: 0,
        length: 0,
        distance: 0,
    });

    let mut window = SuffixWindow::new();

    for pos in 0..data.len() {
        if let Some(best) = best_suffix_match(&mut window, data, pos) {
            for length in MIN_MATCH_LENGTH..=best.length {
                let cost = if length < 9 { 2 } else { 3 };
                put_edge(&mut predecessors, pos, cost, length, best.distance);
            }
        }

        let max_literal = MAX_LITERAL_LENGTH.min(data.len() - pos);
        for length in 1..=max_literal {
            put_edge(&mut predecessors, pos, 1 + length as u64, length, 0);
        }
    }

    let mut blocks = Vec::new();
    let mut pos = data.len();
    while pos > 0 {
        let edge = predecessors[pos].expect("every node on the winning path is reachable");
        pos -= edge.length;
        blocks.push((pos, edge.length, edge.distance));
    }

    let mut out = Vec::new();
    for (pos, length, distance) in blocks.into_iter().rev() {
        if distance == 0 {
            emit_literal_block(&mut out, &data[pos..pos + length])?;
        } else {
            emit_distance_block(&mut out, length, distance)?;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_produces_empty_output() {
        assert!(compress_optimal(&[]).unwrap().is_empty());
    }

    #[test]
    fn single_byte_is_a_literal() {
        let out = compress_optimal(b"a").unwrap();
        assert_eq!(out, vec![0, b'a']);
    }

    #[test]
    fn no_repetition_emits_one_literal_run() {
        let data = b"abcdefgh";
        let out = compress_optimal(data).unwrap();
        assert_eq!(out[0], data.len() as u8 - 1);
        assert_eq!(&out[1..], data);
    }

    #[test]
    fn repetition_is_never_larger_than_literal_encoding() {
        let data = b"abcabcabcabcabcabcabcabc";
        let out = compress_optimal(data).unwrap();
        assert!(out.len() < data.len());
    }

    #[test]
    fn optimal_is_never_worse_than_greedy_balanced() {
        use crate::compress::greedy::compress_greedy;
        use crate::level::GreedyLevel;

        let data = b"abcabcabcxyzxyzabcabcxyzabcxyzxyz";
        let greedy = compress_greedy(GreedyLevel::Balanced, data).unwrap();
        let optimal = compress_optimal(data).unwrap();
        assert!(optimal.len() <= greedy.len());
    }
}
