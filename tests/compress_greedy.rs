//! Integration tests for the greedy Tuya-Stream compressor.

#[path = "common/mod.rs"]
mod common;

use btu::compress::compress_greedy;
use btu::level::GreedyLevel;

#[test]
fn test_fast_level_compresses_highly_repetitive_data() {
    let data = b"0123456789".repeat(20);
    let out = compress_greedy(GreedyLevel::Fast, &data).unwrap();
    assert!(out.len() < data.len());
}

#[test]
fn test_balanced_level_never_worse_than_fast_on_repetitive_data() {
    let data = b"mississippi river mississippi river mississippi river".to_vec();
    let fast = compress_greedy(GreedyLevel::Fast, &data).unwrap();
    let balanced = compress_greedy(GreedyLevel::Balanced, &data).unwrap();
    assert!(balanced.len() <= fast.len());
}

#[test]
fn test_random_looking_data_falls_back_to_near_literal_size() {
    let data: Vec<u8> = (0u8..=255).collect();
    let out = compress_greedy(GreedyLevel::Balanced, &data).unwrap();
    // no repetition at all: one header byte per 32-byte chunk.
    assert_eq!(out.len(), data.len() + (data.len() + 31) / 32);
}

#[test]
fn test_fast_and_balanced_decompress_back_to_the_original_bytes() {
    let fixtures: &[&[u8]] = &[
        b"0123456789",
        b"mississippi river mississippi river mississippi river",
        b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        b"abcabcabcxyzxyzabcabcxyzabcxyzxyz",
    ];

    for data in fixtures {
        for level in [GreedyLevel::Fast, GreedyLevel::Balanced] {
            let out = compress_greedy(level, data).unwrap();
            assert_eq!(common::decompress(&out), *data);
        }
    }
}
