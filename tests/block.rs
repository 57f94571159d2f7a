//! Integration tests for Tuya-Stream block emission.

use btu::block::{emit_distance_block, emit_literal_run};
use btu::constants::{MAX_LITERAL_LENGTH, WINDOW_SIZE};

#[test]
fn test_literal_run_then_distance_block_round_trip_sizes() {
    let mut out = Vec::new();
    emit_literal_run(&mut out, b"hello world").unwrap();
    emit_distance_block(&mut out, 10, 500).unwrap();
    assert!(out.len() > 11);
}

#[test]
fn test_literal_run_handles_exact_multiple_of_max_length() {
    let mut out = Vec::new();
    let data = vec![0x42u8; MAX_LITERAL_LENGTH * 3];
    emit_literal_run(&mut out, &data).unwrap();
    // three blocks, each a 1-byte header + 32 bytes
    assert_eq!(out.len(), 3 * (1 + MAX_LITERAL_LENGTH));
}

#[test]
fn test_distance_block_rejects_distance_beyond_window() {
    let mut out = Vec::new();
    assert!(emit_distance_block(&mut out, 5, WINDOW_SIZE + 1).is_err());
}

#[test]
fn test_distance_block_accepts_max_window_distance() {
    let mut out = Vec::new();
    emit_distance_block(&mut out, 5, WINDOW_SIZE).unwrap();
    assert!(!out.is_empty());
}
