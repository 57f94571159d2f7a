//! Integration tests for sliding-window match search.

use btu::search::{best_suffix_match, naive_first_match, SuffixWindow};

#[test]
fn test_naive_and_suffix_agree_on_simple_repetition() {
    let data = b"the quick brown fox the quick brown fox";
    let pos = 20;
    let naive = naive_first_match(data, pos).unwrap();

    let mut window = SuffixWindow::new();
    let suffix = best_suffix_match(&mut window, data, pos).unwrap();

    assert_eq!(naive.distance, suffix.distance);
    assert_eq!(naive.length, suffix.length);
}

#[test]
fn test_no_match_below_window_start() {
    let data = b"abcdefgh";
    assert!(naive_first_match(data, 0).is_none());
}

#[test]
fn test_suffix_window_persists_state_across_calls() {
    let data = b"ababababab";
    let mut window = SuffixWindow::new();
    for pos in 2..data.len() {
        let _ = best_suffix_match(&mut window, data, pos);
    }
    let best = best_suffix_match(&mut window, data, data.len() - 1);
    assert!(best.is_none() || best.unwrap().distance <= data.len());
}
