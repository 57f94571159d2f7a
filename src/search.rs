//! Sliding-window match search.
//!
//! Two strategies coexist, both grounded in
//! `original_source/app/services/tuya.py::_compress_greedy` /
//! `_compress_optimal`, where they appear as nested closures over a shared
//! `suffixes` list. This module expresses that shared state as an explicit
//! [`SuffixWindow`] object instead of captured mutable closures.

use crate::constants::{MAX_MATCH_LENGTH, MIN_MATCH_LENGTH, WINDOW_SIZE};

/// A candidate back-reference: `length` bytes matched at `distance` bytes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub length: usize,
    pub distance: usize,
}

/// Longest common prefix of `data[pos..]` and `data[pos - distance..]`,
/// capped at `min(MAX_MATCH_LENGTH, data.len() - pos)`.
pub fn match_length(data: &[u8], pos: usize, distance: usize) -> usize {
    let limit = MAX_MATCH_LENGTH.min(data.len() - pos);
    let start = pos - distance;
    let mut len = 0;
    while len < limit && data[pos + len] == data[start + len] {
        len += 1;
    }
    len
}

/// Naive strategy (level `FAST`): scan distances `1..=min(pos, W)` in order
/// and return the first match of at least [`MIN_MATCH_LENGTH`] bytes.
pub fn naive_first_match(data: &[u8], pos: usize) -> Option<Match> {
    let max_distance = pos.min(WINDOW_SIZE);
    for distance in 1..=max_distance {
        let length = match_length(data, pos, distance);
        if length >= MIN_MATCH_LENGTH {
            return Some(Match { length, distance });
        }
    }
    None
}

/// Suffix-array strategy (levels `BALANCED`/`OPTIMAL`): an ordered list of
/// window-relative positions, kept sorted by the lexicographic order of
/// their corresponding suffixes of `data`.
///
/// Equivalent to the Python closures' `suffixes: list[int]` plus `next_pos`
/// nonlocal, reworked here into an owned, explicit state object.
pub struct SuffixWindow {
    suffixes: Vec<usize>,
    next_pos: usize,
}

impl SuffixWindow {
    pub fn new() -> Self {
        SuffixWindow {
            suffixes: Vec::new(),
            next_pos: 0,
        }
    }

    /// Insertion point for the suffix starting at `n`, keeping `suffixes`
    /// sorted by `data[s..]`.
    fn find_idx(&self, n: usize, data: &[u8]) -> usize {
        self.suffixes.partition_point(|&s| data[s..] < data[n..])
    }

    /// Absorb every unobserved position in `[0, pos]` (evicting the entry
    /// that rolls out of the window first), then return the up-to-two
    /// distances of `pos`'s immediate lexicographic neighbours in the list.
    pub fn neighbor_distances(&mut self, pos: usize, data: &[u8]) -> Vec<usize> {
        let mut idx = 0;
        while self.next_pos <= pos {
            if self.suffixes.len() == WINDOW_SIZE {
                let evict = self.find_idx(self.next_pos - WINDOW_SIZE, data);
                self.suffixes.remove(evict);
            }
            idx = self.find_idx(self.next_pos, data);
            self.suffixes.insert(idx, self.next_pos);
            self.next_pos += 1;
        }

        let mut distances = Vec::with_capacity(2);
        if idx + 1 < self.suffixes.len() {
            distances.push(pos - self.suffixes[idx + 1]);
        }
        if idx > 0 {
            distances.push(pos - self.suffixes[idx - 1]);
        }
        distances
    }
}

impl Default for SuffixWindow {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate the suffix-array neighbours of `pos` and return the best one:
/// the candidate maximising `(length, -distance)` — ties broken by the
/// smaller distance.
pub fn best_suffix_match(window: &mut SuffixWindow, data: &[u8], pos: usize) -> Option<Match> {
    window
        .neighbor_distances(pos, data)
        .into_iter()
        .map(|distance| Match {
            length: match_length(data, pos, distance),
            distance,
        })
        .max_by(|a, b| a.length.cmp(&b.length).then(b.distance.cmp(&a.distance)))
}
