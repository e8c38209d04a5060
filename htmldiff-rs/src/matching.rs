//! Best-match search between two token sequences.
//!
//! Finds the longest run of identical tokens shared by a slice of the old
//! sequence and a slice of the new sequence, using a position index over the
//! old slice and a rolling run-length table (the classic longest common
//! substring technique). O(n*m) worst case; near-linear for typical HTML
//! where repeated tokens are sparse.

use std::ops::Range;

use rustc_hash::FxHashMap;

use crate::token::Token;

/// A maximal run of identical tokens shared by both sequences.
///
/// Offsets are absolute indices into the full token sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// First matched index in the old sequence.
    pub start_old: usize,
    /// First matched index in the new sequence.
    pub start_new: usize,
    /// Number of matched tokens; always >= 1.
    pub length: usize,
}

impl Match {
    /// Exclusive end of the matched run in the old sequence.
    pub fn end_old(&self) -> usize {
        self.start_old + self.length
    }

    /// Exclusive end of the matched run in the new sequence.
    pub fn end_new(&self) -> usize {
        self.start_new + self.length
    }

    /// Returns true if `self` wins over `other` under the search ordering:
    /// longest run first, ties broken by earliest old position, then
    /// earliest new position.
    fn beats(&self, other: &Match) -> bool {
        (self.length, other.start_old, other.start_new)
            > (other.length, self.start_old, self.start_new)
    }
}

/// Finds the best matching run between `old[old_range]` and
/// `new[new_range]`.
///
/// Returns `None` when the two slices share no token.
pub fn find_best_match(
    old: &[Token],
    new: &[Token],
    old_range: Range<usize>,
    new_range: Range<usize>,
) -> Option<Match> {
    // Position index over the old slice, keyed by raw token text.
    let mut index: FxHashMap<&str, Vec<usize>> = FxHashMap::default();
    for j in old_range.clone() {
        index.entry(old[j].raw()).or_default().push(j);
    }

    let mut best: Option<Match> = None;
    // Run length of the match ending at old position `j` and the previous
    // new position.
    let mut run_lengths: FxHashMap<usize, usize> = FxHashMap::default();

    for i in new_range {
        let mut next_runs: FxHashMap<usize, usize> = FxHashMap::default();
        if let Some(positions) = index.get(new[i].raw()) {
            for &j in positions {
                let length = if j == old_range.start {
                    1
                } else {
                    run_lengths.get(&(j - 1)).copied().unwrap_or(0) + 1
                };
                next_runs.insert(j, length);

                let candidate = Match {
                    start_old: j + 1 - length,
                    start_new: i + 1 - length,
                    length,
                };
                if best.is_none_or(|b| candidate.beats(&b)) {
                    best = Some(candidate);
                }
            }
        }
        run_lengths = next_runs;
    }

    best
}
