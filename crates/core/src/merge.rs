//! Merger - combines adjacent equal tiles.
//!
//! A merge pass is a single sweep from the edge inward over the pairs
//! `(k, k+1)`. When a pair merges, `k` doubles and `k+1` is cleared, so the
//! cleared cell can never be the first operand of the next comparison: a run
//! of three equal tiles merges once (`2,2,2 -> 4,0,2`), never twice. The pass
//! leaves gaps behind; the move composer closes them with a second shift.
//!
//! A pair whose doubled tile would not fit in a `u32` stays put.

use crate::board::Board;
use crate::types::{tiles_merge, Edge, EMPTY_TILE};

/// Merge one line in place, returning the score (sum of produced tiles).
pub fn merge_line<const N: usize>(line: &mut [u32; N]) -> u32 {
    let mut score: u32 = 0;
    for k in 0..N.saturating_sub(1) {
        if tiles_merge(line[k], line[k + 1]) {
            line[k] *= 2;
            line[k + 1] = EMPTY_TILE;
            score = score.saturating_add(line[k]);
        }
    }
    score
}

/// Merge every column toward the top or every row toward the left.
///
/// Returns the merged board and the score gained.
pub fn merge<const N: usize>(board: &Board<N>, edge: Edge) -> (Board<N>, u32) {
    let mut out = Board::new();
    let mut score: u32 = 0;
    for k in 0..N {
        let mut line = board.line(edge, k);
        score = score.saturating_add(merge_line(&mut line));
        out.set_line(edge, k, line);
    }
    (out, score)
}
