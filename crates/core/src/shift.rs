//! Shifter - compacts tiles toward an edge without merging.

use crate::board::Board;
use crate::types::{Edge, EMPTY_TILE};

/// Pack the non-empty tiles of a line toward index 0, keeping their order.
pub fn shift_line<const N: usize>(line: [u32; N]) -> [u32; N] {
    let mut out = [EMPTY_TILE; N];
    let mut next = 0;
    for tile in line.into_iter().filter(|&t| t != EMPTY_TILE) {
        out[next] = tile;
        next += 1;
    }
    out
}

/// Compact every column toward the top ([`Edge::Top`]) or every row toward
/// the left ([`Edge::Left`]).
pub fn shift<const N: usize>(board: &Board<N>, edge: Edge) -> Board<N> {
    let mut out = Board::new();
    for k in 0..N {
        out.set_line(edge, k, shift_line(board.line(edge, k)));
    }
    out
}
