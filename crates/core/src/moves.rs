//! Move composer - the four directional moves.
//!
//! Only two moves are implemented directly: up and left are
//! `shift -> merge -> shift` toward the top or left edge. Down and right
//! reflect the board (vertically or horizontally), run the primitive move and
//! reflect the result back.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::geometry::reflect;
use crate::merge::merge;
use crate::shift::shift;
use crate::types::{Direction, Edge};

/// Result of sliding a board in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveResult<const N: usize> {
    /// The board after the move (no random tile added)
    pub board: Board<N>,
    /// Sum of the tiles produced by merges during the move
    pub score: u32,
    /// False if no tile could move or merge; the board is then unchanged
    pub moved: bool,
}

/// Shift, merge, shift toward one of the primitive edges.
pub fn primitive_move<const N: usize>(board: &Board<N>, edge: Edge) -> (Board<N>, u32) {
    let packed = shift(board, edge);
    let (merged, score) = merge(&packed, edge);
    (shift(&merged, edge), score)
}

/// Slide every tile of `board` in `direction`.
///
/// ```
/// use twenty48_core::{apply_move, Board};
/// use twenty48_core::types::Direction;
///
/// let board = Board::from_rows([[0, 2, 2, 8], [4, 0, 0, 8], [0, 2, 0, 0], [2, 0, 0, 2]]).unwrap();
/// let result = apply_move(&board, Direction::Up);
/// assert_eq!(result.board.rows(), &[[4, 4, 2, 16], [2, 0, 0, 2], [0; 4], [0; 4]]);
/// assert_eq!(result.score, 20);
/// assert!(result.moved);
/// ```
pub fn apply_move<const N: usize>(board: &Board<N>, direction: Direction) -> MoveResult<N> {
    let edge = direction.edge();
    let (after, score) = match direction.reflection() {
        None => primitive_move(board, edge),
        Some(axis) => {
            let (moved, score) = primitive_move(&reflect(board, axis), edge);
            (reflect(&moved, axis), score)
        }
    };

    MoveResult {
        board: after,
        score,
        moved: after != *board,
    }
}

/// True if sliding in `direction` would change the board.
pub fn can_move<const N: usize>(board: &Board<N>, direction: Direction) -> bool {
    apply_move(board, direction).moved
}

/// Every direction that changes the board, in `Direction::ALL` order.
pub fn legal_moves<const N: usize>(board: &Board<N>) -> ArrayVec<Direction, 4> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| can_move(board, dir))
        .collect()
}
