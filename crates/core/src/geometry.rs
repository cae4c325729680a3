//! Geometry - empty boards and mirror reflections.
//!
//! Reflection is what lets the move composer implement only the two primitive
//! moves (up, left): a down move is an up move on the vertically mirrored
//! board, a right move is a left move on the horizontally mirrored one.

use crate::board::Board;
use crate::types::Axis;

/// A board with every cell empty.
pub fn empty_board<const N: usize>() -> Board<N> {
    Board::new()
}

/// Mirror a board across its central rows or columns.
///
/// - [`Axis::Vertical`]: row `i` becomes row `N-1-i`
/// - [`Axis::Horizontal`]: column `j` becomes column `N-1-j`
///
/// Applying the same reflection twice returns the original board.
pub fn reflect<const N: usize>(board: &Board<N>, axis: Axis) -> Board<N> {
    let mut rows = *board.rows();
    match axis {
        Axis::Vertical => rows.reverse(),
        Axis::Horizontal => rows.iter_mut().for_each(|row| row.reverse()),
    }
    Board::from_trusted(rows)
}
