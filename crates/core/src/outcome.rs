//! Outcome evaluator - win, loss, or still in progress.
//!
//! Evaluation order matters:
//!
//! 1. the winning tile is on the board and the round has not already won → `Win`
//! 2. any empty cell → `InProgress`
//! 3. any equal pair of row neighbours or column neighbours → `InProgress`
//! 4. otherwise → `Loss`
//!
//! So a winning board is reported as a win even when it is also dead, and a
//! full board with a merge left is never a loss. The evaluator keeps no state;
//! the caller passes in whether the round has already registered its win.

use crate::board::Board;
use crate::types::{is_tile_value, tiles_merge, Outcome, MAX_TILE, TILE_BASE, WINNING_TILE};

/// Round thresholds, overridable for non-default games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rules {
    /// Tile that wins the round
    pub win_tile: u32,
    /// Tile that ends the round outright, if any
    pub max_tile: Option<u32>,
}

impl Rules {
    pub fn new(win_tile: u32, max_tile: Option<u32>) -> Self {
        Self { win_tile, max_tile }
    }

    /// True if both thresholds are legal tiles above [`TILE_BASE`] and the
    /// max tile is not below the win tile.
    pub fn is_valid(&self) -> bool {
        let threshold = |tile: u32| is_tile_value(tile) && tile > TILE_BASE;
        threshold(self.win_tile)
            && self
                .max_tile
                .map_or(true, |max| threshold(max) && max >= self.win_tile)
    }

    /// Classify `board` under these rules.
    pub fn evaluate<const N: usize>(&self, board: &Board<N>, already_won: bool) -> Outcome {
        if !already_won && board.has_value(self.win_tile) {
            Outcome::Win
        } else if board.has_empty() || has_adjacent_pair(board) {
            Outcome::InProgress
        } else {
            Outcome::Loss
        }
    }

    /// True if the board holds the early-termination tile.
    pub fn reached_max_tile<const N: usize>(&self, board: &Board<N>) -> bool {
        self.max_tile.map_or(false, |max| board.has_value(max))
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            win_tile: WINNING_TILE,
            max_tile: Some(MAX_TILE),
        }
    }
}

/// Classify `board` under the default rules (2048 wins).
///
/// ```
/// use twenty48_core::{evaluate, Board};
/// use twenty48_core::types::Outcome;
///
/// let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();
/// assert_eq!(evaluate(&board, false), Outcome::Loss);
/// ```
pub fn evaluate<const N: usize>(board: &Board<N>, already_won: bool) -> Outcome {
    Rules::default().evaluate(board, already_won)
}

/// True if any cell holds exactly `value`.
pub fn has_value<const N: usize>(board: &Board<N>, value: u32) -> bool {
    board.has_value(value)
}

/// True if two row neighbours or two column neighbours would merge.
pub fn has_adjacent_pair<const N: usize>(board: &Board<N>) -> bool {
    let rows = board.rows();
    for r in 0..N {
        for c in 0..N {
            let tile = rows[r][c];
            if tile == 0 {
                continue;
            }
            if c + 1 < N && tiles_merge(tile, rows[r][c + 1]) {
                return true;
            }
            if r + 1 < N && tiles_merge(tile, rows[r + 1][c]) {
                return true;
            }
        }
    }
    false
}
