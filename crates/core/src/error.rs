//! Error types for the rule engine.
//!
//! Rule operations are total over well-formed boards, so errors only arise at
//! the edges: building a board from untrusted data, or asking for a random
//! tile on a board with no room left.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A board was built from rows of the wrong shape.
    #[error("board must be {expected}x{expected}, got {rows} rows with a {cols}-wide row")]
    Dimensions {
        expected: usize,
        rows: usize,
        cols: usize,
    },

    /// A non-empty cell holds something other than a power of two >= 2.
    #[error("invalid tile {value} at row {row}, column {col}")]
    InvalidTile { row: usize, col: usize, value: u32 },

    /// `add_random_tile` was called on a board with no empty cell.
    #[error("cannot add a tile to a full board")]
    BoardFull,
}

pub type Result<T> = std::result::Result<T, CoreError>;
