//! Board module - the grid of tiles
//!
//! The board is an NxN grid (4x4 by default) where each cell holds 0 (empty)
//! or a power of two >= 2. Storage is a fixed-size row-major array so a board
//! is a plain `Copy` value: every rule operation takes one board and builds a
//! fresh one, nothing is shared or mutated behind the caller's back.
//!
//! Coordinates are `(row, col)`; row 0 is the top edge, column 0 the left edge.

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::{CoreError, Result};
use crate::types::{
    is_tile_value, Edge, BOARD_SIZE, EMPTY_TILE, MAX_BOARD_SIZE, MAX_CELLS, MIN_BOARD_SIZE,
};

/// Width of a tile column in the text rendering.
const TILE_WIDTH: usize = 6;

/// An NxN 2048 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board<const N: usize = BOARD_SIZE> {
    /// Row-major cells, `cells[row][col]`
    cells: [[u32; N]; N],
}

impl<const N: usize> Board<N> {
    const SIZE_OK: () = assert!(
        N >= MIN_BOARD_SIZE && N <= MAX_BOARD_SIZE,
        "unsupported board size"
    );

    /// Create a new empty board
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::SIZE_OK;
        Self {
            cells: [[EMPTY_TILE; N]; N],
        }
    }

    /// Build a board from rows, validating every cell.
    ///
    /// ```
    /// use twenty48_core::Board;
    ///
    /// let board = Board::from_rows([[0, 2, 0, 0], [0, 0, 0, 0], [0, 0, 4, 0], [0, 0, 0, 0]]).unwrap();
    /// assert_eq!(board.get(2, 2), Some(4));
    /// assert!(Board::from_rows([[3, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).is_err());
    /// ```
    pub fn from_rows(rows: [[u32; N]; N]) -> Result<Self> {
        #[allow(clippy::let_unit_value)]
        let () = Self::SIZE_OK;
        for (row, line) in rows.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value != EMPTY_TILE && !is_tile_value(value) {
                    return Err(CoreError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Self { cells: rows })
    }

    /// Wrap rows that are already known to hold legal tiles
    pub(crate) fn from_trusted(rows: [[u32; N]; N]) -> Self {
        Self { cells: rows }
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        N
    }

    /// Get tile at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Borrow the rows of the board
    pub fn rows(&self) -> &[[u32; N]; N] {
        &self.cells
    }

    /// Consume the board, returning its rows
    pub fn into_rows(self) -> [[u32; N]; N] {
        self.cells
    }

    /// Iterate over all tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// True if any cell holds exactly `value`
    pub fn has_value(&self, value: u32) -> bool {
        self.tiles().any(|tile| tile == value)
    }

    /// True if at least one cell is empty
    pub fn has_empty(&self) -> bool {
        self.has_value(EMPTY_TILE)
    }

    /// True if no cell is empty
    pub fn is_full(&self) -> bool {
        !self.has_empty()
    }

    pub fn count_empty(&self) -> usize {
        self.tiles().filter(|&tile| tile == EMPTY_TILE).count()
    }

    /// Coordinates of every empty cell in row-major order.
    ///
    /// Stack-only; a supported board never has more than `MAX_CELLS` cells.
    pub fn empty_cells(&self) -> ArrayVec<(usize, usize), MAX_CELLS> {
        let mut out = ArrayVec::new();
        for (row, line) in self.cells.iter().enumerate() {
            for (col, &tile) in line.iter().enumerate() {
                if tile == EMPTY_TILE {
                    out.push((row, col));
                }
            }
        }
        out
    }

    /// Largest tile on the board (0 for an empty board)
    pub fn max_tile(&self) -> u32 {
        self.tiles().max().unwrap_or(EMPTY_TILE)
    }

    /// Sum of all tiles
    pub fn tile_sum(&self) -> u64 {
        self.tiles().map(u64::from).sum()
    }

    /// Copy of this board with one cell replaced
    pub(crate) fn with_tile(mut self, row: usize, col: usize, value: u32) -> Self {
        self.cells[row][col] = value;
        self
    }

    /// The `k`-th line read from `edge` inward: column `k` top to bottom for
    /// [`Edge::Top`], row `k` left to right for [`Edge::Left`].
    pub(crate) fn line(&self, edge: Edge, k: usize) -> [u32; N] {
        match edge {
            Edge::Left => self.cells[k],
            Edge::Top => {
                let mut line = [EMPTY_TILE; N];
                for (i, slot) in line.iter_mut().enumerate() {
                    *slot = self.cells[i][k];
                }
                line
            }
        }
    }

    /// Inverse of [`Board::line`]
    pub(crate) fn set_line(&mut self, edge: Edge, k: usize, line: [u32; N]) {
        match edge {
            Edge::Left => self.cells[k] = line,
            Edge::Top => {
                for (i, &tile) in line.iter().enumerate() {
                    self.cells[i][k] = tile;
                }
            }
        }
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> TryFrom<Vec<Vec<u32>>> for Board<N> {
    type Error = CoreError;

    fn try_from(rows: Vec<Vec<u32>>) -> Result<Self> {
        let bad_row = rows.iter().find(|row| row.len() != N);
        if rows.len() != N || bad_row.is_some() {
            return Err(CoreError::Dimensions {
                expected: N,
                rows: rows.len(),
                cols: bad_row.or(rows.first()).map_or(0, Vec::len),
            });
        }

        let mut cells = [[EMPTY_TILE; N]; N];
        for (dst, src) in cells.iter_mut().zip(&rows) {
            dst.copy_from_slice(src);
        }
        Self::from_rows(cells)
    }
}

/// Double-line box drawing, empty cells left blank:
///
/// ```text
/// ╔══════╦══════╗
/// ║     2║      ║
/// ╠══════╬══════╣
/// ║      ║  2048║
/// ╚══════╩══════╝
/// ```
impl<const N: usize> fmt::Display for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = |f: &mut fmt::Formatter<'_>, left: char, mid: char, right: char| {
            write!(f, "{}", left)?;
            for col in 0..N {
                write!(f, "{}", "═".repeat(TILE_WIDTH))?;
                write!(f, "{}", if col + 1 == N { right } else { mid })?;
            }
            writeln!(f)
        };

        for (i, row) in self.cells.iter().enumerate() {
            if i == 0 {
                rule(f, '╔', '╦', '╗')?;
            } else {
                rule(f, '╠', '╬', '╣')?;
            }
            write!(f, "║")?;
            for &tile in row {
                if tile == EMPTY_TILE {
                    write!(f, "{:w$}║", "", w = TILE_WIDTH)?;
                } else {
                    write!(f, "{:>w$}║", tile, w = TILE_WIDTH)?;
                }
            }
            writeln!(f)?;
        }
        rule(f, '╚', '╩', '╝')
    }
}
