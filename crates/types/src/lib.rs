//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rule engine, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The classic playfield is a 4x4 grid. Other sizes between
//! [`MIN_BOARD_SIZE`] and [`MAX_BOARD_SIZE`] are supported by the core through
//! its const generic `Board<N>`.
//!
//! # Tile Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `EMPTY_TILE` | 0 | Value of an empty cell |
//! | `TILE_BASE` | 2 | Every tile is a power of this base |
//! | `WINNING_TILE` | 2048 | Default tile that wins a round |
//! | `MAX_TILE` | 2^20 | Default tile that ends a round early |
//! | `LARGEST_TILE` | 2^30 | Largest tile a constructed board may hold |
//! | `STARTING_TILES` | 2 | Random tiles placed at round start |
//! | `FOUR_TILE_CHANCE` | 0.1 | Probability a spawned tile is a 4 |
//!
//! # Examples
//!
//! ```
//! use twenty48_types::{Direction, Axis, Edge, BOARD_SIZE};
//!
//! let dir = Direction::from_str("DOWN").unwrap();
//! assert_eq!(dir, Direction::Down);
//! assert_eq!(dir.edge(), Edge::Top);
//! assert_eq!(dir.reflection(), Some(Axis::Vertical));
//!
//! assert_eq!(BOARD_SIZE, 4);
//! ```

/// Default board side length (4x4)
pub const BOARD_SIZE: usize = 4;

/// Smallest supported board side length
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest supported board side length
pub const MAX_BOARD_SIZE: usize = 8;

/// Upper bound on the number of cells of any supported board
pub const MAX_CELLS: usize = MAX_BOARD_SIZE * MAX_BOARD_SIZE;

/// Value of an empty cell
pub const EMPTY_TILE: u32 = 0;

/// Every non-empty tile is a power of this base
pub const TILE_BASE: u32 = 2;

/// Default winning tile
pub const WINNING_TILE: u32 = 2048;

/// Default tile that ends a round outright (a seven digit tile)
pub const MAX_TILE: u32 = 1 << 20;

/// Largest tile accepted on a constructed board. Two of them still merge
/// into a `u32`.
pub const LARGEST_TILE: u32 = 1 << 30;

/// Number of random tiles placed on an empty board at round start
pub const STARTING_TILES: usize = 2;

/// Probability that a spawned tile is a 4 instead of a 2
pub const FOUR_TILE_CHANCE: f64 = 0.1;

/// A direction the player can slide the tiles in.
///
/// `Up` and `Left` are the primitive moves; `Down` and `Right` are computed by
/// reflecting the board, applying the primitive move, and reflecting back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions in canonical order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use twenty48_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("Right"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// The edge the tiles are compacted toward once the board has been
    /// reflected into primitive orientation.
    pub fn edge(&self) -> Edge {
        match self {
            Direction::Up | Direction::Down => Edge::Top,
            Direction::Left | Direction::Right => Edge::Left,
        }
    }

    /// Reflection that maps this direction onto its primitive move.
    ///
    /// `None` for the primitive directions themselves.
    pub fn reflection(&self) -> Option<Axis> {
        match self {
            Direction::Up | Direction::Left => None,
            Direction::Down => Some(Axis::Vertical),
            Direction::Right => Some(Axis::Horizontal),
        }
    }

    /// The direction pointing the opposite way.
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Mirror axis for board reflection.
///
/// - **Vertical**: reverses row order (top row becomes bottom row)
/// - **Horizontal**: reverses column order within each row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// The two edges tiles are compacted toward by the primitive moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Columns are packed toward row 0
    Top,
    /// Rows are packed toward column 0
    Left,
}

/// Classification of a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Win,
    Loss,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::InProgress => "in progress",
            Outcome::Win => "win",
            Outcome::Loss => "loss",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Loss)
    }
}

/// Game actions produced by the input layer and consumed by the round driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Slide every tile in a direction
    Move(Direction),
    /// Ask to leave the current round
    Quit,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use twenty48_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("left"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("quit"), Some(GameAction::Quit));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("quit") {
            return Some(GameAction::Quit);
        }
        Direction::from_str(s).map(GameAction::Move)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::Quit => "quit",
        }
    }
}

/// Returns true if `value` is a legal non-empty tile: a power of
/// [`TILE_BASE`] between the base itself and [`LARGEST_TILE`].
pub fn is_tile_value(value: u32) -> bool {
    (TILE_BASE..=LARGEST_TILE).contains(&value) && value.is_power_of_two()
}

/// True if two neighbouring cells combine: equal, non-empty, and the
/// doubled tile still fits in a `u32`.
pub fn tiles_merge(a: u32, b: u32) -> bool {
    a != EMPTY_TILE && a == b && a.checked_mul(2).is_some()
}

/// Exponent of a tile (2 -> 1, 4 -> 2, ...). Empty cells map to 0.
pub fn tile_exponent(value: u32) -> u32 {
    if value == EMPTY_TILE {
        0
    } else {
        value.trailing_zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_rule_constants() {
        assert_eq!(BOARD_SIZE, 4);
        assert_eq!(STARTING_TILES, 2);
        assert_eq!(TILE_BASE, 2);
        assert_eq!(WINNING_TILE, 2048);
        assert_eq!(MAX_TILE, 1_048_576);
        assert!((FOUR_TILE_CHANCE - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn tile_values_are_bounded() {
        assert!(is_tile_value(2));
        assert!(is_tile_value(LARGEST_TILE));
        assert!(!is_tile_value(LARGEST_TILE << 1));
        assert!(!is_tile_value(1));
        assert!(!is_tile_value(0));
    }

    #[test]
    fn merge_needs_room_for_the_doubled_tile() {
        assert!(tiles_merge(4, 4));
        assert!(tiles_merge(LARGEST_TILE, LARGEST_TILE));
        assert!(!tiles_merge(1 << 31, 1 << 31));
        assert!(!tiles_merge(0, 0));
        assert!(!tiles_merge(2, 4));
    }

    #[test]
    fn derived_directions_reflect_onto_primitives() {
        for dir in Direction::ALL {
            match dir.reflection() {
                None => assert!(matches!(dir, Direction::Up | Direction::Left)),
                Some(Axis::Vertical) => assert_eq!(dir.edge(), Edge::Top),
                Some(Axis::Horizontal) => assert_eq!(dir.edge(), Edge::Left),
            }
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
    }

    #[test]
    fn tile_values() {
        assert!(is_tile_value(2));
        assert!(is_tile_value(2048));
        assert!(!is_tile_value(0));
        assert!(!is_tile_value(1));
        assert!(!is_tile_value(6));
        assert_eq!(tile_exponent(0), 0);
        assert_eq!(tile_exponent(2), 1);
        assert_eq!(tile_exponent(2048), 11);
    }

    #[test]
    fn only_loss_is_terminal() {
        assert!(Outcome::Loss.is_terminal());
        assert!(!Outcome::Win.is_terminal());
        assert!(!Outcome::InProgress.is_terminal());
    }
}
