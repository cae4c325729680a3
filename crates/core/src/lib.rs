//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 rule engine and the round state built on it.
//! It has **zero dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical rounds
//! - **Testable**: Every rule is a pure function from board to board
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: NxN tile grid (4x4 by default) with validation
//! - [`geometry`]: Empty boards and vertical/horizontal reflection
//! - [`shift`]: Compaction of tiles toward an edge
//! - [`merge`]: Single-sweep merging of equal neighbours
//! - [`moves`]: The four directional moves composed from the above
//! - [`rng`]: Random 2/4 tile insertion
//! - [`outcome`]: Win/loss/in-progress evaluation
//! - [`game_state`]: One round: turn sequencing, score, win flag
//!
//! # Game Rules
//!
//! - **Move**: shift, merge, shift toward the edge; down and right are the up
//!   and left moves on a mirrored board
//! - **Merge**: two equal neighbours become one tile of twice the value, and a
//!   tile merges at most once per move (`2,2,2` left is `4,2,0`)
//! - **Score**: every merge scores the value of the tile it produces
//! - **Spawn**: after each move that changes the board, a 2 (90%) or 4 (10%)
//!   lands on a random empty cell
//! - **Win**: the 2048 tile appears (reported once per round)
//! - **Loss**: the board is full and no two neighbours are equal
//!
//! # Example
//!
//! ```
//! use twenty48_core::{GameState, Rules};
//! use twenty48_core::types::Direction;
//!
//! let mut game: GameState = GameState::new(12345, Rules::default());
//! game.start();
//!
//! for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
//!     game.apply_move(dir);
//! }
//!
//! assert!(game.board().count_empty() < 16);
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod geometry;
pub mod merge;
pub mod moves;
pub mod outcome;
pub mod rng;
pub mod shift;
pub mod snapshot;

pub use twenty48_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::CoreError;
pub use game_state::{GameState, LastMove, RoundStatus, Turn};
pub use geometry::{empty_board, reflect};
pub use merge::merge;
pub use moves::{apply_move, can_move, legal_moves, MoveResult};
pub use outcome::{evaluate, has_adjacent_pair, has_value, Rules};
pub use rng::{add_random_tile, random_tile_value, TileSpawner};
pub use shift::shift;
pub use snapshot::GameSnapshot;
