use crate::game_state::{LastMove, RoundStatus};
use crate::types::{BOARD_SIZE, WINNING_TILE};

/// Render-ready copy of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot<const N: usize = BOARD_SIZE> {
    pub board: [[u32; N]; N],
    pub score: u32,
    pub moves: u32,
    pub won: bool,
    pub status: RoundStatus,
    pub episode_id: u32,
    pub seed: u64,
    pub last_move: Option<LastMove>,
    pub win_tile: u32,
    pub best_tile: u32,
}

impl<const N: usize> GameSnapshot<N> {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True while moves are accepted.
    pub fn playable(&self) -> bool {
        self.status == RoundStatus::Playing
    }

    pub fn size(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for GameSnapshot<N> {
    fn default() -> Self {
        Self {
            board: [[0; N]; N],
            score: 0,
            moves: 0,
            won: false,
            status: RoundStatus::NotStarted,
            episode_id: 0,
            seed: 0,
            last_move: None,
            win_tile: WINNING_TILE,
            best_tile: 0,
        }
    }
}
