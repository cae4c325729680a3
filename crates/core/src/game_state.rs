//! Game state module - one round of 2048
//!
//! This module ties together the rule engine: board, moves, tile spawning and
//! outcome evaluation. It sequences turns, accumulates the round score, and
//! tracks the one piece of cross-turn context the evaluator needs (whether the
//! round has already won). It performs no I/O; the terminal driver renders
//! snapshots and feeds actions in.

use log::{debug, info};

use crate::board::Board;
use crate::moves::apply_move;
use crate::outcome::Rules;
use crate::rng::TileSpawner;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction, Outcome, BOARD_SIZE, STARTING_TILES};

/// Lifecycle of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    /// Board is empty, starting tiles not placed yet
    NotStarted,
    /// Accepting moves
    Playing,
    /// The winning tile was just made; waiting for continue or exit
    Won,
    /// No move is left
    Lost,
    /// The max tile was reached and the round stopped
    Ended,
    /// The player left the round
    Quit,
}

impl RoundStatus {
    /// True once the round can no longer continue.
    pub fn is_over(&self) -> bool {
        matches!(self, RoundStatus::Lost | RoundStatus::Ended | RoundStatus::Quit)
    }
}

/// The last accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LastMove {
    pub direction: Direction,
    pub score: u32,
}

/// Result of a single turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Nothing changed: the move was a no-op or the round is not accepting
    /// moves. No tile was added and no turn was consumed.
    Rejected,
    /// The board changed.
    Moved { score: u32, outcome: Outcome },
}

/// Complete round state
#[derive(Debug, Clone)]
pub struct GameState<const N: usize = BOARD_SIZE> {
    board: Board<N>,
    spawner: TileSpawner,
    rules: Rules,
    score: u32,
    moves: u32,
    /// Set once the winning tile has been reported; suppresses later wins.
    won: bool,
    status: RoundStatus,
    /// Monotonic round id (increments on restart).
    episode_id: u32,
    last_move: Option<LastMove>,
}

impl<const N: usize> GameState<N> {
    /// Create a new round with the given RNG seed and rules
    pub fn new(seed: u64, rules: Rules) -> Self {
        Self {
            board: Board::new(),
            spawner: TileSpawner::new(seed),
            rules,
            score: 0,
            moves: 0,
            won: false,
            status: RoundStatus::NotStarted,
            episode_id: 0,
            last_move: None,
        }
    }

    /// Create a round already in progress on `board`.
    pub fn with_board(board: Board<N>, seed: u64, rules: Rules) -> Self {
        let mut state = Self::new(seed, rules);
        state.board = board;
        state.status = RoundStatus::Playing;
        state.settle();
        state
    }

    /// Place the starting tiles and begin accepting moves
    pub fn start(&mut self) {
        if self.status != RoundStatus::NotStarted {
            return;
        }
        for _ in 0..STARTING_TILES {
            match self.spawner.spawn(&self.board) {
                Ok(next) => self.board = next,
                Err(err) => debug!("starting tile skipped: {}", err),
            }
        }
        self.status = RoundStatus::Playing;
        info!(
            "round {} started (seed {})",
            self.episode_id,
            self.spawner.seed()
        );
        self.settle();
    }

    /// Throw the round away and start a fresh one
    pub fn restart(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.spawner.reseed();
        self.board = Board::new();
        self.score = 0;
        self.moves = 0;
        self.won = false;
        self.last_move = None;
        self.status = RoundStatus::NotStarted;
        self.start();
    }

    pub fn board(&self) -> &Board<N> {
        &self.board
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u64 {
        self.spawner.seed()
    }

    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    /// Evaluate the current board with the round's win flag
    pub fn outcome(&self) -> Outcome {
        self.rules.evaluate(&self.board, self.won)
    }

    /// Play one move.
    ///
    /// An accepted move adds its merge score, then either ends the round (max
    /// tile reached) or drops a random tile on an empty cell, and finally
    /// re-evaluates the board.
    pub fn apply_move(&mut self, direction: Direction) -> Turn {
        if self.status != RoundStatus::Playing {
            debug!(
                "move {} ignored: round is {:?}",
                direction.as_str(),
                self.status
            );
            return Turn::Rejected;
        }

        let result = apply_move(&self.board, direction);
        if !result.moved {
            debug!("move {} rejected: no tile can move", direction.as_str());
            return Turn::Rejected;
        }

        self.board = result.board;
        self.score = self.score.saturating_add(result.score);
        self.moves += 1;
        self.last_move = Some(LastMove {
            direction,
            score: result.score,
        });

        if self.rules.reached_max_tile(&self.board) {
            info!(
                "round {} ended at max tile after {} moves, score {}",
                self.episode_id, self.moves, self.score
            );
            let outcome = self.outcome();
            if outcome == Outcome::Win {
                self.won = true;
            }
            self.status = RoundStatus::Ended;
            return Turn::Moved {
                score: result.score,
                outcome,
            };
        }

        match self.spawner.spawn(&self.board) {
            Ok(next) => self.board = next,
            Err(err) => debug!("no tile added: {}", err),
        }

        Turn::Moved {
            score: result.score,
            outcome: self.settle(),
        }
    }

    /// Apply an input action. Returns true if the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => {
                matches!(self.apply_move(direction), Turn::Moved { .. })
            }
            GameAction::Quit => self.quit(),
        }
    }

    /// Resume play after a win.
    pub fn continue_after_win(&mut self) {
        if self.status != RoundStatus::Won {
            return;
        }
        self.status = RoundStatus::Playing;
        self.settle();
    }

    /// Leave the round. Returns false if it was already over.
    pub fn quit(&mut self) -> bool {
        if self.status.is_over() {
            return false;
        }
        info!(
            "round {} quit after {} moves, score {}",
            self.episode_id, self.moves, self.score
        );
        self.status = RoundStatus::Quit;
        true
    }

    /// Re-evaluate the board and update the status.
    fn settle(&mut self) -> Outcome {
        let outcome = self.outcome();
        match outcome {
            Outcome::Win => {
                info!(
                    "round {} won after {} moves, score {}",
                    self.episode_id, self.moves, self.score
                );
                self.won = true;
                self.status = RoundStatus::Won;
            }
            Outcome::Loss => {
                info!(
                    "round {} lost after {} moves, score {}",
                    self.episode_id, self.moves, self.score
                );
                self.status = RoundStatus::Lost;
            }
            Outcome::InProgress => {}
        }
        outcome
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot<N>) {
        out.board = *self.board.rows();
        out.score = self.score;
        out.moves = self.moves;
        out.won = self.won;
        out.status = self.status;
        out.episode_id = self.episode_id;
        out.seed = self.spawner.seed();
        out.last_move = self.last_move;
        out.win_tile = self.rules.win_tile;
        out.best_tile = self.board.max_tile();
    }

    pub fn snapshot(&self) -> GameSnapshot<N> {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows<const N: usize>(state: &GameState<N>) -> [[u32; N]; N] {
        *state.board().rows()
    }

    #[test]
    fn test_new_game_state() {
        let state: GameState = GameState::new(1, Rules::default());
        assert_eq!(state.status(), RoundStatus::NotStarted);
        assert_eq!(state.score(), 0);
        assert_eq!(state.board().count_empty(), 16);
        assert!(!state.won());
    }

    #[test]
    fn test_start_places_two_tiles() {
        let mut state: GameState = GameState::new(42, Rules::default());
        state.start();
        assert_eq!(state.status(), RoundStatus::Playing);
        assert_eq!(state.board().count_empty(), 14);
        assert!(state.board().tiles().all(|t| t == 0 || t == 2 || t == 4));

        // Starting twice does nothing.
        let before = *state.board();
        state.start();
        assert_eq!(*state.board(), before);
    }

    #[test]
    fn test_moved_turn_scores_and_spawns() {
        let board = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        let mut state = GameState::with_board(board, 7, Rules::default());

        let turn = state.apply_move(Direction::Left);
        assert_eq!(
            turn,
            Turn::Moved {
                score: 4,
                outcome: Outcome::InProgress
            }
        );
        assert_eq!(state.score(), 4);
        assert_eq!(state.moves(), 1);
        assert_eq!(state.board().get(0, 0), Some(4));
        // One merged tile plus one spawned tile.
        assert_eq!(state.board().count_empty(), 14);
        assert_eq!(
            state.last_move(),
            Some(LastMove {
                direction: Direction::Left,
                score: 4
            })
        );
    }

    #[test]
    fn test_rejected_move_consumes_nothing() {
        let board = Board::from_rows([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        let mut state = GameState::with_board(board, 7, Rules::default());

        assert_eq!(state.apply_move(Direction::Left), Turn::Rejected);
        assert_eq!(state.apply_move(Direction::Up), Turn::Rejected);
        assert_eq!(rows(&state), *board.rows());
        assert_eq!(state.moves(), 0);
        assert_eq!(state.score(), 0);
        assert_eq!(state.last_move(), None);
    }

    #[test]
    fn test_win_then_continue() {
        let board = Board::from_rows([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        let mut state = GameState::with_board(board, 3, Rules::default());

        let turn = state.apply_move(Direction::Left);
        assert_eq!(
            turn,
            Turn::Moved {
                score: 2048,
                outcome: Outcome::Win
            }
        );
        assert!(state.won());
        assert_eq!(state.status(), RoundStatus::Won);

        // Moves wait for the player's decision.
        assert_eq!(state.apply_move(Direction::Right), Turn::Rejected);

        state.continue_after_win();
        assert_eq!(state.status(), RoundStatus::Playing);
        assert_eq!(state.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_continue_on_dead_board_is_lost() {
        // The spawn fills the only free cell and leaves no pair.
        let board = Board::from_rows([
            [1024, 1024, 32, 8],
            [2, 4, 2, 16],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
        ])
        .unwrap();
        let mut state = GameState::with_board(board, 4, Rules::default());
        assert_eq!(state.status(), RoundStatus::Playing);

        let turn = state.apply_move(Direction::Left);
        assert!(matches!(
            turn,
            Turn::Moved {
                score: 2048,
                outcome: Outcome::Win
            }
        ));
        assert_eq!(state.status(), RoundStatus::Won);
        assert!(state.board().is_full());

        state.continue_after_win();
        assert_eq!(state.status(), RoundStatus::Lost);
        assert_eq!(state.outcome(), Outcome::Loss);
        assert!(state.won());
    }

    #[test]
    fn test_win_at_max_tile_is_recorded() {
        let rules = Rules::new(16, Some(16));
        let board = Board::from_rows([[8, 8], [0, 0]]).unwrap();
        let mut state = GameState::with_board(board, 5, rules);

        let turn = state.apply_move(Direction::Left);
        assert_eq!(
            turn,
            Turn::Moved {
                score: 16,
                outcome: Outcome::Win
            }
        );
        assert_eq!(state.status(), RoundStatus::Ended);
        assert!(state.won());
        assert!(state.snapshot().won);
    }

    #[test]
    fn test_full_board_move_refills_freed_cell() {
        let board = Board::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [8, 8, 16, 32],
        ])
        .unwrap();
        let mut state = GameState::with_board(board, 11, Rules::default());
        assert_eq!(state.status(), RoundStatus::Playing);

        let turn = state.apply_move(Direction::Left);
        assert!(matches!(turn, Turn::Moved { score: 16, .. }));
        assert_eq!(state.board().rows()[3][..3], [16, 16, 32]);
        // The freed corner was refilled.
        assert!(state.board().is_full());
    }

    #[test]
    fn test_max_tile_ends_round() {
        let rules = Rules::new(8, Some(16));
        let board = Board::from_rows([[8, 8], [0, 0]]).unwrap();
        let mut state = GameState::with_board(board, 5, rules);
        // The 8 on the board is already a win under these rules.
        assert_eq!(state.status(), RoundStatus::Won);
        state.continue_after_win();

        let turn = state.apply_move(Direction::Left);
        assert!(matches!(turn, Turn::Moved { score: 16, .. }));
        assert_eq!(state.status(), RoundStatus::Ended);
        // No tile is spawned once the round has ended.
        assert_eq!(rows(&state), [[16, 0], [0, 0]]);
    }

    #[test]
    fn test_quit() {
        let mut state: GameState = GameState::new(1, Rules::default());
        state.start();
        assert!(state.apply_action(GameAction::Quit));
        assert_eq!(state.status(), RoundStatus::Quit);
        assert!(!state.quit());
        assert!(!state.apply_action(GameAction::Move(Direction::Up)));
    }

    #[test]
    fn test_restart_increments_episode_id() {
        let mut state: GameState = GameState::new(9, Rules::default());
        state.start();
        let first_seed = state.seed();
        state.quit();

        state.restart();
        assert_eq!(state.episode_id(), 1);
        assert_eq!(state.status(), RoundStatus::Playing);
        assert_eq!(state.score(), 0);
        assert_eq!(state.board().count_empty(), 14);
        assert_ne!(state.seed(), first_seed);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let board = Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        let mut state = GameState::with_board(board, 7, Rules::default());
        state.apply_move(Direction::Left);

        let snap = state.snapshot();
        assert_eq!(snap.board, rows(&state));
        assert_eq!(snap.score, 4);
        assert_eq!(snap.moves, 1);
        assert_eq!(snap.status, RoundStatus::Playing);
        assert_eq!(snap.best_tile, 4);
        assert_eq!(snap.win_tile, 2048);
        assert!(snap.playable());
    }
}
