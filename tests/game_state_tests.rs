//! Round lifecycle tests

use twenty48::core::{Board, GameState, RoundStatus, Rules, Turn};
use twenty48::types::{Direction, GameAction, Outcome};

fn play_out(state: &mut GameState, max_turns: usize) {
    for i in 0..max_turns {
        if state.status() != RoundStatus::Playing {
            break;
        }
        state.apply_move(Direction::ALL[i % 4]);
    }
}

#[test]
fn test_same_seed_same_round() {
    let mut a: GameState = GameState::new(99, Rules::default());
    let mut b: GameState = GameState::new(99, Rules::default());
    a.start();
    b.start();
    assert_eq!(a.board(), b.board());

    play_out(&mut a, 200);
    play_out(&mut b, 200);
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_different_seeds_diverge() {
    let mut boards = Vec::new();
    for seed in 0..8 {
        let mut state: GameState = GameState::new(seed, Rules::default());
        state.start();
        play_out(&mut state, 20);
        boards.push(*state.board());
    }
    boards.dedup();
    assert!(boards.len() > 1);
}

#[test]
fn test_score_is_sum_of_turn_scores() {
    let mut state: GameState = GameState::new(5, Rules::default());
    state.start();

    let mut total = 0;
    for i in 0..300 {
        if state.status() != RoundStatus::Playing {
            break;
        }
        if let Turn::Moved { score, .. } = state.apply_move(Direction::ALL[i % 4]) {
            total += score;
        }
    }
    assert_eq!(state.score(), total);
}

#[test]
fn test_each_turn_adds_one_tile_value() {
    let mut state: GameState = GameState::new(17, Rules::default());
    state.start();

    for i in 0..100 {
        if state.status() != RoundStatus::Playing {
            break;
        }
        let before = state.board().tile_sum();
        match state.apply_move(Direction::ALL[i % 4]) {
            Turn::Rejected => assert_eq!(state.board().tile_sum(), before),
            Turn::Moved { .. } => {
                let added = state.board().tile_sum() - before;
                assert!(added == 2 || added == 4, "added {}", added);
            }
        }
    }
}

#[test]
fn test_dead_board_is_lost() {
    // Left leaves one free cell. A 2 there kills the board, a 4 does not.
    let mut lost = 0;
    for seed in 0..50 {
        let board = Board::<2>::from_rows([[2, 2], [8, 4]]).unwrap();
        let mut state = GameState::with_board(board, seed, Rules::default());
        let turn = state.apply_move(Direction::Left);

        let spawned = state.board().get(0, 1);
        match spawned {
            Some(2) => {
                assert_eq!(
                    turn,
                    Turn::Moved {
                        score: 4,
                        outcome: Outcome::Loss
                    }
                );
                assert_eq!(state.status(), RoundStatus::Lost);
                assert_eq!(state.apply_move(Direction::Up), Turn::Rejected);
                lost += 1;
            }
            Some(4) => assert_eq!(state.status(), RoundStatus::Playing),
            other => panic!("unexpected tile {:?}", other),
        }
    }
    assert!(lost > 0);
}

#[test]
fn test_win_is_reported_once() {
    let board = Board::from_rows([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
    let mut state = GameState::with_board(board, 3, Rules::default());

    assert!(matches!(
        state.apply_move(Direction::Left),
        Turn::Moved {
            outcome: Outcome::Win,
            ..
        }
    ));
    state.continue_after_win();

    for i in 0..50 {
        if state.status() != RoundStatus::Playing {
            break;
        }
        if let Turn::Moved { outcome, .. } = state.apply_move(Direction::ALL[i % 4]) {
            assert_ne!(outcome, Outcome::Win);
        }
    }
    assert!(state.won());
}

#[test]
fn test_max_tile_stops_round_without_spawn() {
    let rules = Rules::new(4096, Some(4096));
    let board = Board::from_rows([[2048, 2048, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
    let mut state = GameState::with_board(board, 1, rules);

    assert!(matches!(state.apply_move(Direction::Left), Turn::Moved { score: 4096, .. }));
    assert_eq!(state.status(), RoundStatus::Ended);
    assert_eq!(state.board().count_empty(), 15);
    assert!(state.status().is_over());
}

#[test]
fn test_quit_and_restart() {
    let mut state: GameState = GameState::new(8, Rules::default());
    state.start();
    play_out(&mut state, 10);

    assert!(state.apply_action(GameAction::Quit));
    assert_eq!(state.status(), RoundStatus::Quit);
    assert!(!state.quit());
    assert!(!state.apply_action(GameAction::Move(Direction::Left)));

    let seed = state.seed();
    state.restart();
    assert_eq!(state.episode_id(), 1);
    assert_eq!(state.status(), RoundStatus::Playing);
    assert_eq!(state.score(), 0);
    assert_eq!(state.moves(), 0);
    assert_eq!(state.board().count_empty(), 14);
    assert_ne!(state.seed(), seed);
}

#[test]
fn test_snapshot_mirrors_state() {
    let mut state: GameState = GameState::new(21, Rules::default());
    state.start();
    play_out(&mut state, 12);

    let snap = state.snapshot();
    assert_eq!(snap.board, *state.board().rows());
    assert_eq!(snap.score, state.score());
    assert_eq!(snap.moves, state.moves());
    assert_eq!(snap.status, state.status());
    assert_eq!(snap.last_move, state.last_move());
    assert_eq!(snap.best_tile, state.board().max_tile());
    assert_eq!(snap.win_tile, 2048);
    assert!(snap.playable());
}
