//! Property tests over random move sequences.
//!
//! Sequences include off-board and repeated cells, so every run mixes
//! accepted and rejected requests.

use proptest::prelude::*;
use rust_ttt::core::{Board, Coord, Difficulty, GameState, Mark, Outcome, SequenceSource};
use rust_ttt::opponent::HeuristicPolicy;
use rust_ttt::rules::GameEngine;

fn moves() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0usize..4, 0usize..4), 0..24)
}

fn counts(board: &Board) -> (usize, usize) {
    (board.count(Mark::X), board.count(Mark::O))
}

proptest! {
    /// Test that marks alternate and the turn follows the counts.
    #[test]
    fn test_turns_alternate(requests in moves()) {
        let mut engine = GameEngine::with_source(Difficulty::Easy, SequenceSource::first());
        for (r, c) in requests {
            let before = engine.current_player();
            if engine.apply_move(r, c) {
                prop_assert_eq!(engine.board().get(Coord::new(r, c).unwrap()), Some(before));
            }
            let (x, o) = counts(&engine.board());
            prop_assert!(x == o || x == o + 1);
            if !engine.is_over() {
                let expected = if x == o { Mark::X } else { Mark::O };
                prop_assert_eq!(engine.current_player(), expected);
            }
        }
    }

    /// Test that a rejected request leaves every observable unchanged.
    #[test]
    fn test_rejection_is_atomic(requests in moves()) {
        let mut engine = GameEngine::with_source(Difficulty::Easy, SequenceSource::first());
        for (r, c) in requests {
            let board = engine.board();
            let player = engine.current_player();
            let status = engine.status();
            let len = engine.history().len();
            if !engine.apply_move(r, c) {
                prop_assert_eq!(engine.board(), board);
                prop_assert_eq!(engine.current_player(), player);
                prop_assert_eq!(engine.status(), status);
                prop_assert_eq!(engine.history().len(), len);
            } else {
                prop_assert_eq!(engine.history().len(), len + 1);
            }
        }
    }

    /// Test that a finished game has exactly one of winner or draw, and stays finished.
    #[test]
    fn test_terminal_flags(requests in moves()) {
        let mut engine = GameEngine::with_source(Difficulty::Easy, SequenceSource::first());
        let mut finished = None;
        for (r, c) in requests {
            let accepted = engine.apply_move(r, c);
            if let Some(outcome) = finished {
                prop_assert!(!accepted);
                prop_assert_eq!(engine.outcome(), outcome);
            }
            let status = engine.status();
            if status.game_over {
                prop_assert!(status.winner.is_some() != status.is_draw);
                finished = Some(engine.outcome());
            } else {
                prop_assert!(status.winner.is_none() && !status.is_draw);
            }
            if status.is_draw {
                prop_assert!(engine.board().is_full());
                prop_assert!(engine.board().winning_line().is_none());
            }
        }
    }

    /// Test that repeated reads agree and the hard opponent's probing leaves no trace.
    #[test]
    fn test_reads_and_probes_are_pure(requests in moves(), pick in 0usize..9) {
        let mut engine = GameEngine::with_source(Difficulty::Hard, SequenceSource::first());
        for (r, c) in requests {
            engine.apply_move(r, c);
        }
        prop_assert_eq!(engine.board(), engine.board());
        prop_assert_eq!(engine.status(), engine.status());

        let mut state: GameState = engine.state().clone();
        let before = state.clone();
        let choice = HeuristicPolicy.decide(&mut state, &mut SequenceSource::new(vec![pick]));
        prop_assert_eq!(&state, &before);

        match choice {
            Some((coord, _)) => prop_assert!(state.board().is_empty(coord)),
            None => prop_assert!(state.outcome() != Outcome::InProgress),
        }
    }
}
