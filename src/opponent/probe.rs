//! Hypothetical placement with guaranteed restore.
//!
//! A `Probe` writes a mark into an empty cell and re-evaluates the terminal
//! condition. Dropping the probe clears the cell and puts the previous
//! outcome back, on every exit path.

use std::ops::Deref;

use crate::core::{Coord, GameState, Mark, Outcome};

/// Scoped "what if `mark` played `coord`" view of a state.
pub struct Probe<'a> {
    state: &'a mut GameState,
    coord: Coord,
    saved: Outcome,
}

impl<'a> Probe<'a> {
    /// Place `mark` at `coord`, or `None` if the cell is occupied.
    ///
    /// Turn order and history are not touched.
    pub fn place(state: &'a mut GameState, coord: Coord, mark: Mark) -> Option<Self> {
        if !state.board.is_empty(coord) {
            return None;
        }
        let saved = state.outcome;
        state.board.set(coord, Some(mark));
        state.evaluate_terminal();
        Some(Self { state, coord, saved })
    }

    /// Would this placement win for `mark`?
    #[must_use]
    pub fn wins_for(&self, mark: Mark) -> bool {
        self.state.outcome == Outcome::Won(mark)
    }
}

impl Deref for Probe<'_> {
    type Target = GameState;

    fn deref(&self) -> &Self::Target {
        &*self.state
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.state.board.set(self.coord, None);
        self.state.outcome = self.saved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;

    fn coord(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_probe_restores_on_drop() {
        let mut state = GameState::new();
        state.place(coord(0, 0));
        let before = state.clone();

        {
            let probe = Probe::place(&mut state, coord(2, 2), Mark::O).unwrap();
            assert_eq!(probe.board().get(coord(2, 2)), Some(Mark::O));
        }

        assert_eq!(state, before);
    }

    #[test]
    fn test_probe_detects_win_and_restores_outcome() {
        let x = Some(Mark::X);
        let board = Board::from_rows([[x, x, None], [None; 3], [None; 3]]);
        let mut state = GameState::from_position(board, Mark::O);

        {
            let probe = Probe::place(&mut state, coord(0, 2), Mark::X).unwrap();
            assert!(probe.wins_for(Mark::X));
            assert!(!probe.wins_for(Mark::O));
            assert!(probe.is_over());
        }

        assert_eq!(state.outcome(), Outcome::InProgress);
        assert!(state.board().is_empty(coord(0, 2)));
        assert_eq!(state.current_player(), Mark::O);
    }

    #[test]
    fn test_probe_restores_draw_flag() {
        // Filling the last cell without a line would draw.
        let x = Some(Mark::X);
        let o = Some(Mark::O);
        let board = Board::from_rows([[x, o, x], [x, o, o], [o, x, None]]);
        let mut state = GameState::from_position(board, Mark::X);

        {
            let probe = Probe::place(&mut state, coord(2, 2), Mark::X).unwrap();
            assert_eq!(probe.outcome(), Outcome::Drawn);
        }

        assert_eq!(state.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_probe_rejects_occupied() {
        let mut state = GameState::new();
        state.place(coord(1, 1));
        assert!(Probe::place(&mut state, coord(1, 1), Mark::O).is_none());
        assert_eq!(state.board().get(coord(1, 1)), Some(Mark::X));
    }

    #[test]
    fn test_probe_restores_on_early_return() {
        fn first_winning(state: &mut GameState, mark: Mark) -> Option<Coord> {
            for c in state.board().empty_cells() {
                let probe = Probe::place(state, c, mark)?;
                if probe.wins_for(mark) {
                    return Some(c);
                }
            }
            None
        }

        let o = Some(Mark::O);
        let board = Board::from_rows([[o, None, None], [None, o, None], [None; 3]]);
        let mut state = GameState::from_position(board, Mark::O);
        let before = state.clone();

        assert_eq!(first_winning(&mut state, Mark::O), Some(coord(2, 2)));
        assert_eq!(state, before);
    }
}
