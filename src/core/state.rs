//! Game state: board, turn, terminal condition and move history.
//!
//! ## Outcome
//!
//! The terminal flags are stored as a single enum so that "won" and
//! "drawn" can never both hold. [`GameStatus`] is the flag-style view
//! handed to callers.
//!
//! ## GameState
//!
//! Created fresh (empty board, X to move), mutated in place by moves and
//! replaced wholesale on reset. Uses an `im` vector for the history so
//! cloning a state stays O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::board::{Board, Coord};
use super::mark::Mark;

/// Where the game stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves are still accepted.
    #[default]
    InProgress,
    /// A line was completed by this mark.
    Won(Mark),
    /// The board filled with no complete line.
    Drawn,
}

impl Outcome {
    /// Is this a terminal outcome?
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Winning mark, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

/// Flag view of the terminal condition.
///
/// When `game_over` is true exactly one of `winner.is_some()` and `is_draw`
/// holds; when it is false neither does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatus {
    pub game_over: bool,
    pub winner: Option<Mark>,
    pub is_draw: bool,
}

impl From<Outcome> for GameStatus {
    fn from(outcome: Outcome) -> Self {
        Self {
            game_over: outcome.is_terminal(),
            winner: outcome.winner(),
            is_draw: outcome == Outcome::Drawn,
        }
    }
}

/// One accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    pub mark: Mark,
    pub coord: Coord,
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current: Mark,
    pub(crate) outcome: Outcome,
    pub(crate) history: Vector<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Empty board, X to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Mark::FIRST,
            outcome: Outcome::InProgress,
            history: Vector::new(),
        }
    }

    /// State for an arbitrary position, with the terminal condition evaluated.
    ///
    /// History is empty: the moves that led here are unknown.
    #[must_use]
    pub fn from_position(board: Board, to_move: Mark) -> Self {
        let mut state = Self {
            board,
            current: to_move,
            outcome: Outcome::InProgress,
            history: Vector::new(),
        };
        state.evaluate_terminal();
        state
    }

    /// The grid. `Board` is `Copy`, so callers get an independent snapshot.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Mark that moves next (or made the final move, once terminal).
    #[must_use]
    pub fn current_player(&self) -> Mark {
        self.current
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.outcome.into()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Accepted moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Place the current mark, evaluate, and pass the turn unless the game ended.
    ///
    /// Legality is checked by the caller.
    pub(crate) fn place(&mut self, coord: Coord) {
        let mark = self.current;
        self.board.set(coord, Some(mark));
        self.history.push_back(MoveRecord { mark, coord });
        self.settle();
        if !self.is_over() {
            self.current = mark.opponent();
        }
    }

    /// Scan the eight lines, then check for a full board.
    pub(crate) fn evaluate_terminal(&mut self) {
        self.outcome = if let Some((_, mark)) = self.board.winning_line() {
            Outcome::Won(mark)
        } else if self.board.is_full() {
            Outcome::Drawn
        } else {
            Outcome::InProgress
        };
    }

    /// Like [`GameState::evaluate_terminal`], logging the transition if the game ended.
    pub(crate) fn settle(&mut self) {
        self.evaluate_terminal();
        match self.outcome {
            Outcome::Won(mark) => info!(winner = %mark, moves = self.history.len(), "game won"),
            Outcome::Drawn => info!(moves = self.history.len(), "game drawn"),
            Outcome::InProgress => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.current_player(), Mark::X);
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert!(state.board().empty_cells().len() == 9);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_status_from_outcome() {
        assert_eq!(
            GameStatus::from(Outcome::InProgress),
            GameStatus { game_over: false, winner: None, is_draw: false }
        );
        assert_eq!(
            GameStatus::from(Outcome::Won(Mark::O)),
            GameStatus { game_over: true, winner: Some(Mark::O), is_draw: false }
        );
        assert_eq!(
            GameStatus::from(Outcome::Drawn),
            GameStatus { game_over: true, winner: None, is_draw: true }
        );
    }

    #[test]
    fn test_place_switches_turn() {
        let mut state = GameState::new();
        state.place(coord(0, 0));
        assert_eq!(state.current_player(), Mark::O);
        assert_eq!(state.board().get(coord(0, 0)), Some(Mark::X));
        assert_eq!(state.history()[0], MoveRecord { mark: Mark::X, coord: coord(0, 0) });
    }

    #[test]
    fn test_winning_move_keeps_turn() {
        let mut state = GameState::new();
        for c in [coord(0, 0), coord(1, 0), coord(0, 1), coord(1, 1), coord(0, 2)] {
            state.place(c);
        }
        assert_eq!(state.outcome(), Outcome::Won(Mark::X));
        assert_eq!(state.current_player(), Mark::X);
    }

    #[test]
    fn test_from_position_evaluates() {
        let x = Some(Mark::X);
        let o = Some(Mark::O);
        let board = Board::from_rows([[x, o, x], [x, o, o], [o, x, x]]);
        let state = GameState::from_position(board, Mark::O);
        assert_eq!(state.outcome(), Outcome::Drawn);
    }

    #[test]
    fn test_clone_shares_nothing_observable() {
        let mut state = GameState::new();
        state.place(coord(1, 1));
        let snapshot = state.clone();
        state.place(coord(0, 0));
        assert_eq!(snapshot.history().len(), 1);
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn test_status_serializes_camel_case() {
        let status = GameStatus::from(Outcome::Won(Mark::X));
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, r#"{"gameOver":true,"winner":"X","isDraw":false}"#);
    }
}
