//! Computer move selection.
//!
//! ## Overview
//!
//! A policy looks at the current state and proposes a cell for the mark
//! to move. Policies never apply the move themselves; the engine does.
//!
//! - `RandomPolicy`: uniform choice among empty cells (easy)
//! - `HeuristicPolicy`: fixed-priority rules (hard), no game-tree search
//!
//! ## Usage
//!
//! ```rust
//! use rust_ttt::core::{GameState, SequenceSource, CENTER};
//! use rust_ttt::opponent::{HeuristicPolicy, MovePolicy};
//!
//! let mut state = GameState::new();
//! let mut rng = SequenceSource::first();
//! assert_eq!(HeuristicPolicy.select(&mut state, &mut rng), Some(CENTER));
//! ```

pub mod heuristic;
pub mod probe;
pub mod random;

pub use heuristic::{HeuristicPolicy, Reason};
pub use probe::Probe;
pub use random::RandomPolicy;

use crate::core::{Coord, Difficulty, GameState, RandomSource};

/// Strategy for choosing the computer's next cell.
pub trait MovePolicy {
    /// Propose a cell for `state.current_player()`.
    ///
    /// Returns `None` when the game is over or the board is full. Any
    /// temporary changes made while deciding are undone before returning.
    fn select<R: RandomSource>(&self, state: &mut GameState, rng: &mut R) -> Option<Coord>;
}

/// Run the policy configured for `difficulty`.
pub fn select_for<R: RandomSource>(
    difficulty: Difficulty,
    state: &mut GameState,
    rng: &mut R,
) -> Option<Coord> {
    match difficulty {
        Difficulty::Easy => RandomPolicy.select(state, rng),
        Difficulty::Hard => HeuristicPolicy.select(state, rng),
    }
}
