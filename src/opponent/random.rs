//! Easy opponent: any empty cell, uniformly.

use crate::core::{Coord, GameState, RandomSource};

use super::MovePolicy;

/// Uniform choice among empty cells (row-major candidate order).
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn select<R: RandomSource>(&self, state: &mut GameState, rng: &mut R) -> Option<Coord> {
        if state.is_over() {
            return None;
        }
        rng.choose(state.board().empty_cells().as_slice())
    }
}
