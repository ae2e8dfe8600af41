//! Hard opponent: fixed-priority heuristic.
//!
//! Rules are tried in order, each over every candidate before the next:
//!
//! 1. Win: a cell that completes a line for the mover
//! 2. Block: a cell that would complete a line for the opponent
//! 3. Center
//! 4. A random free corner
//! 5. A random free side
//! 6. A random empty cell
//!
//! Steps 1 and 2 scan empty cells in row-major order and take the first hit.
//! The last step can only fire if the tables above miss a cell; it is kept
//! so the policy is total over any board.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

use crate::core::{Coord, CoordList, GameState, Mark, RandomSource, CENTER, CORNERS, SIDES};

use super::probe::Probe;
use super::MovePolicy;

/// Which rule produced a heuristic choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reason {
    Win,
    Block,
    Center,
    Corner,
    Side,
    Fallback,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Reason::Win => "win",
            Reason::Block => "block",
            Reason::Center => "center",
            Reason::Corner => "corner",
            Reason::Side => "side",
            Reason::Fallback => "fallback",
        };
        f.write_str(name)
    }
}

/// Win, block, center, corner, side.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicPolicy;

impl HeuristicPolicy {
    /// Choose a cell and report which rule chose it.
    pub fn decide<R: RandomSource>(
        &self,
        state: &mut GameState,
        rng: &mut R,
    ) -> Option<(Coord, Reason)> {
        if state.is_over() {
            return None;
        }
        let empty = state.board().empty_cells();
        if empty.is_empty() {
            return None;
        }

        let me = state.current_player();
        let them = me.opponent();

        if let Some(c) = completing_cell(state, &empty, me) {
            return Some((c, Reason::Win));
        }
        if let Some(c) = completing_cell(state, &empty, them) {
            return Some((c, Reason::Block));
        }

        let board = state.board();
        if board.is_empty(CENTER) {
            return Some((CENTER, Reason::Center));
        }
        if let Some(c) = rng.choose(board.available(&CORNERS).as_slice()) {
            return Some((c, Reason::Corner));
        }
        if let Some(c) = rng.choose(board.available(&SIDES).as_slice()) {
            return Some((c, Reason::Side));
        }
        rng.choose(empty.as_slice()).map(|c| (c, Reason::Fallback))
    }
}

impl MovePolicy for HeuristicPolicy {
    fn select<R: RandomSource>(&self, state: &mut GameState, rng: &mut R) -> Option<Coord> {
        let (coord, reason) = self.decide(state, rng)?;
        debug!(mark = %state.current_player(), %coord, %reason, "heuristic choice");
        Some(coord)
    }
}

/// First empty cell (in the given order) where `mark` would complete a line.
fn completing_cell(state: &mut GameState, candidates: &CoordList, mark: Mark) -> Option<Coord> {
    candidates.iter().copied().find(|&c| {
        Probe::place(state, c, mark).is_some_and(|probe| {
            let wins = probe.wins_for(mark);
            trace!(%mark, coord = %c, wins, "probe");
            wins
        })
    })
}
