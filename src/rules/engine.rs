//! The game engine: the one state object a presentation layer talks to.
//!
//! `GameEngine` owns the board, the turn, the terminal flags, the configured
//! difficulty and the random source used by the computer opponent.
//!
//! ## Lifecycle
//!
//! - Created with an empty board and X to move
//! - Mutated in place by [`GameEngine::apply_move`] and
//!   [`GameEngine::select_computer_move`]
//! - Replaced wholesale by [`GameEngine::initialize`] / [`GameEngine::reset`]
//!
//! Once the game is won or drawn every move request is rejected until reset.

use im::Vector;
use tracing::{debug, warn};

use crate::core::{
    Board, Coord, CoordList, Difficulty, EngineConfig, GameRng, GameState, GameStatus, Mark,
    MoveError, MoveRecord, Outcome, RandomSource,
};
use crate::opponent;

/// Tic-tac-toe rules engine with an optional computer opponent.
///
/// Generic over its random source so tests can script the opponent's
/// random choices.
#[derive(Clone, Debug)]
pub struct GameEngine<R: RandomSource = GameRng> {
    state: GameState,
    difficulty: Difficulty,
    rng: R,
}

impl GameEngine<GameRng> {
    /// New game seeded from OS entropy.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_source(difficulty, GameRng::from_entropy())
    }

    /// New game with a fixed seed.
    #[must_use]
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_source(difficulty, GameRng::new(seed))
    }

    /// New game from a loaded configuration.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        debug!(difficulty = %config.difficulty, seed = rng.seed(), "engine created");
        Self::with_source(config.difficulty, rng)
    }

    /// Seed of the underlying RNG, for replaying a game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Default for GameEngine<GameRng> {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// New game drawing random choices from `rng`.
    #[must_use]
    pub fn with_source(difficulty: Difficulty, rng: R) -> Self {
        Self {
            state: GameState::new(),
            difficulty,
            rng,
        }
    }

    /// Engine positioned at an arbitrary board.
    ///
    /// The terminal condition is evaluated immediately, so a board that
    /// already holds a line starts out won.
    #[must_use]
    pub fn from_position(board: Board, to_move: Mark, difficulty: Difficulty, rng: R) -> Self {
        Self {
            state: GameState::from_position(board, to_move),
            difficulty,
            rng,
        }
    }

    // === Lifecycle ===

    /// Start over with an empty board and X to move.
    ///
    /// `None` selects the default difficulty (easy).
    pub fn initialize(&mut self, difficulty: Option<Difficulty>) {
        self.start(difficulty.unwrap_or_default());
    }

    /// Start over, keeping the current difficulty unless a new one is given.
    pub fn reset(&mut self, difficulty: Option<Difficulty>) {
        self.start(difficulty.unwrap_or(self.difficulty));
    }

    fn start(&mut self, difficulty: Difficulty) {
        self.state = GameState::new();
        self.difficulty = difficulty;
        debug!(%difficulty, "new game");
    }

    // === Moves ===

    /// Place the current player's mark, or explain why not.
    ///
    /// On rejection nothing changes.
    pub fn try_apply_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.state.is_over() {
            return Err(MoveError::GameOver);
        }
        let coord = Coord::new(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        if !self.state.board.is_empty(coord) {
            return Err(MoveError::Occupied(coord));
        }

        let mark = self.state.current;
        self.state.place(coord);
        debug!(%mark, row, col, "move applied");
        Ok(())
    }

    /// Place the current player's mark. Returns `false` (and changes
    /// nothing) if the game is over, the cell is off the board, or the
    /// cell is occupied.
    pub fn apply_move(&mut self, row: usize, col: usize) -> bool {
        self.try_apply_move(row, col).is_ok()
    }

    /// Choose a cell for the player to move, play it, and return it.
    ///
    /// Returns `None` without touching the state if the game is over.
    pub fn select_computer_move(&mut self) -> Option<Coord> {
        let coord = opponent::select_for(self.difficulty, &mut self.state, &mut self.rng)?;
        match self.try_apply_move(coord.row(), coord.col()) {
            Ok(()) => {
                debug!(difficulty = %self.difficulty, %coord, "computer moved");
                Some(coord)
            }
            Err(e) => {
                warn!(%coord, error = %e, "computer chose an illegal cell");
                None
            }
        }
    }

    // === Queries ===

    /// Independent copy of the grid.
    #[must_use]
    pub fn board(&self) -> Board {
        self.state.board()
    }

    /// Mark to move. Once the game is over, the mark that moved last.
    #[must_use]
    pub fn current_player(&self) -> Mark {
        self.state.current_player()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> CoordList {
        self.state.board().empty_cells()
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Change difficulty without restarting.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Accepted moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        self.state.history()
    }

    /// The full state, for cloning or serialization.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }
}
