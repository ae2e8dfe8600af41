//! A configured match: mode, player names and the engine behind them.
//!
//! This is the non-visual part of a front end. It validates the setup
//! form, knows when the computer is due to move, and produces the status
//! line shown above the board. Drawing the board and scheduling the
//! computer's delayed reply remain the caller's job.
//!
//! ```
//! use rust_ttt::core::{Difficulty, SequenceSource};
//! use rust_ttt::session::{GameMode, Session};
//!
//! let mut session = Session::with_source(
//!     GameMode::SinglePlayer(Difficulty::Hard),
//!     "Ada",
//!     "",
//!     SequenceSource::first(),
//! )
//! .unwrap();
//!
//! assert!(session.play(0, 0));
//! assert!(session.computer_turn_pending());
//! session.play_computer();
//! assert_eq!(session.status_line(), "Turn: Ada (X)");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Coord, Difficulty, GameRng, Mark, Outcome, RandomSource};
use crate::rules::GameEngine;

/// Name given to the computer opponent.
pub const COMPUTER_NAME: &str = "AI";

/// The mark the computer plays in single-player games.
pub const COMPUTER_MARK: Mark = Mark::O;

/// How the second seat is filled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Human X against the computer as O.
    SinglePlayer(Difficulty),
    /// Two humans sharing the board.
    Multiplayer,
}

impl GameMode {
    /// Difficulty handed to the engine. Multiplayer games never consult it.
    #[must_use]
    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            GameMode::SinglePlayer(d) => Some(d),
            GameMode::Multiplayer => None,
        }
    }
}

/// Why a match could not be set up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("player 1 name cannot be empty")]
    MissingPlayerOne,
    #[error("player 2 name cannot be empty")]
    MissingPlayerTwo,
}

/// Display names for both marks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerNames {
    pub x: String,
    pub o: String,
}

impl PlayerNames {
    /// Trim and validate names for the given mode.
    ///
    /// In single player the O name is ignored and replaced with the
    /// computer's name.
    pub fn validate(mode: GameMode, x: &str, o: &str) -> Result<Self, SetupError> {
        let x = x.trim();
        if x.is_empty() {
            return Err(SetupError::MissingPlayerOne);
        }
        let o = match mode {
            GameMode::SinglePlayer(_) => COMPUTER_NAME,
            GameMode::Multiplayer => match o.trim() {
                "" => return Err(SetupError::MissingPlayerTwo),
                name => name,
            },
        };
        Ok(Self { x: x.to_string(), o: o.to_string() })
    }

    /// Name of the player holding `mark`.
    #[must_use]
    pub fn name(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }
}

/// A match between two named players.
#[derive(Clone, Debug)]
pub struct Session<R: RandomSource = GameRng> {
    engine: GameEngine<R>,
    mode: GameMode,
    names: PlayerNames,
}

impl Session<GameRng> {
    /// Set up a match with an entropy-seeded opponent.
    pub fn new(mode: GameMode, x: &str, o: &str) -> Result<Self, SetupError> {
        Self::with_source(mode, x, o, GameRng::from_entropy())
    }
}

impl<R: RandomSource> Session<R> {
    /// Set up a match drawing the opponent's random choices from `rng`.
    pub fn with_source(mode: GameMode, x: &str, o: &str, rng: R) -> Result<Self, SetupError> {
        let names = PlayerNames::validate(mode, x, o)?;
        let engine = GameEngine::with_source(mode.difficulty().unwrap_or_default(), rng);
        debug!(?mode, x = %names.x, o = %names.o, "session started");
        Ok(Self { engine, mode, names })
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn names(&self) -> &PlayerNames {
        &self.names
    }

    #[must_use]
    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    /// Human move. In single player, rejected while the computer is due.
    pub fn play(&mut self, row: usize, col: usize) -> bool {
        if self.computer_turn_pending() {
            return false;
        }
        self.engine.apply_move(row, col)
    }

    /// Is it the computer's turn in a live single-player game?
    #[must_use]
    pub fn computer_turn_pending(&self) -> bool {
        matches!(self.mode, GameMode::SinglePlayer(_))
            && !self.engine.is_over()
            && self.engine.current_player() == COMPUTER_MARK
    }

    /// Let the computer move, if it is due.
    pub fn play_computer(&mut self) -> Option<Coord> {
        if !self.computer_turn_pending() {
            return None;
        }
        self.engine.select_computer_move()
    }

    /// New game in the same mode, with the same names.
    pub fn restart(&mut self) {
        self.engine.reset(self.mode.difficulty());
    }

    /// One-line description of the game for display.
    #[must_use]
    pub fn status_line(&self) -> String {
        match self.engine.outcome() {
            Outcome::Won(mark) => format!("Winner: {} ({})!", self.names.name(mark), mark),
            Outcome::Drawn => "It's a Draw!".to_string(),
            Outcome::InProgress => {
                let mark = self.engine.current_player();
                format!("Turn: {} ({})", self.names.name(mark), mark)
            }
        }
    }
}
