//! Core engine types: marks, board, state, configuration, RNG, errors.
//!
//! This module contains the passive building blocks. The rules that drive
//! them live in `rules`, move selection in `opponent`.

pub mod mark;
pub mod board;
pub mod state;
pub mod config;
pub mod rng;
pub mod error;

pub use mark::Mark;
pub use board::{Board, Coord, CoordList, Line, CELL_COUNT, CENTER, CORNERS, LINES, SIDES, SIZE};
pub use state::{GameState, GameStatus, MoveRecord, Outcome};
pub use config::{Difficulty, EngineConfig, ENV_DIFFICULTY, ENV_SEED};
pub use rng::{GameRng, GameRngState, RandomSource, SequenceSource};
pub use error::{ConfigError, MoveError};
