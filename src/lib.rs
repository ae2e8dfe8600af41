//! # rust-ttt
//!
//! A tic-tac-toe rules engine with a heuristic computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Narrow Interface**: A presentation layer reads the board, requests
//!    moves and reads the status. Nothing here renders or schedules.
//!
//! 2. **All-or-Nothing Moves**: A rejected move changes nothing. There is
//!    no partially-updated state to recover from.
//!
//! 3. **Injected Randomness**: The computer opponent draws through a
//!    `RandomSource`, never a global generator, so every game is
//!    reproducible from its seed or from a scripted sequence.
//!
//! ## Architecture
//!
//! - **Value Snapshots**: `Board` is `Copy`; every read hands the caller an
//!   independent grid.
//!
//! - **Scoped Probes**: Win and block detection place a hypothetical mark
//!   through a guard that restores the cell and terminal flags on drop.
//!
//! ## Modules
//!
//! - `core`: Marks, board, state, configuration, RNG, errors
//! - `rules`: `GameEngine`, the state object and its operations
//! - `opponent`: Easy (random) and hard (heuristic) move selection
//! - `session`: Game mode, player names and status line for a front end
//! - `wasm`: Browser bindings (feature `wasm`)
//!
//! ## Example
//!
//! ```
//! use rust_ttt::{Difficulty, GameEngine, Mark};
//!
//! let mut engine = GameEngine::with_seed(Difficulty::Hard, 42);
//! assert!(engine.apply_move(0, 0));
//! let reply = engine.select_computer_move().unwrap();
//! assert_eq!((reply.row(), reply.col()), (1, 1));
//! assert_eq!(engine.current_player(), Mark::X);
//! ```

pub mod core;
pub mod rules;
pub mod opponent;
pub mod session;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use crate::core::{
    Mark, Board, Coord, CoordList, Line,
    GameState, GameStatus, MoveRecord, Outcome,
    Difficulty, EngineConfig,
    GameRng, GameRngState, RandomSource, SequenceSource,
    ConfigError, MoveError,
};

pub use crate::rules::GameEngine;

pub use crate::opponent::{HeuristicPolicy, MovePolicy, Probe, RandomPolicy, Reason};

pub use crate::session::{GameMode, PlayerNames, Session, SetupError};
