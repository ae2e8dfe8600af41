//! Game rules: move legality, turn order and terminal detection.
//!
//! `GameEngine` is the narrow interface a presentation layer calls into:
//! read the board, request a move, read the status, ask the computer to
//! move. Rendering and input handling stay outside the crate.

pub mod engine;

pub use engine::GameEngine;
