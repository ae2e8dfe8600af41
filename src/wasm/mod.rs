//! Browser bindings for the rules engine.
//!
//! Enabled with the `wasm` feature. The page keeps all rendering, form
//! handling and timers; it calls into [`WasmGame`] to read the board,
//! submit moves and trigger the computer.
//!
//! ```javascript
//! import init, { WasmGame } from "./pkg/rust_ttt.js";
//!
//! await init();
//! const game = new WasmGame("hard");
//! game.applyMove(0, 0);
//! setTimeout(() => game.computerMove(), 700);
//! ```

use wasm_bindgen::prelude::*;

use crate::core::{Difficulty, Mark};
use crate::rules::GameEngine;

/// JavaScript handle to one game.
#[wasm_bindgen]
pub struct WasmGame {
    engine: GameEngine,
}

fn cell_str(cell: Option<Mark>) -> String {
    cell.map(|m| m.to_string()).unwrap_or_default()
}

/// Negative or oversized indices from JS become off-board coordinates.
fn index(value: i32) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[wasm_bindgen]
impl WasmGame {
    /// New game. Missing or unrecognized difficulty means easy.
    #[wasm_bindgen(constructor)]
    pub fn new(difficulty: Option<String>) -> WasmGame {
        WasmGame {
            engine: GameEngine::new(Difficulty::from_option(difficulty.as_deref())),
        }
    }

    /// Start over; a missing difficulty keeps the current one.
    pub fn reset(&mut self, difficulty: Option<String>) {
        self.engine
            .reset(difficulty.as_deref().map(Difficulty::parse_lenient));
    }

    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, row: i32, col: i32) -> bool {
        self.engine.apply_move(index(row), index(col))
    }

    /// Row-major cells: `""`, `"X"` or `"O"`.
    pub fn board(&self) -> Vec<String> {
        self.engine
            .board()
            .rows()
            .iter()
            .flatten()
            .map(|&cell| cell_str(cell))
            .collect()
    }

    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> String {
        self.engine.current_player().to_string()
    }

    /// `{"gameOver":bool,"winner":"X"|"O"|null,"isDraw":bool}`
    pub fn status(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.engine.status()).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Row-major indices (`row * 3 + col`) of empty cells.
    #[wasm_bindgen(js_name = emptyCells)]
    pub fn empty_cells(&self) -> Vec<u8> {
        self.engine.empty_cells().iter().map(|c| c.index() as u8).collect()
    }

    /// Play the computer's move; returns `[row, col]`, or `[]` if none.
    #[wasm_bindgen(js_name = computerMove)]
    pub fn computer_move(&mut self) -> Vec<u8> {
        self.engine
            .select_computer_move()
            .map(|c| vec![c.row() as u8, c.col() as u8])
            .unwrap_or_default()
    }

    pub fn difficulty(&self) -> String {
        self.engine.difficulty().to_string()
    }
}
