//! Player marks.
//!
//! ## Mark
//!
//! The two symbols that occupy cells: `X` (always moves first) and `O`.
//! A cell is `Option<Mark>`; `None` is an empty cell.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two player symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark that moves first in every game.
    pub const FIRST: Mark = Mark::X;

    /// Both marks, in turn order.
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    /// The other mark.
    ///
    /// ```
    /// use rust_ttt::core::Mark;
    ///
    /// assert_eq!(Mark::X.opponent(), Mark::O);
    /// assert_eq!(Mark::O.opponent(), Mark::X);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-character symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
