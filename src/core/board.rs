//! The 3x3 grid, its coordinates and its eight lines.
//!
//! ## Coord
//!
//! A validated `(row, col)` pair. `Coord::new` rejects anything outside
//! `0..=2`, so holding a `Coord` means holding an on-board position.
//!
//! ## Board
//!
//! A `Copy` value type. Every copy is an independent snapshot: handing a
//! `Board` to a caller never aliases the engine's grid.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::ops::Index;

use super::mark::Mark;

/// Side length of the board.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// Board position, row-major, both indices in `0..3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Create a coordinate, or `None` if either index is off the board.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < SIZE && col < SIZE {
            Some(Self::at(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Unchecked constructor for the constant tables below.
    const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row index (0 = top).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column index (0 = left).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index in `0..9`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row() * SIZE + self.col()
    }

    /// Inverse of [`Coord::index`].
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Self::new(index / SIZE, index % SIZE)
        } else {
            None
        }
    }

    /// All coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..CELL_COUNT as u8).map(|i| Coord::at(i / SIZE as u8, i % SIZE as u8))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The center cell.
pub const CENTER: Coord = Coord::at(1, 1);

/// Corner cells in the order the heuristic considers them.
pub const CORNERS: [Coord; 4] = [Coord::at(0, 0), Coord::at(0, 2), Coord::at(2, 0), Coord::at(2, 2)];

/// Edge-midpoint cells in the order the heuristic considers them.
pub const SIDES: [Coord; 4] = [Coord::at(0, 1), Coord::at(1, 0), Coord::at(1, 2), Coord::at(2, 1)];

/// Three cells that win when they hold the same mark.
pub type Line = [Coord; 3];

/// The eight lines in scan order: rows top-to-bottom, columns left-to-right,
/// then the main diagonal and the anti-diagonal.
///
/// When several lines are complete at once the first one in this order wins.
pub const LINES: [Line; 8] = [
    // Rows
    [Coord::at(0, 0), Coord::at(0, 1), Coord::at(0, 2)],
    [Coord::at(1, 0), Coord::at(1, 1), Coord::at(1, 2)],
    [Coord::at(2, 0), Coord::at(2, 1), Coord::at(2, 2)],
    // Columns
    [Coord::at(0, 0), Coord::at(1, 0), Coord::at(2, 0)],
    [Coord::at(0, 1), Coord::at(1, 1), Coord::at(2, 1)],
    [Coord::at(0, 2), Coord::at(1, 2), Coord::at(2, 2)],
    // Diagonals
    [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)],
    [Coord::at(0, 2), Coord::at(1, 1), Coord::at(2, 0)],
];

/// Coordinates of empty cells. Never more than nine, so kept inline.
pub type CoordList = SmallVec<[Coord; CELL_COUNT]>;

/// 3x3 grid of optional marks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Mark>; SIZE]; SIZE],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from rows of cells.
    #[must_use]
    pub const fn from_rows(cells: [[Option<Mark>; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Copy of the grid as plain rows.
    #[must_use]
    pub const fn rows(&self) -> [[Option<Mark>; SIZE]; SIZE] {
        self.cells
    }

    /// Contents of a cell.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<Mark> {
        self.cells[coord.row()][coord.col()]
    }

    /// Overwrite a cell. Move legality is the engine's concern, not the board's.
    pub fn set(&mut self, coord: Coord, cell: Option<Mark>) {
        self.cells[coord.row()][coord.col()] = cell;
    }

    /// Is the cell empty?
    #[must_use]
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord).is_none()
    }

    /// Empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> CoordList {
        Coord::all().filter(|&c| self.is_empty(c)).collect()
    }

    /// Keep only the empty cells from `candidates`, preserving their order.
    #[must_use]
    pub fn available(&self, candidates: &[Coord]) -> CoordList {
        candidates.iter().copied().filter(|&c| self.is_empty(c)).collect()
    }

    /// Are all nine cells occupied?
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// Number of cells holding `mark`.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == Some(mark)).count()
    }

    /// First complete line in scan order, with the mark that fills it.
    #[must_use]
    pub fn winning_line(&self) -> Option<(Line, Mark)> {
        LINES.iter().find_map(|&line| {
            let [a, b, c] = line;
            match self.get(a) {
                Some(mark) if self.get(b) == Some(mark) && self.get(c) == Some(mark) => {
                    Some((line, mark))
                }
                _ => None,
            }
        })
    }
}

impl Index<Coord> for Board {
    type Output = Option<Mark>;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.cells[coord.row()][coord.col()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f, "-+-+-")?;
            }
            let symbols: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or(' ', Mark::symbol).to_string())
                .collect();
            writeln!(f, "{}", symbols.join("|"))?;
        }
        Ok(())
    }
}
