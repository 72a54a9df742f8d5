use serde::{Deserialize, Serialize};

use crate::*;

/// One square of the grid.
///
/// `mined` and `adjacent_mines` are fixed once the grid is built, `revealed` only ever goes from `false` to `true`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) row: Coord,
    pub(crate) col: Coord,
    pub(crate) mined: bool,
    pub(crate) adjacent_mines: u8,
    pub(crate) revealed: bool,
    pub(crate) flagged: bool,
}

impl Cell {
    pub(crate) const fn new((row, col): Coord2) -> Self {
        Self {
            row,
            col,
            mined: false,
            adjacent_mines: 0,
            revealed: false,
            flagged: false,
        }
    }

    pub const fn row(&self) -> Coord {
        self.row
    }

    pub const fn col(&self) -> Coord {
        self.col
    }

    pub const fn coords(&self) -> Coord2 {
        (self.row, self.col)
    }

    pub const fn is_mined(&self) -> bool {
        self.mined
    }

    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    /// A safe cell with no mined neighbors; revealing one opens its neighbors too.
    pub const fn is_blank(&self) -> bool {
        !self.mined && self.adjacent_mines == 0
    }
}
