use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {rows}x{cols} grid with {mines} mines")]
    InvalidConfiguration {
        rows: Coord,
        cols: Coord,
        mines: CellCount,
    },
    #[error("Cell ({row}, {col}) not found")]
    CellNotFound { row: Coord, col: Coord },
}

pub type Result<T> = core::result::Result<T, GameError>;
