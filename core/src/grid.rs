use alloc::vec;
use alloc::vec::Vec;
use core::ops::Index;
use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Owns the cells of one game: mine placement, neighbor counts and the flood-fill reveal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridModel {
    config: GameConfig,
    cells: Array2<Cell>,
    revealed_count: CellCount,
    flagged_count: CellCount,
}

impl GridModel {
    /// Builds a grid for `config`, asking `placer` for mine positions until `config.mines` distinct cells are mined.
    ///
    /// Placement is rejection sampling: a draw that lands on a mined cell is discarded and drawn again. Expected draws
    /// stay close to the mine count for the sparse boards this game uses, but grow quickly as the mine count approaches
    /// the number of cells.
    pub fn new(config: GameConfig, placer: impl MinePlacer) -> Result<Self> {
        config.validate()?;
        let mut grid = Self::unmined(config);
        grid.plant_mines(placer);
        Ok(grid)
    }

    /// Builds a grid with mines at exactly `mine_coords`; repeated coordinates count once.
    pub fn from_mine_coords(rows: Coord, cols: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let requested = CellCount::try_from(mine_coords.len()).unwrap_or(CellCount::MAX);
        GameConfig::new_unchecked(rows, cols, 0)
            .validate()
            .map_err(|_| GameError::InvalidConfiguration {
                rows,
                cols,
                mines: requested,
            })?;

        let mut grid = Self::unmined(GameConfig::new_unchecked(rows, cols, 0));
        for &coords in mine_coords {
            let coords = grid.validate_coords(coords)?;
            if grid.plant(coords) {
                grid.config.mines += 1;
            }
        }
        grid.config.validate()?;
        Ok(grid)
    }

    /// Replaces the current grid with a fresh one.
    ///
    /// On error the current grid is left untouched.
    pub fn initialize(&mut self, config: GameConfig, placer: impl MinePlacer) -> Result<()> {
        *self = Self::new(config, placer)?;
        Ok(())
    }

    fn unmined(config: GameConfig) -> Self {
        let shape = (usize::from(config.rows), usize::from(config.cols));
        Self {
            config,
            cells: Array2::from_shape_fn(shape, |(row, col)| {
                Cell::new((row as Coord, col as Coord))
            }),
            revealed_count: 0,
            flagged_count: 0,
        }
    }

    fn plant_mines(&mut self, mut placer: impl MinePlacer) {
        let (rows, cols) = self.size();
        let mut planted: CellCount = 0;
        let mut draws: u32 = 0;

        while planted < self.config.mines {
            let coords = placer.draw(rows, cols);
            draws += 1;
            if self.validate_coords(coords).is_ok() && self.plant(coords) {
                planted += 1;
            }
        }

        log::debug!(
            "planted {} mines on {}x{} grid in {} draws",
            planted,
            rows,
            cols,
            draws
        );
    }

    /// Mines `coords` and bumps the count of each neighbor, returns `false` when it was already mined.
    fn plant(&mut self, coords: Coord2) -> bool {
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.mined {
            return false;
        }
        cell.mined = true;

        for pos in self.neighbors(coords) {
            self.cells[pos.to_nd_index()].adjacent_mines += 1;
        }
        log::trace!("mine planted at {:?}", coords);
        true
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn rows(&self) -> Coord {
        self.config.rows
    }

    pub fn cols(&self) -> Coord {
        self.config.cols
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    /// Number of safe cells that have to be revealed to win.
    pub fn cell_count_for_victory(&self) -> CellCount {
        self.config.safe_cells()
    }

    /// Number of safe cells revealed so far.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    pub fn is_cleared(&self) -> bool {
        self.revealed_count == self.cell_count_for_victory()
    }

    pub fn cells(&self) -> ArrayView2<'_, Cell> {
        self.cells.view()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (rows, cols) = self.size();
        if coords.0 < rows && coords.1 < cols {
            Ok(coords)
        } else {
            Err(GameError::CellNotFound {
                row: coords.0,
                col: coords.1,
            })
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.cells[coords.to_nd_index()])
    }

    pub fn neighbors(&self, coords: Coord2) -> Neighbors {
        Neighbors::new(coords, self.size())
    }

    /// Reveals `coords` and, through blank cells, everything connected to it.
    ///
    /// Returns the cells that went from hidden to revealed, each exactly once. Already revealed cells are skipped, so
    /// revealing the same cell twice yields nothing the second time. Mined cells never propagate, so a mine only shows
    /// up in the result when it is `coords` itself.
    pub fn reveal(&mut self, coords: Coord2) -> Result<Vec<Cell>> {
        let start = self.validate_coords(coords)?;
        let mut revealed = Vec::new();
        let mut worklist = vec![start];

        while let Some(coords) = worklist.pop() {
            let cell = &mut self.cells[coords.to_nd_index()];
            if cell.revealed {
                continue;
            }

            cell.revealed = true;
            if cell.flagged {
                cell.flagged = false;
                self.flagged_count -= 1;
            }
            let cell = *cell;

            if !cell.mined {
                self.revealed_count += 1;
            }
            if cell.is_blank() {
                worklist.extend(
                    self.neighbors(coords)
                        .filter(|&pos| !self.cells[pos.to_nd_index()].revealed),
                );
            }
            revealed.push(cell);
        }

        log::trace!("revealed {} cells from {:?}", revealed.len(), start);
        Ok(revealed)
    }

    /// Flips the flag on a hidden cell; revealed cells are left alone.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];

        Ok(match (cell.revealed, cell.flagged) {
            (true, _) => FlagOutcome::NoChange,
            (false, false) => {
                cell.flagged = true;
                self.flagged_count += 1;
                FlagOutcome::Flagged
            }
            (false, true) => {
                cell.flagged = false;
                self.flagged_count -= 1;
                FlagOutcome::Unflagged
            }
        })
    }
}

impl Index<Coord2> for GridModel {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
