#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use controller::*;
pub use error::*;
pub use grid::*;
pub use placer::*;
pub use types::*;
pub use view::*;

mod cell;
mod controller;
mod error;
mod grid;
mod placer;
mod types;
mod view;

/// Dimensions and mine count of one game session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const BEGINNER: Self = Self::new_unchecked(8, 8, 10);

    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(rows, cols, mines);
        config.validate()?;
        Ok(config)
    }

    /// Checks that the grid is non-empty and leaves at least one safe cell.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 || self.mines >= self.total_cells() {
            return Err(GameError::InvalidConfiguration {
                rows: self.rows,
                cols: self.cols,
                mines: self.mines,
            });
        }
        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::BEGINNER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_eight_by_eight_with_ten_mines() {
        let config = GameConfig::default();

        assert_eq!(config.size(), (8, 8));
        assert_eq!(config.mines, 10);
        assert_eq!(config.safe_cells(), 54);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_empty_dimensions() {
        assert_eq!(
            GameConfig::new(0, 4, 0),
            Err(GameError::InvalidConfiguration {
                rows: 0,
                cols: 4,
                mines: 0
            })
        );
        assert!(GameConfig::new(4, 0, 0).is_err());
    }

    #[test]
    fn requires_at_least_one_safe_cell() {
        assert!(GameConfig::new(2, 2, 3).is_ok());
        assert!(GameConfig::new(2, 2, 4).is_err());
        assert!(GameConfig::new(1, 1, 0).is_ok());
    }

    #[test]
    fn deserialized_config_is_checked_separately() {
        let config: GameConfig =
            serde_json::from_str(r#"{"rows": 3, "cols": 3, "mines": 9}"#).unwrap();

        assert!(config.validate().is_err());
    }
}
