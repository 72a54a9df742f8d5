use bitflags::bitflags;
use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};

use crate::*;

bitflags! {
    /// Optional behaviors a frontend supports.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ViewCapabilities: u8 {
        /// Distinguishes an alternate gesture (secondary click, long press) and can show flags.
        const FLAGGING        = 1;
        /// The end-of-game prompt asks whether to start over, and its answer is honored.
        const CONFIRM_RESTART = 1 << 1;
    }
}

impl Default for ViewCapabilities {
    fn default() -> Self {
        Self::all()
    }
}

/// Presentation side of a game, driven by a [`Controller`].
///
/// Gestures flow the other way: the frontend calls [`Controller::on_cell_activated`] for each click or tap.
pub trait View {
    fn capabilities(&self) -> ViewCapabilities {
        ViewCapabilities::default()
    }

    /// Draws a fresh board; called once per new game.
    fn render_grid(&mut self, cells: ArrayView2<'_, Cell>);

    fn mark_revealed(&mut self, row: Coord, col: Coord);

    /// Toggles the flag marker on a hidden cell.
    fn mark_flagged(&mut self, row: Coord, col: Coord);

    /// Announces the end of the game, returns `true` when the player wants a new one.
    fn prompt_end_of_game(&mut self, won: bool) -> bool;
}
