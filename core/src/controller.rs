use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Ready,
    Active,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// What a single gesture did to the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    Ignored,
    FlagToggled,
    Revealed(CellCount),
    Exploded,
    Won,
}

impl Activation {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Glue between a [`GridModel`] and a [`View`]: forwards gestures to the model and mirrors the changes on the view.
#[derive(Debug)]
pub struct Controller<V, P = RandomMinePlacer> {
    model: GridModel,
    view: V,
    placer: P,
    status: GameStatus,
    revealed: CellCount,
}

impl<V: View, P: MinePlacer> Controller<V, P> {
    /// Sets up the first game and renders it.
    pub fn new(view: V, config: GameConfig, mut placer: P) -> Result<Self> {
        let model = GridModel::new(config, &mut placer)?;
        let mut controller = Self {
            model,
            view,
            placer,
            status: GameStatus::Ready,
            revealed: 0,
        };
        controller.view.render_grid(controller.model.cells());
        Ok(controller)
    }

    pub fn model(&self) -> &GridModel {
        &self.model
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn placer(&self) -> &P {
        &self.placer
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn config(&self) -> GameConfig {
        self.model.config()
    }

    /// Starts over with the current configuration.
    pub fn new_game(&mut self) -> Result<()> {
        self.new_game_with(self.model.config())
    }

    /// Starts over with `config`; an invalid one leaves the running game as it was.
    pub fn new_game_with(&mut self, config: GameConfig) -> Result<()> {
        self.model.initialize(config, &mut self.placer)?;
        self.status = GameStatus::Ready;
        self.revealed = 0;
        self.view.render_grid(self.model.cells());
        log::debug!(
            "new game: {}x{} with {} mines",
            config.rows,
            config.cols,
            config.mines
        );
        Ok(())
    }

    /// Handles a click or tap on `(row, col)`; `alternate` is set for secondary clicks and long presses.
    pub fn on_cell_activated(&mut self, row: Coord, col: Coord, alternate: bool) -> Activation {
        let cell = match self.model.cell_at((row, col)) {
            Ok(&cell) => cell,
            Err(err) => {
                log::warn!("ignoring gesture: {}", err);
                return Activation::Ignored;
            }
        };

        if self.status.is_finished() {
            log::debug!("game over, ignoring gesture on ({}, {})", row, col);
            return Activation::Ignored;
        }

        let flagging = self.view.capabilities().contains(ViewCapabilities::FLAGGING);
        if alternate && flagging && !cell.is_revealed() {
            self.toggle_flag(cell)
        } else if cell.is_mined() {
            self.explode(cell)
        } else {
            self.reveal(cell)
        }
    }

    fn toggle_flag(&mut self, cell: Cell) -> Activation {
        match self.model.toggle_flag(cell.coords()) {
            Ok(outcome) if outcome.has_update() => {
                self.view.mark_flagged(cell.row(), cell.col());
                Activation::FlagToggled
            }
            _ => Activation::Ignored,
        }
    }

    fn explode(&mut self, cell: Cell) -> Activation {
        if let Ok(cells) = self.model.reveal(cell.coords()) {
            for cell in cells {
                self.view.mark_revealed(cell.row(), cell.col());
            }
        }
        log::info!("mine hit at ({}, {}), game lost", cell.row(), cell.col());
        self.status = GameStatus::Lost;
        self.end_game(false);
        Activation::Exploded
    }

    fn reveal(&mut self, cell: Cell) -> Activation {
        let cells = match self.model.reveal(cell.coords()) {
            Ok(cells) if !cells.is_empty() => cells,
            _ => return Activation::Ignored,
        };

        for cell in &cells {
            self.view.mark_revealed(cell.row(), cell.col());
        }
        let count = CellCount::try_from(cells.len()).unwrap_or(CellCount::MAX);
        self.revealed = self.revealed.saturating_add(count);
        self.status = GameStatus::Active;

        if self.revealed == self.model.cell_count_for_victory() {
            log::info!("all {} safe cells revealed, game won", self.revealed);
            self.status = GameStatus::Won;
            self.end_game(true);
            Activation::Won
        } else {
            Activation::Revealed(count)
        }
    }

    fn end_game(&mut self, won: bool) {
        let restart = self.view.prompt_end_of_game(won);
        let confirming = self
            .view
            .capabilities()
            .contains(ViewCapabilities::CONFIRM_RESTART);

        if restart && confirming {
            if let Err(err) = self.new_game() {
                log::error!("could not restart: {}", err);
            }
        }
    }
}
