use mines_core::{Cell, Coord, View, ViewCapabilities};
use ndarray::{Array2, ArrayView2};
use std::io::{self, BufRead, Write};

use crate::command::{Command, HELP};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
enum Mark {
    #[default]
    Hidden,
    Flagged,
    Revealed,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct Tile {
    mined: bool,
    adjacent_mines: u8,
    mark: Mark,
}

/// Line-oriented board on a pair of text streams.
///
/// The board is a local mirror: it learns cell contents on `render_grid` and only shows what the controller has
/// marked since.
pub(crate) struct TerminalView<R, W> {
    input: R,
    output: W,
    capabilities: ViewCapabilities,
    tiles: Array2<Tile>,
}

impl<R: BufRead, W: Write> TerminalView<R, W> {
    pub(crate) fn new(input: R, output: W, capabilities: ViewCapabilities) -> Self {
        Self {
            input,
            output,
            capabilities,
            tiles: Array2::default((0, 0)),
        }
    }

    #[cfg(test)]
    pub(crate) fn output(&self) -> &W {
        &self.output
    }

    fn symbol(&self, index: (usize, usize)) -> char {
        let tile = self.tiles[index];
        match tile.mark {
            Mark::Hidden => '#',
            Mark::Flagged => 'F',
            Mark::Revealed if tile.mined => '*',
            Mark::Revealed if tile.adjacent_mines == 0 => '.',
            Mark::Revealed => char::from_digit(tile.adjacent_mines.into(), 10).unwrap_or('?'),
        }
    }

    /// Prints the board with row and column indices.
    pub(crate) fn draw(&mut self) -> io::Result<()> {
        let (rows, cols) = self.tiles.dim();
        let row_width = digits(rows);
        let col_width = digits(cols);

        write!(self.output, "{:row_width$} ", "")?;
        for col in 0..cols {
            write!(self.output, " {col:>col_width$}")?;
        }
        writeln!(self.output)?;

        for row in 0..rows {
            write!(self.output, "{row:>row_width$} ")?;
            for col in 0..cols {
                let symbol = self.symbol((row, col));
                write!(self.output, " {symbol:>col_width$}")?;
            }
            writeln!(self.output)?;
        }

        let flags = self
            .tiles
            .iter()
            .filter(|tile| tile.mark == Mark::Flagged)
            .count();
        let mines = self.tiles.iter().filter(|tile| tile.mined).count();
        writeln!(self.output, "mines: {mines}  flags: {flags}")?;
        self.output.flush()
    }

    pub(crate) fn write_help(&mut self) -> io::Result<()> {
        writeln!(self.output, "{HELP}")?;
        if !self.capabilities.contains(ViewCapabilities::FLAGGING) {
            writeln!(self.output, "(flagging is disabled, `f` reveals)")?;
        }
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Reads lines until one parses as a command; `None` at end of input.
    pub(crate) fn read_command(&mut self) -> io::Result<Option<Command>> {
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(command) => return Ok(Some(command)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn ask_restart(&mut self, message: &str) -> io::Result<bool> {
        write!(self.output, "{message} Start a new game? [y/N] ")?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
    }
}

fn digits(count: usize) -> usize {
    count.saturating_sub(1).max(1).ilog10() as usize + 1
}

impl<R: BufRead, W: Write> View for TerminalView<R, W> {
    fn capabilities(&self) -> ViewCapabilities {
        self.capabilities
    }

    fn render_grid(&mut self, cells: ArrayView2<'_, Cell>) {
        self.tiles = cells.map(|cell| Tile {
            mined: cell.is_mined(),
            adjacent_mines: cell.adjacent_mines(),
            mark: Mark::Hidden,
        });
    }

    fn mark_revealed(&mut self, row: Coord, col: Coord) {
        if let Some(tile) = self.tiles.get_mut((usize::from(row), usize::from(col))) {
            tile.mark = Mark::Revealed;
        }
    }

    fn mark_flagged(&mut self, row: Coord, col: Coord) {
        if let Some(tile) = self.tiles.get_mut((usize::from(row), usize::from(col))) {
            tile.mark = match tile.mark {
                Mark::Hidden => Mark::Flagged,
                Mark::Flagged => Mark::Hidden,
                Mark::Revealed => Mark::Revealed,
            };
        }
    }

    fn prompt_end_of_game(&mut self, won: bool) -> bool {
        let message = if won {
            "You win!"
        } else {
            "Boom! You lose."
        };

        if !self.capabilities.contains(ViewCapabilities::CONFIRM_RESTART) {
            if let Err(err) = writeln!(self.output, "{message} Type `n` for a new game.") {
                log::error!("could not write to terminal: {}", err);
            }
            return false;
        }

        self.ask_restart(message).unwrap_or_else(|err| {
            log::error!("could not read answer: {}", err);
            false
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mines_core::{Activation, Controller, GameConfig, GameStatus, ScriptedMinePlacer};
    use std::io::Cursor;

    type TestView = TerminalView<Cursor<Vec<u8>>, Vec<u8>>;

    fn view(input: &str, capabilities: ViewCapabilities) -> TestView {
        TerminalView::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), capabilities)
    }

    /// 3x3 board, one mine in the bottom-right corner.
    fn controller(
        input: &str,
        capabilities: ViewCapabilities,
    ) -> Controller<TestView, ScriptedMinePlacer> {
        let config = GameConfig::new(3, 3, 1).unwrap();
        let placer = ScriptedMinePlacer::new([(2, 2)]);
        Controller::new(view(input, capabilities), config, placer).unwrap()
    }

    fn output(controller: &Controller<TestView, ScriptedMinePlacer>) -> String {
        String::from_utf8(controller.view().output().clone()).unwrap()
    }

    #[test]
    fn fresh_board_is_hidden() {
        let mut controller = controller("", ViewCapabilities::all());

        controller.view_mut().draw().unwrap();

        assert_eq!(
            output(&controller),
            "   0 1 2\n0  # # #\n1  # # #\n2  # # #\nmines: 1  flags: 0\n"
        );
    }

    #[test]
    fn draws_reveals_and_flags() {
        let mut controller = controller("", ViewCapabilities::FLAGGING);

        controller.on_cell_activated(1, 1, false);
        controller.on_cell_activated(2, 2, true);
        controller.view_mut().draw().unwrap();

        assert_eq!(
            output(&controller),
            "   0 1 2\n0  # # #\n1  # 1 #\n2  # # F\nmines: 1  flags: 1\n"
        );
    }

    #[test]
    fn lost_game_shows_the_mine() {
        let mut controller = controller("", ViewCapabilities::FLAGGING);

        assert_eq!(controller.on_cell_activated(2, 2, false), Activation::Exploded);
        controller.view_mut().draw().unwrap();

        let text = output(&controller);
        assert!(text.starts_with("Boom! You lose. Type `n` for a new game.\n"));
        assert!(text.contains("2  # # *"));
    }

    #[test]
    fn confirmed_restart_reads_answer() {
        let mut controller = controller("y\n", ViewCapabilities::all());

        assert_eq!(controller.on_cell_activated(0, 0, false), Activation::Won);

        assert!(output(&controller).contains("You win! Start a new game? [y/N] "));
        assert_eq!(controller.status(), GameStatus::Ready);
    }

    #[test]
    fn declined_restart_keeps_finished_game() {
        let mut controller = controller("\n", ViewCapabilities::all());

        controller.on_cell_activated(0, 0, false);
        controller.view_mut().draw().unwrap();

        assert_eq!(controller.status(), GameStatus::Won);
        assert!(output(&controller).contains("0  . . .\n1  . 1 1\n2  . 1 #\n"));
    }

    #[test]
    fn read_command_skips_bad_lines() {
        let mut view = view("\nbogus\nr 1 2\n", ViewCapabilities::all());

        assert_eq!(view.read_command().unwrap(), Some(Command::Reveal(1, 2)));
        assert_eq!(view.read_command().unwrap(), None);

        let text = String::from_utf8(view.output().clone()).unwrap();
        assert!(text.contains("unknown command `bogus`"));
    }

    #[test]
    fn wide_boards_pad_columns() {
        let mut view = view("", ViewCapabilities::all());
        let config = GameConfig::new(2, 12, 0).unwrap();
        let grid = mines_core::GridModel::new(config, ScriptedMinePlacer::default()).unwrap();

        view.render_grid(grid.cells());
        view.draw().unwrap();

        let text = String::from_utf8(view.output().clone()).unwrap();
        assert!(text.starts_with("    0  1  2  3  4  5  6  7  8  9 10 11\n"));
        assert!(text.contains("0   #  #"));
    }

    #[test]
    fn digit_widths() {
        assert_eq!(digits(1), 1);
        assert_eq!(digits(10), 1);
        assert_eq!(digits(11), 2);
        assert_eq!(digits(100), 2);
        assert_eq!(digits(101), 3);
    }
}
