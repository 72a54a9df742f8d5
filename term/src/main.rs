use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use mines_core::{CellCount, Controller, Coord, RandomMinePlacer};
use std::io;
use std::path::PathBuf;

use command::Command;
use settings::Settings;
use view::TerminalView;

mod command;
mod settings;
mod view;

#[derive(Parser, Debug)]
#[command(version, about = "Clear the grid without stepping on a mine", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Settings file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of rows
    #[arg(long)]
    rows: Option<Coord>,

    /// Number of columns
    #[arg(long)]
    cols: Option<Coord>,

    /// Number of mines
    #[arg(short, long)]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Treat `f` like `r` instead of placing flags
    #[arg(long)]
    no_flags: bool,

    /// Do not offer a new game when one ends
    #[arg(long)]
    no_confirm: bool,

    /// Print the effective settings as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

impl Args {
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        if let Some(rows) = self.rows {
            settings.rows = rows;
        }
        if let Some(cols) = self.cols {
            settings.cols = cols;
        }
        if let Some(mines) = self.mines {
            settings.mines = mines;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        settings.flagging &= !self.no_flags;
        settings.confirm_restart &= !self.no_confirm;
        Ok(settings)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let settings = args.settings()?;
    if args.dump_config {
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    let config = settings.game_config().context("invalid board settings")?;
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("seed: {}", seed);

    let view = TerminalView::new(io::stdin().lock(), io::stdout().lock(), settings.capabilities());
    let mut controller = Controller::new(view, config, RandomMinePlacer::new(seed))?;
    controller.view_mut().write_help().context("could not write to terminal")?;

    loop {
        controller.view_mut().draw().context("could not write to terminal")?;
        let command = controller
            .view_mut()
            .read_command()
            .context("could not read from terminal")?;

        match command {
            Some(Command::Reveal(row, col)) => {
                controller.on_cell_activated(row, col, false);
            }
            Some(Command::Flag(row, col)) => {
                controller.on_cell_activated(row, col, true);
            }
            Some(Command::NewGame) => controller.new_game()?,
            Some(Command::Help) => controller
                .view_mut()
                .write_help()
                .context("could not write to terminal")?,
            Some(Command::Quit) | None => break,
        }
    }

    log::debug!("bye");
    Ok(())
}
