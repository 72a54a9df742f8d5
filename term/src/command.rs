use core::str::FromStr;
use mines_core::Coord;
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Reveal(Coord, Coord),
    Flag(Coord, Coord),
    NewGame,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`, type `help` for a list")]
    Unknown(String),
    #[error("`{0}` expects a row and a column")]
    MissingCoords(String),
    #[error("`{0}` is not a valid coordinate")]
    InvalidCoord(String),
    #[error("unexpected input after command: `{0}`")]
    Trailing(String),
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(ParseError::Empty)?;

        let command = match name.to_ascii_lowercase().as_str() {
            "r" | "reveal" => {
                let (row, col) = parse_coords(name, &mut words)?;
                Self::Reveal(row, col)
            }
            "f" | "flag" => {
                let (row, col) = parse_coords(name, &mut words)?;
                Self::Flag(row, col)
            }
            "n" | "new" => Self::NewGame,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => return Err(ParseError::Unknown(name.to_string())),
        };

        match words.next() {
            Some(extra) => Err(ParseError::Trailing(extra.to_string())),
            None => Ok(command),
        }
    }
}

fn parse_coords<'a>(
    name: &str,
    words: &mut impl Iterator<Item = &'a str>,
) -> Result<(Coord, Coord), ParseError> {
    let mut next = || -> Result<Coord, ParseError> {
        let word = words
            .next()
            .ok_or_else(|| ParseError::MissingCoords(name.to_string()))?;
        word.parse()
            .map_err(|_| ParseError::InvalidCoord(word.to_string()))
    };
    let row = next()?;
    let col = next()?;
    Ok((row, col))
}

pub(crate) const HELP: &str = "\
commands:
  r ROW COL   reveal a cell
  f ROW COL   toggle a flag
  n           new game
  h           this help
  q           quit";
