//! Board state: a fixed 5x5 grid of optional occupants.

use crate::config::{BOARD_SIZE, HOME_ROW_A, HOME_ROW_B, START_COLUMNS};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// One of the two competing participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    /// The other side.
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

impl FromStr for Side {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Side::A),
            "B" => Ok(Side::B),
            _ => Err(ParseTokenError("side")),
        }
    }
}

/// Piece type determining the movement pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    P1,
    P2,
    P3,
    H1,
    H2,
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterClass::P1 => "P1",
            CharacterClass::P2 => "P2",
            CharacterClass::P3 => "P3",
            CharacterClass::H1 => "H1",
            CharacterClass::H2 => "H2",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for CharacterClass {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P1" => Ok(CharacterClass::P1),
            "P2" => Ok(CharacterClass::P2),
            "P3" => Ok(CharacterClass::P3),
            "H1" => Ok(CharacterClass::H1),
            "H2" => Ok(CharacterClass::H2),
            _ => Err(ParseTokenError("character class")),
        }
    }
}

/// Failed to parse a wire token such as `"A"`, `"P1"` or `"A-P1"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseTokenError(&'static str);

impl fmt::Display for ParseTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} token", self.0)
    }
}

/// A side+class pair placed on a board cell.
///
/// Serialized on the wire as a `"A-P1"`-style string, the form the board
/// renderer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Occupant {
    pub side: Side,
    pub class: CharacterClass,
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.side, self.class)
    }
}

impl From<Occupant> for String {
    fn from(occupant: Occupant) -> String {
        occupant.to_string()
    }
}

impl FromStr for Occupant {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (side, class) = s.split_once('-').ok_or(ParseTokenError("occupant"))?;
        Ok(Occupant {
            side: side.parse()?,
            class: class.parse()?,
        })
    }
}

impl TryFrom<String> for Occupant {
    type Error = ParseTokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Cell coordinates, row and column both in `[0, BOARD_SIZE)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Apply a row/column displacement, `None` when the result leaves the
    /// board.
    pub fn offset(self, drow: i32, dcol: i32) -> Option<Position> {
        let row = self.row as i32 + drow;
        let col = self.col as i32 + dcol;
        let bound = BOARD_SIZE as i32;
        if (0..bound).contains(&row) && (0..bound).contains(&col) {
            Some(Position {
                row: row as usize,
                col: col as usize,
            })
        } else {
            None
        }
    }
}

/// Fixed 5x5 grid of cells. No two occupants ever share a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Option<Occupant>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board with no occupants.
    pub fn empty() -> Self {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Starting layout: each side's five characters on its home row, in
    /// the fixed column order.
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for (col, class) in START_COLUMNS.into_iter().enumerate() {
            board.cells[HOME_ROW_A][col] = Some(Occupant {
                side: Side::A,
                class,
            });
            board.cells[HOME_ROW_B][col] = Some(Occupant {
                side: Side::B,
                class,
            });
        }
        board
    }

    /// Occupant at `pos`, if any.
    pub fn get(&self, pos: Position) -> Option<Occupant> {
        self.cells[pos.row][pos.col]
    }

    /// Overwrite the cell at `pos`.
    pub fn set(&mut self, pos: Position, occupant: Option<Occupant>) {
        self.cells[pos.row][pos.col] = occupant;
    }

    /// Locate a side's character by linear scan. Occupant identity is
    /// positional: at most one live occupant per class per side.
    pub fn find(&self, side: Side, class: CharacterClass) -> Option<Position> {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if *cell == Some(Occupant { side, class }) {
                    return Some(Position { row, col });
                }
            }
        }
        None
    }

    /// Total number of occupants on the board.
    pub fn occupant_count(&self) -> usize {
        self.cells.iter().flatten().flatten().count()
    }

    /// Number of occupants belonging to `side`.
    pub fn side_count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .filter(|occupant| occupant.side == side)
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cells in &self.cells {
            for cell in cells {
                match cell {
                    Some(occupant) => write!(f, "{:>5} ", occupant.to_string())?,
                    None => write!(f, "{:>5} ", ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
