use std::fmt;

use serde::{Deserialize, Serialize};

/// The two players. Blue moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Red,
    Blue,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
        }
    }

    /// The row direction this side's soldiers advance in. Red starts on
    /// rows 1 to 4 and pushes toward row 10, Blue the other way.
    pub fn forward(self) -> i8 {
        match self {
            Side::Red => 1,
            Side::Blue => -1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => write!(f, "red"),
            Side::Blue => write!(f, "blue"),
        }
    }
}

/// The seven piece kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    General,
    Guard,
    Horse,
    Elephant,
    Chariot,
    Cannon,
    Soldier,
}

/// An occupant of a board square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(side: Side, kind: PieceKind) -> Self {
        Self { side, kind }
    }

    /// Single-letter code, uppercase for Red and lowercase for Blue.
    pub fn letter(&self) -> char {
        let letter = match self.kind {
            PieceKind::General => 'k',
            PieceKind::Guard => 'a',
            PieceKind::Horse => 'h',
            PieceKind::Elephant => 'e',
            PieceKind::Chariot => 'r',
            PieceKind::Cannon => 'c',
            PieceKind::Soldier => 'p',
        };
        if self.side == Side::Red {
            letter.to_ascii_uppercase()
        } else {
            letter
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
