use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Side;

pub const COLS: i8 = 9;
pub const ROWS: i8 = 10;

/// A board square, addressed by zero-based column and row.
///
/// Columns run `a` to `i` from Red's left, rows `1` to `10` from Red's back
/// rank toward Blue's. The notation form is a column letter followed by
/// a row number, e.g. `e2` or `a10`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Square {
    pub col: i8,
    pub row: i8,
}

impl Square {
    pub fn new(col: i8, row: i8) -> Option<Self> {
        let square = Self { col, row };
        BOARD_REGION.contains(square).then_some(square)
    }

    /// One step by `(dcol, drow)`, or `None` when that leaves the board.
    pub fn offset(self, dcol: i8, drow: i8) -> Option<Self> {
        self.step_within(dcol, drow, BOARD_REGION)
    }

    /// One step by `(dcol, drow)`, clipped to an arbitrary bound box.
    pub fn step_within(self, dcol: i8, drow: i8, region: Region) -> Option<Self> {
        let next = Self {
            col: self.col + dcol,
            row: self.row + drow,
        };
        region.contains(next).then_some(next)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col as u8) as char, self.row + 1)
    }
}

/// The error type for the [`FromStr`] instance of [`Square`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseSquareError {
    Empty,
    InvalidColumn(char),
    InvalidRow,
}

impl std::error::Error for ParseSquareError {}

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseSquareError::Empty => write!(f, "Empty square notation"),
            ParseSquareError::InvalidColumn(c) => {
                write!(f, "Column '{}' is not a letter between a and i", c)
            }
            ParseSquareError::InvalidRow => write!(f, "Row is not a number between 1 and 10"),
        }
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_char = chars.next().ok_or(ParseSquareError::Empty)?;
        let col = match col_char.to_ascii_lowercase() {
            c @ 'a'..='i' => (c as u8 - b'a') as i8,
            _ => return Err(ParseSquareError::InvalidColumn(col_char)),
        };
        let row: i8 = chars
            .as_str()
            .parse()
            .map_err(|_| ParseSquareError::InvalidRow)?;
        if !(1..=ROWS).contains(&row) {
            return Err(ParseSquareError::InvalidRow);
        }
        Ok(Self { col, row: row - 1 })
    }
}

/// Shorthand for creating squares from a notation literal.
///
/// ```
/// # use janggi::{sq, Square};
/// assert_eq!(sq!("e2"), Square { col: 4, row: 1 });
/// ```
#[macro_export]
macro_rules! sq {
    ($s:literal) => {
        <$crate::Square as std::str::FromStr>::from_str($s)
            .expect("Invalid notation given to sq! macro")
    };
}
#[allow(unused_imports)]
pub(crate) use sq;

/// An inclusive rectangle of squares, the bound box for single steps.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub col_min: i8,
    pub row_min: i8,
    pub col_max: i8,
    pub row_max: i8,
}

impl Region {
    pub fn contains(&self, square: Square) -> bool {
        square.col >= self.col_min
            && square.col <= self.col_max
            && square.row >= self.row_min
            && square.row <= self.row_max
    }

    pub fn squares(self) -> impl Iterator<Item = Square> {
        (self.row_min..=self.row_max).flat_map(move |row| {
            (self.col_min..=self.col_max).map(move |col| Square { col, row })
        })
    }
}

pub const BOARD_REGION: Region = Region {
    col_min: 0,
    row_min: 0,
    col_max: COLS - 1,
    row_max: ROWS - 1,
};

pub const RED_PALACE: Palace = Palace {
    region: Region {
        col_min: 3,
        row_min: 0,
        col_max: 5,
        row_max: 2,
    },
};

pub const BLUE_PALACE: Palace = Palace {
    region: Region {
        col_min: 3,
        row_min: 7,
        col_max: 5,
        row_max: 9,
    },
};

/// One side's 3×3 palace with its diagonal connector graph: each of the
/// four corners connects to the center cell, and no other palace cell
/// carries a diagonal edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palace {
    region: Region,
}

impl Palace {
    pub fn region(&self) -> Region {
        self.region
    }

    pub fn contains(&self, square: Square) -> bool {
        self.region.contains(square)
    }

    pub fn center(&self) -> Square {
        Square {
            col: (self.region.col_min + self.region.col_max) / 2,
            row: (self.region.row_min + self.region.row_max) / 2,
        }
    }

    fn is_corner(&self, square: Square) -> bool {
        (square.col == self.region.col_min || square.col == self.region.col_max)
            && (square.row == self.region.row_min || square.row == self.region.row_max)
    }

    /// The diagonal connector neighbors of `square`: the four corners
    /// from the center, the center from a corner, nothing anywhere else.
    pub fn diagonal_neighbors(&self, square: Square) -> Vec<Square> {
        if square == self.center() {
            self.region
                .squares()
                .filter(|&corner| self.is_corner(corner))
                .collect()
        } else if self.is_corner(square) {
            vec![self.center()]
        } else {
            Vec::new()
        }
    }

    /// Continues the straight diagonal line `from → through` one more
    /// connector step, when the graph has an edge that far.
    pub fn diagonal_extension(&self, from: Square, through: Square) -> Option<Square> {
        let next = Square::new(2 * through.col - from.col, 2 * through.row - from.row)?;
        self.diagonal_neighbors(through)
            .contains(&next)
            .then_some(next)
    }
}

pub fn palace(side: Side) -> Palace {
    match side {
        Side::Red => RED_PALACE,
        Side::Blue => BLUE_PALACE,
    }
}

/// The palace a square stands in, if any. Chariots and cannons gain
/// their diagonal moves in either palace.
pub fn palace_at(square: Square) -> Option<Palace> {
    [RED_PALACE, BLUE_PALACE]
        .into_iter()
        .find(|palace| palace.contains(square))
}
