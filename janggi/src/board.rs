use std::ops::Index;

use crate::{Piece, PieceKind, Side, Square, COLS, ROWS};

pub const SQUARES: usize = (COLS as usize) * (ROWS as usize);

/// Occupancy of the 9×10 board, and nothing else: no turn, no outcome,
/// no legality checking. Trial moves mutate the board in place and roll
/// back through [`snapshot`](Board::snapshot) / [`restore`](Board::restore).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [Option<Piece>; SQUARES],
}

/// A saved copy of the occupancy, for rolling back trial moves.
#[derive(Clone)]
pub struct BoardSnapshot {
    grid: [Option<Piece>; SQUARES],
}

impl Board {
    pub fn new() -> Self {
        Self {
            grid: [None; SQUARES],
        }
    }

    /// The standard starting layout: back rank of chariot, elephant,
    /// horse and guards, the general one row up in the palace center,
    /// cannons on the third row, five soldiers on the fourth.
    pub fn standard() -> Self {
        let back_rank = [
            (0, PieceKind::Chariot),
            (1, PieceKind::Elephant),
            (2, PieceKind::Horse),
            (3, PieceKind::Guard),
            (5, PieceKind::Guard),
            (6, PieceKind::Elephant),
            (7, PieceKind::Horse),
            (8, PieceKind::Chariot),
        ];

        let mut board = Self::new();
        for side in [Side::Red, Side::Blue] {
            // rows counted from this side's own back rank
            let home = |row: i8| match side {
                Side::Red => row,
                Side::Blue => ROWS - 1 - row,
            };
            for (col, kind) in back_rank {
                board.set(Square { col, row: home(0) }, Piece::new(side, kind));
            }
            board.set(
                Square { col: 4, row: home(1) },
                Piece::new(side, PieceKind::General),
            );
            for col in [1, 7] {
                board.set(
                    Square { col, row: home(2) },
                    Piece::new(side, PieceKind::Cannon),
                );
            }
            for col in [0, 2, 4, 6, 8] {
                board.set(
                    Square { col, row: home(3) },
                    Piece::new(side, PieceKind::Soldier),
                );
            }
        }
        board
    }

    fn index_of(square: Square) -> usize {
        square.row as usize * COLS as usize + square.col as usize
    }

    pub fn get(&self, square: Square) -> Option<Piece> {
        self.grid[Self::index_of(square)]
    }

    pub fn set(&mut self, square: Square, piece: Piece) {
        self.grid[Self::index_of(square)] = Some(piece);
    }

    pub fn clear(&mut self, square: Square) {
        self.grid[Self::index_of(square)] = None;
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot { grid: self.grid }
    }

    pub fn restore(&mut self, snapshot: &BoardSnapshot) {
        self.grid = snapshot.grid;
    }

    /// Every occupied square with its occupant.
    pub fn occupants(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.grid.iter().enumerate().filter_map(|(index, piece)| {
            piece.map(|piece| {
                let square = Square {
                    col: (index % COLS as usize) as i8,
                    row: (index / COLS as usize) as i8,
                };
                (square, piece)
            })
        })
    }

    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupants().filter(move |(_, piece)| piece.side == side)
    }

    pub fn find_general(&self, side: Side) -> Option<Square> {
        self.pieces(side)
            .find(|(_, piece)| piece.kind == PieceKind::General)
            .map(|(square, _)| square)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, square: Square) -> &Self::Output {
        &self.grid[Self::index_of(square)]
    }
}
