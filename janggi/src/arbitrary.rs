use quickcheck::{Arbitrary, Gen};

use crate::{palace, Board, Piece, PieceKind, Side, Square, COLS, ROWS};

impl Arbitrary for Side {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Side::Red, Side::Blue]).unwrap()
    }
}

impl Arbitrary for PieceKind {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[
            PieceKind::General,
            PieceKind::Guard,
            PieceKind::Horse,
            PieceKind::Elephant,
            PieceKind::Chariot,
            PieceKind::Cannon,
            PieceKind::Soldier,
        ])
        .unwrap()
    }
}

impl Arbitrary for Piece {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            side: Side::arbitrary(g),
            kind: PieceKind::arbitrary(g),
        }
    }
}

impl Arbitrary for Square {
    fn arbitrary(g: &mut Gen) -> Self {
        Square {
            col: (u8::arbitrary(g) % COLS as u8) as i8,
            row: (u8::arbitrary(g) % ROWS as u8) as i8,
        }
    }
}

/// A sparsely populated board with both generals standing somewhere in
/// their palaces, plus one occupied square to probe.
#[derive(Clone, Debug)]
pub struct ScatteredBoard {
    pub board: Board,
    pub probe: Square,
}

impl Arbitrary for ScatteredBoard {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut board = Board::new();
        for side in [Side::Red, Side::Blue] {
            let cells: Vec<Square> = palace(side).region().squares().collect();
            board.set(*g.choose(&cells).unwrap(), Piece::new(side, PieceKind::General));
        }

        let kinds = [
            PieceKind::Guard,
            PieceKind::Horse,
            PieceKind::Elephant,
            PieceKind::Chariot,
            PieceKind::Cannon,
            PieceKind::Soldier,
        ];
        for _ in 0..usize::arbitrary(g) % 12 {
            let square = Square::arbitrary(g);
            if board.get(square).is_none() {
                let piece = Piece::new(Side::arbitrary(g), *g.choose(&kinds).unwrap());
                board.set(square, piece);
            }
        }

        let occupied: Vec<Square> = board.occupants().map(|(square, _)| square).collect();
        let probe = *g.choose(&occupied).unwrap();
        ScatteredBoard { board, probe }
    }
}
