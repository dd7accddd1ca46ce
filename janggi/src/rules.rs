//! Check and checkmate evaluation.
//!
//! Trial moves run against a working copy of the board guarded by
//! snapshot/restore, so the authoritative board is never left mutated
//! on any path, including the short-circuiting ones.

use crate::{pseudo_legal_moves, Board, Side, Square};

/// Whether `side`'s general stands on a square any enemy piece could
/// capture. A board with no general of `side` is not in check.
pub fn is_in_check(board: &Board, side: Side) -> bool {
    let Some(general) = board.find_general(side) else {
        return false;
    };
    board
        .pieces(side.opponent())
        .any(|(from, _)| pseudo_legal_moves(board, from).contains(&general))
}

/// Applies `from → to` on a trial basis and reports whether `side` is
/// left in check. The board is restored before returning.
fn leaves_in_check(board: &mut Board, from: Square, to: Square, side: Side) -> bool {
    let saved = board.snapshot();
    if let Some(piece) = board.get(from) {
        board.clear(from);
        board.set(to, piece);
    }
    let check = is_in_check(board, side);
    board.restore(&saved);
    check
}

/// Every self-check-safe move available to `side`.
pub fn legal_moves(board: &Board, side: Side) -> Vec<(Square, Square)> {
    let mut trial = board.clone();
    let mut legal = Vec::new();
    for (from, _) in board.pieces(side) {
        for to in pseudo_legal_moves(board, from) {
            if !leaves_in_check(&mut trial, from, to, side) {
                legal.push((from, to));
            }
        }
    }
    legal
}

/// Exhaustive one-ply escape search: true iff no pseudo-legal move of
/// `side` leaves its general safe. Short-circuits on the first escape.
pub fn is_checkmated(board: &Board, side: Side) -> bool {
    let mut trial = board.clone();
    for (from, _) in board.pieces(side) {
        for to in pseudo_legal_moves(board, from) {
            if !leaves_in_check(&mut trial, from, to, side) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::ScatteredBoard;
    use crate::{sq, Piece, PieceKind, ROWS};

    fn board_with(pieces: &[(&str, Side, PieceKind)]) -> Board {
        let mut board = Board::new();
        for &(notation, side, kind) in pieces {
            let square = notation.parse().unwrap();
            board.set(square, Piece::new(side, kind));
        }
        board
    }

    /// Swaps every piece's side and mirrors the rows, which maps each
    /// palace onto the other and flips the soldiers' forward direction.
    fn mirrored(board: &Board) -> Board {
        let mut result = Board::new();
        for (square, piece) in board.occupants() {
            let reflected = Square {
                col: square.col,
                row: ROWS - 1 - square.row,
            };
            result.set(reflected, Piece::new(piece.side.opponent(), piece.kind));
        }
        result
    }

    quickcheck! {
        fn check_is_symmetric_under_side_swap(input: ScatteredBoard) -> bool {
            let mirror = mirrored(&input.board);
            is_in_check(&input.board, Side::Red) == is_in_check(&mirror, Side::Blue)
                && is_in_check(&input.board, Side::Blue) == is_in_check(&mirror, Side::Red)
        }

        fn evaluation_never_mutates_the_board(input: ScatteredBoard) -> bool {
            let before = input.board.clone();
            let _ = is_in_check(&input.board, Side::Red);
            let _ = legal_moves(&input.board, Side::Blue);
            let _ = is_checkmated(&input.board, Side::Red);
            input.board == before
        }
    }

    #[test]
    fn chariot_checks_along_an_open_file() {
        let open = board_with(&[
            ("e2", Side::Red, PieceKind::General),
            ("e9", Side::Blue, PieceKind::Chariot),
        ]);
        assert!(is_in_check(&open, Side::Red));
        assert!(!is_in_check(&open, Side::Blue));

        let blocked = board_with(&[
            ("e2", Side::Red, PieceKind::General),
            ("e5", Side::Red, PieceKind::Soldier),
            ("e9", Side::Blue, PieceKind::Chariot),
        ]);
        assert!(!is_in_check(&blocked, Side::Red));
    }

    #[test]
    fn cannon_checks_only_over_a_screen() {
        let board = board_with(&[
            ("e2", Side::Red, PieceKind::General),
            ("e5", Side::Red, PieceKind::Soldier),
            ("e9", Side::Blue, PieceKind::Cannon),
        ]);
        assert!(is_in_check(&board, Side::Red));

        let no_screen = board_with(&[
            ("e2", Side::Red, PieceKind::General),
            ("e9", Side::Blue, PieceKind::Cannon),
        ]);
        assert!(!is_in_check(&no_screen, Side::Red));
    }

    #[test]
    fn missing_general_is_not_in_check() {
        let board = board_with(&[("e9", Side::Blue, PieceKind::Chariot)]);
        assert!(!is_in_check(&board, Side::Red));
    }

    #[test]
    fn pinned_piece_may_not_leave_the_file() {
        let board = board_with(&[
            ("e2", Side::Red, PieceKind::General),
            ("e4", Side::Red, PieceKind::Chariot),
            ("e9", Side::Blue, PieceKind::Chariot),
        ]);
        let legal = legal_moves(&board, Side::Red);
        assert!(legal.contains(&(sq!("e4"), sq!("e5"))));
        assert!(legal.contains(&(sq!("e4"), sq!("e9"))));
        assert!(!legal.contains(&(sq!("e4"), sq!("d4"))));
        assert!(!legal.contains(&(sq!("e4"), sq!("a4"))));
    }

    #[test]
    fn two_chariots_on_the_connectors_mate_a_lone_general() {
        let board = board_with(&[
            ("e2", Side::Red, PieceKind::General),
            ("d3", Side::Blue, PieceKind::Chariot),
            ("f1", Side::Blue, PieceKind::Chariot),
        ]);
        assert!(is_in_check(&board, Side::Red));
        assert!(is_checkmated(&board, Side::Red));

        // removing either chariot opens an escape
        let partial = board_with(&[
            ("e2", Side::Red, PieceKind::General),
            ("d3", Side::Blue, PieceKind::Chariot),
        ]);
        assert!(is_in_check(&partial, Side::Red));
        assert!(!is_checkmated(&partial, Side::Red));
    }

    #[test]
    fn a_defender_can_block_a_single_check() {
        let board = board_with(&[
            ("e2", Side::Red, PieceKind::General),
            ("d4", Side::Red, PieceKind::Chariot),
            ("e9", Side::Blue, PieceKind::Chariot),
        ]);
        assert!(is_in_check(&board, Side::Red));
        // d4 → e4 interposes on the checking file
        assert!(!is_checkmated(&board, Side::Red));
        assert!(legal_moves(&board, Side::Red).contains(&(sq!("d4"), sq!("e4"))));
    }
}
