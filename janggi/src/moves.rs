//! Movement primitives and per-kind candidate generation.
//!
//! Candidates are pseudo-legal: consistent with the piece's movement
//! pattern and with occupancy blocking, but not yet screened against
//! leaving the mover's own general in check (see [`crate::rules`]).

use crate::{palace, palace_at, Board, PieceKind, Side, Square};

pub const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Walks from `from` in one direction until the board edge or the first
/// occupant. Returns the empty squares traversed and the blocking
/// square, if any.
pub fn slide_ray(
    board: &Board,
    from: Square,
    (dcol, drow): (i8, i8),
) -> (Vec<Square>, Option<Square>) {
    let mut empties = Vec::new();
    let mut cursor = from;
    while let Some(next) = cursor.offset(dcol, drow) {
        if board.get(next).is_some() {
            return (empties, Some(next));
        }
        empties.push(next);
        cursor = next;
    }
    (empties, None)
}

/// The landing rule shared by every piece kind: a candidate square must
/// be empty or hold an enemy.
fn can_land(board: &Board, square: Square, side: Side) -> bool {
    board.get(square).map_or(true, |piece| piece.side != side)
}

/// The two diagonal continuations consistent with an orthogonal step,
/// used by the horse and elephant legs.
fn outward_diagonals((dcol, drow): (i8, i8)) -> [(i8, i8); 2] {
    if drow == 0 {
        [(dcol, 1), (dcol, -1)]
    } else {
        [(1, drow), (-1, drow)]
    }
}

/// All candidate destinations for the occupant of `from`, or an empty
/// set when the square is unoccupied.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };
    let mut moves = Vec::new();
    match piece.kind {
        PieceKind::Soldier => soldier_moves(board, from, piece.side, &mut moves),
        PieceKind::General | PieceKind::Guard => {
            palace_step_moves(board, from, piece.side, &mut moves)
        }
        PieceKind::Horse => horse_moves(board, from, piece.side, &mut moves),
        PieceKind::Elephant => elephant_moves(board, from, piece.side, &mut moves),
        PieceKind::Chariot => chariot_moves(board, from, piece.side, &mut moves),
        PieceKind::Cannon => cannon_moves(board, from, piece.side, &mut moves),
    }
    moves
}

/// One step sideways either way, or one step forward. Never backward.
fn soldier_moves(board: &Board, from: Square, side: Side, moves: &mut Vec<Square>) {
    for (dcol, drow) in [(1, 0), (-1, 0), (0, side.forward())] {
        if let Some(to) = from.offset(dcol, drow) {
            if can_land(board, to, side) {
                moves.push(to);
            }
        }
    }
}

/// Guard movement, shared verbatim by the general: one orthogonal step
/// clipped to the owning side's palace, plus one diagonal connector
/// step when standing on a palace corner or the center.
fn palace_step_moves(board: &Board, from: Square, side: Side, moves: &mut Vec<Square>) {
    let palace = palace(side);
    for (dcol, drow) in ORTHOGONAL {
        if let Some(to) = from.step_within(dcol, drow, palace.region()) {
            if can_land(board, to, side) {
                moves.push(to);
            }
        }
    }
    for to in palace.diagonal_neighbors(from) {
        if can_land(board, to, side) {
            moves.push(to);
        }
    }
}

/// One orthogonal step onto an empty square, then one diagonal step
/// outward. Up to eight candidates.
fn horse_moves(board: &Board, from: Square, side: Side, moves: &mut Vec<Square>) {
    for direction in ORTHOGONAL {
        let Some(leg) = from.offset(direction.0, direction.1) else {
            continue;
        };
        if board.get(leg).is_some() {
            continue;
        }
        for (dcol, drow) in outward_diagonals(direction) {
            if let Some(to) = leg.offset(dcol, drow) {
                if can_land(board, to, side) {
                    moves.push(to);
                }
            }
        }
    }
}

/// Like the horse, but with two diagonal steps in a straight line; the
/// orthogonal leg and the first diagonal cell must both be empty.
fn elephant_moves(board: &Board, from: Square, side: Side, moves: &mut Vec<Square>) {
    for direction in ORTHOGONAL {
        let Some(leg) = from.offset(direction.0, direction.1) else {
            continue;
        };
        if board.get(leg).is_some() {
            continue;
        }
        for (dcol, drow) in outward_diagonals(direction) {
            let Some(mid) = leg.offset(dcol, drow) else {
                continue;
            };
            if board.get(mid).is_some() {
                continue;
            }
            if let Some(to) = mid.offset(dcol, drow) {
                if can_land(board, to, side) {
                    moves.push(to);
                }
            }
        }
    }
}

/// Slide rays in all four orthogonal directions, plus diagonal palace
/// lines when standing on a connector cell of either palace.
fn chariot_moves(board: &Board, from: Square, side: Side, moves: &mut Vec<Square>) {
    for direction in ORTHOGONAL {
        let (empties, blocker) = slide_ray(board, from, direction);
        moves.extend(empties);
        if let Some(square) = blocker {
            if can_land(board, square, side) {
                moves.push(square);
            }
        }
    }
    if let Some(palace) = palace_at(from) {
        for mid in palace.diagonal_neighbors(from) {
            if can_land(board, mid, side) {
                moves.push(mid);
            }
            if board.get(mid).is_none() {
                if let Some(far) = palace.diagonal_extension(from, mid) {
                    if can_land(board, far, side) {
                        moves.push(far);
                    }
                }
            }
        }
    }
}

/// Chariot geometry with a jump: every ray needs exactly one screen
/// piece to jump, the screen must not be a cannon, and a cannon can
/// never be captured.
fn cannon_moves(board: &Board, from: Square, side: Side, moves: &mut Vec<Square>) {
    let jumpable = |square: Square| {
        board
            .get(square)
            .is_some_and(|piece| piece.kind != PieceKind::Cannon)
    };
    let capturable = |square: Square| {
        board
            .get(square)
            .is_some_and(|piece| piece.side != side && piece.kind != PieceKind::Cannon)
    };

    for direction in ORTHOGONAL {
        let (_, screen) = slide_ray(board, from, direction);
        let Some(screen) = screen else {
            continue;
        };
        if !jumpable(screen) {
            continue;
        }
        let (empties, target) = slide_ray(board, screen, direction);
        moves.extend(empties);
        if let Some(square) = target {
            if capturable(square) {
                moves.push(square);
            }
        }
    }
    // corner to opposite corner, jumping an occupied center
    if let Some(palace) = palace_at(from) {
        for mid in palace.diagonal_neighbors(from) {
            if !jumpable(mid) {
                continue;
            }
            if let Some(far) = palace.diagonal_extension(from, mid) {
                if board.get(far).is_none() || capturable(far) {
                    moves.push(far);
                }
            }
        }
    }
}
