use crate::{ParseSquareError, Square};

/// The error type for [`Game::attempt_move`](crate::Game::attempt_move),
/// i.e. for one attempted move. All variants are recoverable and none
/// leaves the board mutated.
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalMove {
    /// The game already has a winner.
    GameOver,
    /// A coordinate string could not be parsed.
    InvalidNotation { err: ParseSquareError },
    /// The source square holds no piece.
    EmptySquare { square: Square },
    /// The source square holds a piece of the side not on the move.
    WrongSide { square: Square },
    /// The destination is not in the piece's candidate set.
    IllegalDestination { from: Square, to: Square },
    /// The move (or pass) would leave the mover's own general attacked.
    SelfCheck,
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMove::InvalidNotation { err } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::GameOver => write!(f, "The game is already decided"),
            IllegalMove::InvalidNotation { err: _ } => {
                write!(f, "A square was given in invalid notation")
            }
            IllegalMove::EmptySquare { square } => {
                write!(f, "There is no piece on {}", square)
            }
            IllegalMove::WrongSide { square } => {
                write!(f, "The piece on {} does not belong to the side to move", square)
            }
            IllegalMove::IllegalDestination { from, to } => {
                write!(f, "The piece on {} cannot reach {}", from, to)
            }
            IllegalMove::SelfCheck => {
                write!(f, "The move would leave the mover's own general in check")
            }
        }
    }
}
