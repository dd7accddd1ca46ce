use crate::{pseudo_legal_moves, rules, Board, IllegalMove, Side, Square};

/// What a successful [`Game::attempt_move`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Passed,
    MovedAndWon(Side),
}

/// Progress of the game, as seen by a caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    InProgress { to_move: Side },
    Won { winner: Side },
}

/// The controller: turn order, move legality, commit/rollback, and the
/// terminal outcome. The outcome is decided at most once, at the moment
/// a checkmate is confirmed.
pub struct Game {
    board: Board,
    turn: Side,
    winner: Option<Side>,
}

impl Game {
    /// A fresh game from the standard starting layout. Blue moves first.
    pub fn new() -> Self {
        Self::from_position(Board::standard(), Side::Blue)
    }

    /// A game from an arbitrary position, for test setups and analysis.
    pub fn from_position(board: Board, turn: Side) -> Self {
        Self {
            board,
            turn,
            winner: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Side {
        self.turn
    }

    pub fn state(&self) -> GameState {
        match self.winner {
            Some(winner) => GameState::Won { winner },
            None => GameState::InProgress { to_move: self.turn },
        }
    }

    /// Every self-check-safe move for the side to move.
    pub fn legal_moves(&self) -> Vec<(Square, Square)> {
        rules::legal_moves(&self.board, self.turn)
    }

    /// Attempts one move for the side to move. `from == to` is a pass,
    /// legal only while not in check. The board is mutated only on a
    /// committed move; every rejection restores the pre-move state.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, IllegalMove> {
        if self.winner.is_some() {
            return Err(IllegalMove::GameOver);
        }
        let piece = self
            .board
            .get(from)
            .ok_or(IllegalMove::EmptySquare { square: from })?;
        if piece.side != self.turn {
            return Err(IllegalMove::WrongSide { square: from });
        }

        if from == to {
            if rules::is_in_check(&self.board, self.turn) {
                return Err(IllegalMove::SelfCheck);
            }
            self.turn = self.turn.opponent();
            return Ok(MoveOutcome::Passed);
        }

        if !pseudo_legal_moves(&self.board, from).contains(&to) {
            return Err(IllegalMove::IllegalDestination { from, to });
        }

        let saved = self.board.snapshot();
        self.board.clear(from);
        self.board.set(to, piece);
        if rules::is_in_check(&self.board, self.turn) {
            self.board.restore(&saved);
            return Err(IllegalMove::SelfCheck);
        }

        let mover = self.turn;
        let opponent = mover.opponent();
        self.turn = opponent;
        if rules::is_in_check(&self.board, opponent) && rules::is_checkmated(&self.board, opponent)
        {
            self.winner = Some(mover);
            return Ok(MoveOutcome::MovedAndWon(mover));
        }
        Ok(MoveOutcome::Moved)
    }

    /// Notation-level entry point for external callers: both squares are
    /// parsed before any game state is touched.
    pub fn attempt_move_notation(&mut self, from: &str, to: &str) -> Result<MoveOutcome, IllegalMove> {
        let from = from
            .parse()
            .map_err(|err| IllegalMove::InvalidNotation { err })?;
        let to = to
            .parse()
            .map_err(|err| IllegalMove::InvalidNotation { err })?;
        self.attempt_move(from, to)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
