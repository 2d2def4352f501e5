use std::fmt;

use crate::error::MoveError;

use super::board::{Board, Cell, COLS, ROWS};
use super::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// A board snapshot plus whose turn it is and the derived terminal status.
/// Transitions are pure: [`GameState::apply_move`] returns a new state and
/// never mutates the receiver, so every search branch can own an
/// independent copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// The initial position: empty board, Red to move.
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            turn: Player::Red,
            outcome: None,
        }
    }

    /// The role whose turn it is.
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// The winning role, or `None` for a draw or an ongoing game
    /// (disambiguated by [`GameState::is_terminal`]).
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Some(GameOutcome::Winner(player)) => Some(player),
            _ => None,
        }
    }

    /// Columns that can legally be played, in ascending order. Empty
    /// exactly when the state is terminal.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return the resulting state.
    pub fn apply_move(&self, col: usize) -> Result<GameState, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mut board = self.board;
        let row = board.drop_piece(col, self.turn.to_cell())?;

        let outcome = if board.check_win(col, row) {
            Some(GameOutcome::Winner(self.turn))
        } else if board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        Ok(GameState {
            board,
            turn: self.turn.other(),
            outcome,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                let mark = match self.board.get(col, row) {
                    Cell::Empty => '.',
                    Cell::Red => 'R',
                    Cell::Yellow => 'Y',
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{mark}")?;
            }
            writeln!(f)?;
        }
        for col in 0..COLS {
            if col > 0 {
                write!(f, " ")?;
            }
            write!(f, "{col}")?;
        }
        writeln!(f)
    }
}
