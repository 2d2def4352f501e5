//! Core Connect Four game logic: board representation, player roles, and
//! the immutable game state machine the search consumes.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, CENTER_COL, COLS, ROWS, WIN_LENGTH};
pub use player::Player;
pub use state::{GameOutcome, GameState};
