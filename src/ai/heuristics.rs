//! Heuristic evaluation of non-terminal positions.
//!
//! Every heuristic shares one terminal rule, applied before any
//! position-specific logic: a decided position scores +100 when the
//! maximizing role has won, -100 when the other role has won, and 0 for a
//! draw. Non-terminal scores stay well inside that range, so a guaranteed
//! win always dominates any estimate.

use crate::game::{Cell, GameState, Player, CENTER_COL, COLS, ROWS};

/// Value of a won terminal position for the maximizing role.
pub const WIN_VALUE: i32 = 100;

/// Line directions scanned by the heuristics: horizontal, up-right
/// diagonal, vertical, up-left diagonal. Each entry covers one axis.
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (1, 1), (0, 1), (-1, 1)];

/// A position evaluator for the maximizing role. Heuristics are
/// interchangeable strategy objects; the search takes any of them.
pub trait Heuristic: Send {
    fn evaluate(&self, state: &GameState, max_role: Player) -> i32;

    /// Display name for logs and reports.
    fn name(&self) -> &str;
}

/// The shared terminal rule. `None` when the position is still live.
pub fn terminal_value(state: &GameState, max_role: Player) -> Option<i32> {
    if !state.is_terminal() {
        return None;
    }
    Some(match state.winner() {
        Some(winner) if winner == max_role => WIN_VALUE,
        Some(_) => -WIN_VALUE,
        None => 0,
    })
}

/// Baseline heuristic: 0 for every non-terminal position. With this the
/// search values only outcomes it can prove within its depth budget.
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn evaluate(&self, state: &GameState, max_role: Player) -> i32 {
        terminal_value(state, max_role).unwrap_or(0)
    }

    fn name(&self) -> &str {
        "zero"
    }
}

/// Counts aligned three-in-a-row patterns. For each occupied cell and each
/// direction, the pattern counts when the next two cells carry the same
/// mark. No open-end requirement and no deduplication of overlapping runs;
/// a long run scores once per starting cell.
pub struct ThreeLineHeuristic;

impl Heuristic for ThreeLineHeuristic {
    fn evaluate(&self, state: &GameState, max_role: Player) -> i32 {
        if let Some(value) = terminal_value(state, max_role) {
            return value;
        }

        let board = state.board();
        let max_cell = max_role.to_cell();
        let mut score = 0;

        for col in 0..COLS as i32 {
            for row in 0..ROWS as i32 {
                let cell = board.get(col as usize, row as usize);
                if cell == Cell::Empty {
                    continue;
                }
                for (dc, dr) in DIRECTIONS {
                    let far_col = col + 2 * dc;
                    let far_row = row + 2 * dr;
                    if board.in_bounds(far_col, far_row)
                        && board.get((col + dc) as usize, (row + dr) as usize) == cell
                        && board.get(far_col as usize, far_row as usize) == cell
                    {
                        score += if cell == max_cell { 1 } else { -1 };
                    }
                }
            }
        }
        score
    }

    fn name(&self) -> &str {
        "three-line"
    }
}

/// Composite positional heuristic. Rewards the center column and open
/// lines: for each occupied cell and direction it measures the forward run
/// length (up to three steps) and whether the run is capped by an empty
/// cell, also checking the cell behind the start for a second open end.
///
/// Scoring per cell and direction, signed toward the maximizing role:
/// a pair with an open end ±5, a triple with an open end ±10, a blocked
/// triple ±7, a lone piece with both neighbors open ±3. Center-column
/// occupancy adds a flat ±2 per piece.
pub struct PositionalHeuristic;

impl Heuristic for PositionalHeuristic {
    fn evaluate(&self, state: &GameState, max_role: Player) -> i32 {
        if let Some(value) = terminal_value(state, max_role) {
            return value;
        }

        let board = state.board();
        let max_cell = max_role.to_cell();
        let mut score = 0;

        for col in 0..COLS as i32 {
            for row in 0..ROWS as i32 {
                let cell = board.get(col as usize, row as usize);
                if cell == Cell::Empty {
                    continue;
                }
                let sign = if cell == max_cell { 1 } else { -1 };

                if col as usize == CENTER_COL {
                    score += 2 * sign;
                }

                for (dc, dr) in DIRECTIONS {
                    let mut run = 0;
                    let mut open_ends = 0;

                    for dist in 1..=3 {
                        let c = col + dist * dc;
                        let r = row + dist * dr;
                        if !board.in_bounds(c, r) {
                            break;
                        }
                        match board.get(c as usize, r as usize) {
                            mark if mark == cell => run += 1,
                            Cell::Empty => {
                                open_ends += 1;
                                break;
                            }
                            _ => break,
                        }
                    }

                    // Second potential open end behind the run's start.
                    let back_col = col - dc;
                    let back_row = row - dr;
                    if board.in_bounds(back_col, back_row)
                        && board.get(back_col as usize, back_row as usize) == Cell::Empty
                    {
                        open_ends += 1;
                    }

                    score += sign
                        * match (run, open_ends) {
                            (1, ends) if ends >= 1 => 5,
                            (2, ends) if ends >= 1 => 10,
                            (2, _) => 7,
                            (0, 2) => 3,
                            _ => 0,
                        };
                }
            }
        }
        score
    }

    fn name(&self) -> &str {
        "positional"
    }
}

/// Score the potential of a single cell for `role`: for each direction,
/// the 7-cell window centered on `(col, row)` is scanned, an opposing mark
/// zeroes the direction, and three or more of `role`'s marks in the window
/// award a flat 50. Standalone utility; not used by the heuristics above.
pub fn cell_potential(state: &GameState, col: usize, row: usize, role: Player) -> i32 {
    let board = state.board();
    let mark = role.to_cell();
    let mut score = 0;

    for (dc, dr) in DIRECTIONS {
        let mut line = 0;
        for offset in -3..=3 {
            let c = col as i32 + offset * dc;
            let r = row as i32 + offset * dr;
            if !board.in_bounds(c, r) {
                continue;
            }
            match board.get(c as usize, r as usize) {
                m if m == mark => line += 1,
                Cell::Empty => {}
                _ => {
                    line = 0;
                    break;
                }
            }
        }
        if line >= 3 {
            score += 50;
        }
    }
    score
}
