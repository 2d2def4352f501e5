use crate::error::MoveError;

pub const COLS: usize = 7;
pub const ROWS: usize = 6;
pub const CENTER_COL: usize = COLS / 2;

/// How many aligned marks make a win.
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// The playing grid, addressed as `(col, row)` with row 0 at the bottom.
/// Pieces dropped into a column stack upward from row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; ROWS]; COLS],
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; ROWS]; COLS],
        }
    }

    /// Get the cell at `(col, row)`. Row 0 is the bottom of the grid.
    pub fn get(&self, col: usize, row: usize) -> Cell {
        self.cells[col][row]
    }

    /// Bounds predicate for direction-scanning callers that step off the
    /// grid with signed offsets.
    pub fn in_bounds(&self, col: i32, row: i32) -> bool {
        col >= 0 && col < COLS as i32 && row >= 0 && row < ROWS as i32
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[col][ROWS - 1] != Cell::Empty
    }

    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Drop a piece into a column, returning the row it landed in.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        for row in 0..ROWS {
            if self.cells[col][row] == Cell::Empty {
                self.cells[col][row] = cell;
                return Ok(row);
            }
        }
        Err(MoveError::ColumnFull(col))
    }

    /// Check whether the piece at `(col, row)` completes a line of four.
    /// Only lines through that cell are examined, so this is meant to be
    /// called with the landing position of the most recent drop.
    pub fn check_win(&self, col: usize, row: usize) -> bool {
        let cell = self.get(col, row);
        if cell == Cell::Empty {
            return false;
        }
        // Horizontal, up-right diagonal, vertical, up-left diagonal axes.
        [(1, 0), (1, 1), (0, 1), (-1, 1)].iter().any(|&(dc, dr)| {
            let run = 1
                + self.run_length(col, row, cell, dc, dr)
                + self.run_length(col, row, cell, -dc, -dr);
            run >= WIN_LENGTH
        })
    }

    /// Number of consecutive `cell` marks strictly beyond `(col, row)` in
    /// the direction `(dc, dr)`.
    fn run_length(&self, col: usize, row: usize, cell: Cell, dc: i32, dr: i32) -> usize {
        let mut count = 0;
        let mut c = col as i32 + dc;
        let mut r = row as i32 + dr;
        while self.in_bounds(c, r) && self.cells[c as usize][r as usize] == cell {
            count += 1;
            c += dc;
            r += dr;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
