use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Pieces needed in a line to win.
pub const CONNECT: usize = 4;

/// Line directions as (row step, column step): horizontal, vertical and both
/// diagonals. Each line is walked both ways from a given cell.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Build a board from a raw grid. Row 0 is the top.
    ///
    /// No gravity check is made: floating pieces are accepted as given.
    pub fn from_cells(cells: [[Cell; COLS]; ROWS]) -> Self {
        Board { cells }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(MoveError::ColumnFull(col))?;
        self.cells[row][col] = cell;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Number of occupied cells.
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Check if the piece at (row, col) is part of a line of four
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        DIRECTIONS
            .iter()
            .any(|&(dr, dc)| self.line_through(row, col, dr, dc, cell) >= CONNECT)
    }

    /// True if `cell` owns a line of four anywhere on the board.
    pub fn has_four(&self, cell: Cell) -> bool {
        self.longest_chain(cell) >= CONNECT
    }

    /// Length of the longest straight run of `cell` in any direction.
    /// Zero when the player has no pieces on the board.
    pub fn longest_chain(&self, cell: Cell) -> usize {
        if cell == Cell::Empty {
            return 0;
        }

        let mut longest = 0;
        for row in 0..ROWS {
            for col in 0..COLS {
                if self.cells[row][col] != cell {
                    continue;
                }
                for &(dr, dc) in &DIRECTIONS {
                    longest = longest.max(self.line_through(row, col, dr, dc, cell));
                }
            }
        }
        longest
    }

    /// Length of the run of `cell` starting at (row, col) and walking one
    /// way along (dr, dc), the starting cell included.
    fn run_from(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut len = 0;
        let (mut r, mut c) = (row as isize, col as isize);
        while Self::in_bounds(r, c) && self.cells[r as usize][c as usize] == cell {
            len += 1;
            r += dr;
            c += dc;
        }
        len
    }

    /// Length of the full line of `cell` through (row, col) along (dr, dc).
    fn line_through(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let forward = self.run_from(row, col, dr, dc, cell);
        if forward == 0 {
            return 0;
        }
        forward + self.run_from(row, col, -dr, -dc, cell) - 1
    }

    fn in_bounds(r: isize, c: isize) -> bool {
        r >= 0 && c >= 0 && (r as usize) < ROWS && (c as usize) < COLS
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
