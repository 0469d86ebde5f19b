use std::fmt;

use super::board::{Board, Cell, COLS, ROWS};
use super::Player;
use crate::error::{MoveError, PositionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// A board position plus whose turn it is. Transitions never mutate: every
/// move produces a fresh value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::Red, // Red starts
            outcome: None,
        }
    }

    /// Replay a sequence of columns from the initial position.
    pub fn from_moves(columns: &[usize]) -> Result<Self, MoveError> {
        columns
            .iter()
            .try_fold(Self::initial(), |state, &col| state.apply_move(col))
    }

    /// Build a position from a grid of player ids (0 empty, 1 Red, 2 Yellow),
    /// row 0 at the top. The outcome is recomputed from the grid; a full grid
    /// with no line of four is a draw.
    pub fn from_rows(rows: [[u8; COLS]; ROWS], current_player: Player) -> Result<Self, PositionError> {
        let mut cells = [[Cell::Empty; COLS]; ROWS];
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                cells[row][col] = match value {
                    0 => Cell::Empty,
                    1 => Cell::Red,
                    2 => Cell::Yellow,
                    _ => return Err(PositionError::InvalidCell { row, col, value }),
                };
            }
        }

        let board = Board::from_cells(cells);
        // The side that just moved is checked first so a double win is
        // credited to it.
        let last_mover = current_player.other();
        let outcome = if board.has_four(last_mover.to_cell()) {
            Some(GameOutcome::Winner(last_mover))
        } else if board.has_four(current_player.to_cell()) {
            Some(GameOutcome::Winner(current_player))
        } else if board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        Ok(GameState {
            board,
            current_player,
            outcome,
        })
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The player who is not on move.
    pub fn other_player(&self) -> Player {
        self.current_player.other()
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Owner of the cell at (row, col); row 0 is the top.
    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.board.get(row, col)
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over. A full board is over even without a winner.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn width(&self) -> usize {
        COLS
    }

    pub fn height(&self) -> usize {
        ROWS
    }

    /// Number of pieces played so far.
    pub fn move_count(&self) -> usize {
        self.board.piece_count()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mut board = self.board;
        let row = board.drop_piece(column, self.current_player.to_cell())?;

        let outcome = if board.check_win(row, column) {
            Some(GameOutcome::Winner(self.current_player))
        } else if board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        Ok(GameState {
            board,
            current_player: self.current_player.other(),
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
        for row in 0..ROWS {
            for col in 0..COLS {
                let symbol = match self.board.get(row, col) {
                    Cell::Empty => '.',
                    Cell::Red => 'X',
                    Cell::Yellow => 'O',
                };
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        for col in 0..COLS {
            write!(f, " {col}")?;
        }
        writeln!(f)
    }
}
