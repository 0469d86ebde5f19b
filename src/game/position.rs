use super::{Cell, GameState, Player};
use crate::error::MoveError;

/// The view of a game the search core and evaluators consume.
///
/// Implementors are immutable snapshots: `apply_move` derives a successor
/// and leaves `self` untouched.
pub trait Position: Sized {
    fn is_game_over(&self) -> bool;

    fn current_player_id(&self) -> Player;

    fn other_player_id(&self) -> Player;

    fn cell_at(&self, row: usize, col: usize) -> Cell;

    /// Number of columns, i.e. candidate moves per node.
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Drop a piece for the player to move. Fails when the column is full,
    /// out of range, or the game has ended.
    fn apply_move(&self, column: usize) -> Result<Self, MoveError>;

    /// Longest straight run owned by `player`.
    fn longest_chain(&self, player: Player) -> usize;
}

impl Position for GameState {
    fn is_game_over(&self) -> bool {
        self.is_terminal()
    }

    fn current_player_id(&self) -> Player {
        self.current_player()
    }

    fn other_player_id(&self) -> Player {
        self.other_player()
    }

    fn cell_at(&self, row: usize, col: usize) -> Cell {
        GameState::cell_at(self, row, col)
    }

    fn width(&self) -> usize {
        GameState::width(self)
    }

    fn height(&self) -> usize {
        GameState::height(self)
    }

    fn apply_move(&self, column: usize) -> Result<Self, MoveError> {
        GameState::apply_move(self, column)
    }

    fn longest_chain(&self, player: Player) -> usize {
        self.board().longest_chain(player.to_cell())
    }
}
