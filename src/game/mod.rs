//! Core Connect Four game logic: board, players, and an immutable game state
//! that the search layer consumes through the [`Position`] contract.

mod board;
mod player;
mod position;
mod state;

pub use board::{Board, Cell, COLS, CONNECT, ROWS};
pub use player::Player;
pub use position::Position;
pub use state::{GameOutcome, GameState};
