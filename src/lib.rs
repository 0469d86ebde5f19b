//! # Connect Four Search
//!
//! A Connect Four engine built around depth-limited adversarial search:
//! minimax and alpha-beta over any game that exposes the [`game::Position`]
//! contract, with pluggable evaluators and move generators.
//!
//! ## Modules
//!
//! - [`game`]: Board, players, immutable game state
//! - [`search`]: Move enumeration, minimax, alpha-beta, test trees
//! - [`ai`]: Evaluators and agents (fixed depth, iterative deepening, random, human)
//! - [`play`]: Game runner between two agents
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod play;
pub mod search;
