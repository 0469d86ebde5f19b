//! Depth-limited adversarial search over two-player, zero-sum games.
//!
//! The search is generic over the state type. Three narrow seams plug it into
//! a concrete game:
//!
//! - [`MoveGenerator`] lists successors lazily, in a fixed order that doubles
//!   as the tie-break between equally scored moves,
//! - [`TerminalTest`] decides where recursion stops,
//! - [`Evaluator`] scores a leaf from the point of view of the player to move.
//!
//! Values are always relative to the player to move at the root: max-nodes
//! score leaves with the evaluator directly, min-nodes negate it.
//!
//! Expanded nodes are tallied in a [`NodeCounter`] passed explicitly to every
//! call; nothing is shared between searches.

use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

use crate::game::Position;

mod alpha_beta;
mod minimax;
mod moves;
pub mod tree;

pub use moves::{enumerate_moves, ColumnMoves};

/// Signed evaluation, relative to the player to move.
pub type Score = i32;

/// Plies left to search. Zero or negative means "stop here".
pub type Depth = i32;

pub const SCORE_POS_INF: Score = i32::MAX;
pub const SCORE_NEG_INF: Score = -i32::MAX;

/// Score of a position where the game has just ended: the player to move
/// either lost or drew, and both are treated as a loss.
pub const LOSS_SCORE: Score = -1000;

/// Count of move attempts made by a search, illegal attempts included.
#[derive(Debug, Default)]
pub struct NodeCounter {
    expanded: AtomicU64,
}

impl NodeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self) {
        self.expanded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.expanded.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.expanded.store(0, Ordering::Relaxed);
    }
}

/// Scores a position for the player whose turn it is.
pub trait Evaluator<S: ?Sized> {
    fn evaluate(&self, state: &S) -> Score;
}

impl<S: ?Sized, F> Evaluator<S> for F
where
    F: Fn(&S) -> Score,
{
    fn evaluate(&self, state: &S) -> Score {
        self(state)
    }
}

/// Produces `(move, successor)` pairs for a state.
///
/// The sequence must be ordered and lazy: the search stops pulling on a
/// cutoff and expects no further work to happen for the skipped moves.
pub trait MoveGenerator<S> {
    fn next_moves<'a>(
        &'a self,
        state: &'a S,
        counter: &'a NodeCounter,
    ) -> impl Iterator<Item = (usize, S)> + 'a
    where
        S: 'a;
}

/// Decides whether recursion stops at a node.
pub trait TerminalTest<S> {
    fn is_terminal(&self, depth: Depth, state: &S) -> bool;
}

/// Stop when the depth budget is spent or the game is over.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthOrGameOver;

impl<S: Position> TerminalTest<S> for DepthOrGameOver {
    fn is_terminal(&self, depth: Depth, state: &S) -> bool {
        is_terminal(depth, state)
    }
}

/// Shared leaf predicate: out of depth, or the game has ended.
pub fn is_terminal<S: Position>(depth: Depth, state: &S) -> bool {
    depth <= 0 || state.is_game_over()
}

/// Which search routine to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alpha-beta",
        }
    }
}

/// Best move found at a node together with its value. `column` is `None`
/// when the node was a leaf or had no successors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub column: Option<usize>,
    pub value: Score,
}

impl SearchOutcome {
    fn leaf(value: Score) -> Self {
        SearchOutcome {
            column: None,
            value,
        }
    }

    /// Keep `(column, value)` if it beats the current best. The first move
    /// seen is always taken, so a node with successors always has a column;
    /// after that only a strict improvement replaces it.
    fn offer(&mut self, column: usize, value: Score, better: impl Fn(Score, Score) -> bool) {
        if self.column.is_none() || better(value, self.value) {
            self.column = Some(column);
            self.value = value;
        }
    }
}

/// A configured search: a move generator plus a terminal test.
///
/// `Search::default()` searches Connect Four positions column by column; the
/// hooks can be swapped, e.g. for the explicit trees in [`tree`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Search<G = ColumnMoves, T = DepthOrGameOver> {
    generator: G,
    terminal: T,
}

impl<G, T> Search<G, T> {
    pub fn new(generator: G, terminal: T) -> Self {
        Search {
            generator,
            terminal,
        }
    }

    /// Run `algorithm` and log a one-line summary.
    pub fn run<S, E>(
        &self,
        algorithm: Algorithm,
        state: &S,
        depth: Depth,
        evaluator: &E,
        counter: &NodeCounter,
    ) -> SearchOutcome
    where
        G: MoveGenerator<S>,
        T: TerminalTest<S>,
        E: Evaluator<S> + ?Sized,
    {
        let before = counter.get();
        let outcome = match algorithm {
            Algorithm::Minimax => self.minimax(state, depth, evaluator, counter),
            Algorithm::AlphaBeta => self.alpha_beta(state, depth, evaluator, counter),
        };
        debug!(
            "{} depth={} column={:?} value={} expanded={}",
            algorithm.name(),
            depth,
            outcome.column,
            outcome.value,
            counter.get() - before
        );
        outcome
    }
}

/// Minimax with the default Connect Four hooks. Returns the chosen column,
/// or `None` if nothing was searched (depth <= 0 or no legal move).
pub fn minimax<S, E>(state: &S, depth: Depth, evaluator: &E) -> Option<usize>
where
    S: Position,
    E: Evaluator<S> + ?Sized,
{
    let search: Search = Search::default();
    search
        .run(Algorithm::Minimax, state, depth, evaluator, &NodeCounter::new())
        .column
}

/// Alpha-beta with the default Connect Four hooks. Always agrees with
/// [`minimax`] on the chosen column.
pub fn alpha_beta_search<S, E>(state: &S, depth: Depth, evaluator: &E) -> Option<usize>
where
    S: Position,
    E: Evaluator<S> + ?Sized,
{
    let search: Search = Search::default();
    search
        .run(Algorithm::AlphaBeta, state, depth, evaluator, &NodeCounter::new())
        .column
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState;

    #[test]
    fn counter_accumulates_and_resets() {
        let counter = NodeCounter::new();
        counter.increment();
        counter.increment();
        assert_eq!(counter.get(), 2);
        counter.reset();
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn terminal_at_zero_or_negative_depth() {
        let state = GameState::initial();
        assert!(is_terminal(0, &state));
        assert!(is_terminal(-3, &state));
        assert!(!is_terminal(1, &state));
    }

    #[test]
    fn terminal_when_game_over() {
        let state = GameState::from_moves(&[0, 1, 0, 1, 0, 1, 0]).unwrap();
        assert!(is_terminal(5, &state));
    }

    #[test]
    fn closures_are_evaluators() {
        let eval = |s: &GameState| s.move_count() as Score;
        let state = GameState::from_moves(&[3, 3]).unwrap();
        assert_eq!(eval.evaluate(&state), 2);
    }

    #[test]
    fn negative_depth_returns_no_column() {
        let eval = |_: &GameState| 0;
        assert_eq!(minimax(&GameState::initial(), -1, &eval), None);
        assert_eq!(alpha_beta_search(&GameState::initial(), -1, &eval), None);
    }

    #[test]
    fn algorithm_names_parse_from_kebab_case() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            algorithm: Algorithm,
        }
        let parsed: Wrapper = toml::from_str("algorithm = \"alpha-beta\"").unwrap();
        assert_eq!(parsed.algorithm, Algorithm::AlphaBeta);
        assert_eq!(Algorithm::Minimax.name(), "minimax");
    }
}
