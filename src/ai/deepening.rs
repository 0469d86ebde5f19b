//! Time-budgeted iterative deepening around the fixed-depth searches.
//!
//! A worker thread searches depth 1, 2, ... and reports each completed depth
//! over a channel. When the budget runs out the driver keeps the last
//! completed result and walks away; the worker finishes the depth it is on,
//! sees the channel closed and exits. The search primitives themselves never
//! look at a clock.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};

use crate::game::GameState;
use crate::search::{Algorithm, Depth, NodeCounter, Search, SearchOutcome};

use super::agent::Agent;
use super::eval::EvaluatorKind;

/// Result of one fully searched depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthResult {
    pub depth: Depth,
    pub outcome: SearchOutcome,
    pub nodes: u64,
}

/// Search `state` at increasing depths until `budget` elapses or `max_depth`
/// (capped at the number of empty cells) is done. Returns the deepest
/// completed result, or `None` if not even depth 1 finished in time.
pub fn deepening_search(
    state: &GameState,
    algorithm: Algorithm,
    evaluator: EvaluatorKind,
    budget: Duration,
    max_depth: Depth,
) -> Option<DepthResult> {
    let deadline = Instant::now() + budget;
    let empty_cells = (state.width() * state.height() - state.move_count()) as Depth;
    let max_depth = max_depth.min(empty_cells);

    let (tx, rx) = mpsc::channel();
    let root = *state;
    thread::spawn(move || {
        let search: Search = Search::default();
        for depth in 1..=max_depth {
            let counter = NodeCounter::new();
            let outcome = search.run(algorithm, &root, depth, &evaluator, &counter);
            let result = DepthResult {
                depth,
                outcome,
                nodes: counter.get(),
            };
            if tx.send(result).is_err() {
                break;
            }
        }
    });

    let mut best = None;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok(result) => {
                debug!(
                    "deepening: depth {} done, column {:?}, {} nodes",
                    result.depth, result.outcome.column, result.nodes
                );
                best = Some(result);
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    best
}

/// Player that thinks for a fixed wall-clock budget per move.
pub struct DeepeningAgent {
    algorithm: Algorithm,
    evaluator: EvaluatorKind,
    budget: Duration,
    max_depth: Depth,
    nodes: u64,
    last: Option<DepthResult>,
    name: String,
}

impl DeepeningAgent {
    pub fn new(algorithm: Algorithm, evaluator: EvaluatorKind, budget: Duration, max_depth: Depth) -> Self {
        DeepeningAgent {
            algorithm,
            evaluator,
            budget,
            max_depth,
            nodes: 0,
            last: None,
            name: format!("{}-{}ms({})", algorithm.name(), budget.as_millis(), evaluator.name()),
        }
    }

    /// The deepest completed search behind the last move, if any.
    pub fn last_result(&self) -> Option<DepthResult> {
        self.last
    }
}

impl Agent for DeepeningAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        let fallback = state.legal_actions().first().copied()?;

        let result = deepening_search(state, self.algorithm, self.evaluator, self.budget, self.max_depth);
        self.last = result;
        match result {
            Some(result) => {
                self.nodes += result.nodes;
                info!("{} reached depth {}", self.name, result.depth);
                result.outcome.column.or(Some(fallback))
            }
            None => {
                info!("{} ran out of time before depth 1, playing column {fallback}", self.name);
                Some(fallback)
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn nodes_expanded(&self) -> u64 {
        self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::BasicEvaluator;
    use crate::game::Player;
    use crate::search::alpha_beta_search;

    #[test]
    fn completes_shallow_depths_within_budget() {
        let state = GameState::initial();
        let result = deepening_search(
            &state,
            Algorithm::AlphaBeta,
            EvaluatorKind::Basic,
            Duration::from_millis(500),
            3,
        )
        .unwrap();
        assert_eq!(result.depth, 3);
        assert_eq!(result.outcome.column, alpha_beta_search(&state, 3, &BasicEvaluator));
    }

    #[test]
    fn depth_is_capped_by_empty_cells() {
        let rows = [
            [1, 1, 2, 2, 1, 1, 0],
            [2, 2, 1, 1, 2, 2, 1],
            [1, 1, 2, 2, 1, 1, 2],
            [2, 2, 1, 1, 2, 2, 1],
            [1, 1, 2, 2, 1, 1, 2],
            [2, 2, 1, 1, 2, 2, 1],
        ];
        let state = GameState::from_rows(rows, Player::Yellow).unwrap();
        let result = deepening_search(
            &state,
            Algorithm::Minimax,
            EvaluatorKind::Basic,
            Duration::from_secs(5),
            10,
        )
        .unwrap();
        assert_eq!(result.depth, 1);
        assert_eq!(result.outcome.column, Some(6));
    }

    #[test]
    fn agent_plays_a_legal_column() {
        let mut agent = DeepeningAgent::new(
            Algorithm::AlphaBeta,
            EvaluatorKind::Basic,
            Duration::from_millis(100),
            4,
        );
        let state = GameState::from_moves(&[3, 3]).unwrap();
        let column = agent.select_action(&state).unwrap();
        assert!(state.legal_actions().contains(&column));
        assert!(agent.last_result().is_some());
        assert!(agent.nodes_expanded() > 0);
    }

    #[test]
    fn agent_yields_nothing_on_finished_game() {
        let mut agent = DeepeningAgent::new(
            Algorithm::AlphaBeta,
            EvaluatorKind::Basic,
            Duration::from_millis(50),
            4,
        );
        let state = GameState::from_moves(&[0, 1, 0, 1, 0, 1, 0]).unwrap();
        assert_eq!(agent.select_action(&state), None);
    }
}
