use crate::game::GameState;
use crate::search::{Algorithm, Depth, NodeCounter, Search, SearchOutcome};

use super::agent::Agent;
use super::eval::EvaluatorKind;

/// Fixed-depth minimax or alpha-beta player.
pub struct SearchAgent {
    algorithm: Algorithm,
    depth: Depth,
    evaluator: EvaluatorKind,
    counter: NodeCounter,
    last: Option<SearchOutcome>,
    name: String,
}

impl SearchAgent {
    pub fn new(algorithm: Algorithm, depth: Depth, evaluator: EvaluatorKind) -> Self {
        SearchAgent {
            algorithm,
            depth,
            evaluator,
            counter: NodeCounter::new(),
            last: None,
            name: format!("{}-{}({})", algorithm.name(), depth, evaluator.name()),
        }
    }

    pub fn minimax(depth: Depth) -> Self {
        Self::new(Algorithm::Minimax, depth, EvaluatorKind::Basic)
    }

    pub fn alpha_beta(depth: Depth) -> Self {
        Self::new(Algorithm::AlphaBeta, depth, EvaluatorKind::Basic)
    }

    /// Result of the most recent search, if any.
    pub fn last_outcome(&self) -> Option<SearchOutcome> {
        self.last
    }
}

impl Agent for SearchAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        let search: Search = Search::default();
        let outcome = search.run(self.algorithm, state, self.depth, &self.evaluator, &self.counter);
        self.last = Some(outcome);
        outcome.column
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn nodes_expanded(&self) -> u64 {
        self.counter.get()
    }
}
