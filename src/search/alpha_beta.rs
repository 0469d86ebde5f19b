use super::minimax::{leaf_value, negate};
use super::{Depth, Evaluator, MoveGenerator, NodeCounter, Score, Search, SearchOutcome, TerminalTest};
use super::{SCORE_NEG_INF, SCORE_POS_INF};

impl<G, T> Search<G, T> {
    /// Minimax with alpha-beta pruning. Picks the same column as
    /// [`Search::minimax`] while expanding no more nodes.
    pub fn alpha_beta<S, E>(
        &self,
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
        self.ab_max_value(state, depth, SCORE_NEG_INF, SCORE_POS_INF, evaluator, counter)
    }

    fn ab_max_value<S, E>(
        &self,
        state: &S,
        depth: Depth,
        mut alpha: Score,
        beta: Score,
        evaluator: &E,
        counter: &NodeCounter,
    ) -> SearchOutcome
    where
        G: MoveGenerator<S>,
        T: TerminalTest<S>,
        E: Evaluator<S> + ?Sized,
    {
        if self.terminal.is_terminal(depth, state) {
            return SearchOutcome::leaf(leaf_value(evaluator.evaluate(state)));
        }

        let mut best = SearchOutcome::leaf(SCORE_NEG_INF);
        for (column, child) in self.generator.next_moves(state, counter) {
            let value = self
                .ab_min_value(&child, depth.saturating_sub(1), alpha, beta, evaluator, counter)
                .value;
            best.offer(column, value, |v, b| v > b);
            // Beta cutoff: the minimizer above already has something better.
            if best.value >= beta {
                return best;
            }
            alpha = alpha.max(best.value);
        }
        best
    }

    fn ab_min_value<S, E>(
        &self,
        state: &S,
        depth: Depth,
        alpha: Score,
        mut beta: Score,
        evaluator: &E,
        counter: &NodeCounter,
    ) -> SearchOutcome
    where
        G: MoveGenerator<S>,
        T: TerminalTest<S>,
        E: Evaluator<S> + ?Sized,
    {
        if self.terminal.is_terminal(depth, state) {
            return SearchOutcome::leaf(negate(leaf_value(evaluator.evaluate(state))));
        }

        let mut best = SearchOutcome::leaf(SCORE_POS_INF);
        for (column, child) in self.generator.next_moves(state, counter) {
            let value = self
                .ab_max_value(&child, depth.saturating_sub(1), alpha, beta, evaluator, counter)
                .value;
            best.offer(column, value, |v, b| v < b);
            // Alpha cutoff.
            if best.value <= alpha {
                return best;
            }
            beta = beta.min(best.value);
        }
        best
    }
}
