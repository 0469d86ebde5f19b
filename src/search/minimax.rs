use super::{Depth, Evaluator, MoveGenerator, NodeCounter, Score, Search, SearchOutcome, TerminalTest};
use super::{SCORE_NEG_INF, SCORE_POS_INF};

impl<G, T> Search<G, T> {
    /// Plain minimax to `depth` plies. The root is a max-node.
    pub fn minimax<S, E>(
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
        self.max_value(state, depth, evaluator, counter)
    }

    fn max_value<S, E>(&self, state: &S, depth: Depth, evaluator: &E, counter: &NodeCounter) -> SearchOutcome
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
                .min_value(&child, depth.saturating_sub(1), evaluator, counter)
                .value;
            best.offer(column, value, |v, b| v > b);
        }
        best
    }

    fn min_value<S, E>(&self, state: &S, depth: Depth, evaluator: &E, counter: &NodeCounter) -> SearchOutcome
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
                .max_value(&child, depth.saturating_sub(1), evaluator, counter)
                .value;
            best.offer(column, value, |v, b| v < b);
        }
        best
    }
}

/// Flip a score to the other side's point of view.
pub(super) fn negate(score: Score) -> Score {
    score.saturating_neg()
}

/// Evaluator output clamped to `SCORE_NEG_INF..=SCORE_POS_INF`. Nothing may
/// sit below the root window, or a pruned bound could beat a real value.
pub(super) fn leaf_value(score: Score) -> Score {
    score.max(SCORE_NEG_INF)
}
