//! Hand-built game trees for exercising the search without a board.
//!
//! A [`GameTree`] is either a scored leaf or a node with ordered children;
//! the child index plays the role of the move. Plug the three hooks into a
//! [`Search`] with [`tree_search`].

use super::{Depth, Evaluator, MoveGenerator, NodeCounter, Score, Search, TerminalTest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTree {
    Leaf(Score),
    Node(Vec<GameTree>),
}

impl GameTree {
    pub fn leaf(score: Score) -> Self {
        GameTree::Leaf(score)
    }

    pub fn node(children: impl IntoIterator<Item = GameTree>) -> Self {
        GameTree::Node(children.into_iter().collect())
    }

    /// A node whose children are all leaves with the given scores.
    pub fn leaves(scores: impl IntoIterator<Item = Score>) -> Self {
        Self::node(scores.into_iter().map(GameTree::Leaf))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, GameTree::Leaf(_))
    }

    pub fn children(&self) -> &[GameTree] {
        match self {
            GameTree::Leaf(_) => &[],
            GameTree::Node(children) => children,
        }
    }
}

/// Children in declaration order, one counted expansion each.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeMoves;

impl<'t> MoveGenerator<&'t GameTree> for TreeMoves {
    fn next_moves<'a>(
        &'a self,
        state: &'a &'t GameTree,
        counter: &'a NodeCounter,
    ) -> impl Iterator<Item = (usize, &'t GameTree)> + 'a
    where
        &'t GameTree: 'a,
    {
        let node: &'t GameTree = *state;
        node.children().iter().enumerate().map(move |(index, child)| {
            counter.increment();
            (index, child)
        })
    }
}

/// Stop at leaves or when the depth budget runs out.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeLeaf;

impl TerminalTest<&GameTree> for TreeLeaf {
    fn is_terminal(&self, depth: Depth, state: &&GameTree) -> bool {
        depth <= 0 || state.is_leaf()
    }
}

/// A leaf's own score; interior nodes cut off by depth are worth 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeValue;

impl Evaluator<&GameTree> for TreeValue {
    fn evaluate(&self, state: &&GameTree) -> Score {
        match state {
            GameTree::Leaf(score) => *score,
            GameTree::Node(_) => 0,
        }
    }
}

pub fn tree_search() -> Search<TreeMoves, TreeLeaf> {
    Search::new(TreeMoves, TreeLeaf)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::search::{Algorithm, SearchOutcome, SCORE_NEG_INF};

    fn search(algorithm: Algorithm, tree: &GameTree, depth: Depth) -> (SearchOutcome, u64) {
        let counter = NodeCounter::new();
        let outcome = tree_search().run(algorithm, &tree, depth, &TreeValue, &counter);
        (outcome, counter.get())
    }

    /// The textbook three-by-three example.
    fn textbook() -> GameTree {
        GameTree::node([
            GameTree::leaves([3, 12, 8]),
            GameTree::leaves([2, 4, 6]),
            GameTree::leaves([14, 5, 2]),
        ])
    }

    fn random_tree(rng: &mut StdRng, depth: u32) -> GameTree {
        random_tree_from(rng, depth, &|rng| rng.random_range(-20..=20))
    }

    fn random_tree_from(rng: &mut StdRng, depth: u32, score: &dyn Fn(&mut StdRng) -> Score) -> GameTree {
        if depth == 0 || rng.random_bool(0.15) {
            return GameTree::leaf(score(rng));
        }
        let width = rng.random_range(1..=4);
        GameTree::node((0..width).map(|_| random_tree_from(rng, depth - 1, score)))
    }

    #[test]
    fn minimax_on_textbook_tree() {
        let (outcome, nodes) = search(Algorithm::Minimax, &textbook(), 10);
        assert_eq!(outcome, SearchOutcome { column: Some(0), value: 3 });
        assert_eq!(nodes, 12);
    }

    #[test]
    fn alpha_beta_prunes_textbook_tree() {
        let (outcome, nodes) = search(Algorithm::AlphaBeta, &textbook(), 10);
        assert_eq!(outcome, SearchOutcome { column: Some(0), value: 3 });
        // The second subtree is abandoned after its first leaf.
        assert_eq!(nodes, 10);
    }

    #[test]
    fn leaves_at_odd_depth_are_negated() {
        // Depth-one leaves sit at min-nodes and are seen negated.
        let tree = GameTree::leaves([5, -2, 9]);
        let (outcome, _) = search(Algorithm::Minimax, &tree, 10);
        assert_eq!(outcome, SearchOutcome { column: Some(1), value: 2 });
    }

    #[test]
    fn equal_siblings_resolve_to_first() {
        let tree = GameTree::node([
            GameTree::leaves([4, 6]),
            GameTree::leaves([4, 9]),
            GameTree::leaves([1, 9]),
        ]);
        for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
            let (outcome, _) = search(algorithm, &tree, 10);
            assert_eq!(outcome.column, Some(0), "{}", algorithm.name());
            assert_eq!(outcome.value, 4);
        }
    }

    #[test]
    fn depth_limit_cuts_interior_nodes() {
        // At depth one the subtrees are scored as interior nodes (0).
        let (outcome, nodes) = search(Algorithm::Minimax, &textbook(), 1);
        assert_eq!(outcome, SearchOutcome { column: Some(0), value: 0 });
        assert_eq!(nodes, 3);
    }

    #[test]
    fn lone_leaf_root_has_no_move() {
        let tree = GameTree::leaf(8);
        let (outcome, nodes) = search(Algorithm::AlphaBeta, &tree, 3);
        assert_eq!(outcome, SearchOutcome { column: None, value: 8 });
        assert_eq!(nodes, 0);
    }

    #[test]
    fn minimum_score_leaves_do_not_split_the_searches() {
        let tree = GameTree::node([
            GameTree::leaves([i32::MIN]),
            GameTree::leaves([-i32::MAX, i32::MIN]),
        ]);
        for algorithm in [Algorithm::Minimax, Algorithm::AlphaBeta] {
            let (outcome, _) = search(algorithm, &tree, 2);
            assert_eq!(
                outcome,
                SearchOutcome { column: Some(0), value: SCORE_NEG_INF },
                "{}",
                algorithm.name()
            );
        }
    }

    #[test]
    fn random_trees_with_extreme_leaves_agree() {
        const EXTREMES: [Score; 6] = [i32::MIN, -i32::MAX, -1, 0, 1, i32::MAX];
        let mut rng = StdRng::seed_from_u64(31);
        for _ in 0..300 {
            let tree = random_tree_from(&mut rng, 4, &|rng| EXTREMES[rng.random_range(0..EXTREMES.len())]);
            for depth in 1..=4 {
                let (mm, mm_nodes) = search(Algorithm::Minimax, &tree, depth);
                let (ab, ab_nodes) = search(Algorithm::AlphaBeta, &tree, depth);
                assert_eq!(mm, ab, "{tree:?} at depth {depth}");
                assert!(ab_nodes <= mm_nodes);
            }
        }
    }

    #[test]
    fn random_trees_agree_and_prune() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..200 {
            let tree = random_tree(&mut rng, 5);
            for depth in 1..=5 {
                let (mm, mm_nodes) = search(Algorithm::Minimax, &tree, depth);
                let (ab, ab_nodes) = search(Algorithm::AlphaBeta, &tree, depth);
                assert_eq!(mm.column, ab.column, "{tree:?} at depth {depth}");
                assert_eq!(mm.value, ab.value, "{tree:?} at depth {depth}");
                assert!(ab_nodes <= mm_nodes);
            }
        }
    }
}
