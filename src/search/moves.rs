use super::{MoveGenerator, NodeCounter};
use crate::game::Position;

/// Tries every column left to right and yields the ones that accept a piece.
///
/// Each attempt is counted, legal or not. Full or out-of-range columns are
/// skipped without ending the sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnMoves;

impl<S: Position> MoveGenerator<S> for ColumnMoves {
    fn next_moves<'a>(
        &'a self,
        state: &'a S,
        counter: &'a NodeCounter,
    ) -> impl Iterator<Item = (usize, S)> + 'a
    where
        S: 'a,
    {
        enumerate_moves(state, counter)
    }
}

/// Lazy `(column, successor)` sequence for `state`, in ascending column order.
pub fn enumerate_moves<'a, S: Position>(
    state: &'a S,
    counter: &'a NodeCounter,
) -> impl Iterator<Item = (usize, S)> + 'a {
    (0..state.width()).filter_map(move |column| {
        counter.increment();
        state.apply_move(column).ok().map(|child| (column, child))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, GameState, Player, COLS};

    #[test]
    fn yields_every_column_on_empty_board() {
        let state = GameState::initial();
        let counter = NodeCounter::new();
        let moves: Vec<usize> = enumerate_moves(&state, &counter).map(|(c, _)| c).collect();
        assert_eq!(moves, (0..COLS).collect::<Vec<_>>());
        assert_eq!(counter.get(), COLS as u64);
    }

    #[test]
    fn successors_have_the_piece_dropped() {
        let state = GameState::initial();
        let counter = NodeCounter::new();
        for (col, child) in enumerate_moves(&state, &counter) {
            assert_eq!(child.cell_at(5, col), Cell::Red);
            assert_eq!(child.current_player(), Player::Yellow);
        }
    }

    #[test]
    fn skips_full_columns_but_counts_the_attempt() {
        let state = GameState::from_moves(&[2, 2, 2, 2, 2, 2]).unwrap();
        let counter = NodeCounter::new();
        let moves: Vec<usize> = enumerate_moves(&state, &counter).map(|(c, _)| c).collect();
        assert_eq!(moves, vec![0, 1, 3, 4, 5, 6]);
        assert_eq!(counter.get(), COLS as u64);
    }

    #[test]
    fn full_board_yields_nothing() {
        let rows = [
            [1, 1, 2, 2, 1, 1, 2],
            [2, 2, 1, 1, 2, 2, 1],
            [1, 1, 2, 2, 1, 1, 2],
            [2, 2, 1, 1, 2, 2, 1],
            [1, 1, 2, 2, 1, 1, 2],
            [2, 2, 1, 1, 2, 2, 1],
        ];
        let state = GameState::from_rows(rows, Player::Red).unwrap();
        let counter = NodeCounter::new();
        assert_eq!(enumerate_moves(&state, &counter).count(), 0);
    }

    #[test]
    fn stops_attempting_when_consumer_stops() {
        let state = GameState::initial();
        let counter = NodeCounter::new();
        let first_two: Vec<_> = enumerate_moves(&state, &counter).take(2).collect();
        assert_eq!(first_two.len(), 2);
        assert_eq!(counter.get(), 2);
    }
}
