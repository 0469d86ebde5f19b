use crate::game::{Cell, Position, CONNECT};
use crate::search::{Evaluator, Score, LOSS_SCORE};

/// Reference heuristic: ten points per piece in the mover's longest chain,
/// plus a pull towards the centre column.
///
/// Any finished position scores [`LOSS_SCORE`]: the game was ended by the
/// previous move, so the player to move cannot have won it. Draws count as
/// losses too.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicEvaluator;

impl BasicEvaluator {
    /// `10 x` the length of the mover's longest chain.
    pub fn chain_term<S: Position>(state: &S) -> Score {
        state.longest_chain(state.current_player_id()) as Score * 10
    }

    /// Each mover piece costs its distance from the centre column, each
    /// opponent piece adds it back.
    pub fn centrality_term<S: Position>(state: &S) -> Score {
        let me = state.current_player_id().to_cell();
        let them = state.other_player_id().to_cell();
        let centre = (state.width() as isize - 1) / 2;

        let mut score = 0;
        for row in 0..state.height() {
            for col in 0..state.width() {
                let distance = (centre - col as isize).unsigned_abs() as Score;
                let cell = state.cell_at(row, col);
                if cell == me {
                    score -= distance;
                } else if cell == them {
                    score += distance;
                }
            }
        }
        score
    }
}

impl<S: Position> Evaluator<S> for BasicEvaluator {
    fn evaluate(&self, state: &S) -> Score {
        if state.is_game_over() {
            return LOSS_SCORE;
        }
        Self::chain_term(state) + Self::centrality_term(state)
    }
}

/// Run directions counted by [`ThreatEvaluator`], walking forward only:
/// down, right, down-right, up-right.
const FORWARD: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

/// Threat counter: from every mover piece, counts forward runs reaching at
/// least four, three and two pieces. Any opponent four is a flat loss.
///
/// Overlapping runs are counted once per starting piece, so a line of four
/// also contributes its tails to the three and two counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreatEvaluator;

impl ThreatEvaluator {
    pub const FOUR_WEIGHT: Score = 100_000;
    pub const THREE_WEIGHT: Score = 100;
    pub const TWO_WEIGHT: Score = 1;
    pub const OPPONENT_FOUR: Score = -100_000;

    /// Number of (piece, direction) pairs starting a run of at least `len`.
    pub fn count_runs<S: Position>(state: &S, cell: Cell, len: usize) -> Score {
        let mut count = 0;
        for row in 0..state.height() {
            for col in 0..state.width() {
                if state.cell_at(row, col) != cell {
                    continue;
                }
                count += FORWARD
                    .iter()
                    .filter(|&&(dr, dc)| forward_run(state, row, col, dr, dc, cell) >= len)
                    .count() as Score;
            }
        }
        count
    }
}

impl<S: Position> Evaluator<S> for ThreatEvaluator {
    fn evaluate(&self, state: &S) -> Score {
        let me = state.current_player_id().to_cell();
        let them = state.other_player_id().to_cell();

        if Self::count_runs(state, them, CONNECT) > 0 {
            return Self::OPPONENT_FOUR;
        }

        Self::count_runs(state, me, CONNECT) * Self::FOUR_WEIGHT
            + Self::count_runs(state, me, 3) * Self::THREE_WEIGHT
            + Self::count_runs(state, me, 2) * Self::TWO_WEIGHT
    }
}

fn forward_run<S: Position>(state: &S, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
    let (height, width) = (state.height() as isize, state.width() as isize);
    let (mut r, mut c) = (row as isize, col as isize);
    let mut len = 0;
    while r >= 0 && c >= 0 && r < height && c < width && state.cell_at(r as usize, c as usize) == cell {
        len += 1;
        r += dr;
        c += dc;
    }
    len
}

/// Window heuristic: scores every four-cell line segment by how many mover,
/// opponent and empty cells it holds, plus a bonus for centre-column pieces.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowEvaluator;

impl WindowEvaluator {
    const CENTRE_BONUS: Score = 3;

    fn score_window(own: usize, opp: usize, empty: usize) -> Score {
        match (own, opp, empty) {
            (3, _, 1) => 50,
            (2, _, 2) => 10,
            (_, 3, 1) => -80,
            (_, 2, 2) => -10,
            _ => 0,
        }
    }
}

impl<S: Position> Evaluator<S> for WindowEvaluator {
    fn evaluate(&self, state: &S) -> Score {
        if state.is_game_over() {
            return LOSS_SCORE;
        }

        let me = state.current_player_id().to_cell();
        let them = state.other_player_id().to_cell();
        let (height, width) = (state.height() as isize, state.width() as isize);
        let centre = (state.width() - 1) / 2;
        let span = CONNECT as isize - 1;

        let mut score = 0;
        for row in 0..state.height() {
            let cell = state.cell_at(row, centre);
            if cell == me {
                score += Self::CENTRE_BONUS;
            } else if cell == them {
                score -= Self::CENTRE_BONUS;
            }
        }

        for row in 0..height {
            for col in 0..width {
                for &(dr, dc) in &FORWARD {
                    let (end_r, end_c) = (row + dr * span, col + dc * span);
                    if end_r < 0 || end_r >= height || end_c >= width {
                        continue;
                    }
                    let (mut own, mut opp, mut empty) = (0, 0, 0);
                    for i in 0..CONNECT as isize {
                        match state.cell_at((row + dr * i) as usize, (col + dc * i) as usize) {
                            c if c == me => own += 1,
                            c if c == them => opp += 1,
                            _ => empty += 1,
                        }
                    }
                    score += Self::score_window(own, opp, empty);
                }
            }
        }
        score
    }
}

/// Evaluator choice as it appears in configuration and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvaluatorKind {
    #[default]
    Basic,
    Threat,
    Window,
}

impl EvaluatorKind {
    pub fn name(self) -> &'static str {
        match self {
            EvaluatorKind::Basic => "basic",
            EvaluatorKind::Threat => "threat",
            EvaluatorKind::Window => "window",
        }
    }
}

impl<S: Position> Evaluator<S> for EvaluatorKind {
    fn evaluate(&self, state: &S) -> Score {
        match self {
            EvaluatorKind::Basic => BasicEvaluator.evaluate(state),
            EvaluatorKind::Threat => ThreatEvaluator.evaluate(state),
            EvaluatorKind::Window => WindowEvaluator.evaluate(state),
        }
    }
}
